use clap::Parser;
use gcm_utils::{
    cli::Commands,
    commands::{increment, parse_be, parse_le, reverse, select_row, to_bits, xor},
    GcmUtilsError,
};

fn parse(args: &[&str]) -> Commands {
    Commands::try_parse_from(std::iter::once("gcm-utils").chain(args.iter().copied())).unwrap()
}

fn select_with(table: &str, index: &str) -> gcm_utils::Result<String> {
    match parse(&["select", "-t", table, "-x", index]) {
        Commands::Select(args) => select_row(args),
        _ => panic!("expected the select command"),
    }
}

fn increment_with(block: &str, count: &str) -> Vec<String> {
    match parse(&["increment", "-b", block, "-n", count]) {
        Commands::Increment(args) => increment(args).unwrap(),
        _ => panic!("expected the increment command"),
    }
}

#[test]
fn test_select_row() {
    assert_eq!(
        select_with("00000001,06070809,00000003", "1").unwrap(),
        "0x06070809"
    );
}

#[test]
fn test_select_rejects_index_past_zero_width_rows() {
    assert_eq!(
        select_with(",,", "99"),
        Err(GcmUtilsError::IndexOutOfRange { index: 99, size: 3 })
    );
    assert_eq!(select_with(",,", "2").unwrap(), "0x");
}

#[test]
fn test_select_rejects_index_past_last_row() {
    assert_eq!(
        select_with("0102,0304", "2"),
        Err(GcmUtilsError::IndexOutOfRange { index: 2, size: 2 })
    );
}

#[test]
fn test_select_rejects_mismatched_rows() {
    assert_eq!(
        select_with("0102,030405", "0"),
        Err(GcmUtilsError::Length {
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn test_increment_counts_across_wraparound() {
    let block = "cafebabefacedbaddecaf888fffffffe";
    assert!(increment_with(block, "0").is_empty());
    assert_eq!(
        increment_with(block, "1"),
        vec!["0xcafebabefacedbaddecaf888ffffffff"]
    );
    assert_eq!(
        increment_with(block, "3"),
        vec![
            "0xcafebabefacedbaddecaf888ffffffff",
            "0xcafebabefacedbaddecaf88800000000",
            "0xcafebabefacedbaddecaf88800000001",
        ]
    );
}

#[test]
fn test_increment_rejects_short_block() {
    match parse(&["increment", "-b", "00"]) {
        Commands::Increment(args) => assert_eq!(
            increment(args),
            Err(GcmUtilsError::Length {
                expected: 16,
                found: 1
            })
        ),
        _ => panic!("expected the increment command"),
    }
}

#[test]
fn test_parse_counts_bytes() {
    match parse(&["parse-be", "-i", "0x0000000000000001"]) {
        Commands::ParseBe(args) => assert_eq!(parse_be(args).unwrap(), 1),
        _ => panic!("expected the parse-be command"),
    }
    match parse(&["parse-le", "-i", "0x0100000000000000"]) {
        Commands::ParseLe(args) => assert_eq!(parse_le(args).unwrap(), 1),
        _ => panic!("expected the parse-le command"),
    }
    match parse(&["parse-be", "-i", "0x0001"]) {
        Commands::ParseBe(args) => assert_eq!(
            parse_be(args),
            Err(GcmUtilsError::Length {
                expected: 8,
                found: 2
            })
        ),
        _ => panic!("expected the parse-be command"),
    }
}

#[test]
fn test_block_commands() {
    match parse(&["reverse", "-i", "0102030405060708091011121314151f"]) {
        Commands::Reverse(args) => {
            assert_eq!(reverse(args), "0x1f151413121110090807060504030201")
        }
        _ => panic!("expected the reverse command"),
    }
    match parse(&["to-bits", "-i", "ff00"]) {
        Commands::ToBits(args) => assert_eq!(to_bits(args), "1111111100000000"),
        _ => panic!("expected the to-bits command"),
    }
    match parse(&["xor", "-a", "0f0f", "-b", "ffff", "-w", "2"]) {
        Commands::Xor(args) => assert_eq!(xor(args).unwrap(), "0xf0f0"),
        _ => panic!("expected the xor command"),
    }
}

#[test]
fn test_select_on_empty_table() {
    match parse(&["select", "-x", "0"]) {
        Commands::Select(args) => assert_eq!(
            select_row(args),
            Err(GcmUtilsError::IndexOutOfRange { index: 0, size: 0 })
        ),
        _ => panic!("expected the select command"),
    }
}
