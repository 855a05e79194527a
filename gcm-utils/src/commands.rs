//! Handlers behind the `gcm-utils` subcommands. Each one takes the parsed
//! arguments and returns the text printed on stdout.

use tracing::debug;

use crate::{
    bits,
    cli::{self, BitString, HexString},
    counter,
    error::check_length,
    select, ArrayMux, Result, XorBlock,
};

pub fn to_bits(args: cli::ToBitsArgs) -> String {
    debug!(bytes = args.input.0.len(), "Expanding bytes to bits");
    BitString(bits::bytes_to_bits(&args.input.0)).to_string()
}

pub fn from_bits(args: cli::FromBitsArgs) -> Result<String> {
    debug!(bits = args.input.0.len(), "Packing bits into bytes");
    let bytes = bits::bits_to_bytes(&args.input.0)?;
    Ok(HexString(bytes).to_string())
}

pub fn reverse(args: cli::ReverseArgs) -> String {
    HexString(bits::reverse_byte_slice(&args.input.0)).to_string()
}

fn word64(input: &HexString) -> Result<[u8; 8]> {
    check_length(8, input.0.len())?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&input.0);
    Ok(bytes)
}

pub fn parse_be(args: cli::ParseArgs) -> Result<u64> {
    Ok(bits::parse_be_bytes64(&word64(&args.input)?))
}

pub fn parse_le(args: cli::ParseArgs) -> Result<u64> {
    Ok(bits::parse_le_bytes64(&word64(&args.input)?))
}

/// The `count` counter blocks following the given one, one per line.
pub fn increment(args: cli::IncrementArgs) -> Result<Vec<String>> {
    let first = counter::increment_counter_slice(&args.block.0)?;
    debug!(count = args.count, "Deriving counter blocks");
    Ok(std::iter::once(first)
        .chain(counter::counter_blocks(&first, args.count.saturating_sub(1)))
        .take(args.count)
        .map(|block| HexString(block.to_vec()).to_string())
        .collect())
}

pub fn xor(args: cli::XorArgs) -> Result<String> {
    let out = XorBlock::new(args.width).xor(&args.a.0, &args.b.0)?;
    Ok(HexString(out).to_string())
}

pub fn mux(args: cli::MuxArgs) -> Result<String> {
    let out = ArrayMux::new(args.width).mux(&args.a.0, &args.b.0, args.sel)?;
    Ok(HexString(out).to_string())
}

/// Selects a row of the table. Rows are selected column by column with the
/// scalar selector, so they may have any width as long as all agree. The
/// index is checked against the number of rows first, which also covers
/// empty tables and zero-width rows.
pub fn select_row(args: cli::SelectArgs) -> Result<String> {
    let rows = args.table.len();
    select::select_slice(&vec![0u8; rows], args.index)?;
    let width = args.table.first().map_or(0, |row| row.0.len());
    for row in &args.table {
        check_length(width, row.0.len())?;
    }
    debug!(rows, width, "Selecting a table row");
    let row = (0..width)
        .map(|col| {
            let column: Vec<u8> = args.table.iter().map(|row| row.0[col]).collect();
            select::select_slice(&column, args.index)
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(HexString(row).to_string())
}
