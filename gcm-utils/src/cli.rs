use clap::Parser;
use std::{fmt::Display, str::FromStr};

use crate::BLOCK_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexString(pub Vec<u8>);

impl FromStr for HexString {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        Ok(HexString(hex::decode(stripped)?))
    }
}

impl Display for HexString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

/// A string of `0` and `1` characters, msb first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString(pub Vec<u8>);

impl FromStr for BitString {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| *c != '_')
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(format!("invalid bit character {other:?}")),
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(BitString)
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|bit| write!(f, "{bit}"))
    }
}

#[derive(Parser)]
pub struct ToBitsArgs {
    #[arg(long, short = 'i', value_name = "HEX", help = "bytes (hex encoded)")]
    pub input: HexString,
}

#[derive(Parser)]
pub struct FromBitsArgs {
    #[arg(long, short = 'i', value_name = "BITS", help = "msb-first bits")]
    pub input: BitString,
}

#[derive(Parser)]
pub struct ReverseArgs {
    #[arg(long, short = 'i', value_name = "HEX", help = "bytes (hex encoded)")]
    pub input: HexString,
}

#[derive(Parser)]
pub struct ParseArgs {
    #[arg(long, short = 'i', value_name = "HEX", help = "8 bytes (hex encoded)")]
    pub input: HexString,
}

#[derive(Parser)]
pub struct IncrementArgs {
    #[arg(
        long,
        short = 'b',
        value_name = "HEX",
        help = "16-byte counter block (hex encoded)"
    )]
    pub block: HexString,

    #[arg(
        long,
        short = 'n',
        value_name = "COUNT",
        default_value_t = 1,
        help = "number of successive counter blocks to print"
    )]
    pub count: usize,
}

#[derive(Parser)]
pub struct XorArgs {
    #[arg(short = 'a', value_name = "HEX", help = "first block (hex encoded)")]
    pub a: HexString,

    #[arg(short = 'b', value_name = "HEX", help = "second block (hex encoded)")]
    pub b: HexString,

    #[arg(long, short = 'w', value_name = "WIDTH", default_value_t = BLOCK_SIZE)]
    pub width: usize,
}

#[derive(Parser)]
pub struct MuxArgs {
    #[arg(short = 'a', value_name = "HEX", help = "block returned for sel = 0")]
    pub a: HexString,

    #[arg(short = 'b', value_name = "HEX", help = "block returned for sel = 1")]
    pub b: HexString,

    #[arg(long, short = 's', value_name = "BIT")]
    pub sel: u8,

    #[arg(long, short = 'w', value_name = "WIDTH", default_value_t = BLOCK_SIZE)]
    pub width: usize,
}

#[derive(Parser)]
pub struct SelectArgs {
    #[arg(
        long,
        short = 't',
        value_name = "HEX",
        value_delimiter = ',',
        help = "table rows (hex encoded, comma separated, equal widths)"
    )]
    pub table: Vec<HexString>,

    #[arg(long, short = 'x', value_name = "INDEX")]
    pub index: usize,
}

#[derive(Parser)]
#[command(
    name = "gcm-utils",
    version = "0.1",
    about = "gcm-utils - constant-time primitives for AES-GCM"
)]
pub enum Commands {
    #[command(name = "to-bits")]
    ToBits(ToBitsArgs),
    #[command(name = "from-bits")]
    FromBits(FromBitsArgs),
    #[command(name = "reverse")]
    Reverse(ReverseArgs),
    #[command(name = "parse-be")]
    ParseBe(ParseArgs),
    #[command(name = "parse-le")]
    ParseLe(ParseArgs),
    #[command(name = "increment")]
    Increment(IncrementArgs),
    #[command(name = "xor")]
    Xor(XorArgs),
    #[command(name = "mux")]
    Mux(MuxArgs),
    #[command(name = "select")]
    Select(SelectArgs),
}
