//! Two-way multiplexing of blocks driven by a single bit.
//!
//! `mux(a, b, sel)` is computed as `a ^ (mask & (a ^ b))` with `mask` the
//! byte `0x00` or `0xFF` derived arithmetically from `sel`, so both operands
//! are read and combined whichever one is returned. GHASH uses it to fold the
//! reduction constant in or not depending on the bit shifted out.

use crate::{
    error::{check_length, GcmUtilsError},
    Result, BLOCK_SIZE,
};

/// Returns `0xFF` for `sel == 1` and `0x00` for `sel == 0`.
fn bit_mask(sel: u8) -> Result<u8> {
    if sel > 1 {
        return Err(GcmUtilsError::NotABit(sel));
    }
    Ok(sel.wrapping_neg())
}

fn mux_bytes<'a>(a: &'a [u8], b: &'a [u8], mask: u8) -> impl Iterator<Item = u8> + 'a {
    a.iter().zip(b.iter()).map(move |(x, y)| x ^ (mask & (x ^ y)))
}

/// Returns `a` when `sel == 0` and `b` when `sel == 1`.
pub fn mux_block<const N: usize>(a: &[u8; N], b: &[u8; N], sel: u8) -> Result<[u8; N]> {
    let mask = bit_mask(sel)?;
    Ok(std::array::from_fn(|i| a[i] ^ (mask & (a[i] ^ b[i]))))
}

/// Multiplexer over blocks whose width is fixed when the instance is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayMux {
    width: usize,
}

impl Default for ArrayMux {
    fn default() -> Self {
        Self::new(BLOCK_SIZE)
    }
}

impl ArrayMux {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mux(&self, a: &[u8], b: &[u8], sel: u8) -> Result<Vec<u8>> {
        check_length(self.width, a.len())?;
        check_length(self.width, b.len())?;
        let mask = bit_mask(sel)?;
        Ok(mux_bytes(a, b, mask).collect())
    }
}
