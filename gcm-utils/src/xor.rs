//! Byte-wise XOR of fixed-width blocks, the combination step of counter-mode
//! encryption.

use crate::{error::check_length, Result, BLOCK_SIZE};

/// Byte-wise XOR of two blocks of the same static width.
pub fn xor_block<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    std::array::from_fn(|i| a[i] ^ b[i])
}

/// XOR over blocks whose width is fixed when the instance is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorBlock {
    width: usize,
}

impl Default for XorBlock {
    fn default() -> Self {
        Self::new(BLOCK_SIZE)
    }
}

impl XorBlock {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// XORs `a` and `b`, both of which must be exactly `width` bytes long.
    pub fn xor(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
        check_length(self.width, a.len())?;
        check_length(self.width, b.len())?;
        Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
    }
}
