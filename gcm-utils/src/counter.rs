//! GCM counter blocks.
//!
//! A counter block is a 96-bit nonce followed by a 32-bit big-endian counter.
//! Incrementing only touches the counter, modulo 2^32: an overflow never
//! carries into the nonce. The running counter is owned by the caller; the
//! functions here derive new blocks from the ones they are given.

use crate::{error::check_length, Block, Result, Word, BLOCK_SIZE, NONCE_SIZE};

/// Returns `word + 1 mod 2^32`, `word` being big-endian.
pub fn increment_word(word: &Word) -> Word {
    u32::from_be_bytes(*word).wrapping_add(1).to_be_bytes()
}

/// A counter block split into its nonce and its counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterBlock {
    pub nonce: [u8; NONCE_SIZE],
    pub counter: u32,
}

impl CounterBlock {
    pub fn new(nonce: [u8; NONCE_SIZE], counter: u32) -> Self {
        Self { nonce, counter }
    }

    pub fn from_block(block: &Block) -> Self {
        let (nonce, word) = block.split_at(NONCE_SIZE);
        let mut prefix = [0u8; NONCE_SIZE];
        prefix.copy_from_slice(nonce);
        let mut counter = [0u8; 4];
        counter.copy_from_slice(word);
        Self {
            nonce: prefix,
            counter: u32::from_be_bytes(counter),
        }
    }

    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        block[..NONCE_SIZE].copy_from_slice(&self.nonce);
        block[NONCE_SIZE..].copy_from_slice(&self.counter.to_be_bytes());
        block
    }

    /// The block following this one, with the same nonce.
    pub fn next(&self) -> Self {
        Self {
            nonce: self.nonce,
            counter: self.counter.wrapping_add(1),
        }
    }
}

impl From<&Block> for CounterBlock {
    fn from(block: &Block) -> Self {
        Self::from_block(block)
    }
}

impl From<CounterBlock> for Block {
    fn from(ctr: CounterBlock) -> Self {
        ctr.to_block()
    }
}

/// Increments the counter held in bytes 12..16 of `block`.
pub fn increment_counter(block: &Block) -> Block {
    CounterBlock::from_block(block).next().to_block()
}

/// Slice form of [`increment_counter`]; `block` must be exactly 16 bytes.
pub fn increment_counter_slice(block: &[u8]) -> Result<Block> {
    check_length(BLOCK_SIZE, block.len())?;
    let mut full = [0u8; BLOCK_SIZE];
    full.copy_from_slice(block);
    Ok(increment_counter(&full))
}

/// The `count` counter blocks following `initial`, in order.
pub fn counter_blocks(initial: &Block, count: usize) -> Vec<Block> {
    std::iter::successors(Some(CounterBlock::from_block(initial)), |ctr| {
        Some(ctr.next())
    })
    .skip(1)
    .take(count)
    .map(|ctr| ctr.to_block())
    .collect()
}
