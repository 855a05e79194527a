//! Batch forms of the block operations. The blocks of a batch are independent
//! of each other, so they are processed in parallel.

use rayon::prelude::*;
use tracing::instrument;

use crate::{error::check_length, xor::xor_block, Block, Result};

/// XORs two sequences of blocks pairwise, e.g. a run of plaintext blocks with
/// the keystream derived from consecutive counter blocks.
#[instrument(skip_all, level = "debug")]
pub fn xor_blocks(a: &[Block], b: &[Block]) -> Result<Vec<Block>> {
    check_length(a.len(), b.len())?;
    tracing::debug!(blocks = a.len(), "xoring block batch");
    Ok(a.par_iter()
        .zip(b.par_iter())
        .map(|(x, y)| xor_block(x, y))
        .collect())
}
