//! Constant-time building blocks for an AES-GCM engine.
//!
//! Every function in this crate is a pure transformation over fixed-size
//! buffers. None of them branch on, loop over, or index by the value of a
//! selector, a selection bit or a counter: the work performed only depends on
//! the widths involved, which are known before the call.

pub mod batch;
pub mod bits;
pub mod cli;
pub mod commands;
pub mod counter;
pub mod env;
pub mod error;
pub mod mux;
pub mod select;
pub mod xor;

pub use batch::xor_blocks;
pub use bits::{
    bits_to_bytes, bits_to_hex, bytes_to_bits, hex_to_bits, parse_be_bits64, parse_be_bytes64,
    parse_le_bits64, parse_le_bytes64, reverse_byte_slice, reverse_bytes,
};
pub use counter::{
    counter_blocks, increment_counter, increment_counter_slice, increment_word, CounterBlock,
};
pub use error::{ErrorKind, GcmUtilsError, Result};
pub use mux::{mux_block, ArrayMux};
pub use select::{ct_eq_index, select, select_slice, Selectable};
pub use xor::{xor_block, XorBlock};

/// Width in bytes of an AES state, a keystream block and a GHASH operand.
pub const BLOCK_SIZE: usize = 16;

/// Width in bytes of the GCM counter field.
pub const WORD_SIZE: usize = 4;

/// Width in bytes of the nonce part of a counter block.
pub const NONCE_SIZE: usize = BLOCK_SIZE - WORD_SIZE;

/// A 128-bit block.
pub type Block = [u8; BLOCK_SIZE];

/// A 32-bit word, big-endian when it holds a GCM counter.
pub type Word = [u8; WORD_SIZE];

pub mod tests {
    use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

    /// Create a new test rng, seeded either from `seed` or from the thread
    /// rng. The seed is printed so that a failing run can be replayed.
    pub fn make_test_rng(seed: Option<[u8; 32]>) -> StdRng {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        eprintln!("Using seed {seed:?}");
        StdRng::from_seed(seed)
    }
}
