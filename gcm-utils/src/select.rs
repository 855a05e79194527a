//! Oblivious selection from a fixed-size table.
//!
//! `select(table, index)` returns `table[index]` without indexing by `index`:
//! every entry is visited in order and folded into an accumulator with weight
//! `ct_eq_index(i, index)`, which is 1 for exactly one position and 0
//! elsewhere. The same entries are read and the same arithmetic is performed
//! whatever the index is. Rows of a two-dimensional table and scalars go
//! through the same code, the row case applying one weight to every element.

use crate::error::{GcmUtilsError, Result};

/// Values that can be accumulated as a weighted sum with weights in `{0, 1}`.
pub trait Selectable: Sized {
    /// The additive identity.
    fn zero() -> Self;

    /// Adds `weight * other` to `self`. `weight` is 0 or 1.
    fn add_weighted(&mut self, other: &Self, weight: u8);
}

macro_rules! impl_selectable {
    ($($t:ty),*) => {
        $(
            impl Selectable for $t {
                fn zero() -> Self {
                    0
                }

                fn add_weighted(&mut self, other: &Self, weight: u8) {
                    *self = self.wrapping_add(other.wrapping_mul(<$t>::from(weight)));
                }
            }
        )*
    };
}

impl_selectable!(u8, u16, u32, u64, u128, usize);

impl<T: Selectable, const N: usize> Selectable for [T; N] {
    fn zero() -> Self {
        std::array::from_fn(|_| T::zero())
    }

    fn add_weighted(&mut self, other: &Self, weight: u8) {
        self.iter_mut()
            .zip(other.iter())
            .for_each(|(acc, x)| acc.add_weighted(x, weight));
    }
}

/// Returns 1 if `a == b` and 0 otherwise, without a conditional.
#[inline]
pub fn ct_eq_index(a: usize, b: usize) -> u8 {
    let diff = a ^ b;
    let nonzero = (diff | diff.wrapping_neg()) >> (usize::BITS - 1);
    (nonzero ^ 1) as u8
}

/// Selects `table[index]` obliviously. See the module documentation.
///
/// An `index` outside `[0, N)` is reported as
/// [`GcmUtilsError::IndexOutOfRange`] once the whole table has been visited.
pub fn select<T: Selectable, const N: usize>(table: &[T; N], index: usize) -> Result<T> {
    select_slice(table, index)
}

/// Slice form of [`select`], for tables whose size is fixed by the caller at
/// run time rather than in the type.
pub fn select_slice<T: Selectable>(table: &[T], index: usize) -> Result<T> {
    let mut acc = T::zero();
    let mut hits = 0u8;
    for (i, entry) in table.iter().enumerate() {
        let weight = ct_eq_index(i, index);
        acc.add_weighted(entry, weight);
        hits |= weight;
    }
    if hits == 0 {
        tracing::debug!(size = table.len(), "selector outside of the table");
        return Err(GcmUtilsError::IndexOutOfRange {
            index,
            size: table.len(),
        });
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq_index() {
        assert_eq!(ct_eq_index(0, 0), 1);
        assert_eq!(ct_eq_index(3, 3), 1);
        assert_eq!(ct_eq_index(usize::MAX, usize::MAX), 1);
        assert_eq!(ct_eq_index(0, 1), 0);
        assert_eq!(ct_eq_index(1, 0), 0);
        assert_eq!(ct_eq_index(0, usize::MAX), 0);
        assert_eq!(ct_eq_index(1 << (usize::BITS - 1), 0), 0);
    }

    #[test]
    fn test_array_selector() {
        let table = [
            [0x00u8, 0x00, 0x00, 0x01],
            [0x06, 0x07, 0x08, 0x09],
            [0x00, 0x00, 0x00, 0x03],
        ];
        assert_eq!(select(&table, 1).unwrap(), [0x06, 0x07, 0x08, 0x09]);
    }

    #[test]
    fn test_scalar_selector() {
        let table = [0x00u64, 0x00, 0x08, 0x01];
        assert_eq!(select(&table, 2).unwrap(), 0x08);
    }

    #[test]
    fn test_select_exhaustive_4() {
        let table = [u32::MAX, 0, 0xdead_beef, 7];
        for (i, expected) in table.iter().enumerate() {
            assert_eq!(select(&table, i).unwrap(), *expected);
        }
    }

    #[test]
    fn test_select_out_of_range() {
        let table = [1u8, 2, 3, 4];
        assert_eq!(
            select(&table, 4),
            Err(GcmUtilsError::IndexOutOfRange { index: 4, size: 4 })
        );
        assert_eq!(
            select(&table, usize::MAX),
            Err(GcmUtilsError::IndexOutOfRange {
                index: usize::MAX,
                size: 4
            })
        );
    }

    #[test]
    fn test_select_empty_table() {
        let table: [u8; 0] = [];
        assert_eq!(
            select(&table, 0),
            Err(GcmUtilsError::IndexOutOfRange { index: 0, size: 0 })
        );
    }

    #[test]
    fn test_select_slice_of_blocks() {
        let table: Vec<[u8; 16]> = (0..8u8).map(|i| [i; 16]).collect();
        for i in 0..8 {
            assert_eq!(select_slice(&table, i).unwrap(), [i as u8; 16]);
        }
    }
}
