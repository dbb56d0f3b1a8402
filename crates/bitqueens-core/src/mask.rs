//! Numeric traits for column masks and solution counts.
//!
//! The search is generic over two independent integer choices: the column
//! mask `M`, whose bit width bounds the board width, and the count `C`,
//! which must be wide enough to hold the number of solutions for the
//! widths a caller intends to solve.

use std::fmt::{Debug, Display};

use num_traits::{PrimInt, Unsigned};

use crate::error::{QueensError, Result};

/// Unsigned integer usable as a set of board columns.
///
/// Bit `i` stands for column `i`. Implemented for every primitive unsigned
/// integer: `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
///
/// # Example
///
/// ```
/// use bitqueens_core::ColumnMask;
///
/// assert_eq!(<u32 as ColumnMask>::bit_width(), 32);
/// assert_eq!(<u8 as ColumnMask>::column(3), 0b0000_1000);
/// assert_eq!(<u8 as ColumnMask>::beyond(6), 0b1100_0000);
/// assert_eq!(0b0110_1000u8.lowest_column(), 0b0000_1000);
/// ```
pub trait ColumnMask: PrimInt + Unsigned + Debug + Send + Sync + 'static {
    /// Number of columns the mask can represent.
    fn bit_width() -> u32 {
        Self::zero().count_zeros()
    }

    /// Mask with only `index` set.
    fn column(index: u32) -> Self {
        Self::one() << index as usize
    }

    /// Mask with every column set; the board is full once the straight
    /// occupancy reaches this value.
    fn full() -> Self {
        Self::max_value()
    }

    /// Mask of all columns at or above `width`.
    ///
    /// Empty when `width` covers the whole mask, so no shift overflows.
    fn beyond(width: u32) -> Self {
        if width >= Self::bit_width() {
            Self::zero()
        } else {
            Self::max_value() << width as usize
        }
    }

    /// Isolates the lowest set column. Returns zero for an empty mask.
    fn lowest_column(self) -> Self {
        if self.is_zero() {
            return self;
        }
        self & !(self - Self::one())
    }
}

impl<T> ColumnMask for T where T: PrimInt + Unsigned + Debug + Send + Sync + 'static {}

/// Unsigned accumulator for solution counts.
///
/// Widened to `u128` at the reporting boundary, so every implementor must
/// convert into it losslessly.
pub trait SolutionCount:
    PrimInt + Unsigned + Into<u128> + Debug + Display + Send + Sync + 'static
{
}

impl<T> SolutionCount for T where
    T: PrimInt + Unsigned + Into<u128> + Debug + Display + Send + Sync + 'static
{
}

/// Checks that `width` is a board width the mask type `M` can represent.
///
/// # Errors
///
/// Returns [`QueensError::InvalidWidth`] when `width` is zero or larger
/// than `M::bit_width()`.
///
/// # Example
///
/// ```
/// use bitqueens_core::{validate_width, QueensError};
///
/// assert!(validate_width::<u8>(8).is_ok());
/// assert_eq!(
///     validate_width::<u8>(9),
///     Err(QueensError::InvalidWidth { width: 9, max: 8 })
/// );
/// ```
pub fn validate_width<M: ColumnMask>(width: u32) -> Result<u32> {
    let max = M::bit_width();
    if width == 0 || width > max {
        return Err(QueensError::InvalidWidth { width, max });
    }
    Ok(width)
}
