//! Stateless arithmetic helpers.
//!
//! The functions here hold no state and have no side effects; they are
//! grouped in one module purely for organization.

pub mod operand;
pub mod operation;

use crate::utils::error::{MathError, Result};
use std::ops::Add;

pub use operand::Operand;
pub use operation::Operation;

pub const FIVE: u8 = 5;
pub const TEN: u8 = 10;

/// Returns `x + 5`.
///
/// Works for any type that can be added to itself and built from a small
/// integer (`u8`, `i16`, `i32`, `i64`, `u64`, `f32`, `f64`, ...). Fixed-width
/// integers follow the usual overflow rules; use [`checked_add_five`] when that
/// matters.
///
/// `i8` is not accepted: it has no `From<u8>` because 128..=255 do not fit.
/// Lossless `From` keeps the constant conversion infallible, where
/// `num_traits::FromPrimitive` would hand back an `Option` for every call.
pub fn add_five<T>(x: T) -> T
where
    T: Add<Output = T> + From<u8>,
{
    x + T::from(FIVE)
}

/// Returns `x + 10`.
pub fn add_ten<T>(x: T) -> T
where
    T: Add<Output = T> + From<u8>,
{
    x + T::from(TEN)
}

pub fn checked_add_five(x: i64) -> Result<i64> {
    checked_add(x, i64::from(FIVE))
}

pub fn checked_add_ten(x: i64) -> Result<i64> {
    checked_add(x, i64::from(TEN))
}

pub(crate) fn checked_add(value: i64, offset: i64) -> Result<i64> {
    value
        .checked_add(offset)
        .ok_or(MathError::Overflow { value, offset })
}
