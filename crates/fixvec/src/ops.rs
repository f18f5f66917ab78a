//! Element-wise arithmetic over [`FixedVector`].
//!
//! [`elementwise_add`] is the fallible entry point and the only operation
//! in the crate with an explicit error path. The `+` operator delegates to
//! it and panics on length mismatch, which keeps chained sums
//! (`&a + &b + &c`) ergonomic at call sites that have already established
//! equal lengths.

use std::fmt::Display;
use std::ops::Add;

use crate::vector::FixedVector;

/// Operand lengths differed in an element-wise operation.
///
/// Carries both lengths and a rendering of both operands, captured at the
/// moment of failure, so the message alone is enough to diagnose the call
/// site. This is the one recoverable error in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("vector length mismatch: {lhs_len} != {rhs_len}\nlhs: {lhs}\nrhs: {rhs}")]
pub struct LengthMismatch {
    /// Length of the left operand.
    pub lhs_len: usize,
    /// Length of the right operand.
    pub rhs_len: usize,
    lhs: String,
    rhs: String,
}

impl LengthMismatch {
    fn new<T: Display>(lhs: &FixedVector<T>, rhs: &FixedVector<T>) -> Self {
        Self {
            lhs_len: lhs.len(),
            rhs_len: rhs.len(),
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    /// The rendering of the left operand at the time of failure.
    pub fn lhs_rendering(&self) -> &str {
        &self.lhs
    }

    /// The rendering of the right operand at the time of failure.
    pub fn rhs_rendering(&self) -> &str {
        &self.rhs
    }
}

/// Produces a new vector holding the pairwise sum of two equal-length
/// vectors.
///
/// Pure: neither input is mutated, and the result shares no storage with
/// either. `result[i] == lhs[i] + rhs[i]` for every index.
///
/// # Errors
///
/// Returns [`LengthMismatch`] when the operand lengths differ. The error
/// records both lengths and a rendering of both operands.
///
/// # Examples
///
/// ```
/// use fixvec::{FixedVector, elementwise_add};
///
/// let a: FixedVector<i64> = FixedVector::new(5);
/// let b = FixedVector::from_fn(5, |i| i as i64);
///
/// let sum = elementwise_add(&a, &b)?;
/// assert_eq!(sum.as_slice(), &[0, 1, 2, 3, 4]);
/// # Ok::<(), fixvec::LengthMismatch>(())
/// ```
pub fn elementwise_add<T>(
    lhs: &FixedVector<T>,
    rhs: &FixedVector<T>,
) -> Result<FixedVector<T>, LengthMismatch>
where
    T: Add<Output = T> + Clone + Display,
{
    if lhs.len() != rhs.len() {
        return Err(LengthMismatch::new(lhs, rhs));
    }
    Ok(lhs
        .iter()
        .zip(rhs.iter())
        .map(|(a, b)| a.clone() + b.clone())
        .collect())
}

impl<T> Add for &FixedVector<T>
where
    T: Add<Output = T> + Clone + Display,
{
    type Output = FixedVector<T>;

    /// Element-wise sum producing a new vector.
    ///
    /// # Panics
    ///
    /// Panics with the [`LengthMismatch`] message when the operand lengths
    /// differ. Use [`elementwise_add`] where the mismatch must be
    /// recoverable.
    fn add(self, rhs: Self) -> FixedVector<T> {
        match elementwise_add(self, rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Add<&FixedVector<T>> for FixedVector<T>
where
    T: Add<Output = T> + Clone + Display,
{
    type Output = FixedVector<T>;

    /// Element-wise sum consuming the left operand.
    ///
    /// This is the form taken by every `+` after the first in a chained
    /// sum such as `&a + &b + &c + &d`: each step consumes the temporary
    /// produced by the previous one and reuses its buffer in place.
    ///
    /// # Panics
    ///
    /// Panics with the [`LengthMismatch`] message when the operand lengths
    /// differ.
    fn add(mut self, rhs: &FixedVector<T>) -> FixedVector<T> {
        if self.len() != rhs.len() {
            panic!("{}", LengthMismatch::new(&self, rhs));
        }
        for (a, b) in self.iter_mut().zip(rhs.iter()) {
            *a = a.clone() + b.clone();
        }
        self
    }
}
