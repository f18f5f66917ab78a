//! # fixvec: a fixed-length, generic, value-semantic vector
//!
//! This crate provides:
//! - [`FixedVector`] — an owning, fixed-length sequence container with
//!   explicit deep-copy and move-transfer semantics
//! - [`elementwise_add`] — pairwise addition of two equal-length vectors
//! - [`LengthMismatch`] — the one recoverable error in the crate
//!
//! The element count is chosen at construction and never changes in
//! place; there is no growth, no allocator parameter, and no sharing of
//! mutable storage between instances at any point in the lifecycle.
//!
//! Special operations (construction, deep copy, buffer transfer) emit
//! `tracing` events at TRACE level under the `fixvec` target, so a
//! subscriber with an appropriate filter can observe exactly which
//! operation fired — useful when demonstrating value semantics.
//!
//! # Example
//!
//! ```
//! use fixvec::{FixedVector, elementwise_add};
//!
//! let zeros: FixedVector<i64> = FixedVector::new(5);
//! let ramp = FixedVector::from_fn(5, |i| i as i64);
//!
//! let sum = elementwise_add(&zeros, &ramp)?;
//! assert_eq!(sum, ramp);
//!
//! // Unequal lengths are the one recoverable failure.
//! let short: FixedVector<i64> = FixedVector::new(3);
//! let err = elementwise_add(&sum, &short).unwrap_err();
//! assert_eq!((err.lhs_len, err.rhs_len), (5, 3));
//! # Ok::<(), fixvec::LengthMismatch>(())
//! ```

mod ops;
mod vector;

pub use ops::{LengthMismatch, elementwise_add};
pub use vector::FixedVector;
