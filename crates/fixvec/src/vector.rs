//! The `FixedVector` container.
//!
//! A `FixedVector<T>` owns exactly one contiguous heap buffer whose length
//! is chosen at construction and never changes. All value-semantic
//! operations (deep copy, buffer transfer) are explicit and traced.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

/// An owning, fixed-length, generic sequence container.
///
/// The element count is set at construction and never grows or shrinks in
/// place. The buffer is a single exclusively-owned heap allocation,
/// released when the vector is dropped or reassigned. An empty vector owns
/// an empty boxed slice and performs no allocation.
///
/// Copying is always deep: a clone shares no storage with its source, and
/// mutating either afterwards never affects the other. Ownership transfer
/// is constant-time via Rust moves, or via [`FixedVector::take`] when the
/// source must remain observable (it is left empty).
///
/// Allocation failure is considered fatal and aborts the process through
/// the global allocator; there is no fallible-allocation path.
///
/// # Examples
///
/// ```
/// use fixvec::FixedVector;
///
/// let mut v: FixedVector<i64> = FixedVector::new(5);
/// assert_eq!(v.len(), 5);
/// assert!(v.iter().all(|&x| x == 0));
///
/// for (i, x) in v.iter_mut().enumerate() {
///     *x = i as i64;
/// }
/// assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FixedVector<T> {
    elems: Box<[T]>,
}

impl<T> FixedVector<T> {
    /// Creates a vector of `len` default-initialized elements (zero for
    /// the numeric types).
    ///
    /// `new(0)` is equivalent to [`FixedVector::default`] and allocates
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::FixedVector;
    ///
    /// let v: FixedVector<u32> = FixedVector::new(3);
    /// assert_eq!(v.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        tracing::trace!(op = "new", len, "constructing FixedVector");
        Self {
            elems: (0..len).map(|_| T::default()).collect(),
        }
    }

    /// Creates a vector of `len` elements where element `i` is `f(i)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::FixedVector;
    ///
    /// let squares = FixedVector::from_fn(4, |i| i * i);
    /// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(len: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            elems: (0..len).map(f).collect(),
        }
    }

    /// Returns the element count.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns true if the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Checked element access.
    ///
    /// Returns `None` when `i >= len()`. The indexing operator is the
    /// direct variant and panics on out-of-range access; prefer `get` at
    /// call sites where the index is not already known to be in range.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.elems.get(i)
    }

    /// Checked mutable element access. Returns `None` when `i >= len()`.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.elems.get_mut(i)
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elems
    }

    /// Returns an iterator over the elements in index order.
    ///
    /// The iterator is restartable: calling `iter` again yields a fresh
    /// traversal of `[0, len)`.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// Returns a mutable iterator over the elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elems.iter_mut()
    }

    /// Transfers the buffer out of `self` in O(1), leaving `self` empty.
    ///
    /// This is the observable form of move transfer: after `take`, the
    /// source has `len() == 0` and may still be read, reassigned, or
    /// dropped. A plain Rust move serves when the source need not remain
    /// accessible.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixvec::FixedVector;
    ///
    /// let mut a = FixedVector::from_fn(3, |i| i);
    /// let b = a.take();
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(b.as_slice(), &[0, 1, 2]);
    /// ```
    pub fn take(&mut self) -> Self {
        tracing::trace!(op = "take", len = self.len(), "transferring buffer");
        Self {
            elems: std::mem::take(&mut self.elems),
        }
    }
}

impl<T> Default for FixedVector<T> {
    /// The empty vector. Equivalent to `new(0)`; allocates nothing.
    fn default() -> Self {
        Self {
            elems: Box::default(),
        }
    }
}

impl<T: Clone> Clone for FixedVector<T> {
    /// Deep copy: allocates a fresh buffer and copies every element in
    /// index order. The result is fully independent of `self`.
    fn clone(&self) -> Self {
        tracing::trace!(op = "clone", len = self.len(), "deep-copying buffer");
        Self {
            elems: self.elems.clone(),
        }
    }

    /// Copy-assignment with the strong guarantee: the replacement buffer
    /// is fully built before the old one is released (allocate-then-swap,
    /// never overwrite-in-place), so `self` is never observable in a
    /// half-updated state.
    fn clone_from(&mut self, source: &Self) {
        tracing::trace!(op = "clone_from", len = source.len(), "deep-copy assignment");
        self.elems = source.elems.clone();
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T> Index<usize> for FixedVector<T> {
    type Output = T;

    /// Direct element access.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`. Use [`FixedVector::get`] for the checked
    /// variant.
    fn index(&self, i: usize) -> &T {
        &self.elems[i]
    }
}

impl<T> IndexMut<usize> for FixedVector<T> {
    /// Direct mutable element access.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.elems[i]
    }
}

// ============================================================================
// Iteration
// ============================================================================

impl<'a, T> IntoIterator for &'a FixedVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for FixedVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_vec().into_iter()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T> FromIterator<T> for FixedVector<T> {
    /// Collects an iterator into a vector whose length is the number of
    /// items yielded.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for FixedVector<T> {
    fn from(elems: Vec<T>) -> Self {
        Self {
            elems: elems.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for FixedVector<T> {
    fn from(elems: Box<[T]>) -> Self {
        Self { elems }
    }
}

impl<T> From<FixedVector<T>> for Vec<T> {
    fn from(v: FixedVector<T>) -> Self {
        v.elems.into_vec()
    }
}

impl<T> From<FixedVector<T>> for Box<[T]> {
    fn from(v: FixedVector<T>) -> Self {
        v.elems
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl<T: Display> Display for FixedVector<T> {
    /// Writes the elements space-separated, without a trailing terminator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for elem in &self.elems {
            if first {
                first = false;
            } else {
                write!(f, " ")?;
            }
            write!(f, "{elem}")?;
        }
        Ok(())
    }
}
