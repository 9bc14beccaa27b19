//! # Vector types for linear programs
//!
//! A general sparse vector and the unit vector specialization. These were written by hand, because
//! the inner loops of a simplex implementation need a specific, small set of operations to be done
//! quickly and without allocation where possible.
use std::slice::Iter;

pub use sparse::Sparse as SparseVector;
pub use unit::Unit as UnitVector;

use crate::SparseTuple;
use crate::traits::Element;

pub mod sparse;
pub mod unit;

/// Read access shared by all sparse vector types, regardless of back-end.
///
/// Positions are internal storage positions in `0..size()`, not vector indices: the element at a
/// position carries its own index. Elements appear in insertion order.
pub trait Vector<F: Element> {
    /// The value stored at a storage position.
    ///
    /// # Arguments
    ///
    /// * `position`: Internal storage position, should be smaller than `size()`.
    fn value(&self, position: usize) -> F;
    /// The index belonging to the element at a storage position.
    ///
    /// # Arguments
    ///
    /// * `position`: Internal storage position, should be smaller than `size()`.
    fn index(&self, position: usize) -> usize;
    /// Number of elements currently stored.
    fn size(&self) -> usize;
    /// Number of elements the backing storage can hold.
    fn capacity(&self) -> usize;
    /// Whether no elements are stored.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
    /// The stored elements as a slice.
    ///
    /// The slice pointer identifies the backing storage; it is used to verify storage identity
    /// (no aliasing between vectors that should not share memory).
    fn as_slice(&self) -> &[SparseTuple<F>];
    /// Iterate over the stored elements in insertion order.
    fn iter(&self) -> Iter<'_, SparseTuple<F>> {
        self.as_slice().iter()
    }
    /// Whether the internal state satisfies the type's invariants.
    ///
    /// Pure and always compiled; production code should only call this inside a `debug_assert!`,
    /// test code can call it directly.
    fn is_consistent(&self) -> bool;
}
