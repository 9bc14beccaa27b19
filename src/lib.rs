//! # Sparse vector primitives for simplex solvers
//!
//! The algebraic building blocks that a simplex-method linear program solver manipulates in its
//! hot path: a capacity-bounded sparse vector with explicitly owned or borrowed backing storage,
//! and a unit vector specialization that represents the standard basis vector `e_i` in a single
//! embedded slot, without allocating.
//!
//! Basis columns, pivot rows and update vectors are all instances of these types. The layer trusts
//! its callers: preconditions are checked with `debug_assert!` and violating them is a programming
//! error in the calling solver code, not a recoverable condition.
#![warn(missing_docs)]

pub mod traits;
pub mod vector;

pub use vector::{SparseVector, UnitVector, Vector};

/// An (index, value) pair as stored by sparse data structures.
pub type SparseTuple<F> = (usize, F);
