//! # Traits for elements in sparse datastructures
//!
//! A sparse structure stores only nonzero values, so the scalar needs to be comparable with zero
//! (through the `NonZero` contract) next to the basic capabilities every vector element needs.
//! Which concrete scalar is used, an exact rational or a floating point type, makes no difference
//! to anything in this crate.
use std::fmt::{Debug, Display};

use relp_num::NonZero;

/// Element of a sparse vector.
///
/// An alias for the traits needed throughout this crate; introduced to avoid verbose trait bounds.
pub trait Element: NonZero + Clone + PartialEq + Display + Debug {}

impl<T: NonZero + Clone + PartialEq + Display + Debug> Element for T {}
