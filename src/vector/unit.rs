//! # Unit vector
//!
//! The standard basis vector `e_i`: a sparse vector that holds exactly one element, with value 1
//! and arbitrary index.
//!
//! Simplex iterations request basis directions constantly, so this type keeps its single element
//! in an embedded slot rather than in allocated storage, and construction collapses to writing one
//! tuple. No mutating operation is exposed: the index is chosen at construction and the only way
//! to change a unit vector is to overwrite it with another one, so the single-element invariant
//! can not be violated through the general sparse vector interface.
use std::fmt;

use num_traits::One;

use crate::SparseTuple;
use crate::traits::Element;
use crate::vector::Vector;

/// A sparse vector with a single element that has value 1.
///
/// Cloning or assigning copies the element into the target's own embedded slot; two unit vectors
/// never share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit<F> {
    /// The one backing slot; `size()` and `capacity()` are both structurally 1.
    slot: [SparseTuple<F>; 1],
}

impl<F: Element + One> Unit<F> {
    /// Construct the `i`th unit vector.
    #[must_use]
    pub fn new(i: usize) -> Self {
        let vector = Self {
            slot: [(i, F::one())],
        };
        debug_assert!(vector.is_consistent());

        vector
    }
}

impl<F: Element + One> Default for Unit<F> {
    /// The first unit vector, `e_0`.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<F: Element + One> Vector<F> for Unit<F> {
    /// Always returns 1.
    ///
    /// The return value is hard-coded rather than read from the slot, so it holds even if the
    /// stored scalar were somehow corrupted.
    ///
    /// # Arguments
    ///
    /// * `position`: Should be 0, the only valid storage position.
    fn value(&self, position: usize) -> F {
        debug_assert_eq!(position, 0);

        F::one()
    }

    fn index(&self, position: usize) -> usize {
        debug_assert_eq!(position, 0);

        self.slot[0].0
    }

    fn size(&self) -> usize {
        1
    }

    fn capacity(&self) -> usize {
        1
    }

    fn as_slice(&self) -> &[SparseTuple<F>] {
        &self.slot
    }

    fn is_consistent(&self) -> bool {
        // Size and capacity are fixed by the embedded slot; the stored value is the one thing
        // that could disagree with the contract.
        self.slot[0].1 == F::one()
    }
}

impl<F: Element> fmt::Display for Unit<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[({} {})]", self.slot[0].0, self.slot[0].1)
    }
}

#[cfg(test)]
mod test {
    use relp_num::{Rational64, R64};

    use crate::vector::{UnitVector, Vector};

    type T = Rational64;

    #[test]
    fn new() {
        let u = UnitVector::<T>::new(3);

        assert_eq!(u.size(), 1);
        assert_eq!(u.capacity(), 1);
        assert_eq!(u.value(0), R64!(1));
        assert_eq!(u.index(0), 3);
        assert!(u.is_consistent());
    }

    #[test]
    fn default_is_first_basis_vector() {
        let u = UnitVector::<T>::default();

        assert_eq!(u.index(0), 0);
        assert_eq!(u.value(0), R64!(1));
        assert!(u.is_consistent());
    }

    #[test]
    fn clone_does_not_alias() {
        let u = UnitVector::<T>::new(3);
        let v = u.clone();

        assert_eq!(v.index(0), 3);
        assert_eq!(v.value(0), R64!(1));
        assert_ne!(v.as_slice().as_ptr(), u.as_slice().as_ptr());
        assert!(v.is_consistent());
    }

    #[test]
    fn assignment_copies_into_own_slot() {
        let source = UnitVector::<T>::new(3);
        let mut target = UnitVector::<T>::new(0);
        assert_eq!(target.index(0), 0);

        target = source.clone();

        assert_eq!(target.index(0), 3);
        assert_eq!(target.value(0), R64!(1));
        assert_ne!(target.as_slice().as_ptr(), source.as_slice().as_ptr());
        assert!(target.is_consistent());
    }

    #[test]
    fn self_assignment() {
        let mut u = UnitVector::<T>::new(5);

        u = u.clone();

        assert_eq!(u.index(0), 5);
        assert_eq!(u.value(0), R64!(1));
        assert!(u.is_consistent());
    }

    #[test]
    fn copy_round_trip() {
        let original = UnitVector::<T>::new(11);

        let mut current = original.clone();
        for _ in 0..4 {
            current = current.clone();
        }
        let other = UnitVector::<T>::new(2);
        assert_ne!(current, other);
        current = current.clone();

        assert_eq!(current.index(0), 11);
        assert_eq!(current.value(0), R64!(1));
        assert_eq!(current, original);
        assert!(current.is_consistent());
    }

    #[test]
    #[should_panic]
    fn out_of_range_value() {
        let u = UnitVector::<T>::new(0);

        u.value(1);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index() {
        let u = UnitVector::<T>::new(0);

        u.index(1);
    }

    #[test]
    fn integer_scalars() {
        let u = UnitVector::<i32>::new(8);

        assert_eq!(u.value(0), 1);
        assert_eq!(u.index(0), 8);
        assert!(u.is_consistent());
    }

    #[test]
    fn display() {
        assert_eq!(UnitVector::<T>::new(4).to_string(), "[(4 1)]");
    }
}
