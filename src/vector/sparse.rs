//! # Sparse vector
//!
//! A fixed-capacity collection of (index, value) tuples in insertion order. The backing storage is
//! either owned by the vector or borrowed from the caller; the mode is chosen at construction and
//! can not change afterwards, since silently mixing the two is a correctness hazard.
use std::collections::HashSet;
use std::fmt;

use relp_num::NonZero;

use crate::SparseTuple;
use crate::traits::Element;
use crate::vector::Vector;

/// A sparse vector using a bounded buffer of (index, value) tuples as back-end. Indices start at
/// `0`.
///
/// Elements are kept in insertion order, not sorted by index; consuming algorithms that need an
/// ordering impose it themselves. At most `capacity()` elements fit, and no two stored elements
/// share an index.
///
/// Equality compares the stored elements only, not capacity or ownership mode.
#[derive(Debug)]
pub struct Sparse<'a, F> {
    storage: Storage<'a, F>,
    /// Fixed at construction. For borrowed storage this equals the slot count.
    capacity: usize,
}

/// Backing storage of a `Sparse` vector.
///
/// The variant is the ownership tag: it is decided at construction and never changes.
#[derive(Debug)]
enum Storage<'a, F> {
    /// Storage allocated by this vector and freed with it.
    Owned(Vec<SparseTuple<F>>),
    /// Caller-supplied storage that outlives this vector; nothing is freed on drop.
    ///
    /// The first `used` slots hold the stored elements, the rest keep whatever the caller put
    /// there.
    Borrowed {
        slots: &'a mut [SparseTuple<F>],
        used: usize,
    },
}

impl<'a, F: Element> Sparse<'a, F> {
    /// Create a vector with owned storage from prepared data.
    ///
    /// # Arguments
    ///
    /// * `data`: Element tuples, in the insertion order they should have. Indices should be
    /// distinct and values nonzero.
    /// * `capacity`: Total number of elements the vector should be able to hold, at least
    /// `data.len()`.
    #[must_use]
    pub fn new(data: Vec<SparseTuple<F>>, capacity: usize) -> Self {
        debug_assert!(data.len() <= capacity);
        debug_assert!(data.iter().map(|&(i, _)| i).collect::<HashSet<_>>().len() == data.len());
        debug_assert!(data.iter().all(|(_, v)| v.is_not_zero()));

        let vector = Self {
            storage: Storage::Owned(data),
            capacity,
        };
        debug_assert!(vector.is_consistent());

        vector
    }

    /// Create an empty vector with owned storage for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity), capacity)
    }

    /// Create an empty vector over caller-supplied storage.
    ///
    /// The vector starts with zero elements; `slots.len()` is the capacity. The caller keeps
    /// ownership of the slots, nothing is freed when the vector is dropped.
    ///
    /// # Arguments
    ///
    /// * `slots`: Storage to write elements into. Existing content is ignored.
    #[must_use]
    pub fn from_slots(slots: &'a mut [SparseTuple<F>]) -> Self {
        let capacity = slots.len();

        let vector = Self {
            storage: Storage::Borrowed { slots, used: 0 },
            capacity,
        };
        debug_assert!(vector.is_consistent());

        vector
    }

    /// Append a new element.
    ///
    /// # Arguments
    ///
    /// * `index`: Index the value belongs to. Should not already be present; this layer does not
    /// deduplicate, avoiding duplicates is the calling algorithm's responsibility.
    /// * `value`: Nonzero value to store.
    pub fn add(&mut self, index: usize, value: F) {
        debug_assert!(self.size() < self.capacity);
        debug_assert!(self.position_of(index).is_none());
        debug_assert!(value.is_not_zero());

        match &mut self.storage {
            Storage::Owned(data) => data.push((index, value)),
            Storage::Borrowed { slots, used } => {
                slots[*used] = (index, value);
                *used += 1;
            },
        }
    }

    /// Remove the element at a storage position.
    ///
    /// The last stored element is moved into the hole, so removal is constant time but the
    /// insertion order of the remaining elements is not preserved.
    ///
    /// # Arguments
    ///
    /// * `position`: Internal storage position, should be smaller than `size()`.
    pub fn remove(&mut self, position: usize) {
        debug_assert!(position < self.size());

        match &mut self.storage {
            Storage::Owned(data) => {
                data.swap_remove(position);
            },
            Storage::Borrowed { slots, used } => {
                slots.swap(position, *used - 1);
                *used -= 1;
            },
        }
    }

    /// Remove all elements. Capacity and storage are unaffected.
    pub fn clear(&mut self) {
        self.set_size(0);
    }

    /// Override the number of stored elements without touching storage content.
    ///
    /// Used by callers that manage element content themselves. With owned storage only shrinking
    /// is possible, since slots past the current size hold no initialized values there; borrowed
    /// slots are initialized by the caller, so any size up to capacity is valid.
    ///
    /// # Arguments
    ///
    /// * `size`: New element count, at most `capacity()` (at most `size()` for owned storage).
    pub fn set_size(&mut self, size: usize) {
        debug_assert!(size <= self.capacity);

        match &mut self.storage {
            Storage::Owned(data) => {
                debug_assert!(size <= data.len());
                data.truncate(size);
            },
            Storage::Borrowed { used, .. } => *used = size,
        }
    }

    /// The storage position of the element with an index, if present.
    ///
    /// Linear in `size()`, as elements are not sorted.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.as_slice().iter().position(|&(i, _)| i == index)
    }

    /// The value at an index.
    ///
    /// # Returns
    ///
    /// `None` if no element with this index is stored, which represents a zero.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&F> {
        self.position_of(index).map(|position| &self.as_slice()[position].1)
    }

    /// Whether this vector owns its backing storage, as opposed to borrowing it from the caller.
    #[must_use]
    pub fn owns_storage(&self) -> bool {
        match self.storage {
            Storage::Owned(_) => true,
            Storage::Borrowed { .. } => false,
        }
    }
}

impl<F: Element> Vector<F> for Sparse<'_, F> {
    fn value(&self, position: usize) -> F {
        debug_assert!(position < self.size());

        self.as_slice()[position].1.clone()
    }

    fn index(&self, position: usize) -> usize {
        debug_assert!(position < self.size());

        self.as_slice()[position].0
    }

    fn size(&self) -> usize {
        match &self.storage {
            Storage::Owned(data) => data.len(),
            Storage::Borrowed { used, .. } => *used,
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn as_slice(&self) -> &[SparseTuple<F>] {
        match &self.storage {
            Storage::Owned(data) => data,
            Storage::Borrowed { slots, used } => &slots[..*used],
        }
    }

    fn is_consistent(&self) -> bool {
        let storage_within_bounds = match &self.storage {
            Storage::Owned(data) => data.len() <= self.capacity,
            Storage::Borrowed { slots, used } => {
                slots.len() == self.capacity && *used <= self.capacity
            },
        };

        let elements = self.as_slice();
        let indices_distinct = elements.iter()
            .map(|&(i, _)| i)
            .collect::<HashSet<_>>()
            .len() == elements.len();
        let values_nonzero = elements.iter().all(|(_, v)| v.is_not_zero());

        storage_within_bounds && indices_distinct && values_nonzero
    }
}

impl<F: Element> PartialEq for Sparse<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<F: Element> fmt::Display for Sparse<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        let elements = self.as_slice();
        for (position, (index, value)) in elements.iter().enumerate() {
            write!(f, "({} {})", index, value)?;
            if position + 1 < elements.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
