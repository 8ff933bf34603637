//! Growable array of owned elements with the legacy growth policy: a fixed
//! initial capacity of 16 that doubles whenever a push finds the array
//! full. The logical capacity is part of the contract and is tracked
//! explicitly; the backing storage is grown in lockstep.

use core::ops::Index;
use core::slice;
use std::vec;

const INITIAL_CAP: usize = 16;
const GROWTH_FACTOR: usize = 2;

/// Growable sequence of owned elements.
///
/// The array owns its elements: dropping it releases them all (the
/// destroy-with-release path of the original), while [`into_elements`]
/// consumes the array and hands every element back to the caller without
/// releasing anything (the destroy-without-release path).
///
/// [`into_elements`]: DynArray::into_elements
pub struct DynArray<T> {
    elems: Vec<T>,
    // Logical capacity per the doubling policy. The backing Vec may round
    // its own allocation up; this field is the documented contract.
    cap: usize,
}

impl<T> DynArray<T> {
    /// Creates an array with length 0 and capacity 16.
    pub fn new() -> Self {
        DynArray {
            elems: Vec::with_capacity(INITIAL_CAP),
            cap: INITIAL_CAP,
        }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Logical capacity: 16, doubled on every overflow since creation.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Appends `element` at the end, doubling the capacity first when the
    /// array is full. Existing elements and their order are preserved.
    pub fn push(&mut self, element: T) {
        if self.elems.len() == self.cap {
            self.cap *= GROWTH_FACTOR;
            self.elems.reserve_exact(self.cap - self.elems.len());
        }
        self.elems.push(element);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elems.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elems.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// Consumes the array and yields its elements in index order. The
    /// caller takes ownership of each element; nothing is released here.
    pub fn into_elements(self) -> IntoElements<T> {
        IntoElements(self.elems.into_iter())
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        DynArray::new()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        &self.elems[index]
    }
}

/// Consuming iterator returned by [`DynArray::into_elements`].
pub struct IntoElements<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoElements<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoElements<T> {}
