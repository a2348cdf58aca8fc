//! Insertion-ordered container with tail-only mutation.
//!
//! [`List`] only grows and shrinks at its tail. Backing storage is a
//! contiguous buffer, so both [`List::push`] and [`List::pop`] are O(1) and the
//! first/last markers are always the ends of that buffer.

use std::fmt;
use std::slice;
use std::vec;

/// Generic append/remove-from-tail sequence.
///
/// Elements are never handed out mutably: readers get shared borrows
/// ([`List::iter`], [`List::first`], [`List::last`]) or owned copies
/// ([`List::all_elements`]).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    elements: Vec<T>,
}

impl<T> List<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends `value` as the new last element.
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Removes and returns the last element, or `None` when the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Like [`List::pop`], but reports absence with a presence flag.
    ///
    /// An empty list yields `(T::default(), false)`.
    pub fn pop_with_presence(&mut self) -> (T, bool)
    where
        T: Default,
    {
        match self.pop() {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }

    /// Snapshot of every element, in insertion order.
    #[must_use]
    pub fn all_elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements.iter(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Borrowing iterator over a [`List`], first to last.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`List`], first to last.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
