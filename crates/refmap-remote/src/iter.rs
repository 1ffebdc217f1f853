//! Lazy enumeration over a [`RefSpecs`] list.

use std::iter::FusedIterator;

use crate::error::Result;
use crate::traits::RefSpecs;

/// Iterator over the refspecs of a [`RefSpecs`] list.
///
/// The count is read once when the iterator is created; each element is an
/// indexed read performed when the iterator is advanced. Mutating the list
/// from elsewhere mid-iteration surfaces as per-element errors or changed
/// values, never as a longer or shorter sequence.
pub struct RefSpecIter<'a, S: RefSpecs + ?Sized> {
    specs: &'a S,
    next: usize,
    count: usize,
}

impl<'a, S: RefSpecs + ?Sized> RefSpecIter<'a, S> {
    pub fn new(specs: &'a S) -> Result<Self> {
        let count = specs.count()?;
        Ok(Self {
            specs,
            next: 0,
            count,
        })
    }
}

impl<S: RefSpecs + ?Sized> Iterator for RefSpecIter<'_, S> {
    type Item = Result<S::Spec>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.specs.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl<S: RefSpecs + ?Sized> ExactSizeIterator for RefSpecIter<'_, S> {}

impl<S: RefSpecs + ?Sized> FusedIterator for RefSpecIter<'_, S> {}
