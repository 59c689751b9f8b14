//! Zero-or-one element iterators shared by `Opt` and `Res`.

use std::iter::FusedIterator;

/// Borrowing iterator over the payload of an [`Opt`](super::Opt) or over the
/// `Ok` payload of a [`Res`](crate::result::Res).
///
/// Yields at most one item.
#[derive(Debug)]
pub struct Iter<'a, T> {
    item: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(item: Option<&'a T>) -> Self {
        Self { item }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { item: self.item }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.item.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the payload of an [`Opt`](super::Opt) or over the
/// `Ok` payload of a [`Res`](crate::result::Res).
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    item: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(item: Option<T>) -> Self {
        Self { item }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.item.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
