use std::iter::FusedIterator;

/// An iterator that may be absent, in which case it yields nothing.
///
/// ```rust
/// use durtext::MaybeIter;
///
/// let present = MaybeIter::new(Some(vec![1, 2, 3].into_iter()));
/// let absent: MaybeIter<std::vec::IntoIter<i32>> = MaybeIter::new(None);
///
/// assert_eq!(present.collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(absent.count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MaybeIter<I> {
    inner: Option<I>,
}

impl<I> MaybeIter<I> {
    #[inline]
    pub fn new(inner: Option<I>) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I: Iterator> Iterator for MaybeIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |i| i.size_hint())
    }
}

impl<I: FusedIterator> FusedIterator for MaybeIter<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for MaybeIter<I> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |i| i.len())
    }
}
