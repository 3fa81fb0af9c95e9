//! Fixed-size chunking of arbitrary iterators.

use core::iter;

/// Collects the items of an iterator into arrays of `N` elements. The last
/// array is padded with `None` when the input runs short.
///
/// ```
/// use randomart::grouper::grouper;
///
/// let groups: Vec<_> = grouper::<_, 3>("ABCDEFG".chars()).collect();
/// assert_eq!(groups, [
///     [Some('A'), Some('B'), Some('C')],
///     [Some('D'), Some('E'), Some('F')],
///     [Some('G'), None, None],
/// ]);
/// ```
pub fn grouper<I: IntoIterator, const N: usize>(iterable: I) -> Grouper<I::IntoIter, N> {
    Grouper::new(iterable.into_iter())
}

#[derive(Debug, Clone)]
pub struct Grouper<I, const N: usize> {
    inner: iter::Fuse<I>,
}

impl<I: Iterator, const N: usize> Grouper<I, N> {
    pub fn new(inner: I) -> Self {
        assert!(N > 0, "chunk size must be greater than zero");
        Self { inner: inner.fuse() }
    }
}

impl<I: Iterator, const N: usize> iter::Iterator for Grouper<I, N> {
    type Item = [Option<I::Item>; N];

    fn next(&mut self) -> Option<Self::Item> {
        let mut head = Some(self.inner.next()?);
        let inner = &mut self.inner;
        Some(core::array::from_fn(|i| if i == 0 { head.take() } else { inner.next() }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        (lo.div_ceil(N), hi.map(|hi| hi.div_ceil(N)))
    }
}

impl<I: iter::FusedIterator, const N: usize> iter::FusedIterator for Grouper<I, N> {}
