use core::iter::FusedIterator;
use core::slice::ChunksExact;

use super::Matrix;

/// Iterator over the rows of a [`Matrix`], each yielded as a slice.
///
/// Borrows the matrix, so the source cannot be mutated while rows are being
/// read. Created by [`Matrix::rows`].
#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    inner: ChunksExact<'a, T>,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}

impl<T> FusedIterator for Rows<'_, T> {}

impl<T> Matrix<T> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from([[1.0_f32, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View row `i` as a slice.
    ///
    /// Panics if `i >= nrows`.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {} out of bounds for {} rows", i, self.nrows);
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    #[inline]
    pub(crate) fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.ncols;
        let end = start + self.ncols;
        &mut self.data[start..end]
    }

    /// Iterate over rows, top to bottom.
    ///
    /// Each call starts a fresh pass at row 0.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from([[1.0_f32, 2.0], [3.0, 4.0]]);
    /// let sums: Vec<f32> = m.rows().map(|r| r.iter().sum()).collect();
    /// assert_eq!(sums, vec![3.0, 7.0]);
    /// ```
    #[inline]
    pub fn rows(&self) -> Rows<'_, T> {
        Rows {
            inner: self.data.chunks_exact(self.ncols),
        }
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a [T];
    type IntoIter = Rows<'a, T>;

    #[inline]
    fn into_iter(self) -> Rows<'a, T> {
        self.rows()
    }
}
