use alloc::vec::Vec;
use core::fmt;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from([[1.0_f32, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(1, 1)], 16.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Apply a function to every element in place.
    ///
    /// This is the only mutating transform; every other operation returns a
    /// new matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from([[1.0_f32, -2.0]]);
    /// m.map_in_place(|x| x * x);
    /// assert_eq!(m.as_slice(), &[1.0, 4.0]);
    /// ```
    pub fn map_in_place(&mut self, mut f: impl FnMut(T) -> T) {
        for x in self.data.iter_mut() {
            *x = f(*x);
        }
    }
}

// ── Row manipulation ────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Swap two rows in place.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::from([[1.0_f32, 2.0], [3.0, 4.0]]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(
            a < self.nrows && b < self.nrows,
            "cannot swap rows {} and {} of a matrix with {} rows",
            a,
            b,
            self.nrows,
        );
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// One line per row, each value right-aligned in 8 characters with 3
/// decimals. Every row, including the last, ends with a newline.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for x in row {
                write!(f, "{:8.3}", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn map_type_change() {
        let m = Matrix::from([[1.5_f32, 2.5]]);
        let r = m.map(|x| x as f64 * 2.0);
        assert_eq!(r.as_slice(), &[3.0_f64, 5.0]);
    }

    #[test]
    fn map_in_place_stateful() {
        let mut m = Matrix::<f32>::new(2, 2);
        let mut k = 0.0;
        m.map_in_place(|x| {
            k += 1.0;
            x + k
        });
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn swap_rows_same_row() {
        let mut m = Matrix::from([[1.0_f32, 2.0], [3.0, 4.0]]);
        m.swap_rows(1, 1);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "cannot swap rows")]
    fn swap_rows_out_of_bounds() {
        let mut m = Matrix::<f32>::new(2, 2);
        m.swap_rows(0, 2);
    }

    #[test]
    fn display() {
        let m = Matrix::from([[1.0_f32, -2.5], [1.23456, 100.0]]);
        let s = format!("{}", m);
        assert_eq!(s, "   1.000  -2.500\n   1.235 100.000\n");
    }

    #[test]
    fn display_wide_values_overflow_field() {
        let m = Matrix::from([[123456.0_f32]]);
        assert_eq!(format!("{}", m), "123456.000\n");
    }
}
