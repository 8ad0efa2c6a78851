use densemat::Matrix;
use proptest::prelude::*;

/// Arbitrary `rows x cols` matrix with entries in `[-10, 10)`.
fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f32>> {
    prop::collection::vec(-10.0_f32..10.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data))
}

/// Any shape up to 5x5.
fn any_matrix() -> impl Strategy<Value = Matrix<f32>> {
    (1_usize..=5, 1_usize..=5).prop_flat_map(|(r, c)| matrix(r, c))
}

/// Strictly diagonally dominant square matrix, hence well-conditioned and
/// invertible.
fn invertible(n: usize) -> impl Strategy<Value = Matrix<f32>> {
    prop::collection::vec(-1.0_f32..1.0, n * n).prop_map(move |data| {
        let mut m = Matrix::from_vec(n, n, data);
        for i in 0..n {
            m[(i, i)] = m[(i, i)] + (n as f32 + 1.0);
        }
        m
    })
}

fn max_abs_diff(a: &Matrix<f32>, b: &Matrix<f32>) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

proptest! {
    /// M * M^-1 is the identity within 1e-3.
    #[test]
    fn prop_inverse_times_self_is_identity(m in (1_usize..=5).prop_flat_map(invertible)) {
        let inv = m.inverse().unwrap();
        let id = Matrix::identity(m.nrows());
        prop_assert!(max_abs_diff(&m.matmul(&inv).unwrap(), &id) < 1e-3);
    }

    /// Transposing twice is exact.
    #[test]
    fn prop_double_transpose(m in any_matrix()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    /// (AB)C == A(BC) within float tolerance.
    #[test]
    fn prop_matmul_associative(
        (a, b, c) in (1_usize..=4, 1_usize..=4, 1_usize..=4, 1_usize..=4)
            .prop_flat_map(|(m, n, p, q)| (matrix(m, n), matrix(n, p), matrix(p, q)))
    ) {
        let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
        let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();
        // Entry-wise rounding error is bounded by |A||B||C|, itself bounded by
        // the product of Frobenius norms
        let scale = 1.0 + a.norm() * b.norm() * c.norm();
        prop_assert!(max_abs_diff(&left, &right) <= 1e-5 * scale);
    }

    /// Identity determinant is exactly one.
    #[test]
    fn prop_identity_determinant(n in 1_usize..=8) {
        prop_assert_eq!(Matrix::<f32>::identity(n).determinant().unwrap(), 1.0);
    }

    /// A zero row forces a determinant of exactly zero.
    #[test]
    fn prop_zero_row_determinant(
        (m, row) in (1_usize..=5).prop_flat_map(|n| (matrix(n, n), 0..n))
    ) {
        let mut m = m;
        for j in 0..m.ncols() {
            m[(row, j)] = 0.0;
        }
        prop_assert_eq!(m.determinant().unwrap(), 0.0);
    }

    /// Augmenting then splitting returns the operands unchanged.
    #[test]
    fn prop_augment_split_round_trip(
        (a, b) in (1_usize..=5, 1_usize..=5, 1_usize..=5)
            .prop_flat_map(|(r, c1, c2)| (matrix(r, c1), matrix(r, c2)))
    ) {
        let ab = a.augment(&b).unwrap();
        prop_assert_eq!(ab.left_cols(a.ncols()), a);
        prop_assert_eq!(ab.right_cols(b.ncols()), b);
    }

    /// Operations never modify their operands.
    #[test]
    fn prop_operands_untouched(m in (1_usize..=4).prop_flat_map(invertible)) {
        let before = m.clone();
        let _ = m.determinant();
        let _ = m.inverse();
        let _ = m.transpose();
        let _ = m.normalize();
        let _ = m.hadamard_quotient(&before);
        prop_assert_eq!(m, before);
    }

    /// Determinant agrees with the Gauss-Jordan inverse: det(M) * det(M^-1) == 1.
    #[test]
    fn prop_determinant_of_inverse(m in (1_usize..=4).prop_flat_map(invertible)) {
        let d = m.determinant().unwrap();
        let d_inv = m.inverse().unwrap().determinant().unwrap();
        prop_assert!((d * d_inv - 1.0).abs() < 1e-3);
    }
}
