//! Row-major construction of [`DMat3`].
//!
//! Color matrices are published row by row and applied to column vectors:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! glam stores columns, so the rows are transposed on the way in.

use glam::{DMat3, DVec3};

/// Builds a matrix from its rows.
///
/// # Example
///
/// ```rust
/// use okpick_math::{DVec3, mat3_from_rows};
///
/// let m = mat3_from_rows([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 3.0]]);
/// assert_eq!(m * DVec3::new(1.0, 1.0, 1.0), DVec3::new(3.0, 1.0, 3.0));
/// ```
#[inline]
pub const fn mat3_from_rows(rows: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(rows[0][0], rows[1][0], rows[2][0]),
        DVec3::new(rows[0][1], rows[1][1], rows[2][1]),
        DVec3::new(rows[0][2], rows[1][2], rows[2][2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ROWS: [[f64; 3]; 3] = [[2.0, 0.5, -1.0], [0.25, 3.0, 0.0], [1.0, -2.0, 4.0]];

    #[test]
    fn test_rows_survive() {
        let m = mat3_from_rows(ROWS);
        for (i, row) in ROWS.iter().enumerate() {
            assert_eq!(m.row(i), DVec3::from(*row));
        }
    }

    #[test]
    fn test_column_vector_product() {
        let m = mat3_from_rows(ROWS);
        let v = DVec3::new(1.0, -1.0, 2.0);
        assert_eq!(m * v, DVec3::new(-0.5, -2.75, 11.0));
    }

    #[test]
    fn test_inverse_undoes_product() {
        let m = mat3_from_rows(ROWS);
        let v = DVec3::new(0.3, 0.6, 0.9);
        let back = m.inverse() * (m * v);
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], v[i], epsilon = 1e-12);
        }
    }
}
