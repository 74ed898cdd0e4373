use super::angle::*;
use super::vector::*;
use super::consts::*;

use std::f64;
use std::ops::{Mul};

///
/// Represents a 2D affine transformation matrix
///
/// Points are treated as row vectors and multiplied on the left (`point * matrix`), so the first two
/// rows hold the transformed x and y axes and the bottom row holds the translation. In the product
/// `a * b`, `a` is applied first.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Matrix {
    pub m00: f64, pub m01: f64, pub m02: f64,
    pub m10: f64, pub m11: f64, pub m12: f64,
    pub m20: f64, pub m21: f64, pub m22: f64
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::identity()
    }
}

impl Matrix {
    ///
    /// Creates a matrix from its cells, in row order
    ///
    pub fn new(m00: f64, m01: f64, m02: f64,
               m10: f64, m11: f64, m12: f64,
               m20: f64, m21: f64, m22: f64) -> Matrix {
        Matrix {
            m00, m01, m02,
            m10, m11, m12,
            m20, m21, m22
        }
    }

    ///
    /// Creates the identity matrix
    ///
    pub fn identity() -> Matrix {
        Matrix::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0)
    }

    ///
    /// Creates a translation matrix
    ///
    pub fn translation(offset: Vector) -> Matrix {
        Matrix::new(
            1.0,        0.0,        0.0,
            0.0,        1.0,        0.0,
            offset.x,   offset.y,   1.0)
    }

    ///
    /// Creates a scaling matrix
    ///
    pub fn scaling(scale: Vector) -> Matrix {
        Matrix::new(
            scale.x,    0.0,        0.0,
            0.0,        scale.y,    0.0,
            0.0,        0.0,        1.0)
    }

    ///
    /// Creates an anticlockwise rotation about the origin
    ///
    pub fn rotation(angle: Angle) -> Matrix {
        let cos = angle.cos();
        let sin = angle.sin();

        Matrix::new(
            cos,    sin,    0.0,
            -sin,   cos,    0.0,
            0.0,    0.0,    1.0)
    }

    ///
    /// A matrix with every cell set to NaN, used as the result of inverting a singular matrix
    ///
    pub fn nan() -> Matrix {
        Matrix::from_rows([[f64::NAN; 3]; 3])
    }

    #[inline]
    fn rows(&self) -> [[f64; 3]; 3] {
        [
            [self.m00, self.m01, self.m02],
            [self.m10, self.m11, self.m12],
            [self.m20, self.m21, self.m22]
        ]
    }

    #[inline]
    fn from_rows(a: [[f64; 3]; 3]) -> Matrix {
        Matrix::new(
            a[0][0], a[0][1], a[0][2],
            a[1][0], a[1][1], a[1][2],
            a[2][0], a[2][1], a[2][2])
    }

    ///
    /// True if every cell of this matrix is finite
    ///
    pub fn is_valid(&self) -> bool {
        self.rows().iter().all(|row| row.iter().all(|cell| cell.is_finite()))
    }

    ///
    /// True if every cell of this matrix is within a small distance of the corresponding cell of another
    ///
    pub fn is_equal_to(&self, rhs: &Matrix) -> bool {
        let a = self.rows();
        let b = rhs.rows();

        (0..3).all(|row| (0..3).all(|col| (a[row][col] - b[row][col]).abs() <= MATRIX_EPSILON))
    }

    ///
    /// Computes the cofactor of an element in a 3x3 matrix
    ///
    fn cofactor(matrix: &[[f64; 3]; 3], row: usize, col: usize) -> f64 {
        let (r1, r2)    = match row { 0 => (1, 2), 1 => (0, 2), _ => (0, 1) };
        let (c1, c2)    = match col { 0 => (1, 2), 1 => (0, 2), _ => (0, 1) };

        let minor       = matrix[r1][c1]*matrix[r2][c2] - matrix[r1][c2]*matrix[r2][c1];

        if (row + col) & 1 != 0 {
            -minor
        } else {
            minor
        }
    }

    ///
    /// The determinant of this matrix
    ///
    pub fn determinant(&self) -> f64 {
        let a = self.rows();

        a[0][0]*Self::cofactor(&a, 0, 0) + a[0][1]*Self::cofactor(&a, 0, 1) + a[0][2]*Self::cofactor(&a, 0, 2)
    }

    ///
    /// True if this matrix has an inverse
    ///
    pub fn is_invertible(&self) -> bool {
        self.invert().is_some()
    }

    ///
    /// Returns the inverse of this matrix, or None if it is singular
    ///
    /// A determinant so small that its reciprocal overflows counts as singular.
    ///
    pub fn invert(&self) -> Option<Matrix> {
        let a           = self.rows();
        let cofactors   = [
            [Self::cofactor(&a, 0, 0), Self::cofactor(&a, 0, 1), Self::cofactor(&a, 0, 2)],
            [Self::cofactor(&a, 1, 0), Self::cofactor(&a, 1, 1), Self::cofactor(&a, 1, 2)],
            [Self::cofactor(&a, 2, 0), Self::cofactor(&a, 2, 1), Self::cofactor(&a, 2, 2)],
        ];

        let det         = a[0][0]*cofactors[0][0] + a[0][1]*cofactors[0][1] + a[0][2]*cofactors[0][2];

        let inv_det     = 1.0/det;
        if det == 0.0 || !det.is_finite() || !inv_det.is_finite() {
            return None;
        }

        // Inverse is the transposed cofactor matrix divided by the determinant
        let inverted    = Matrix::from_rows([
            [inv_det * cofactors[0][0], inv_det * cofactors[1][0], inv_det * cofactors[2][0]],
            [inv_det * cofactors[0][1], inv_det * cofactors[1][1], inv_det * cofactors[2][1]],
            [inv_det * cofactors[0][2], inv_det * cofactors[1][2], inv_det * cofactors[2][2]]
        ]);

        if inverted.is_valid() {
            Some(inverted)
        } else {
            None
        }
    }

    ///
    /// Returns the inverse of this matrix, or a matrix full of NaNs if it is singular
    ///
    pub fn inverted_or_nan(&self) -> Matrix {
        match self.invert() {
            Some(inverted)  => inverted,
            None            => {
                debug!("Inverting singular matrix {:?} (determinant {})", self, self.determinant());
                Matrix::nan()
            }
        }
    }

    ///
    /// Transforms a point or a direction by this matrix
    ///
    /// Directions are transformed by passing `false` for `translate`, which ignores the bottom row.
    /// Only the affine part of the matrix is used.
    ///
    pub fn get_transformed(&self, v: &Vector, translate: bool) -> Vector {
        let x = v.x*self.m00 + v.y*self.m10;
        let y = v.x*self.m01 + v.y*self.m11;

        if translate {
            Vector::new(x + self.m20, y + self.m21)
        } else {
            Vector::new(x, y)
        }
    }
}

impl Mul<Matrix> for Matrix {
    type Output=Matrix;

    fn mul(self, other: Matrix) -> Matrix {
        &self * &other
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output=Matrix;

    fn mul(self, other: &Matrix) -> Matrix {
        let a = self.rows();
        let b = other.rows();

        Matrix::from_rows([
            [a[0][0]*b[0][0] + a[0][1]*b[1][0] + a[0][2]*b[2][0],   a[0][0]*b[0][1] + a[0][1]*b[1][1] + a[0][2]*b[2][1],    a[0][0]*b[0][2] + a[0][1]*b[1][2] + a[0][2]*b[2][2]],
            [a[1][0]*b[0][0] + a[1][1]*b[1][0] + a[1][2]*b[2][0],   a[1][0]*b[0][1] + a[1][1]*b[1][1] + a[1][2]*b[2][1],    a[1][0]*b[0][2] + a[1][1]*b[1][2] + a[1][2]*b[2][2]],
            [a[2][0]*b[0][0] + a[2][1]*b[1][0] + a[2][2]*b[2][0],   a[2][0]*b[0][1] + a[2][1]*b[1][1] + a[2][2]*b[2][1],    a[2][0]*b[0][2] + a[2][1]*b[1][2] + a[2][2]*b[2][2]],
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn apply_translate() {
        let translate   = Matrix::translation(Vector::new(200.0, 300.0));

        let moved       = translate.get_transformed(&Vector::new(20.0, 30.0), true);
        assert!((moved.x-220.0).abs() < 0.01);
        assert!((moved.y-330.0).abs() < 0.01);

        let direction   = translate.get_transformed(&Vector::new(20.0, 30.0), false);
        assert!(direction == Vector::new(20.0, 30.0));
    }

    #[test]
    pub fn invert_translate() {
        let translate   = Matrix::translation(Vector::new(200.0, 300.0));
        let inverse     = translate.invert().unwrap();

        let point       = inverse.get_transformed(&Vector::new(220.0, 330.0), true);
        assert!((point.y-30.0).abs() < 0.01);
        assert!((point.x-20.0).abs() < 0.01);
    }

    #[test]
    pub fn invert_scale() {
        let scale       = Matrix::scaling(Vector::new(2.0, 3.0));
        let inverse     = scale.invert().unwrap();

        let point       = inverse.get_transformed(&Vector::new(40.0, 90.0), true);
        assert!((point.y-30.0).abs() < 0.01);
        assert!((point.x-20.0).abs() < 0.01);
    }

    #[test]
    pub fn invert_rotate() {
        let rotate      = Matrix::rotation(Angle::rad(1.2));
        let inverse     = rotate.invert().unwrap();

        let p1          = rotate.get_transformed(&Vector::new(40.0, 90.0), true);
        let p2          = inverse.get_transformed(&p1, true);
        assert!((p2.y-90.0).abs() < 0.01);
        assert!((p2.x-40.0).abs() < 0.01);
    }

    #[test]
    pub fn rotate_is_anticlockwise() {
        let rotate      = Matrix::rotation(Angle::deg(90.0));
        let point       = rotate.get_transformed(&Vector::new(1.0, 0.0), true);

        assert!(point.x.abs() < 1e-12);
        assert!((point.y-1.0).abs() < 1e-12);
    }

    #[test]
    pub fn product_applies_left_first() {
        let scale       = Matrix::scaling(Vector::new(2.0, 2.0));
        let translate   = Matrix::translation(Vector::new(10.0, 0.0));

        let scale_then_translate = scale * translate;
        let translate_then_scale = translate * scale;

        let p1          = scale_then_translate.get_transformed(&Vector::new(1.0, 1.0), true);
        let p2          = translate_then_scale.get_transformed(&Vector::new(1.0, 1.0), true);

        assert!(p1 == Vector::new(12.0, 2.0));
        assert!(p2 == Vector::new(22.0, 2.0));
    }

    #[test]
    pub fn matrix_times_inverse_is_identity() {
        let matrix      = Matrix::new(
            2.0,    0.5,    0.0,
            -1.0,   3.0,    0.0,
            7.0,    -4.0,   1.0);
        let inverse     = matrix.invert().unwrap();

        assert!((matrix * inverse).is_equal_to(&Matrix::identity()));
        assert!((inverse * matrix).is_equal_to(&Matrix::identity()));
    }

    #[test]
    pub fn singular_matrix_has_no_inverse() {
        let singular    = Matrix::scaling(Vector::new(0.0, 1.0));

        assert!(!singular.is_invertible());
        assert!(singular.invert().is_none());
        assert!(!singular.inverted_or_nan().is_valid());
    }

    #[test]
    pub fn overflowing_inverse_is_singular() {
        // Determinant is subnormal, so its reciprocal is infinite
        let tiny        = Matrix::scaling(Vector::new(1e-160, 1e-160));

        assert!(tiny.determinant() != 0.0);
        assert!(!tiny.is_invertible());
        assert!(tiny.invert().is_none());
        assert!(!tiny.inverted_or_nan().is_valid());
    }

    #[test]
    pub fn determinant_of_scale() {
        let scale       = Matrix::scaling(Vector::new(2.0, 3.0));

        assert!((scale.determinant() - 6.0).abs() < 1e-12);
    }
}
