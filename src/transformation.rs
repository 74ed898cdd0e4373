use super::angle::*;
use super::vector::*;
use super::matrix::*;
use super::rect::*;
use super::error::*;
use super::consts::*;

///
/// A 2D affine transformation, described in terms that are convenient to edit
///
/// The x axis is rotated by `angle` and stretched by `scale.x`. The y axis starts perpendicular to
/// that, is rotated by a further `skew_angle` and then stretched by `scale.y`. The result is moved
/// by `offset`.
///
/// Converting from a matrix always produces a non-negative scale, so a mirrored axis comes back as a
/// skew of around 180 degrees rather than as a negative scale factor.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transformation {
    /// The translation applied after rotating, skewing and scaling
    pub offset:     Vector,

    /// Rotation of the x axis
    pub angle:      Angle,

    /// Rotation of the y axis, relative to the perpendicular of the x axis
    pub skew_angle: Angle,

    /// Length of the x and y axes
    pub scale:      Vector
}

impl Default for Transformation {
    fn default() -> Transformation {
        Transformation {
            offset:     Vector::new(0.0, 0.0),
            angle:      Angle::rad(0.0),
            skew_angle: Angle::rad(0.0),
            scale:      Vector::new(1.0, 1.0)
        }
    }
}

impl Transformation {
    ///
    /// The transformation that leaves everything where it is
    ///
    #[inline]
    pub fn identity() -> Transformation {
        Transformation::default()
    }

    ///
    /// Creates a transformation from its components
    ///
    #[inline]
    pub fn new(offset: Vector, angle: Angle, skew_angle: Angle, scale: Vector) -> Transformation {
        Transformation { offset, angle, skew_angle, scale }
    }

    ///
    /// Splits a matrix into an offset, angle, skew angle and scale
    ///
    pub fn from_matrix(matrix: &Matrix) -> Transformation {
        let mut transformation = Transformation::identity();
        transformation.set_matrix(matrix);
        transformation
    }

    ///
    /// Replaces the components of this transformation with the ones read from a matrix
    ///
    pub fn set_matrix(&mut self, matrix: &Matrix) {
        let axis_x      = Vector::new(matrix.m00, matrix.m01);
        let axis_y      = Vector::new(matrix.m10, matrix.m11);

        self.angle      = axis_x.angle();
        self.skew_angle = axis_y.angle() - self.angle - Angle::deg(90.0);
        self.scale      = Vector::new(axis_x.magnitude(), axis_y.magnitude());
        self.offset     = Vector::new(matrix.m20, matrix.m21);
    }

    ///
    /// True if none of the components of this transformation are NaN or infinite
    ///
    pub fn is_valid(&self) -> bool {
        self.offset.is_valid()
            && !self.angle.is_nan()
            && !self.skew_angle.is_nan()
            && self.scale.is_valid()
    }

    ///
    /// True if this transformation is very nearly the same as another
    ///
    /// Angles are compared without wrapping, so two angles either side of the half-turn are different
    /// even if they point in almost the same direction.
    ///
    pub fn is_equal_to(&self, rhs: &Transformation) -> bool {
        let angle_diff  = (self.angle - rhs.angle).to_radians();
        let skew_diff   = (self.skew_angle - rhs.skew_angle).to_radians();

        self.offset.is_equal_to(&rhs.offset)
            && angle_diff < ANGLE_EPSILON && angle_diff > -ANGLE_EPSILON
            && skew_diff < ANGLE_EPSILON && skew_diff > -ANGLE_EPSILON
            && self.scale.is_equal_to(&rhs.scale)
    }

    ///
    /// Builds the matrix for this transformation
    ///
    pub fn get_matrix(&self) -> Matrix {
        // The y axis points at angle + skew_angle + 90 degrees: take the perpendicular rather than adding a quarter turn
        // so that the identity transformation produces an exact identity matrix
        let axis_x = Vector::from_polar(self.scale.x, self.angle);
        let axis_y = Vector::from_polar(self.scale.y, self.angle + self.skew_angle).perpendicular();

        Matrix::new(
            axis_x.x,       axis_x.y,       0.0,
            axis_y.x,       axis_y.y,       0.0,
            self.offset.x,  self.offset.y,  1.0)
    }

    ///
    /// The matrix that undoes this transformation
    ///
    /// If the transformation can't be reversed (eg, one of the scale factors is 0), every cell of the result is NaN
    ///
    pub fn get_inverted_matrix(&self) -> Matrix {
        self.get_matrix().inverted_or_nan()
    }

    ///
    /// The matrix that undoes this transformation, or an error if there isn't one
    ///
    pub fn try_inverted_matrix(&self) -> Result<Matrix, TransformError> {
        let matrix = self.get_matrix();

        matrix.invert()
            .ok_or_else(|| {
                debug!("Transformation {:?} cannot be inverted", self);
                TransformError::SingularMatrix
            })
    }

    ///
    /// The transformation that undoes this one (not valid if this transformation can't be reversed)
    ///
    pub fn get_back_transformation(&self) -> Transformation {
        Transformation::from_matrix(&self.get_inverted_matrix())
    }

    ///
    /// The transformation that undoes this one, or an error if there isn't one
    ///
    pub fn try_back_transformation(&self) -> Result<Transformation, TransformError> {
        let inverted = self.try_inverted_matrix()?;

        Ok(Transformation::from_matrix(&inverted))
    }

    ///
    /// Finds the bounding box of a rectangle after it has been transformed by a matrix
    ///
    /// Unless the matrix keeps the rectangle axis-aligned, the result is larger than the transformed shape.
    ///
    pub fn transform_bounds_by(matrix: &Matrix, bounds: &Rect) -> Rect {
        let mut transformed_bounds = Rect::from_point(matrix.get_transformed(&Vector::new(bounds.minx, bounds.miny), true));

        transformed_bounds.expand(matrix.get_transformed(&Vector::new(bounds.minx, bounds.maxy), true));
        transformed_bounds.expand(matrix.get_transformed(&Vector::new(bounds.maxx, bounds.miny), true));
        transformed_bounds.expand(matrix.get_transformed(&Vector::new(bounds.maxx, bounds.maxy), true));

        transformed_bounds
    }

    ///
    /// Transforms a point (`translate` = true) or a direction (`translate` = false)
    ///
    #[inline]
    pub fn transform(&self, v: &Vector, translate: bool) -> Vector {
        self.get_matrix().get_transformed(v, translate)
    }

    ///
    /// Transforms a point, including the offset
    ///
    #[inline]
    pub fn transform_point(&self, point: &Vector) -> Vector {
        self.transform(point, true)
    }

    ///
    /// Transforms a direction, ignoring the offset
    ///
    #[inline]
    pub fn transform_direction(&self, direction: &Vector) -> Vector {
        self.transform(direction, false)
    }

    ///
    /// Combines another transformation with this one: the result applies `transformation` first and then this one
    ///
    pub fn transform_transformation(&self, transformation: &Transformation) -> Transformation {
        Transformation::from_matrix(&(transformation.get_matrix() * self.get_matrix()))
    }

    ///
    /// The bounding box of a rectangle after it has been moved by this transformation
    ///
    pub fn transform_bounds(&self, bounds: &Rect) -> Rect {
        Self::transform_bounds_by(&self.get_matrix(), bounds)
    }

    ///
    /// Reverses this transformation for a point (`translate` = true) or a direction (`translate` = false)
    ///
    #[inline]
    pub fn back_transform(&self, v: &Vector, translate: bool) -> Vector {
        self.get_inverted_matrix().get_transformed(v, translate)
    }

    ///
    /// Reverses this transformation for a point
    ///
    #[inline]
    pub fn back_transform_point(&self, point: &Vector) -> Vector {
        self.back_transform(point, true)
    }

    ///
    /// Reverses this transformation for a direction
    ///
    #[inline]
    pub fn back_transform_direction(&self, direction: &Vector) -> Vector {
        self.back_transform(direction, false)
    }

    ///
    /// Applies `transformation` and then the reverse of this transformation
    ///
    pub fn back_transform_transformation(&self, transformation: &Transformation) -> Transformation {
        Transformation::from_matrix(&(transformation.get_matrix() * self.get_inverted_matrix()))
    }

    ///
    /// The bounding box of a rectangle after the reverse of this transformation is applied to it
    ///
    pub fn back_transform_bounds(&self, bounds: &Rect) -> Rect {
        Self::transform_bounds_by(&self.get_inverted_matrix(), bounds)
    }
}

impl From<Matrix> for Transformation {
    fn from(matrix: Matrix) -> Transformation {
        Transformation::from_matrix(&matrix)
    }
}

impl From<Transformation> for Matrix {
    fn from(transformation: Transformation) -> Matrix {
        transformation.get_matrix()
    }
}
