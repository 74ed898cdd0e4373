use super::angle::*;
use super::consts::*;

use std::ops::{Add, Sub, Neg, Mul, Index, IndexMut};

///
/// A 2D point or direction
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64
}

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64) -> Vector {
        Vector { x, y }
    }

    #[inline]
    pub fn zero() -> Vector {
        Vector { x: 0.0, y: 0.0 }
    }

    ///
    /// Creates a vector of the specified length pointing in the direction of an angle
    ///
    #[inline]
    pub fn from_polar(magnitude: f64, angle: Angle) -> Vector {
        Vector {
            x: magnitude * angle.cos(),
            y: magnitude * angle.sin()
        }
    }

    ///
    /// True if both components are finite
    ///
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    ///
    /// True if this vector is within a very small distance of another
    ///
    #[inline]
    pub fn is_equal_to(&self, rhs: &Vector) -> bool {
        (*self - *rhs).magnitude_squared() <= VECTOR_EPSILON
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn dot(&self, target: &Vector) -> f64 {
        self.x*target.x + self.y*target.y
    }

    ///
    /// This vector rotated a quarter turn anticlockwise
    ///
    #[inline]
    pub fn perpendicular(&self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    ///
    /// The direction this vector points in, measured anticlockwise from the x axis
    ///
    #[inline]
    pub fn angle(&self) -> Angle {
        Angle::rad(f64::atan2(self.y, self.x))
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Vector {
        Vector { x, y }
    }
}

impl Index<usize> for Vector {
    type Output=f64;

    fn index(&self, axis: usize) -> &f64 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector only has two components")
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector only has two components")
        }
    }
}

impl Add<Vector> for Vector {
    type Output=Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Vector {
    type Output=Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output=Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output=Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}
