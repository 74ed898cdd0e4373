use std::f64;
use std::ops::{Add, Sub, Neg, Mul};

///
/// Represents a rotation
///
/// Angles are stored in radians. They are not wrapped: `Angle::deg(270.0)` and `Angle::deg(-90.0)`
/// describe the same direction but are not equal. Use `normalized()` or `dist()` when the
/// wrapping matters.
///
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct Angle(pub f64);

impl Angle {
    /// An angle specified in radians
    #[inline]
    pub fn rad(radians: f64) -> Angle {
        Angle(radians)
    }

    /// An angle specified in degrees
    #[inline]
    pub fn deg(degrees: f64) -> Angle {
        Angle(degrees / 180.0 * f64::consts::PI)
    }

    /// An angle specified in gradians (400 to a full turn)
    #[inline]
    pub fn grad(gradians: f64) -> Angle {
        Angle(gradians / 200.0 * f64::consts::PI)
    }

    #[inline]
    pub fn zero() -> Angle {
        Angle(0.0)
    }

    #[inline]
    pub fn to_radians(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(&self) -> f64 {
        self.0 * 180.0 / f64::consts::PI
    }

    #[inline]
    pub fn to_gradians(&self) -> f64 {
        self.0 * 200.0 / f64::consts::PI
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        self.0.cos()
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    ///
    /// Returns the same direction as an angle in the range (-pi, pi]
    ///
    pub fn normalized(&self) -> Angle {
        let two_pi  = 2.0 * f64::consts::PI;
        let wrapped = self.0 - two_pi * (self.0 / two_pi).round();

        if wrapped <= -f64::consts::PI {
            Angle(wrapped + two_pi)
        } else {
            Angle(wrapped)
        }
    }

    ///
    /// The signed difference between this angle and another, taking the shortest way around
    ///
    pub fn dist(&self, other: Angle) -> Angle {
        (*self - other).normalized()
    }
}

impl Add<Angle> for Angle {
    type Output=Angle;

    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub<Angle> for Angle {
    type Output=Angle;

    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output=Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output=Angle;

    #[inline]
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}
