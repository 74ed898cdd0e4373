use super::vector::*;

///
/// Smaller of two values, or NaN if either is NaN
///
#[inline]
fn min_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { f64::min(a, b) }
}

///
/// Larger of two values, or NaN if either is NaN
///
#[inline]
fn max_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { f64::max(a, b) }
}

///
/// Represents an axis-aligned rectangle
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64
}

impl Rect {
    ///
    /// Creates a rectangle with the two specified corners (in any order)
    ///
    pub fn new(p1: Vector, p2: Vector) -> Rect {
        Rect {
            minx: min_or_nan(p1.x, p2.x),
            miny: min_or_nan(p1.y, p2.y),
            maxx: max_or_nan(p1.x, p2.x),
            maxy: max_or_nan(p1.y, p2.y)
        }
    }

    ///
    /// Creates a zero-sized rectangle containing a single point
    ///
    #[inline]
    pub fn from_point(point: Vector) -> Rect {
        Rect {
            minx: point.x,
            miny: point.y,
            maxx: point.x,
            maxy: point.y
        }
    }

    ///
    /// Grows this rectangle so that it contains the specified point
    ///
    /// A NaN coordinate makes the matching bounds NaN, so the result fails `is_valid()`
    ///
    #[inline]
    pub fn expand(&mut self, point: Vector) {
        self.minx = min_or_nan(self.minx, point.x);
        self.miny = min_or_nan(self.miny, point.y);
        self.maxx = max_or_nan(self.maxx, point.x);
        self.maxy = max_or_nan(self.maxy, point.y);
    }

    ///
    /// Returns a copy of this rectangle grown to contain the specified point
    ///
    #[inline]
    pub fn expanded(mut self, point: Vector) -> Rect {
        self.expand(point);
        self
    }

    #[inline]
    pub fn min(&self) -> Vector {
        Vector::new(self.minx, self.miny)
    }

    #[inline]
    pub fn max(&self) -> Vector {
        Vector::new(self.maxx, self.maxy)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }

    pub fn is_valid(&self) -> bool {
        self.min().is_valid() && self.max().is_valid()
    }

    pub fn is_equal_to(&self, rhs: &Rect) -> bool {
        self.min().is_equal_to(&rhs.min()) && self.max().is_equal_to(&rhs.max())
    }
}
