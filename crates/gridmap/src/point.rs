//! Integer grid coordinate.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeValue, Filterable};
use crate::entity::{Identified, Positioned};

/// An immutable integer 2-D coordinate.
///
/// A `Point` is not clamped to any map: coordinates are arbitrary integers,
/// and normalizing them is the job of [`SpatialMap`](crate::SpatialMap).
///
/// A point's identity is its value, so a [`Collection`](crate::Collection)
/// of points holds each distinct coordinate once.
///
/// # Example
///
/// ```
/// use gridmap::Point;
/// use gridmap::entity::Positioned;
///
/// let p = Point::new(3, -4);
/// assert_eq!(p.coordinates(), (3, -4));
/// assert_eq!(p.to_string(), "(3, -4)");
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate; grows "downward" in bearing terms.
    pub y: i64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Creates a point from fractional coordinates, truncating each toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(x as i64, y as i64)
    }

    /// Returns the point as a floating-point vector.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Positioned for Point {
    fn coordinates(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl Identified for Point {
    type Key = Point;

    fn id(&self) -> Point {
        *self
    }
}

impl Filterable for Point {
    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "x" => Some(self.x.into()),
            "y" => Some(self.y.into()),
            "coordinates" => Some(vec![self.x, self.y].into()),
            _ => None,
        }
    }
}
