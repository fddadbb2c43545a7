//! # Gridmap
//!
//! Spatial utilities for entities on a bounded 2-D integer grid.
//!
//! Gridmap answers "where are things relative to each other":
//!
//! - **Normalization**: clamp coordinates into the map, find its centre and corners
//! - **Distance**: centre-to-centre, or edge-to-edge for entities with a radius
//! - **Bearings**: whole-degree directions from due east, a 16-point compass rose,
//!   and projection of a point along a bearing
//! - **Nearest neighbours**: the closest entity, or the closest `n`
//! - **Collections**: insertion-ordered keyed storage with attribute filters
//!
//! Everything is synchronous and in-memory. A [`SpatialMap`] is an immutable
//! value, so any number of maps with different bounds can coexist.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridmap::{Collection, Point, SpatialMap};
//!
//! let map = SpatialMap::with_bounds(100, 100);
//!
//! let points: Collection<Point> = [Point::new(10, 10), Point::new(90, 15), Point::new(60, 70)]
//!     .into_iter()
//!     .collect();
//!
//! let nearest = map.nearest(&map.center(), &points)?;
//! assert_eq!(*nearest, Point::new(60, 70));
//!
//! let bearing = map.direction(&map.center(), nearest);
//! assert_eq!(bearing, 63);
//!
//! let east_side = points.filter("x", ">", 50)?;
//! assert_eq!(east_side.count(), 2);
//! # Ok::<(), gridmap::GridError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute;
pub mod collection;
pub mod compass;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod map;
pub mod point;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use attribute::{AttributeValue, Comparator, Filterable};
pub use collection::Collection;
pub use compass::{rose_to_degrees, CompassPoint};
pub use entity::{Identified, Positioned};
pub use error::{GridError, Result};
pub use map::{Heading, MapConfig, SpatialMap};
pub use point::Point;

/// Inclusive grid extent. The lower bound is always `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MapBounds {
    /// Largest valid x coordinate
    pub max_x: i64,
    /// Largest valid y coordinate
    pub max_y: i64,
}

impl MapBounds {
    /// Create bounds from the inclusive maxima.
    #[must_use]
    pub const fn new(max_x: i64, max_y: i64) -> Self {
        Self { max_x, max_y }
    }

    /// Clamp an x coordinate to `[0, max_x]`.
    ///
    /// The lower bound is applied first, so a negative `max_x` wins.
    #[must_use]
    pub const fn clamp_x(&self, x: i64) -> i64 {
        clamp_axis(x, self.max_x)
    }

    /// Clamp a y coordinate to `[0, max_y]`.
    #[must_use]
    pub const fn clamp_y(&self, y: i64) -> i64 {
        clamp_axis(y, self.max_y)
    }

    /// Clamp both coordinates of a point.
    #[must_use]
    pub const fn clamp(&self, point: Point) -> Point {
        Point::new(self.clamp_x(point.x), self.clamp_y(point.y))
    }

    /// Check if a point is inside the bounds.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.x <= self.max_x && point.y >= 0 && point.y <= self.max_y
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::new(100, 100)
    }
}

const fn clamp_axis(v: i64, max: i64) -> i64 {
    let v = if v < 0 { 0 } else { v };
    if v > max {
        max
    } else {
        v
    }
}

#[cfg(test)]
mod bounds_tests {
    use super::*;

    #[test]
    fn test_bounds_clamp() {
        let bounds = MapBounds::new(10, 20);
        assert_eq!(bounds.clamp_x(-1), 0);
        assert_eq!(bounds.clamp_x(11), 10);
        assert_eq!(bounds.clamp_y(15), 15);
        assert_eq!(bounds.clamp(Point::new(30, -30)), Point::new(10, 0));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = MapBounds::new(10, 10);
        assert!(bounds.contains(Point::new(0, 0)));
        assert!(bounds.contains(Point::new(10, 10)));
        assert!(!bounds.contains(Point::new(11, 5)));
        assert!(!bounds.contains(Point::new(5, -1)));
    }

    #[test]
    fn test_negative_max_wins() {
        let bounds = MapBounds::new(-5, -5);
        assert_eq!(bounds.clamp_x(3), -5);
    }
}
