//! Spatial map: geometric queries over a bounded grid.
//!
//! A [`SpatialMap`] is an immutable value holding the grid bounds. Every
//! query is a pure function of its arguments and those bounds; building a
//! second map never changes the behaviour of the first.
//!
//! # Example
//!
//! ```
//! use gridmap::{MapConfig, Point, SpatialMap};
//!
//! let map = SpatialMap::new(MapConfig::with_bounds(100, 100));
//!
//! assert_eq!(map.center(), Point::new(50, 50));
//! assert_eq!(map.norm_x(140.0), 100);
//! assert_eq!(map.direction(&Point::new(0, 0), &Point::new(100, 0)), 0);
//!
//! let east = map.point_in_direction(&map.center(), "E", 10.0)?;
//! assert_eq!(east, Point::new(60, 50));
//! # Ok::<(), gridmap::GridError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::compass::{rose_to_degrees, CompassPoint};
use crate::entity::{Identified, Positioned};
use crate::error::{GridError, Result};
use crate::geometry;
use crate::point::Point;
use crate::MapBounds;

/// Configuration for a [`SpatialMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Grid extent, inclusive, from `(0, 0)`.
    pub bounds: MapBounds,
}

impl MapConfig {
    /// Create a new config with the given inclusive upper bounds.
    #[must_use]
    pub fn with_bounds(max_x: i64, max_y: i64) -> Self {
        Self {
            bounds: MapBounds::new(max_x, max_y),
        }
    }
}

/// A bearing for [`SpatialMap::point_in_direction`].
#[derive(Debug, Clone, PartialEq)]
pub enum Heading {
    /// Bearing in degrees.
    Degrees(f64),
    /// A compass rose point.
    Compass(CompassPoint),
    /// A compass rose label, resolved when the heading is used.
    Label(String),
}

impl Heading {
    /// Resolves the heading to degrees.
    ///
    /// Rose headings resolve to their whole-degree bearing.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownCompassLabel`] for an unrecognized label.
    #[allow(clippy::cast_precision_loss)]
    pub fn degrees(&self) -> Result<f64> {
        match self {
            Self::Degrees(d) => Ok(*d),
            Self::Compass(point) => Ok(point.bearing() as f64),
            Self::Label(label) => rose_to_degrees(label).map(|d| d as f64),
        }
    }
}

impl From<f64> for Heading {
    fn from(d: f64) -> Self {
        Self::Degrees(d)
    }
}

impl From<i64> for Heading {
    #[allow(clippy::cast_precision_loss)]
    fn from(d: i64) -> Self {
        Self::Degrees(d as f64)
    }
}

impl From<CompassPoint> for Heading {
    fn from(point: CompassPoint) -> Self {
        Self::Compass(point)
    }
}

impl From<&str> for Heading {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<String> for Heading {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// Geometric queries parameterized by a rectangular bound.
///
/// # Tie-breaking
///
/// Nearest-neighbour queries bucket candidates by their whole-unit
/// [`distance`](Self::distance). When two candidates land in the same
/// bucket the later one replaces the earlier, so ties resolve to the last
/// candidate seen and at most one candidate per distance can be returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialMap {
    bounds: MapBounds,
}

impl SpatialMap {
    /// Create a new map from its configuration.
    #[must_use]
    pub fn new(config: MapConfig) -> Self {
        Self {
            bounds: config.bounds,
        }
    }

    /// Create a new map with the given inclusive upper bounds.
    #[must_use]
    pub fn with_bounds(max_x: i64, max_y: i64) -> Self {
        Self::new(MapConfig::with_bounds(max_x, max_y))
    }

    /// Returns the map bounds.
    #[must_use]
    pub const fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Truncates `x` toward zero and clamps it to `[0, max_x]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn norm_x(&self, x: f64) -> i64 {
        self.bounds.clamp_x(x as i64)
    }

    /// Truncates `y` toward zero and clamps it to `[0, max_y]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn norm_y(&self, y: f64) -> i64 {
        self.bounds.clamp_y(y as i64)
    }

    /// Clamps an integer `x` to `[0, max_x]` with no float round trip.
    #[must_use]
    pub const fn norm_x_int(&self, x: i64) -> i64 {
        self.bounds.clamp_x(x)
    }

    /// Clamps an integer `y` to `[0, max_y]`.
    #[must_use]
    pub const fn norm_y_int(&self, y: i64) -> i64 {
        self.bounds.clamp_y(y)
    }

    /// Returns the centre of the grid, rounding half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn center(&self) -> Point {
        let half = |max: i64| (max as f64 / 2.0).round() as i64;
        Point::new(half(self.bounds.max_x), half(self.bounds.max_y))
    }

    /// Returns the four corners: `(0,0)`, `(max_x,0)`, `(0,max_y)`, `(max_x,max_y)`.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let MapBounds { max_x, max_y } = self.bounds;
        [
            Point::new(0, 0),
            Point::new(max_x, 0),
            Point::new(0, max_y),
            Point::new(max_x, max_y),
        ]
    }

    /// Returns the corner nearest `center`.
    #[must_use]
    pub fn nearest_corner<P: Positioned + ?Sized>(&self, center: &P) -> Point {
        Self::bucket_by_distance(center, self.corners())
            .into_values()
            .next()
            .unwrap_or(Point::ORIGIN)
    }

    /// Returns the object nearest `center`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyInput`] if `objects` yields nothing.
    pub fn nearest<'a, P, T, I>(&self, center: &P, objects: I) -> Result<&'a T>
    where
        P: Positioned + ?Sized,
        T: Positioned + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self::bucket_by_distance(center, objects)
            .into_iter()
            .next()
            .map(|(_, object)| object)
            .ok_or_else(|| {
                tracing::debug!("nearest called with no candidates");
                GridError::EmptyInput
            })
    }

    /// Returns up to `quantity` objects nearest `center`, in ascending
    /// distance order.
    ///
    /// See the type-level note on tie-breaking: only the last object seen at
    /// each whole-unit distance is eligible.
    #[must_use]
    pub fn nearest_objects<'a, P, T, I>(&self, center: &P, objects: I, quantity: usize) -> Collection<T>
    where
        P: Positioned + ?Sized,
        T: Positioned + Identified + Clone + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let buckets = Self::bucket_by_distance(center, objects);
        tracing::trace!(buckets = buckets.len(), quantity, "nearest objects");
        buckets
            .into_values()
            .take(quantity)
            .cloned()
            .collect()
    }

    /// Returns every object whose distance from `center` is at most
    /// `radius`, in input order.
    #[must_use]
    pub fn objects_in_radius<'a, P, T, I>(&self, center: &P, objects: I, radius: i64) -> Collection<T>
    where
        P: Positioned + ?Sized,
        T: Positioned + Identified + Clone + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        objects
            .into_iter()
            .filter(|object| self.distance(center, *object) <= radius)
            .cloned()
            .collect()
    }

    /// Distance in whole units, reduced by any radii. May be negative.
    #[must_use]
    pub fn distance<A, B>(&self, a: &A, b: &B) -> i64
    where
        A: Positioned + ?Sized,
        B: Positioned + ?Sized,
    {
        geometry::distance(a, b)
    }

    /// Untruncated form of [`distance`](Self::distance).
    #[must_use]
    pub fn exact_distance<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: Positioned + ?Sized,
        B: Positioned + ?Sized,
    {
        geometry::exact_distance(a, b)
    }

    /// Bearing from `start` toward `end` in whole degrees, `[0, 360)`.
    ///
    /// Zero is due east: the ray from `start` toward `(max_x, start.y)`.
    /// Bearings grow toward +y, so `(0, 100)` seen from the origin is 90.
    /// If `start` sits on the east edge the reference ray has zero length
    /// and the bearing is a quarter turn (90, or 270 when `end` is above).
    #[must_use]
    pub fn direction<A, B>(&self, start: &A, end: &B) -> i64
    where
        A: Positioned + ?Sized,
        B: Positioned + ?Sized,
    {
        let origin = Point::from(start.coordinates());
        let reference = Point::new(self.bounds.max_x, origin.y);
        let bearing = geometry::bearing_against(origin, reference, Point::from(end.coordinates()));
        tracing::trace!(%origin, bearing, "direction");
        bearing
    }

    /// The bearing opposite [`direction`](Self::direction).
    #[must_use]
    pub fn reverse_direction<A, B>(&self, start: &A, end: &B) -> i64
    where
        A: Positioned + ?Sized,
        B: Positioned + ?Sized,
    {
        geometry::reverse_bearing(self.direction(start, end))
    }

    /// Integer mean of the bearings from `start` to `end1` and to `end2`.
    ///
    /// The mean is arithmetic, not circular: bearings of 350 and 10
    /// average to 180.
    #[must_use]
    pub fn direction_between_points<S, A, B>(&self, start: &S, end1: &A, end2: &B) -> i64
    where
        S: Positioned + ?Sized,
        A: Positioned + ?Sized,
        B: Positioned + ?Sized,
    {
        geometry::mean_bearing(self.direction(start, end1), self.direction(start, end2))
    }

    /// Integer arithmetic mean of two bearings.
    #[must_use]
    pub fn direction_between_angles(&self, angle1: i64, angle2: i64) -> i64 {
        geometry::mean_bearing(angle1, angle2)
    }

    /// The point `distance` units from `center` along `heading`.
    ///
    /// Coordinates are truncated toward zero and are not clamped to the map.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownCompassLabel`] if `heading` is an
    /// unrecognized rose label.
    pub fn point_in_direction<P>(
        &self,
        center: &P,
        heading: impl Into<Heading>,
        distance: f64,
    ) -> Result<Point>
    where
        P: Positioned + ?Sized,
    {
        let degrees = heading.into().degrees()?;
        Ok(geometry::project(center, degrees, distance))
    }

    /// Buckets candidates by whole-unit distance; later candidates replace
    /// earlier ones in the same bucket.
    fn bucket_by_distance<P, T, I>(center: &P, objects: I) -> BTreeMap<i64, T>
    where
        P: Positioned + ?Sized,
        T: Positioned,
        I: IntoIterator<Item = T>,
    {
        let mut buckets = BTreeMap::new();
        for object in objects {
            buckets.insert(geometry::distance(center, &object), object);
        }
        buckets
    }
}
