//! Bound-independent vector math.
//!
//! These functions need no map configuration. [`SpatialMap`] wraps them
//! with the bound-dependent pieces (the east reference ray for bearings),
//! and most callers go through the map.
//!
//! Bearings are whole degrees in `[0, 360)`, measured from due east and
//! increasing toward +y.
//!
//! [`SpatialMap`]: crate::SpatialMap

use glam::DVec2;

use crate::entity::Positioned;
use crate::point::Point;

/// Returns the coordinates of a positioned entity as a vector.
#[allow(clippy::cast_precision_loss)]
fn position<P: Positioned + ?Sized>(p: &P) -> DVec2 {
    let (x, y) = p.coordinates();
    DVec2::new(x as f64, y as f64)
}

/// Euclidean distance between the two entities, minus each one's radius.
///
/// The result is negative when radial entities overlap.
#[must_use]
pub fn exact_distance<A, B>(a: &A, b: &B) -> f64
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    let mut d = position(a).distance(position(b));
    if let Some(r) = a.radius() {
        d -= r;
    }
    if let Some(r) = b.radius() {
        d -= r;
    }
    d
}

/// [`exact_distance`] truncated toward zero to whole grid units.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn distance<A, B>(a: &A, b: &B) -> i64
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    exact_distance(a, b) as i64
}

/// Bearing of `target` from `origin`, measured against the ray from
/// `origin` through `reference`.
///
/// A zero-length vector on either side counts as a quarter turn. When the
/// target lies at a smaller `y` than the origin the angle is reflected, so
/// the result runs the full circle. A reflected angle of exactly zero
/// (a distant target just below the reference ray) wraps to 0, not 360.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn bearing_against(origin: Point, reference: Point, target: Point) -> i64 {
    let v1 = reference.as_dvec2() - origin.as_dvec2();
    let v2 = target.as_dvec2() - origin.as_dvec2();
    let modules = v1.length() * v2.length();
    let cos = if modules == 0.0 {
        0.0
    } else {
        (v1.dot(v2) / modules).clamp(-1.0, 1.0)
    };
    let mut angle = cos.acos().to_degrees();
    if target.y < origin.y {
        angle = 360.0 - angle;
    }
    (angle as i64).rem_euclid(360)
}

/// The opposite bearing.
#[must_use]
pub const fn reverse_bearing(bearing: i64) -> i64 {
    if bearing >= 180 {
        bearing - 180
    } else {
        bearing + 180
    }
}

/// Integer arithmetic mean of two bearings.
///
/// This is a plain mean, not a circular one: `mean_bearing(350, 10)` is 180.
/// The sum is taken in `i128`, so any two `i64` inputs are accepted.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mean_bearing(a: i64, b: i64) -> i64 {
    // the mean of two i64 values always fits back into i64
    ((i128::from(a) + i128::from(b)) / 2) as i64
}

/// The point `distance` units from `center` along `degrees`, with each
/// coordinate truncated toward zero.
#[must_use]
pub fn project<P: Positioned + ?Sized>(center: &P, degrees: f64, distance: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let target = position(center) + DVec2::new(cos, sin) * distance;
    Point::from_f64(target.x, target.y)
}
