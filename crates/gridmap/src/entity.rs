//! Capability traits an entity implements to take part in spatial queries.
//!
//! - [`Positioned`]: exposes a 2-D coordinate pair, and optionally a radius
//! - [`Identified`]: exposes a unique key, required for [`Collection`] storage
//!
//! The radial capability is checked per object rather than declared on the
//! type: an entity whose [`Positioned::radius`] returns `Some` is measured
//! edge-to-edge, everything else centre-to-centre.
//!
//! # Example
//!
//! ```
//! use gridmap::entity::{Identified, Positioned};
//!
//! struct Buoy {
//!     id: u32,
//!     x: i64,
//!     y: i64,
//!     radius: f64,
//! }
//!
//! impl Positioned for Buoy {
//!     fn coordinates(&self) -> (i64, i64) {
//!         (self.x, self.y)
//!     }
//!
//!     fn radius(&self) -> Option<f64> {
//!         Some(self.radius)
//!     }
//! }
//!
//! impl Identified for Buoy {
//!     type Key = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! let buoy = Buoy { id: 7, x: 10, y: 20, radius: 2.5 };
//! assert_eq!(buoy.coordinates(), (10, 20));
//! assert_eq!(buoy.radius(), Some(2.5));
//! ```
//!
//! [`Collection`]: crate::collection::Collection

use std::fmt::Debug;
use std::hash::Hash;

/// An entity with a position on the grid.
pub trait Positioned {
    /// Returns the entity's `(x, y)` grid coordinates.
    fn coordinates(&self) -> (i64, i64);

    /// Returns the entity's radius, if it has one.
    ///
    /// Distances involving an entity with a radius are reduced by that
    /// radius, so two overlapping circles report a negative distance.
    fn radius(&self) -> Option<f64> {
        None
    }
}

/// An entity with a unique identity key.
pub trait Identified {
    /// The key type. Keys must be unique within a collection.
    type Key: Clone + Eq + Hash + Debug;

    /// Returns this entity's key.
    fn id(&self) -> Self::Key;
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn coordinates(&self) -> (i64, i64) {
        (**self).coordinates()
    }

    fn radius(&self) -> Option<f64> {
        (**self).radius()
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    type Key = T::Key;

    fn id(&self) -> Self::Key {
        (**self).id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    impl Positioned for Marker {
        fn coordinates(&self) -> (i64, i64) {
            (1, 2)
        }
    }

    #[test]
    fn radius_defaults_to_none() {
        assert_eq!(Marker.radius(), None);
    }

    #[test]
    fn references_forward_capabilities() {
        let marker = Marker;
        let by_ref = &marker;
        assert_eq!(by_ref.coordinates(), (1, 2));
        assert_eq!(by_ref.radius(), None);
    }
}
