//! Sixteen-point compass rose.
//!
//! Labels are assigned bearings in 22.5-degree steps starting from `E` at
//! zero and turning the same way as [`SpatialMap::direction`], so `S` is 90
//! and `N` is 270 on the grid.
//!
//! [`SpatialMap::direction`]: crate::SpatialMap::direction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Degrees between adjacent rose points.
pub const ROSE_STEP: f64 = 360.0 / 16.0;

/// A named point of the compass rose.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum CompassPoint {
    /// East, 0 degrees
    E,
    /// East-south-east
    ESE,
    /// South-east
    SE,
    /// South-south-east
    SSE,
    /// South, 90 degrees
    S,
    /// South-south-west
    SSW,
    /// South-west
    SW,
    /// West-south-west
    WSW,
    /// West, 180 degrees
    W,
    /// West-north-west
    WNW,
    /// North-west
    NW,
    /// North-north-west
    NNW,
    /// North, 270 degrees
    N,
    /// North-north-east
    NNE,
    /// North-east
    NE,
    /// East-north-east
    ENE,
}

impl CompassPoint {
    /// All rose points in bearing order.
    pub const ALL: [Self; 16] = [
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
    ];

    /// Returns the position of this point in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the textual label, e.g. `"NNE"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
        }
    }

    /// Returns the exact bearing, a multiple of [`ROSE_STEP`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn degrees(self) -> f64 {
        self.index() as f64 * ROSE_STEP
    }

    /// Returns the bearing truncated to whole degrees (`SSE` is 67).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn bearing(self) -> i64 {
        self.degrees() as i64
    }
}

impl FromStr for CompassPoint {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| GridError::UnknownCompassLabel {
                label: s.to_owned(),
            })
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Looks up the whole-degree bearing of a rose label.
///
/// # Errors
///
/// Returns [`GridError::UnknownCompassLabel`] if `label` is not one of the
/// sixteen names. Labels are case-sensitive.
///
/// # Example
///
/// ```
/// use gridmap::compass::rose_to_degrees;
///
/// assert_eq!(rose_to_degrees("E")?, 0);
/// assert_eq!(rose_to_degrees("ESE")?, 22);
/// assert_eq!(rose_to_degrees("N")?, 270);
/// assert!(rose_to_degrees("X").is_err());
/// # Ok::<(), gridmap::GridError>(())
/// ```
pub fn rose_to_degrees(label: &str) -> Result<i64> {
    label
        .parse::<CompassPoint>()
        .map(CompassPoint::bearing)
        .inspect_err(|_| tracing::debug!(label, "unknown compass label"))
}
