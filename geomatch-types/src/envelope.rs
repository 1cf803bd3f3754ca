//! Axis aligned bounding box of a geometry.

use serde::{Deserialize, Serialize};

use crate::geometry::DirectPosition;

/// Planar bounding rectangle. Z coordinates are not taken into account.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Minimum x.
    pub x_min: f64,
    /// Minimum y.
    pub y_min: f64,
    /// Maximum x.
    pub x_max: f64,
    /// Maximum y.
    pub y_max: f64,
}

impl Envelope {
    /// Creates a new envelope.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Envelope of a single position.
    pub fn from_position(p: &DirectPosition) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Envelope of a set of positions, or `None` if the iterator is empty.
    pub fn from_positions<'a>(mut positions: impl Iterator<Item = &'a DirectPosition>) -> Option<Self> {
        let first = positions.next()?;
        Some(positions.fold(Self::from_position(first), |env, p| {
            env.merge(Self::from_position(p))
        }))
    }

    /// Smallest envelope containing both envelopes.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Merges all envelopes of the iterator, or returns `None` if it is empty.
    pub fn merge_all(envelopes: impl IntoIterator<Item = Envelope>) -> Option<Self> {
        envelopes.into_iter().reduce(|a, b| a.merge(b))
    }

    /// Width of the envelope.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the envelope.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether the position lies inside the envelope or on its border.
    pub fn contains(&self, p: &DirectPosition) -> bool {
        self.x_min <= p.x && self.x_max >= p.x && self.y_min <= p.y && self.y_max >= p.y
    }
}
