use geo_types::{Coord, LineString};

use crate::error::{GeometryError, RingDefect};

/// Closed line string that can bound a polygon.
///
/// `geo-types` has no separate ring type, so this wrapper carries the invariant: the ring is either empty, or has at
/// least 4 coordinates with the last one equal to the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing(LineString<f64>);

impl LinearRing {
    /// Minimum number of coordinates of a non-empty ring.
    pub const MIN_COORDS: usize = 4;

    /// Creates a ring from the line string, checking its closure and cardinality.
    pub fn try_new(line: LineString<f64>) -> Result<Self, GeometryError> {
        let coords = &line.0;
        if coords.is_empty() {
            return Ok(Self(line));
        }

        if coords.len() < Self::MIN_COORDS {
            return Err(GeometryError::DegenerateRing(RingDefect::TooFewPositions(
                coords.len(),
            )));
        }

        if coords[0] != coords[coords.len() - 1] {
            return Err(GeometryError::DegenerateRing(RingDefect::NotClosed));
        }

        Ok(Self(line))
    }

    /// Creates an empty ring.
    pub fn empty() -> Self {
        Self(LineString::new(vec![]))
    }

    /// Whether the ring has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0 .0.is_empty()
    }

    /// Coordinates of the ring, including the closing one.
    pub fn coords(&self) -> &[Coord<f64>] {
        &self.0 .0
    }

    /// The ring as a line string.
    pub fn as_line_string(&self) -> &LineString<f64> {
        &self.0
    }

    /// Consumes the ring returning the underlying line string.
    pub fn into_inner(self) -> LineString<f64> {
        self.0
    }
}
