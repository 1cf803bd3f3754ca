//! Error type used by the crate.

use thiserror::Error;

/// Reason a ring cannot be represented as a valid closed ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RingDefect {
    /// A non-empty ring needs at least 3 distinct vertices plus the closing one.
    TooFewPositions(usize),
    /// First and last positions of the ring differ.
    NotClosed,
}

impl std::fmt::Display for RingDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RingDefect::TooFewPositions(count) => {
                write!(f, "ring must have at least 4 positions, got {count}")
            }
            RingDefect::NotClosed => write!(f, "first and last positions of the ring differ"),
        }
    }
}

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Geometry kind has no counterpart in the target model.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(&'static str),
    /// Ring cannot be converted into a valid closed ring.
    #[error("degenerate ring: {0}")]
    DegenerateRing(RingDefect),
    /// Line has no length, so curvilinear abscissa cannot be computed along it.
    #[error("degenerate line: curvilinear abscissa is undefined on a zero length line")]
    DegenerateLine,
    /// One of the interior rings of a polygon failed to convert.
    #[error("interior ring {index} failed to convert: {source}")]
    InteriorRingConversionFailure {
        /// Index of the interior ring in the polygon.
        index: usize,
        /// The underlying failure.
        source: Box<GeometryError>,
    },
    /// One of the members of a collection (or one of the faces of a solid) failed to convert.
    #[error("element {index} failed to convert: {source}")]
    ElementConversionFailure {
        /// Index of the element in the collection.
        index: usize,
        /// The underlying failure.
        source: Box<GeometryError>,
    },
}

impl GeometryError {
    pub(crate) fn at_interior_ring(self, index: usize) -> Self {
        Self::InteriorRingConversionFailure {
            index,
            source: Box::new(self),
        }
    }

    pub(crate) fn at_element(self, index: usize) -> Self {
        Self::ElementConversionFailure {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping the interior ring and element wrappers.
    pub fn root_cause(&self) -> &GeometryError {
        match self {
            Self::InteriorRingConversionFailure { source, .. }
            | Self::ElementConversionFailure { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
