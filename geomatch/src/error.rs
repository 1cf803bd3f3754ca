//! Error types used by the crate.

use geomatch_types::GeometryError;
use thiserror::Error;

/// Error of building or evaluating a correspondence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchingError {
    /// Geometric computation failed, e.g. curvilinear abscissa lookup on a zero length line.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// A correspondence needs at least one sub-line on each side.
    #[error("set of sub-lines is empty")]
    EmptyLineSet,
    /// A sub-line has less than 2 vertices.
    #[error("sub-line {index} has less than 2 vertices")]
    DegenerateSubLine {
        /// Index of the sub-line in its set.
        index: usize,
    },
    /// Merge tolerance of the configuration is negative, NaN or infinite.
    #[error("merge tolerance must be a finite non-negative distance, got {0}")]
    InvalidMergeTolerance(f64),
    /// Morph interpolation factor is outside of `[0, 1]`.
    #[error("interpolation factor must be in [0, 1], got {0}")]
    InvalidInterpolationFactor(f64),
}
