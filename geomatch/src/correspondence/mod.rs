//! Correspondences between an initial linear feature and its final counterpart.
//!
//! A correspondence is built by a matching or generalisation process once per matched pair of features and never
//! changes after that. Both sides of a correspondence are reduced to a single vertex sequence (sub-lines of a side
//! are joined with [`compile_lines`](crate::compile::compile_lines)), and the two sequences are related by their
//! curvilinear abscissa: a vertex at the fraction `r` of the length of one line corresponds to the point at the
//! fraction `r` of the length of the other line.
//!
//! See [`SubLineCorrespondence`] for the operations available on all correspondences.

use geomatch_types::geometry::{DirectPosition, LineString, PositionList};
use serde::{Deserialize, Serialize};

use crate::error::MatchingError;

mod curvilinear;
mod many_to_many;
mod many_to_one;
mod one_to_many;
mod one_to_one;
mod sub_lines;

pub use curvilinear::{map_onto, LongerSide};
pub use many_to_many::ManyToManyCorrespondence;
pub use many_to_one::ManyToOneCorrespondence;
pub use one_to_many::OneToManyCorrespondence;
pub use one_to_one::OneToOneCorrespondence;

/// Matching pattern of a correspondence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CorrespondenceType {
    /// One initial line matches one final line.
    OneToOne,
    /// One initial line is split into several consecutive final sub-lines.
    OneToMany,
    /// Several consecutive initial sub-lines collapse into one final line.
    ManyToOne,
    /// Several initial sub-lines match several final sub-lines.
    ManyToMany,
}

impl std::fmt::Display for CorrespondenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CorrespondenceType::OneToOne => "1:1",
            CorrespondenceType::OneToMany => "1:n",
            CorrespondenceType::ManyToOne => "n:1",
            CorrespondenceType::ManyToMany => "n:m",
        };
        f.write_str(name)
    }
}

/// Feature taking part in a correspondence: a line or a break point between two sub-lines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MatchedFeature<'a> {
    /// End point of a sub-line.
    Point(&'a DirectPosition),
    /// Line or sub-line.
    Line(&'a LineString),
}

/// Two equal length lists of corresponding positions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VertexMatching {
    /// Positions on the initial line.
    pub initial_positions: PositionList,
    /// Positions on the final line, `final_positions[i]` corresponds to `initial_positions[i]`.
    pub final_positions: PositionList,
}

impl VertexMatching {
    /// Iterates over pairs of corresponding positions.
    pub fn pairs(&self) -> impl Iterator<Item = (&DirectPosition, &DirectPosition)> {
        self.initial_positions.iter().zip(self.final_positions.iter())
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.initial_positions.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.initial_positions.is_empty()
    }
}

/// Correspondence between an initial linear feature and a final one.
pub trait SubLineCorrespondence {
    /// Matching pattern of the correspondence.
    fn correspondence_type(&self) -> CorrespondenceType;

    /// Initial features of the correspondence.
    ///
    /// When the initial side consists of several sub-lines, the list is the start point of the first sub-line,
    /// followed by every sub-line and its end point, in order. This gives both the chain of sub-lines and the break
    /// points between them.
    fn matched_features_initial(&self) -> Vec<MatchedFeature<'_>>;

    /// Final features of the correspondence, with the same layout as
    /// [`matched_features_initial`](Self::matched_features_initial).
    fn matched_features_final(&self) -> Vec<MatchedFeature<'_>>;

    /// The initial side compiled into a single vertex sequence.
    fn initial_line(&self) -> &PositionList;

    /// The final side compiled into a single vertex sequence.
    fn final_line(&self) -> &PositionList;

    /// Intermediate line between the initial and the final lines.
    ///
    /// Every vertex of the initial line is moved towards its counterpart on the final line (the point at the same
    /// relative curvilinear abscissa) by the fraction `t` of the distance between them. The result always has the
    /// vertices of the initial line, in the same order, and is 2d.
    ///
    /// With `t = 0` the result is the initial line. With `t = 1` every vertex lies on the final line, but the result
    /// is **not** the vertex sequence of the final line: it is the initial line resampled onto the geometry of the
    /// final line, so it keeps the vertex count of the initial line and may cut the corners of the final line
    /// between two resampled vertices.
    ///
    /// Fails if `t` is outside of `[0, 1]` or one of the lines has zero length.
    fn morph(&self, t: f64) -> Result<PositionList, MatchingError> {
        if !(0.0..=1.0).contains(&t) {
            return Err(MatchingError::InvalidInterpolationFactor(t));
        }

        let initial = self.initial_line();
        let targets = map_onto(initial, self.final_line())?;
        log::trace!(
            "Morphing {} line with {} vertices at t = {t}",
            self.correspondence_type(),
            initial.len()
        );

        Ok(initial
            .iter()
            .zip(targets.iter())
            .map(|(p, q)| p.lerp_2d(q, t))
            .collect())
    }

    /// Appends pairs of corresponding positions of the two lines to `initial_out` and `final_out`.
    ///
    /// The line with more vertices (the final one on a tie) drives the pairing: each of its vertices is appended
    /// as is to its own output list, and the point at the same relative curvilinear abscissa on the other line is
    /// appended to the other list. The first vertex is skipped if its output list already contains it. Both lists
    /// grow by the same number of positions.
    ///
    /// Nothing is appended if the pairing fails.
    fn match_vertices(
        &self,
        initial_out: &mut PositionList,
        final_out: &mut PositionList,
    ) -> Result<(), MatchingError> {
        let side = curvilinear::match_lines(
            self.initial_line(),
            self.final_line(),
            initial_out,
            final_out,
        )?;
        log::trace!(
            "Matched vertices of {} correspondence, walking along the {side:?} line",
            self.correspondence_type()
        );

        Ok(())
    }

    /// Same as [`match_vertices`](Self::match_vertices), but into new lists.
    fn vertex_matching(&self) -> Result<VertexMatching, MatchingError> {
        let mut matching = VertexMatching::default();
        self.match_vertices(
            &mut matching.initial_positions,
            &mut matching.final_positions,
        )?;
        Ok(matching)
    }
}
