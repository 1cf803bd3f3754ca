use geomatch_types::geometry::{LineString, PositionList};

use super::sub_lines::check_line;
use super::{CorrespondenceType, MatchedFeature, SubLineCorrespondence};
use crate::error::MatchingError;

/// One initial line matching one final line.
#[derive(Debug, Clone, PartialEq)]
pub struct OneToOneCorrespondence {
    initial_line: LineString,
    final_line: LineString,
}

impl OneToOneCorrespondence {
    /// Creates a new correspondence. Both lines must have at least 2 points.
    pub fn new(initial_line: LineString, final_line: LineString) -> Result<Self, MatchingError> {
        check_line(&initial_line)?;
        check_line(&final_line)?;

        Ok(Self {
            initial_line,
            final_line,
        })
    }

    /// Initial line.
    pub fn initial_line_string(&self) -> &LineString {
        &self.initial_line
    }

    /// Final line.
    pub fn final_line_string(&self) -> &LineString {
        &self.final_line
    }
}

impl SubLineCorrespondence for OneToOneCorrespondence {
    fn correspondence_type(&self) -> CorrespondenceType {
        CorrespondenceType::OneToOne
    }

    fn matched_features_initial(&self) -> Vec<MatchedFeature<'_>> {
        vec![MatchedFeature::Line(&self.initial_line)]
    }

    fn matched_features_final(&self) -> Vec<MatchedFeature<'_>> {
        vec![MatchedFeature::Line(&self.final_line)]
    }

    fn initial_line(&self) -> &PositionList {
        &self.initial_line.positions
    }

    fn final_line(&self) -> &PositionList {
        &self.final_line.positions
    }
}
