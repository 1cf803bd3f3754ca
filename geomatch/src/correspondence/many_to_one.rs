use geomatch_types::geometry::{LineString, PositionList};

use super::sub_lines::{check_line, SubLines};
use super::{CorrespondenceType, MatchedFeature, SubLineCorrespondence};
use crate::config::CorrespondenceConfig;
use crate::error::MatchingError;

/// Several consecutive initial sub-lines that collapse into one final line.
#[derive(Debug, Clone, PartialEq)]
pub struct ManyToOneCorrespondence {
    initial: SubLines,
    final_line: LineString,
}

impl ManyToOneCorrespondence {
    /// Creates a new correspondence with the default configuration.
    ///
    /// The initial sub-lines must be given in order along the line, each one starting where the previous one ends.
    pub fn new(final_line: LineString, initial_lines: Vec<LineString>) -> Result<Self, MatchingError> {
        Self::new_with_config(final_line, initial_lines, &CorrespondenceConfig::default())
    }

    /// Creates a new correspondence.
    pub fn new_with_config(
        final_line: LineString,
        initial_lines: Vec<LineString>,
        config: &CorrespondenceConfig,
    ) -> Result<Self, MatchingError> {
        check_line(&final_line)?;
        let initial = SubLines::new(initial_lines, config)?;

        Ok(Self {
            initial,
            final_line,
        })
    }

    /// Initial sub-lines, in order.
    pub fn initial_lines(&self) -> &[LineString] {
        self.initial.lines()
    }

    /// Final line.
    pub fn final_line_string(&self) -> &LineString {
        &self.final_line
    }
}

impl SubLineCorrespondence for ManyToOneCorrespondence {
    fn correspondence_type(&self) -> CorrespondenceType {
        CorrespondenceType::ManyToOne
    }

    fn matched_features_initial(&self) -> Vec<MatchedFeature<'_>> {
        self.initial.features()
    }

    fn matched_features_final(&self) -> Vec<MatchedFeature<'_>> {
        vec![MatchedFeature::Line(&self.final_line)]
    }

    fn initial_line(&self) -> &PositionList {
        self.initial.compiled()
    }

    fn final_line(&self) -> &PositionList {
        &self.final_line.positions
    }
}
