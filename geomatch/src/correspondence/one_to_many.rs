use geomatch_types::geometry::{LineString, PositionList};

use super::sub_lines::{check_line, SubLines};
use super::{CorrespondenceType, MatchedFeature, SubLineCorrespondence};
use crate::config::CorrespondenceConfig;
use crate::error::MatchingError;

/// One initial line split into several consecutive final sub-lines.
#[derive(Debug, Clone, PartialEq)]
pub struct OneToManyCorrespondence {
    initial_line: LineString,
    final_: SubLines,
}

impl OneToManyCorrespondence {
    /// Creates a new correspondence with the default configuration.
    ///
    /// The final sub-lines must be given in order along the line, each one starting where the previous one ends.
    pub fn new(initial_line: LineString, final_lines: Vec<LineString>) -> Result<Self, MatchingError> {
        Self::new_with_config(initial_line, final_lines, &CorrespondenceConfig::default())
    }

    /// Creates a new correspondence.
    pub fn new_with_config(
        initial_line: LineString,
        final_lines: Vec<LineString>,
        config: &CorrespondenceConfig,
    ) -> Result<Self, MatchingError> {
        check_line(&initial_line)?;
        let final_ = SubLines::new(final_lines, config)?;

        Ok(Self {
            initial_line,
            final_,
        })
    }

    /// Initial line.
    pub fn initial_line_string(&self) -> &LineString {
        &self.initial_line
    }

    /// Final sub-lines, in order.
    pub fn final_lines(&self) -> &[LineString] {
        self.final_.lines()
    }
}

impl SubLineCorrespondence for OneToManyCorrespondence {
    fn correspondence_type(&self) -> CorrespondenceType {
        CorrespondenceType::OneToMany
    }

    fn matched_features_initial(&self) -> Vec<MatchedFeature<'_>> {
        vec![MatchedFeature::Line(&self.initial_line)]
    }

    fn matched_features_final(&self) -> Vec<MatchedFeature<'_>> {
        self.final_.features()
    }

    fn initial_line(&self) -> &PositionList {
        &self.initial_line.positions
    }

    fn final_line(&self) -> &PositionList {
        self.final_.compiled()
    }
}
