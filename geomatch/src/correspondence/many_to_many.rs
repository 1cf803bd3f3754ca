use geomatch_types::geometry::{LineString, PositionList};

use super::sub_lines::SubLines;
use super::{CorrespondenceType, MatchedFeature, SubLineCorrespondence};
use crate::config::CorrespondenceConfig;
use crate::error::MatchingError;

/// Several consecutive initial sub-lines matching several consecutive final sub-lines.
///
/// The break points of the two sides need not match: both sides are compiled into single lines and related by their
/// curvilinear abscissa as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct ManyToManyCorrespondence {
    initial: SubLines,
    final_: SubLines,
}

impl ManyToManyCorrespondence {
    /// Creates a new correspondence with the default configuration.
    pub fn new(
        initial_lines: Vec<LineString>,
        final_lines: Vec<LineString>,
    ) -> Result<Self, MatchingError> {
        Self::new_with_config(initial_lines, final_lines, &CorrespondenceConfig::default())
    }

    /// Creates a new correspondence.
    pub fn new_with_config(
        initial_lines: Vec<LineString>,
        final_lines: Vec<LineString>,
        config: &CorrespondenceConfig,
    ) -> Result<Self, MatchingError> {
        Ok(Self {
            initial: SubLines::new(initial_lines, config)?,
            final_: SubLines::new(final_lines, config)?,
        })
    }

    /// Initial sub-lines, in order.
    pub fn initial_lines(&self) -> &[LineString] {
        self.initial.lines()
    }

    /// Final sub-lines, in order.
    pub fn final_lines(&self) -> &[LineString] {
        self.final_.lines()
    }
}

impl SubLineCorrespondence for ManyToManyCorrespondence {
    fn correspondence_type(&self) -> CorrespondenceType {
        CorrespondenceType::ManyToMany
    }

    fn matched_features_initial(&self) -> Vec<MatchedFeature<'_>> {
        self.initial.features()
    }

    fn matched_features_final(&self) -> Vec<MatchedFeature<'_>> {
        self.final_.features()
    }

    fn initial_line(&self) -> &PositionList {
        self.initial.compiled()
    }

    fn final_line(&self) -> &PositionList {
        self.final_.compiled()
    }
}
