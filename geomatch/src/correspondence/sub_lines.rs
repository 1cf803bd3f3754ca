use geomatch_types::geometry::{LineString, PositionList};

use super::MatchedFeature;
use crate::compile::compile_lines;
use crate::config::CorrespondenceConfig;
use crate::error::MatchingError;

/// Ordered set of consecutive sub-lines together with the line compiled from them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SubLines {
    lines: Vec<LineString>,
    compiled: PositionList,
}

impl SubLines {
    pub(crate) fn new(
        lines: Vec<LineString>,
        config: &CorrespondenceConfig,
    ) -> Result<Self, MatchingError> {
        config.validate()?;
        if lines.is_empty() {
            return Err(MatchingError::EmptyLineSet);
        }

        if let Some(index) = lines.iter().position(|line| line.num_points() < 2) {
            return Err(MatchingError::DegenerateSubLine { index });
        }

        let compiled = compile_lines(&lines, config.merge_tolerance);
        Ok(Self { lines, compiled })
    }

    pub(crate) fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub(crate) fn compiled(&self) -> &PositionList {
        &self.compiled
    }

    /// Start point of the first sub-line, then every sub-line followed by its end point.
    pub(crate) fn features(&self) -> Vec<MatchedFeature<'_>> {
        let mut features = Vec::with_capacity(self.lines.len() * 2 + 1);
        if let Some(start) = self.lines.first().and_then(LineString::start_point) {
            features.push(MatchedFeature::Point(start));
        }

        for line in &self.lines {
            features.push(MatchedFeature::Line(line));
            if let Some(end) = line.end_point() {
                features.push(MatchedFeature::Point(end));
            }
        }

        features
    }
}

/// Checks that a single line can be a side of a correspondence.
pub(crate) fn check_line(line: &LineString) -> Result<(), MatchingError> {
    if line.num_points() < 2 {
        return Err(MatchingError::DegenerateSubLine { index: 0 });
    }

    Ok(())
}
