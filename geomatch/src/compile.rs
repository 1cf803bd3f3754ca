//! Joining consecutive sub-lines into one line.

use geomatch_types::geometry::{LineString, PositionList};

/// Joins the sub-lines end to end into a single vertex sequence, in the given order.
///
/// The first vertex of each sub-line after the first one is dropped if it lies within `tolerance` of the last vertex
/// of the line compiled so far, so the junctions between consecutive sub-lines are not repeated. Sub-lines that do
/// not touch are joined as they are, by a straight segment. A negative or NaN `tolerance` is taken as `0`.
pub fn compile_lines(lines: &[LineString], tolerance: f64) -> PositionList {
    let tolerance = tolerance.max(0.0);
    let mut merged = PositionList::default();
    for (index, line) in lines.iter().enumerate() {
        let mut positions = line.positions.iter();
        if let (Some(last), Some(first)) = (merged.end_point(), line.start_point()) {
            if last.distance_2d(first) <= tolerance {
                positions.next();
            } else {
                log::debug!(
                    "Sub-line {index} does not start at the end of the previous one: {first:?} != {last:?}"
                );
            }
        }

        merged.extend(positions.copied());
    }

    merged
}
