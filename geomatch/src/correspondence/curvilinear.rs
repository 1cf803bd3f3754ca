use geomatch_types::geometry::{DirectPosition, PositionList};
use geomatch_types::GeometryError;

use crate::error::MatchingError;

/// Which of the two lines has more vertices and drives the vertex matching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LongerSide {
    /// The initial line has strictly more vertices.
    Initial,
    /// The final line has at least as many vertices as the initial one.
    Final,
}

impl LongerSide {
    /// Chooses the side with more vertices. The final line wins on a tie.
    pub fn resolve(initial: &PositionList, final_line: &PositionList) -> Self {
        if initial.len() > final_line.len() {
            Self::Initial
        } else {
            Self::Final
        }
    }
}

/// Maps every vertex of `source` to the point of `target` at the same relative curvilinear abscissa.
///
/// The returned list has one position per vertex of `source`. The first vertex always maps to the start point of
/// `target`. Fails with [`GeometryError::DegenerateLine`] if either line has zero length.
pub fn map_onto(
    source: &PositionList,
    target: &PositionList,
) -> Result<Vec<DirectPosition>, MatchingError> {
    let total = source.length();
    let total_target = target.length();
    if total <= 0.0 || total_target <= 0.0 {
        return Err(GeometryError::DegenerateLine.into());
    }

    let Some(target_start) = target.start_point() else {
        return Err(GeometryError::DegenerateLine.into());
    };

    let mut mapped = Vec::with_capacity(source.len());
    let mut dist = 0.0;
    let mut prev: Option<&DirectPosition> = None;
    for p in source.iter() {
        match prev {
            None => mapped.push(*target_start),
            Some(prev) => {
                dist += p.distance_2d(prev);
                let ratio = dist / total;
                mapped.push(target.point_at_abscissa(ratio * total_target)?);
            }
        }

        prev = Some(p);
    }

    Ok(mapped)
}

/// Pairs the vertices of the longer line with points of the shorter one, see
/// [`SubLineCorrespondence::match_vertices`](super::SubLineCorrespondence::match_vertices).
pub(crate) fn match_lines(
    initial: &PositionList,
    final_line: &PositionList,
    initial_out: &mut PositionList,
    final_out: &mut PositionList,
) -> Result<LongerSide, MatchingError> {
    let side = LongerSide::resolve(initial, final_line);
    match side {
        LongerSide::Initial => pair_vertices(initial, final_line, initial_out, final_out)?,
        LongerSide::Final => pair_vertices(final_line, initial, final_out, initial_out)?,
    }

    Ok(side)
}

fn pair_vertices(
    source: &PositionList,
    target: &PositionList,
    source_out: &mut PositionList,
    target_out: &mut PositionList,
) -> Result<(), MatchingError> {
    let mapped = map_onto(source, target)?;
    for (index, (p, q)) in source.iter().zip(mapped).enumerate() {
        if index == 0 && source_out.contains(p) {
            continue;
        }

        source_out.push(*p);
        target_out.push(q);
    }

    Ok(())
}
