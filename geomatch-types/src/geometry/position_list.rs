use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::GeometryError;
use crate::geometry::DirectPosition;

/// Ordered sequence of positions: the vertices of a polyline.
///
/// The order of the positions is significant. A list that represents a ring repeats the first position at the end.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionList(Vec<DirectPosition>);

impl std::ops::Deref for PositionList {
    type Target = [DirectPosition];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PositionList {
    /// Creates a new list from the given positions.
    pub fn new(positions: Vec<DirectPosition>) -> Self {
        Self(positions)
    }

    /// Appends a position to the end of the list.
    pub fn push(&mut self, position: DirectPosition) {
        self.0.push(position);
    }

    /// First position of the list.
    pub fn start_point(&self) -> Option<&DirectPosition> {
        self.0.first()
    }

    /// Last position of the list.
    pub fn end_point(&self) -> Option<&DirectPosition> {
        self.0.last()
    }

    /// Whether the list has at least 2 positions and its first and last positions have the same x and y.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if self.0.len() > 1 => first.equals_2d(last),
            _ => false,
        }
    }

    /// Planar length of the polyline.
    pub fn length(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].distance_2d(&w[1])).sum()
    }

    /// Returns the point of the polyline at the given curvilinear abscissa, i.e. at the distance `abscissa` from
    /// the start point measured along the polyline.
    ///
    /// The abscissa is clamped to `[0, length]`, so values slightly out of range caused by rounding resolve to the
    /// end points. Fails with [`GeometryError::DegenerateLine`] if the polyline has no length.
    pub fn point_at_abscissa(&self, abscissa: f64) -> Result<DirectPosition, GeometryError> {
        let length = self.length();
        if self.0.len() < 2 || length <= 0.0 || !length.is_finite() {
            return Err(GeometryError::DegenerateLine);
        }

        let abscissa = if abscissa.is_nan() {
            0.0
        } else {
            abscissa.clamp(0.0, length)
        };

        let mut walked = 0.0;
        for w in self.0.windows(2) {
            let segment_length = w[0].distance_2d(&w[1]);
            if segment_length > 0.0 && walked + segment_length >= abscissa {
                let fraction = ((abscissa - walked) / segment_length).clamp(0.0, 1.0);
                return Ok(w[0].interpolate(&w[1], fraction));
            }

            walked += segment_length;
        }

        // Rounding of the running sum can leave `walked` just short of `length`.
        Ok(self.0[self.0.len() - 1])
    }

    /// Copy of the list with the order of the positions reversed.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Copy of the list with z coordinates dropped from every position.
    pub fn to_2d(&self) -> Self {
        Self(self.0.iter().map(DirectPosition::to_2d).collect())
    }

    /// Bounding box of the positions.
    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_positions(self.0.iter())
    }

    /// Consumes the list returning the underlying vector.
    pub fn into_inner(self) -> Vec<DirectPosition> {
        self.0
    }
}

impl From<Vec<DirectPosition>> for PositionList {
    fn from(value: Vec<DirectPosition>) -> Self {
        Self(value)
    }
}

impl FromIterator<DirectPosition> for PositionList {
    fn from_iter<T: IntoIterator<Item = DirectPosition>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<DirectPosition> for PositionList {
    fn extend<T: IntoIterator<Item = DirectPosition>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PositionList {
    type Item = DirectPosition;
    type IntoIter = std::vec::IntoIter<DirectPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PositionList {
    type Item = &'a DirectPosition;
    type IntoIter = std::slice::Iter<'a, DirectPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn list(coords: &[(f64, f64)]) -> PositionList {
        coords.iter().map(|&c| DirectPosition::from(c)).collect()
    }

    #[test]
    fn length() {
        assert_eq!(list(&[]).length(), 0.0);
        assert_eq!(list(&[(0.0, 0.0)]).length(), 0.0);
        assert_eq!(list(&[(0.0, 0.0), (3.0, 4.0), (3.0, 0.0)]).length(), 9.0);
    }

    #[test]
    fn is_closed() {
        assert!(!list(&[]).is_closed());
        assert!(!list(&[(1.0, 1.0)]).is_closed());
        assert!(list(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]).is_closed());
        assert!(!list(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).is_closed());
    }

    #[test]
    fn point_at_abscissa_interpolates_along_segments() {
        let line = list(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);

        assert_eq!(line.point_at_abscissa(0.0).unwrap(), DirectPosition::new(0.0, 0.0));
        assert_eq!(line.point_at_abscissa(1.0).unwrap(), DirectPosition::new(1.0, 0.0));
        assert_eq!(line.point_at_abscissa(2.0).unwrap(), DirectPosition::new(2.0, 0.0));
        assert_eq!(line.point_at_abscissa(3.5).unwrap(), DirectPosition::new(2.0, 1.5));
        assert_eq!(line.point_at_abscissa(4.0).unwrap(), DirectPosition::new(2.0, 2.0));
    }

    #[test]
    fn point_at_abscissa_clamps_out_of_range_values() {
        let line = list(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(line.point_at_abscissa(-0.1).unwrap(), DirectPosition::new(0.0, 0.0));
        assert_eq!(
            line.point_at_abscissa(1.0 + 1e-12).unwrap(),
            DirectPosition::new(1.0, 0.0)
        );
    }

    #[test]
    fn point_at_abscissa_skips_repeated_vertices() {
        let line = list(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_abs_diff_eq!(
            line.point_at_abscissa(1.5).unwrap(),
            DirectPosition::new(1.0, 0.5)
        );
    }

    #[test]
    fn point_at_abscissa_interpolates_z() {
        let line = PositionList::new(vec![
            DirectPosition::new_3d(0.0, 0.0, 0.0),
            DirectPosition::new_3d(4.0, 0.0, 8.0),
        ]);
        assert_eq!(
            line.point_at_abscissa(1.0).unwrap(),
            DirectPosition::new_3d(1.0, 0.0, 2.0)
        );
    }

    #[test]
    fn point_at_abscissa_on_degenerate_line() {
        assert_matches!(list(&[]).point_at_abscissa(0.0), Err(GeometryError::DegenerateLine));
        assert_matches!(
            list(&[(1.0, 1.0)]).point_at_abscissa(0.0),
            Err(GeometryError::DegenerateLine)
        );
        assert_matches!(
            list(&[(1.0, 1.0), (1.0, 1.0)]).point_at_abscissa(0.0),
            Err(GeometryError::DegenerateLine)
        );
    }

    #[test]
    fn reversed_and_2d() {
        let line = PositionList::new(vec![
            DirectPosition::new_3d(0.0, 0.0, 1.0),
            DirectPosition::new_3d(1.0, 2.0, 3.0),
        ]);
        assert_eq!(line.reversed().start_point(), Some(&DirectPosition::new_3d(1.0, 2.0, 3.0)));
        assert_eq!(line.to_2d(), list(&[(0.0, 0.0), (1.0, 2.0)]));
    }

    #[test]
    fn serializes_as_array() {
        let line = list(&[(0.0, 1.0)]);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"[{"x":0.0,"y":1.0}]"#);
        assert_eq!(serde_json::from_str::<PositionList>(&json).unwrap(), line);
    }
}
