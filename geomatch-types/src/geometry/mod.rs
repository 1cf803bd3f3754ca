//! Native geometry model.
//!
//! The model follows the ISO 19107 / OGC spatial schema: a [`Ring`] is a closed curve that is a distinct type from
//! [`LineString`], a [`Polygon`] is bounded by rings, and [`Solid`] and [`Aggregate`] own their member geometries.
//! All types are plain values: cloning a geometry produces an independent copy of every position.
//!
//! Each geometry carries an optional coordinate reference system code ([`Crs`]). No reprojection is ever done by
//! this crate; the code is only carried along.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::geometry_type::GeometryType;

mod position;
pub use position::DirectPosition;

mod position_list;
pub use position_list::PositionList;

/// Integer code of a coordinate reference system (e.g. an EPSG code).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Crs(i32);

impl Crs {
    /// Creates a new CRS by its code.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Code of the CRS.
    pub fn code(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

/// Single position geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position of the point.
    pub position: DirectPosition,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

impl Point {
    /// Creates a new point without CRS.
    pub fn new(position: DirectPosition) -> Self {
        Self {
            position,
            crs: None,
        }
    }
}

/// Curve with linear interpolation between its vertices.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    /// Vertices of the line.
    pub positions: PositionList,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

impl LineString {
    /// Creates a new line without CRS.
    pub fn new(positions: impl Into<PositionList>) -> Self {
        Self {
            positions: positions.into(),
            crs: None,
        }
    }

    /// First vertex of the line.
    pub fn start_point(&self) -> Option<&DirectPosition> {
        self.positions.start_point()
    }

    /// Last vertex of the line.
    pub fn end_point(&self) -> Option<&DirectPosition> {
        self.positions.end_point()
    }

    /// Planar length of the line.
    pub fn length(&self) -> f64 {
        self.positions.length()
    }

    /// Number of vertices.
    pub fn num_points(&self) -> usize {
        self.positions.len()
    }
}

impl From<Vec<DirectPosition>> for LineString {
    fn from(value: Vec<DirectPosition>) -> Self {
        Self::new(value)
    }
}

/// Closed curve bounding a surface.
///
/// A ring stores the closing position explicitly: the last position equals the first one. The type does not enforce
/// this; conversion into the simple feature model checks it (see [`crate::adapter`]).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    /// Vertices of the ring, including the closing one.
    pub positions: PositionList,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

impl Ring {
    /// Creates a new ring without CRS.
    pub fn new(positions: impl Into<PositionList>) -> Self {
        Self {
            positions: positions.into(),
            crs: None,
        }
    }
}

impl From<LineString> for Ring {
    fn from(value: LineString) -> Self {
        Self {
            positions: value.positions,
            crs: value.crs,
        }
    }
}

/// Planar surface bounded by one exterior ring and any number of interior rings (holes).
///
/// A polygon without an exterior ring is the empty polygon.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Exterior boundary.
    pub exterior: Option<Ring>,
    /// Interior boundaries.
    pub interiors: Vec<Ring>,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

impl Polygon {
    /// Creates a new polygon without CRS.
    pub fn new(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior: Some(exterior),
            interiors,
            crs: None,
        }
    }

    /// Creates an empty polygon.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the polygon has no exterior ring or its exterior ring has no positions.
    pub fn is_empty(&self) -> bool {
        self.exterior
            .as_ref()
            .map_or(true, |ring| ring.positions.is_empty())
    }

    fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.exterior.iter().chain(self.interiors.iter())
    }
}

/// Set of points.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    /// Member points.
    pub points: Vec<Point>,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

/// Set of curves.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiCurve {
    /// Member curves.
    pub curves: Vec<LineString>,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

/// Set of surfaces.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSurface {
    /// Member surfaces.
    pub surfaces: Vec<Polygon>,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

/// Heterogeneous collection of geometries.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Member geometries.
    pub members: Vec<Geometry>,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

/// Volume described by its bounding faces.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    /// Ordered list of the faces bounding the solid.
    pub faces: Vec<Polygon>,
    /// Coordinate reference system.
    pub crs: Option<Crs>,
}

/// Any geometry of the native model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Point.
    Point(Point),
    /// Line string.
    LineString(LineString),
    /// Ring.
    Ring(Ring),
    /// Polygon.
    Polygon(Polygon),
    /// Multi point.
    MultiPoint(MultiPoint),
    /// Multi curve.
    MultiCurve(MultiCurve),
    /// Multi surface.
    MultiSurface(MultiSurface),
    /// Aggregate.
    Aggregate(Aggregate),
    /// Solid.
    Solid(Solid),
}

macro_rules! dispatch {
    ($geom:expr, $v:ident => $body:expr) => {
        match $geom {
            Geometry::Point($v) => $body,
            Geometry::LineString($v) => $body,
            Geometry::Ring($v) => $body,
            Geometry::Polygon($v) => $body,
            Geometry::MultiPoint($v) => $body,
            Geometry::MultiCurve($v) => $body,
            Geometry::MultiSurface($v) => $body,
            Geometry::Aggregate($v) => $body,
            Geometry::Solid($v) => $body,
        }
    };
}

impl Geometry {
    /// Kind of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Ring(_) => GeometryType::Ring,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiCurve(_) => GeometryType::MultiCurve,
            Geometry::MultiSurface(_) => GeometryType::MultiSurface,
            Geometry::Aggregate(_) => GeometryType::Aggregate,
            Geometry::Solid(_) => GeometryType::Solid,
        }
    }

    /// Coordinate reference system of the geometry.
    pub fn crs(&self) -> Option<Crs> {
        dispatch!(self, v => v.crs)
    }

    /// Sets the coordinate reference system of the geometry. Members of collections keep their own CRS.
    pub fn with_crs(mut self, crs: Option<Crs>) -> Self {
        dispatch!(&mut self, v => v.crs = crs);
        self
    }

    /// Whether the geometry has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.num_positions() == 0
    }

    /// Total number of positions in the geometry, including closing positions of rings.
    pub fn num_positions(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(v) => v.positions.len(),
            Geometry::Ring(v) => v.positions.len(),
            Geometry::Polygon(v) => polygon_positions(v),
            Geometry::MultiPoint(v) => v.points.len(),
            Geometry::MultiCurve(v) => v.curves.iter().map(|c| c.positions.len()).sum(),
            Geometry::MultiSurface(v) => v.surfaces.iter().map(polygon_positions).sum(),
            Geometry::Aggregate(v) => v.members.iter().map(Geometry::num_positions).sum(),
            Geometry::Solid(v) => v.faces.iter().map(polygon_positions).sum(),
        }
    }

    /// Planar bounding box of the geometry, or `None` for empty geometries.
    pub fn envelope(&self) -> Option<Envelope> {
        match self {
            Geometry::Point(v) => Some(Envelope::from_position(&v.position)),
            Geometry::LineString(v) => v.positions.envelope(),
            Geometry::Ring(v) => v.positions.envelope(),
            Geometry::Polygon(v) => polygon_envelope(v),
            Geometry::MultiPoint(v) => {
                Envelope::from_positions(v.points.iter().map(|p| &p.position))
            }
            Geometry::MultiCurve(v) => {
                Envelope::merge_all(v.curves.iter().filter_map(|c| c.positions.envelope()))
            }
            Geometry::MultiSurface(v) => {
                Envelope::merge_all(v.surfaces.iter().filter_map(polygon_envelope))
            }
            Geometry::Aggregate(v) => {
                Envelope::merge_all(v.members.iter().filter_map(Geometry::envelope))
            }
            Geometry::Solid(v) => Envelope::merge_all(v.faces.iter().filter_map(polygon_envelope)),
        }
    }

    /// Copy of the geometry with the z coordinate dropped from every position. See [`crate::adapter::reduce_to_2d`].
    pub fn to_2d(&self) -> Geometry {
        crate::adapter::reduce_to_2d(self)
    }
}

fn polygon_positions(polygon: &Polygon) -> usize {
    polygon.rings().map(|r| r.positions.len()).sum()
}

fn polygon_envelope(polygon: &Polygon) -> Option<Envelope> {
    polygon
        .exterior
        .as_ref()
        .and_then(|ring| ring.positions.envelope())
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Ring> for Geometry {
    fn from(value: Ring) -> Self {
        Self::Ring(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiCurve> for Geometry {
    fn from(value: MultiCurve) -> Self {
        Self::MultiCurve(value)
    }
}

impl From<MultiSurface> for Geometry {
    fn from(value: MultiSurface) -> Self {
        Self::MultiSurface(value)
    }
}

impl From<Aggregate> for Geometry {
    fn from(value: Aggregate) -> Self {
        Self::Aggregate(value)
    }
}

impl From<Solid> for Geometry {
    fn from(value: Solid) -> Self {
        Self::Solid(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Ring {
        Ring::new(vec![
            DirectPosition::new(0.0, 0.0),
            DirectPosition::new(size, 0.0),
            DirectPosition::new(size, size),
            DirectPosition::new(0.0, size),
            DirectPosition::new(0.0, 0.0),
        ])
    }

    #[test]
    fn num_positions_counts_closing_vertices() {
        let polygon = Polygon::new(square(4.0), vec![square(1.0)]);
        assert_eq!(Geometry::from(polygon.clone()).num_positions(), 10);

        let aggregate = Aggregate {
            members: vec![
                polygon.into(),
                Point::new(DirectPosition::new(1.0, 1.0)).into(),
            ],
            crs: None,
        };
        assert_eq!(Geometry::from(aggregate).num_positions(), 11);
    }

    #[test]
    fn empty_geometries() {
        assert!(Geometry::from(Polygon::empty()).is_empty());
        assert!(Polygon::empty().is_empty());
        assert!(Polygon::new(Ring::default(), vec![]).is_empty());
        assert!(Geometry::from(MultiCurve::default()).is_empty());
        assert!(!Geometry::from(Point::new(DirectPosition::default())).is_empty());
        assert_eq!(Geometry::from(Aggregate::default()).envelope(), None);
    }

    #[test]
    fn envelope_of_solid() {
        let solid = Solid {
            faces: vec![
                Polygon::new(square(1.0), vec![]),
                Polygon::new(
                    Ring::new(vec![
                        DirectPosition::new_3d(-1.0, 0.0, 5.0),
                        DirectPosition::new_3d(0.0, 3.0, 5.0),
                        DirectPosition::new_3d(0.0, 0.0, 5.0),
                        DirectPosition::new_3d(-1.0, 0.0, 5.0),
                    ]),
                    vec![],
                ),
            ],
            crs: None,
        };
        assert_eq!(
            Geometry::from(solid).envelope(),
            Some(Envelope::new(-1.0, 0.0, 1.0, 3.0))
        );
    }

    #[test]
    fn crs_is_carried() {
        let geom = Geometry::from(LineString::new(vec![DirectPosition::new(0.0, 0.0)]))
            .with_crs(Some(Crs::new(2154)));
        assert_eq!(geom.crs(), Some(Crs::new(2154)));
        assert_eq!(geom.crs().unwrap().to_string(), "EPSG:2154");
        assert_eq!(geom.geometry_type(), GeometryType::LineString);
    }

    #[test]
    fn serde_round_trip() {
        let geom = Geometry::from(Polygon::new(square(2.0), vec![]));
        let json = serde_json::to_string(&geom).unwrap();
        assert_eq!(serde_json::from_str::<Geometry>(&json).unwrap(), geom);
    }
}
