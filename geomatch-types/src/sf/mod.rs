//! Simple feature geometry model.
//!
//! This is the representation used to exchange geometries with the [`geo`](https://docs.rs/geo) ecosystem. Values
//! wrap [`geo_types`] geometries, adding the two things `geo-types` does not model: a spatial reference id and a
//! separate [`LinearRing`] kind.

use geo_types::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::error::GeometryError;
use crate::geometry_type::SfGeometryType;

mod linear_ring;
pub use linear_ring::LinearRing;

/// Spatial reference id meaning "unknown".
pub const UNKNOWN_SRID: i32 = 0;

/// Simple feature geometry with its spatial reference id.
///
/// `geo-types` values are planar, so the z coordinates are kept next to the value in [`SfGeometry::z`], one entry per
/// coordinate in the order the coordinates are written: the point itself; the coordinates of a line string or a
/// ring; the exterior ring of a polygon followed by its interior rings; the members of a multi geometry one after
/// another. An empty list means the geometry is planar. Members of a geometry collection carry their own z
/// coordinates, the list of the collection itself is always empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SfGeometry {
    /// Spatial reference id. [`UNKNOWN_SRID`] if not set.
    pub srid: i32,
    /// The geometry.
    pub value: SfValue,
    /// Z coordinates of the value, or an empty list for a planar geometry.
    pub z: Vec<Option<f64>>,
}

impl SfGeometry {
    /// Creates a new planar geometry with the given srid.
    pub fn new(value: impl Into<SfValue>, srid: i32) -> Self {
        Self {
            srid,
            value: value.into(),
            z: Vec::new(),
        }
    }

    /// Sets the z coordinates of the geometry.
    pub fn with_z(mut self, z: Vec<Option<f64>>) -> Self {
        self.z = z;
        self
    }

    /// Whether at least one coordinate has a z value.
    pub fn has_z(&self) -> bool {
        self.z.iter().any(Option::is_some)
    }

    /// Kind of the geometry.
    pub fn geometry_type(&self) -> SfGeometryType {
        self.value.geometry_type()
    }

    /// Converts the geometry into the `geo-types` representation, dropping the srid and the z coordinates. A linear
    /// ring becomes a line string.
    pub fn into_geo(self) -> geo_types::Geometry<f64> {
        match self.value {
            SfValue::Point(v) => v.into(),
            SfValue::LineString(v) => v.into(),
            SfValue::LinearRing(v) => v.into_inner().into(),
            SfValue::Polygon(v) => v.into(),
            SfValue::MultiPoint(v) => v.into(),
            SfValue::MultiLineString(v) => v.into(),
            SfValue::MultiPolygon(v) => v.into(),
            SfValue::GeometryCollection(v) => geo_types::Geometry::GeometryCollection(
                geo_types::GeometryCollection::new_from(
                    v.into_iter().map(SfGeometry::into_geo).collect(),
                ),
            ),
        }
    }

    /// Wraps a planar `geo-types` geometry. Members of collections get the same srid.
    ///
    /// Fails with [`GeometryError::UnsupportedGeometryType`] for `Line`, `Rect` and `Triangle`, which have no
    /// simple feature counterpart.
    pub fn from_geo(geom: geo_types::Geometry<f64>, srid: i32) -> Result<Self, GeometryError> {
        let value = match geom {
            geo_types::Geometry::Point(v) => SfValue::Point(v),
            geo_types::Geometry::LineString(v) => SfValue::LineString(v),
            geo_types::Geometry::Polygon(v) => SfValue::Polygon(v),
            geo_types::Geometry::MultiPoint(v) => SfValue::MultiPoint(v),
            geo_types::Geometry::MultiLineString(v) => SfValue::MultiLineString(v),
            geo_types::Geometry::MultiPolygon(v) => SfValue::MultiPolygon(v),
            geo_types::Geometry::GeometryCollection(v) => SfValue::GeometryCollection(
                v.0.into_iter()
                    .enumerate()
                    .map(|(index, g)| Self::from_geo(g, srid).map_err(|e| e.at_element(index)))
                    .collect::<Result<_, _>>()?,
            ),
            geo_types::Geometry::Line(_) => return Err(GeometryError::UnsupportedGeometryType("Line")),
            geo_types::Geometry::Rect(_) => return Err(GeometryError::UnsupportedGeometryType("Rect")),
            geo_types::Geometry::Triangle(_) => {
                return Err(GeometryError::UnsupportedGeometryType("Triangle"))
            }
        };

        Ok(Self::new(value, srid))
    }
}

/// Any simple feature geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum SfValue {
    /// Point.
    Point(Point<f64>),
    /// Line string.
    LineString(LineString<f64>),
    /// Linear ring.
    LinearRing(LinearRing),
    /// Polygon.
    Polygon(Polygon<f64>),
    /// Multi point.
    MultiPoint(MultiPoint<f64>),
    /// Multi line string.
    MultiLineString(MultiLineString<f64>),
    /// Multi polygon.
    MultiPolygon(MultiPolygon<f64>),
    /// Collection of geometries of any kinds.
    GeometryCollection(Vec<SfGeometry>),
}

impl SfValue {
    /// Kind of the geometry.
    pub fn geometry_type(&self) -> SfGeometryType {
        match self {
            SfValue::Point(_) => SfGeometryType::Point,
            SfValue::LineString(_) => SfGeometryType::LineString,
            SfValue::LinearRing(_) => SfGeometryType::LinearRing,
            SfValue::Polygon(_) => SfGeometryType::Polygon,
            SfValue::MultiPoint(_) => SfGeometryType::MultiPoint,
            SfValue::MultiLineString(_) => SfGeometryType::MultiLineString,
            SfValue::MultiPolygon(_) => SfGeometryType::MultiPolygon,
            SfValue::GeometryCollection(_) => SfGeometryType::GeometryCollection,
        }
    }
}

impl From<Point<f64>> for SfValue {
    fn from(value: Point<f64>) -> Self {
        Self::Point(value)
    }
}

impl From<LineString<f64>> for SfValue {
    fn from(value: LineString<f64>) -> Self {
        Self::LineString(value)
    }
}

impl From<LinearRing> for SfValue {
    fn from(value: LinearRing) -> Self {
        Self::LinearRing(value)
    }
}

impl From<Polygon<f64>> for SfValue {
    fn from(value: Polygon<f64>) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPoint<f64>> for SfValue {
    fn from(value: MultiPoint<f64>) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiLineString<f64>> for SfValue {
    fn from(value: MultiLineString<f64>) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<MultiPolygon<f64>> for SfValue {
    fn from(value: MultiPolygon<f64>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl TryFrom<geo_types::Geometry<f64>> for SfValue {
    type Error = GeometryError;

    /// Same as [`SfGeometry::from_geo`] with [`UNKNOWN_SRID`].
    fn try_from(value: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        SfGeometry::from_geo(value, UNKNOWN_SRID).map(|geom| geom.value)
    }
}
