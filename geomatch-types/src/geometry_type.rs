//! Geometry kinds of both models and the correspondence between them.
//!
//! These tables are used when only the kind of a geometry is known, e.g. when declaring the geometry kind of a
//! feature collection before any feature exists.

use serde::{Deserialize, Serialize};

/// Kind of a [`Geometry`](crate::geometry::Geometry) of the native model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeometryType {
    /// [`Point`](crate::geometry::Point)
    Point,
    /// [`LineString`](crate::geometry::LineString)
    LineString,
    /// [`Ring`](crate::geometry::Ring)
    Ring,
    /// [`Polygon`](crate::geometry::Polygon)
    Polygon,
    /// [`MultiPoint`](crate::geometry::MultiPoint)
    MultiPoint,
    /// [`MultiCurve`](crate::geometry::MultiCurve)
    MultiCurve,
    /// [`MultiSurface`](crate::geometry::MultiSurface)
    MultiSurface,
    /// [`Aggregate`](crate::geometry::Aggregate)
    Aggregate,
    /// [`Solid`](crate::geometry::Solid)
    Solid,
}

impl GeometryType {
    /// Name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Ring => "Ring",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiCurve => "MultiCurve",
            GeometryType::MultiSurface => "MultiSurface",
            GeometryType::Aggregate => "Aggregate",
            GeometryType::Solid => "Solid",
        }
    }

    /// Simple feature kind that geometries of this kind are converted into.
    ///
    /// Solids are converted into multi polygons, but a multi polygon does not describe a solid, so `Solid` has no
    /// corresponding kind here.
    pub fn sf_type(&self) -> Option<SfGeometryType> {
        Some(match self {
            GeometryType::Point => SfGeometryType::Point,
            GeometryType::LineString => SfGeometryType::LineString,
            GeometryType::Ring => SfGeometryType::LinearRing,
            GeometryType::Polygon => SfGeometryType::Polygon,
            GeometryType::MultiPoint => SfGeometryType::MultiPoint,
            GeometryType::MultiCurve => SfGeometryType::MultiLineString,
            GeometryType::MultiSurface => SfGeometryType::MultiPolygon,
            GeometryType::Aggregate => SfGeometryType::GeometryCollection,
            GeometryType::Solid => return None,
        })
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a simple feature geometry ([`SfGeometry`](crate::sf::SfGeometry)).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SfGeometryType {
    /// Point.
    Point,
    /// LineString.
    LineString,
    /// LinearRing.
    LinearRing,
    /// Polygon.
    Polygon,
    /// MultiPoint.
    MultiPoint,
    /// MultiLineString.
    MultiLineString,
    /// MultiPolygon.
    MultiPolygon,
    /// GeometryCollection.
    GeometryCollection,
}

impl SfGeometryType {
    /// Name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            SfGeometryType::Point => "Point",
            SfGeometryType::LineString => "LineString",
            SfGeometryType::LinearRing => "LinearRing",
            SfGeometryType::Polygon => "Polygon",
            SfGeometryType::MultiPoint => "MultiPoint",
            SfGeometryType::MultiLineString => "MultiLineString",
            SfGeometryType::MultiPolygon => "MultiPolygon",
            SfGeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Native kind that geometries of this kind are converted into.
    pub fn gm_type(&self) -> Option<GeometryType> {
        Some(match self {
            SfGeometryType::Point => GeometryType::Point,
            SfGeometryType::LineString => GeometryType::LineString,
            SfGeometryType::LinearRing => GeometryType::Ring,
            SfGeometryType::Polygon => GeometryType::Polygon,
            SfGeometryType::MultiPoint => GeometryType::MultiPoint,
            SfGeometryType::MultiLineString => GeometryType::MultiCurve,
            SfGeometryType::MultiPolygon => GeometryType::MultiSurface,
            SfGeometryType::GeometryCollection => GeometryType::Aggregate,
        })
    }
}

impl std::fmt::Display for SfGeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
