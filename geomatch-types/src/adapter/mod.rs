//! Conversion between the native geometry model ([`crate::geometry`]) and the simple feature model
//! ([`crate::sf`]).
//!
//! Conversions never share data with their input: every position is copied into the result, so either side can be
//! dropped after the conversion. No partial results are produced; the first failing member aborts the whole
//! conversion and the error tells which member failed (see [`GeometryError`]).
//!
//! `geo-types` coordinates are planar: z coordinates travel next to them in [`SfGeometry::z`], so a conversion into
//! the simple feature model and back keeps them. They are dropped only when a `geo-types` value is taken out of the
//! simple feature model ([`SfGeometry::into_geo`], [`to_geo`]).
//!
//! # Rings
//!
//! A [`Ring`](crate::geometry::Ring) converts into a [`LinearRing`](crate::sf::LinearRing) only if it has at least
//! 4 positions and is closed:
//! * a non-empty ring with 3 positions or less fails with [`GeometryError::DegenerateRing`];
//! * a ring with enough positions that is not closed converts into nothing ([`to_sf`] returns `Ok(None)`). It is
//!   not closed automatically. When such a ring is a part of a larger geometry (a polygon boundary or a collection
//!   member), the enclosing conversion fails instead.
//!
//! # Null and empty geometries
//!
//! Absent geometries are expressed with `Option` by the caller, e.g.
//! `geom.map(|g| to_sf(g)).transpose()`. Empty geometries convert into empty geometries of the corresponding kind.

use geo_types::Coord;

use crate::error::GeometryError;
use crate::geometry::{
    Aggregate, DirectPosition, Geometry, LineString, MultiCurve, MultiPoint, MultiSurface, Point,
    Polygon, PositionList, Ring, Solid,
};
use crate::sf::SfGeometry;

mod to_gm;
mod to_sf;

pub use to_gm::to_gm;
pub use to_sf::to_sf;

/// Converts a `geo-types` geometry into the native model.
///
/// Fails with [`GeometryError::UnsupportedGeometryType`] if the geometry (or any of its members) is a `Line`,
/// `Rect` or `Triangle`.
pub fn geo_to_gm(geom: geo_types::Geometry<f64>, srid: i32) -> Result<Geometry, GeometryError> {
    let sf = SfGeometry::from_geo(geom, srid)?;
    Ok(to_gm(&sf))
}

/// Converts a native geometry into a `geo-types` geometry, e.g. to run a `geo` algorithm on it.
///
/// Same as [`to_sf`] followed by [`SfGeometry::into_geo`], so z coordinates are dropped.
pub fn to_geo(geom: &Geometry) -> Result<Option<geo_types::Geometry<f64>>, GeometryError> {
    Ok(to_sf(geom)?.map(SfGeometry::into_geo))
}

/// Converts a position list into planar `geo-types` coordinates. Z coordinates are dropped.
pub fn coords_from_positions(positions: &PositionList) -> Vec<Coord<f64>> {
    positions
        .iter()
        .map(|p| Coord { x: p.x, y: p.y })
        .collect()
}

/// Converts planar `geo-types` coordinates into a position list.
///
/// If the first and the last coordinates are equal, the last position of the result is the copy of the first
/// converted position rather than a conversion of the last coordinate, so a closed coordinate run always gives a
/// position list whose first and last positions are identical.
pub fn positions_from_coords(coords: &[Coord<f64>]) -> PositionList {
    positions_with_z(coords, &mut std::iter::empty::<Option<f64>>())
}

/// Same as [`positions_from_coords`], taking the z coordinate of every position from `z`. Positions get no z once
/// `z` is exhausted.
pub(crate) fn positions_with_z(
    coords: &[Coord<f64>],
    z: &mut impl Iterator<Item = Option<f64>>,
) -> PositionList {
    let is_closed = coords.first() == coords.last();
    let mut positions: Vec<DirectPosition> = coords
        .iter()
        .map(|c| DirectPosition {
            x: c.x,
            y: c.y,
            z: z.next().flatten(),
        })
        .collect();

    let first = positions.first().copied();
    if let (true, Some(first), Some(last)) = (is_closed, first, positions.last_mut()) {
        *last = first;
    }

    positions.into()
}

/// Copies the geometry dropping the z coordinate of every position.
///
/// Never fails: the structure of the geometry (including solids and empty members) is kept as is.
pub fn reduce_to_2d(geom: &Geometry) -> Geometry {
    match geom {
        Geometry::Point(v) => Point {
            position: v.position.to_2d(),
            crs: v.crs,
        }
        .into(),
        Geometry::LineString(v) => line_to_2d(v).into(),
        Geometry::Ring(v) => ring_to_2d(v).into(),
        Geometry::Polygon(v) => polygon_to_2d(v).into(),
        Geometry::MultiPoint(v) => MultiPoint {
            points: v
                .points
                .iter()
                .map(|p| Point {
                    position: p.position.to_2d(),
                    crs: p.crs,
                })
                .collect(),
            crs: v.crs,
        }
        .into(),
        Geometry::MultiCurve(v) => MultiCurve {
            curves: v.curves.iter().map(line_to_2d).collect(),
            crs: v.crs,
        }
        .into(),
        Geometry::MultiSurface(v) => MultiSurface {
            surfaces: v.surfaces.iter().map(polygon_to_2d).collect(),
            crs: v.crs,
        }
        .into(),
        Geometry::Aggregate(v) => Aggregate {
            members: v.members.iter().map(reduce_to_2d).collect(),
            crs: v.crs,
        }
        .into(),
        Geometry::Solid(v) => Solid {
            faces: v.faces.iter().map(polygon_to_2d).collect(),
            crs: v.crs,
        }
        .into(),
    }
}

fn line_to_2d(line: &LineString) -> LineString {
    LineString {
        positions: line.positions.to_2d(),
        crs: line.crs,
    }
}

fn ring_to_2d(ring: &Ring) -> Ring {
    Ring {
        positions: ring.positions.to_2d(),
        crs: ring.crs,
    }
}

fn polygon_to_2d(polygon: &Polygon) -> Polygon {
    Polygon {
        exterior: polygon.exterior.as_ref().map(ring_to_2d),
        interiors: polygon.interiors.iter().map(ring_to_2d).collect(),
        crs: polygon.crs,
    }
}
