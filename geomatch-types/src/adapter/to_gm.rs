use super::positions_with_z;
use crate::geometry::{
    Aggregate, Crs, DirectPosition, Geometry, LineString, MultiCurve, MultiPoint, MultiSurface,
    Point, Polygon, Ring,
};
use crate::sf::{SfGeometry, SfValue, UNKNOWN_SRID};

/// Converts a simple feature geometry into the native model.
///
/// Linear rings become [`Ring`]s, line strings become [`LineString`]s even if they are closed. All coordinate
/// runs go through the closure rule of [`positions_from_coords`](super::positions_from_coords), so closed runs give
/// position lists with identical first and last positions. Z coordinates are taken from [`SfGeometry::z`].
///
/// The srid is copied into the CRS of the result. Parts of a geometry (points of a multi point, curves of a multi
/// curve, polygons and their rings) inherit the CRS of their parent and get none of their own; members of a geometry
/// collection are geometries on their own and keep their srid.
pub fn to_gm(geom: &SfGeometry) -> Geometry {
    let crs = crs(geom.srid);
    let mut z = geom.z.iter().copied();
    match &geom.value {
        SfValue::Point(v) => Point {
            position: position(v, &mut z),
            crs,
        }
        .into(),
        SfValue::LineString(v) => LineString {
            positions: positions_with_z(&v.0, &mut z),
            crs,
        }
        .into(),
        SfValue::LinearRing(v) => Ring {
            positions: positions_with_z(v.coords(), &mut z),
            crs,
        }
        .into(),
        SfValue::Polygon(v) => Polygon {
            crs,
            ..polygon_to_gm(v, &mut z)
        }
        .into(),
        SfValue::MultiPoint(v) => MultiPoint {
            points: v.0.iter().map(|p| Point::new(position(p, &mut z))).collect(),
            crs,
        }
        .into(),
        SfValue::MultiLineString(v) => MultiCurve {
            curves: v
                .0
                .iter()
                .map(|line| LineString::new(positions_with_z(&line.0, &mut z)))
                .collect(),
            crs,
        }
        .into(),
        SfValue::MultiPolygon(v) => MultiSurface {
            surfaces: v.0.iter().map(|p| polygon_to_gm(p, &mut z)).collect(),
            crs,
        }
        .into(),
        SfValue::GeometryCollection(v) => Aggregate {
            members: v.iter().map(to_gm).collect(),
            crs,
        }
        .into(),
    }
}

fn crs(srid: i32) -> Option<Crs> {
    (srid != UNKNOWN_SRID).then_some(Crs::new(srid))
}

fn position(point: &geo_types::Point<f64>, z: &mut impl Iterator<Item = Option<f64>>) -> DirectPosition {
    DirectPosition {
        x: point.x(),
        y: point.y(),
        z: z.next().flatten(),
    }
}

fn ring_to_gm(ring: &geo_types::LineString<f64>, z: &mut impl Iterator<Item = Option<f64>>) -> Ring {
    Ring::new(positions_with_z(&ring.0, z))
}

fn polygon_to_gm(
    polygon: &geo_types::Polygon<f64>,
    z: &mut impl Iterator<Item = Option<f64>>,
) -> Polygon {
    if polygon.exterior().0.is_empty() {
        // Interiors of a polygon without exterior are dropped, their z values still have to be skipped.
        let skipped: usize = polygon.interiors().iter().map(|ring| ring.0.len()).sum();
        z.by_ref().take(skipped).for_each(drop);
        return Polygon::empty();
    }

    let exterior = ring_to_gm(polygon.exterior(), z);
    let interiors = polygon.interiors().iter().map(|ring| ring_to_gm(ring, z)).collect();
    Polygon::new(exterior, interiors)
}
