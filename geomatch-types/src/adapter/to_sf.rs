use geo_types::{LineString as GeoLineString, MultiLineString, MultiPoint, MultiPolygon};

use super::coords_from_positions;
use crate::error::{GeometryError, RingDefect};
use crate::geometry::{Crs, DirectPosition, Geometry, LineString, Polygon, PositionList, Ring};
use crate::sf::{LinearRing, SfGeometry, SfValue, UNKNOWN_SRID};

/// Converts a native geometry into the simple feature model.
///
/// Returns `Ok(None)` only for a ring that has enough positions but is not closed (see the module documentation).
/// A solid is converted into the multi polygon of its faces. The CRS code is copied into the srid of the result.
/// Z coordinates are kept in [`SfGeometry::z`].
///
/// Simple feature geometries have a single srid, so the CRS of the parts of a geometry (points of a multi point,
/// curves of a multi curve, polygons and rings) is not kept. Members of an aggregate are geometries on their own and
/// keep their CRS as their srid.
pub fn to_sf(geom: &Geometry) -> Result<Option<SfGeometry>, GeometryError> {
    let mut z = ZRun::default();
    let value = match geom {
        Geometry::Point(v) => SfValue::Point(z.point(&v.position)),
        Geometry::LineString(v) => SfValue::LineString(line_to_sf(v, &mut z)),
        Geometry::Ring(v) => match ring_to_sf(v, &mut z)? {
            Some(ring) => SfValue::LinearRing(ring),
            None => return Ok(None),
        },
        Geometry::Polygon(v) => SfValue::Polygon(polygon_to_sf(v, &mut z)?),
        Geometry::MultiPoint(v) => SfValue::MultiPoint(MultiPoint::new(
            v.points.iter().map(|p| z.point(&p.position)).collect(),
        )),
        Geometry::MultiCurve(v) => SfValue::MultiLineString(MultiLineString::new(
            v.curves.iter().map(|c| line_to_sf(c, &mut z)).collect(),
        )),
        Geometry::MultiSurface(v) => {
            SfValue::MultiPolygon(MultiPolygon::new(polygons_to_sf(&v.surfaces, &mut z)?))
        }
        Geometry::Aggregate(v) => SfValue::GeometryCollection(
            v.members
                .iter()
                .enumerate()
                .map(|(index, member)| {
                    to_sf(member)
                        .and_then(|converted| {
                            converted.ok_or(GeometryError::DegenerateRing(RingDefect::NotClosed))
                        })
                        .map_err(|e| e.at_element(index))
                })
                .collect::<Result<_, _>>()?,
        ),
        Geometry::Solid(v) => {
            SfValue::MultiPolygon(MultiPolygon::new(polygons_to_sf(&v.faces, &mut z)?))
        }
    };

    Ok(Some(
        SfGeometry::new(value, srid(geom.crs())).with_z(z.into_values()),
    ))
}

/// Z coordinates collected in the order the coordinates are written into the simple feature value.
#[derive(Debug, Default)]
struct ZRun(Vec<Option<f64>>);

impl ZRun {
    fn point(&mut self, position: &DirectPosition) -> geo_types::Point<f64> {
        self.0.push(position.z);
        geo_types::Point::new(position.x, position.y)
    }

    fn extend(&mut self, positions: &PositionList) {
        self.0.extend(positions.iter().map(|p| p.z));
    }

    /// Empty list if no position has z.
    fn into_values(self) -> Vec<Option<f64>> {
        if self.0.iter().all(Option::is_none) {
            Vec::new()
        } else {
            self.0
        }
    }
}

fn srid(crs: Option<Crs>) -> i32 {
    crs.map_or(UNKNOWN_SRID, |crs| crs.code())
}

fn line_to_sf(line: &LineString, z: &mut ZRun) -> GeoLineString<f64> {
    z.extend(&line.positions);
    GeoLineString::new(coords_from_positions(&line.positions))
}

fn ring_to_sf(ring: &Ring, z: &mut ZRun) -> Result<Option<LinearRing>, GeometryError> {
    let positions = &ring.positions;
    if positions.is_empty() {
        return Ok(Some(LinearRing::empty()));
    }

    if positions.len() < LinearRing::MIN_COORDS {
        log::debug!(
            "Ring with {} positions cannot be converted: {:?}",
            positions.len(),
            positions
        );
        return Err(GeometryError::DegenerateRing(RingDefect::TooFewPositions(
            positions.len(),
        )));
    }

    match LinearRing::try_new(GeoLineString::new(coords_from_positions(positions))) {
        Ok(ring) => {
            z.extend(positions);
            Ok(Some(ring))
        }
        Err(GeometryError::DegenerateRing(RingDefect::NotClosed)) => {
            log::debug!(
                "Ring with {} positions is not closed, it is not converted",
                positions.len()
            );
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Converts a polygon boundary ring. The ring must convert into a linear ring.
fn boundary_ring_to_sf(ring: &Ring, z: &mut ZRun) -> Result<LinearRing, GeometryError> {
    ring_to_sf(ring, z)?.ok_or(GeometryError::DegenerateRing(RingDefect::NotClosed))
}

fn polygon_to_sf(polygon: &Polygon, z: &mut ZRun) -> Result<geo_types::Polygon<f64>, GeometryError> {
    let exterior = match &polygon.exterior {
        Some(ring) => boundary_ring_to_sf(ring, z)?,
        None => LinearRing::empty(),
    };

    let interiors = polygon
        .interiors
        .iter()
        .enumerate()
        .map(|(index, ring)| {
            boundary_ring_to_sf(ring, z)
                .map(LinearRing::into_inner)
                .map_err(|e| e.at_interior_ring(index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(geo_types::Polygon::new(exterior.into_inner(), interiors))
}

fn polygons_to_sf(
    polygons: &[Polygon],
    z: &mut ZRun,
) -> Result<Vec<geo_types::Polygon<f64>>, GeometryError> {
    polygons
        .iter()
        .enumerate()
        .map(|(index, polygon)| polygon_to_sf(polygon, z).map_err(|e| e.at_element(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Aggregate, DirectPosition, MultiCurve, MultiSurface, Point, Solid};
    use crate::geometry_type::SfGeometryType;
    use assert_matches::assert_matches;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        Ring::new(
            coords
                .iter()
                .map(|&c| DirectPosition::from(c))
                .collect::<Vec<_>>(),
        )
    }

    fn square(origin: f64, size: f64) -> Ring {
        ring(&[
            (origin, origin),
            (origin + size, origin),
            (origin + size, origin + size),
            (origin, origin + size),
            (origin, origin),
        ])
    }

    #[test]
    fn point() {
        let geom = Geometry::Point(Point {
            position: DirectPosition::new_3d(1.0, 2.0, 3.0),
            crs: Some(Crs::new(4326)),
        });
        let sf = to_sf(&geom).unwrap().unwrap();
        assert_eq!(sf.srid, 4326);
        assert_eq!(sf.value, SfValue::Point(geo_types::Point::new(1.0, 2.0)));
        assert_eq!(sf.z, vec![Some(3.0)]);
    }

    #[test]
    fn planar_geometry_has_no_z() {
        let sf = to_sf(&Polygon::new(square(0.0, 1.0), vec![]).into()).unwrap().unwrap();
        assert!(sf.z.is_empty());
        assert!(!sf.has_z());
    }

    #[test]
    fn z_follows_coordinate_order() {
        let curves = MultiCurve {
            curves: vec![
                LineString::new(vec![
                    DirectPosition::new_3d(0.0, 0.0, 1.0),
                    DirectPosition::new(1.0, 0.0),
                ]),
                LineString::new(vec![
                    DirectPosition::new_3d(5.0, 5.0, 3.0),
                    DirectPosition::new_3d(6.0, 6.0, 4.0),
                ]),
            ],
            crs: None,
        };
        let sf = to_sf(&curves.into()).unwrap().unwrap();
        assert_eq!(sf.z, vec![Some(1.0), None, Some(3.0), Some(4.0)]);
    }

    #[test]
    fn ring_with_three_positions_is_degenerate() {
        let geom = Geometry::Ring(ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]));
        assert_matches!(
            to_sf(&geom),
            Err(GeometryError::DegenerateRing(RingDefect::TooFewPositions(3)))
        );
    }

    #[test]
    fn closed_ring_with_four_positions_converts() {
        let geom = Geometry::Ring(ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]));
        let sf = to_sf(&geom).unwrap().unwrap();
        assert_eq!(sf.geometry_type(), SfGeometryType::LinearRing);
        assert_eq!(sf.srid, UNKNOWN_SRID);
    }

    #[test]
    fn unclosed_ring_converts_into_nothing() {
        let geom = Geometry::Ring(ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
        assert_eq!(to_sf(&geom), Ok(None));
    }

    #[test]
    fn empty_ring_converts_into_empty_ring() {
        let sf = to_sf(&Geometry::Ring(Ring::default())).unwrap().unwrap();
        assert_matches!(sf.value, SfValue::LinearRing(r) if r.is_empty());
    }

    #[test]
    fn polygon_with_holes() {
        let polygon = Polygon::new(square(0.0, 10.0), vec![square(1.0, 1.0), square(5.0, 2.0)]);
        let sf = to_sf(&polygon.into()).unwrap().unwrap();
        let SfValue::Polygon(polygon) = sf.value else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.exterior().0.len(), 5);
        assert_eq!(polygon.interiors().len(), 2);
    }

    #[test]
    fn polygon_fails_if_one_interior_ring_is_degenerate() {
        let polygon = Polygon::new(
            square(0.0, 10.0),
            vec![square(1.0, 1.0), ring(&[(5.0, 5.0), (6.0, 5.0), (5.0, 5.0)])],
        );
        let err = to_sf(&polygon.into()).unwrap_err();
        assert_matches!(err, GeometryError::InteriorRingConversionFailure { index: 1, .. });
        assert_eq!(
            err.root_cause(),
            &GeometryError::DegenerateRing(RingDefect::TooFewPositions(3))
        );
    }

    #[test]
    fn polygon_fails_if_one_interior_ring_is_not_closed() {
        let polygon = Polygon::new(
            square(0.0, 10.0),
            vec![ring(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)])],
        );
        assert_eq!(
            to_sf(&polygon.into()),
            Err(GeometryError::DegenerateRing(RingDefect::NotClosed).at_interior_ring(0))
        );
    }

    #[test]
    fn polygon_fails_if_exterior_is_not_closed() {
        let polygon = Polygon::new(ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]), vec![]);
        assert_eq!(
            to_sf(&polygon.into()),
            Err(GeometryError::DegenerateRing(RingDefect::NotClosed))
        );
    }

    #[test]
    fn empty_polygon() {
        let sf = to_sf(&Polygon::empty().into()).unwrap().unwrap();
        assert_matches!(sf.value, SfValue::Polygon(p) if p.exterior().0.is_empty());
    }

    #[test]
    fn collections_keep_size_and_order() {
        let curves = MultiCurve {
            curves: vec![
                LineString::new(vec![DirectPosition::new(0.0, 0.0), DirectPosition::new(1.0, 0.0)]),
                LineString::default(),
                LineString::new(vec![DirectPosition::new(5.0, 5.0), DirectPosition::new(6.0, 6.0)]),
            ],
            crs: None,
        };
        let sf = to_sf(&curves.into()).unwrap().unwrap();
        let SfValue::MultiLineString(lines) = sf.value else {
            panic!("expected a multi line string");
        };
        assert_eq!(lines.0.len(), 3);
        assert!(lines.0[1].0.is_empty());
        assert_eq!(lines.0[2].0[0].x, 5.0);
    }

    #[test]
    fn aggregate_member_failure_aborts_conversion() {
        let aggregate = Aggregate {
            members: vec![
                Point::new(DirectPosition::new(0.0, 0.0)).into(),
                ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).into(),
            ],
            crs: None,
        };
        assert_eq!(
            to_sf(&aggregate.into()),
            Err(GeometryError::DegenerateRing(RingDefect::NotClosed).at_element(1))
        );
    }

    #[test]
    fn multi_surface_reports_failing_member() {
        let surfaces = MultiSurface {
            surfaces: vec![
                Polygon::new(square(0.0, 1.0), vec![]),
                Polygon::new(square(2.0, 1.0), vec![ring(&[(2.5, 2.5), (2.6, 2.5)])]),
            ],
            crs: None,
        };
        let err = to_sf(&surfaces.into()).unwrap_err();
        assert_eq!(
            err,
            GeometryError::DegenerateRing(RingDefect::TooFewPositions(2))
                .at_interior_ring(0)
                .at_element(1)
        );
    }

    #[test]
    fn solid_converts_into_multi_polygon_of_faces() {
        let solid = Solid {
            faces: vec![
                Polygon::new(ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]), vec![]),
                Polygon::new(ring(&[(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]), vec![]),
            ],
            crs: Some(Crs::new(2154)),
        };
        let sf = to_sf(&solid.into()).unwrap().unwrap();
        assert_eq!(sf.srid, 2154);
        let SfValue::MultiPolygon(polygons) = sf.value else {
            panic!("expected a multi polygon");
        };
        assert_eq!(polygons.0.len(), 2);
        assert_eq!(polygons.0[1].exterior().0[1], geo_types::coord!(x: 1.0, y: 1.0));
    }
}
