use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use geo::EuclideanDistance;
use geomatch::geomatch_types::adapter::{coords_from_positions, to_gm, to_sf};
use geomatch::geomatch_types::geometry::{Crs, Geometry, LineString, Polygon, Ring, Solid};
use geomatch::geomatch_types::sf::SfValue;
use geomatch::geomatch_types::{DirectPosition, GeometryError, PositionList, RingDefect};
use geomatch::{
    CorrespondenceType, ManyToOneCorrespondence, MatchedFeature, OneToOneCorrespondence,
    SubLineCorrespondence,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn line(coords: &[(f64, f64)]) -> LineString {
    LineString::new(coords.iter().map(|&c| DirectPosition::from(c)).collect::<Vec<_>>())
}

fn ring(coords: &[(f64, f64)]) -> Ring {
    Ring::new(coords.iter().map(|&c| DirectPosition::from(c)).collect::<Vec<_>>())
}

fn collapsed_road() -> ManyToOneCorrespondence {
    ManyToOneCorrespondence::new(
        line(&[(0.0, 0.0), (0.0, 4.0)]),
        vec![
            line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
            line(&[(2.0, 0.0), (4.0, 0.0)]),
        ],
    )
    .unwrap()
}

fn geo_line(positions: &PositionList) -> geo::LineString<f64> {
    geo::LineString::new(coords_from_positions(positions))
}

#[test]
fn midpoint_of_merged_line_is_blended_half_way() {
    init_logger();
    let c = collapsed_road();
    assert_eq!(c.correspondence_type(), CorrespondenceType::ManyToOne);

    let half = c.morph(0.5).unwrap();
    let index = c
        .initial_line()
        .iter()
        .position(|p| *p == DirectPosition::new(2.0, 0.0))
        .unwrap();
    assert_abs_diff_eq!(half[index], DirectPosition::new(1.0, 1.0));
}

#[test]
fn morph_at_zero_is_initial_line() {
    let c = collapsed_road();
    let start = c.morph(0.0).unwrap();

    assert_eq!(start.len(), c.initial_line().len());
    for (morphed, initial) in start.iter().zip(c.initial_line().iter()) {
        assert_abs_diff_eq!(*morphed, *initial);
    }
}

#[test]
fn morph_at_one_lies_on_final_line() {
    let c = OneToOneCorrespondence::new(
        line(&[(0.0, 0.0), (1.0, 1.0), (3.0, 0.0), (5.0, 2.0), (6.0, 0.0)]),
        line(&[(0.0, 5.0), (2.0, 6.0), (6.0, 5.0)]),
    )
    .unwrap();

    let end = c.morph(1.0).unwrap();
    assert_eq!(end.len(), 5);

    let final_line = geo_line(c.final_line());
    for p in end.iter() {
        let distance = geo::Point::new(p.x, p.y).euclidean_distance(&final_line);
        assert!(distance < 1e-9, "{p:?} is {distance} away from the final line");
    }
}

#[test]
fn vertex_matching_is_symmetric() {
    let a = line(&[(0.0, 0.0), (1.0, 0.5), (2.0, 0.0), (4.0, 0.0)]);
    let b = line(&[(0.0, 3.0), (4.0, 3.0)]);

    let forward = OneToOneCorrespondence::new(a.clone(), b.clone())
        .unwrap()
        .vertex_matching()
        .unwrap();
    let backward = OneToOneCorrespondence::new(b, a)
        .unwrap()
        .vertex_matching()
        .unwrap();

    assert_eq!(forward.len(), 4);
    assert_eq!(forward.initial_positions, backward.final_positions);
    assert_eq!(forward.final_positions, backward.initial_positions);
}

#[test]
fn matched_features_of_collapsed_road() {
    let c = collapsed_road();
    let initial = c.matched_features_initial();

    let break_points: Vec<_> = initial
        .iter()
        .filter_map(|f| match f {
            MatchedFeature::Point(p) => Some(**p),
            MatchedFeature::Line(_) => None,
        })
        .collect();
    assert_eq!(
        break_points,
        vec![
            DirectPosition::new(0.0, 0.0),
            DirectPosition::new(2.0, 0.0),
            DirectPosition::new(4.0, 0.0)
        ]
    );
    assert_eq!(c.matched_features_final().len(), 1);
}

#[test]
fn three_point_ring_is_degenerate() {
    init_logger();
    let geom = Geometry::Ring(ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]));
    assert_matches!(
        to_sf(&geom),
        Err(GeometryError::DegenerateRing(RingDefect::TooFewPositions(3)))
    );
}

#[test]
fn solid_becomes_multi_polygon_of_faces() {
    let faces = vec![
        Polygon::new(
            ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]),
            vec![],
        ),
        Polygon::new(
            ring(&[(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]),
            vec![],
        ),
    ];
    let solid = Geometry::Solid(Solid {
        faces: faces.clone(),
        crs: Some(Crs::new(4326)),
    });

    let sf = to_sf(&solid).unwrap().unwrap();
    assert_eq!(sf.srid, 4326);
    let SfValue::MultiPolygon(multi) = &sf.value else {
        panic!("expected a multi polygon, got {:?}", sf.geometry_type());
    };
    assert_eq!(multi.0.len(), 2);

    for (polygon, face) in multi.0.iter().zip(&faces) {
        let exterior = face.exterior.as_ref().unwrap();
        assert_eq!(
            polygon.exterior().0,
            coords_from_positions(&exterior.positions)
        );
        assert!(polygon.interiors().is_empty());
    }

    let Geometry::MultiSurface(back) = to_gm(&sf) else {
        panic!("expected a multi surface");
    };
    assert_eq!(back.surfaces, faces);
}
