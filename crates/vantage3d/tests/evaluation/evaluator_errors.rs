use crate::{occupied, sensor, RESOLUTION};
use vantage3d::evaluation::{EvaluationError, ExplorationBounds, PoseEvaluator};
use vantage3d::map::{MapKind, MapSnapshots, VoxelMap};
use vantage3d::na::{Isometry3, Point3, Vector3};
use vantage3d::sensor::{SensorModel, SensorModelError};

fn bounds() -> ExplorationBounds {
    ExplorationBounds::centered(Point3::origin(), Vector3::repeat(2.0))
}

#[test]
fn empty_range_is_a_malformed_sensor_model() {
    let evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(VoxelMap::new(RESOLUTION), VoxelMap::new(RESOLUTION)),
        bounds(),
    );

    for (min_range, max_range) in [(2.0, 2.0), (3.0, 2.0)] {
        let sensor = SensorModel::new(min_range, max_range, 1.0, 1.0);
        assert_eq!(
            evaluator.evaluate(&Isometry3::identity(), &sensor),
            Err(EvaluationError::MalformedSensorModel(
                SensorModelError::EmptyRange {
                    min_range,
                    max_range
                }
            ))
        );
    }

    let no_fov = SensorModel::new(0.2, 3.0, 0.0, 1.0);
    assert!(matches!(
        evaluator.evaluate(&Isometry3::identity(), &no_fov),
        Err(EvaluationError::MalformedSensorModel(SensorModelError::InvalidFov { .. }))
    ));
}

#[test]
fn infinite_ranges_are_rejected_before_casting() {
    // Nothing in the known map stops the rays.
    let evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(
            VoxelMap::new(RESOLUTION),
            occupied(&[Point3::new(0.05, 0.05, 1.05)]),
        ),
        bounds(),
    );
    let pose = Isometry3::translation(0.05, 0.05, 0.05);

    for (min_range, max_range) in [(0.2, f32::INFINITY), (f32::INFINITY, f32::INFINITY)] {
        let sensor = SensorModel::new(min_range, max_range, 1.0, 1.0);
        assert!(matches!(
            evaluator.evaluate(&pose, &sensor),
            Err(EvaluationError::MalformedSensorModel(
                SensorModelError::NonFiniteRange { .. }
            ))
        ));
    }

    let wide = SensorModel::new(0.2, 3.0, f32::INFINITY, 1.0);
    assert!(matches!(
        evaluator.evaluate(&pose, &wide),
        Err(EvaluationError::MalformedSensorModel(SensorModelError::InvalidFov { .. }))
    ));
}

#[test]
fn errors_are_detected_in_order() {
    let broken_sensor = SensorModel::new(3.0, 2.0, 1.0, 1.0);
    let broken_bounds = ExplorationBounds::new(Point3::origin(), Point3::new(2.0, 2.0, 0.1));
    let pose = Isometry3::identity();

    // The sensor model is checked before the maps.
    let evaluator = PoseEvaluator::<VoxelMap>::new(broken_bounds);
    assert!(matches!(
        evaluator.evaluate(&pose, &broken_sensor),
        Err(EvaluationError::MalformedSensorModel(_))
    ));

    // The known map is checked before the frontier map.
    assert_eq!(
        evaluator.evaluate(&pose, &sensor()),
        Err(EvaluationError::MissingMap(MapKind::Known))
    );
    let _ = evaluator.maps().replace_known(VoxelMap::new(RESOLUTION));
    assert_eq!(
        evaluator.evaluate(&pose, &sensor()),
        Err(EvaluationError::MissingMap(MapKind::Frontier))
    );

    // The bounds are checked last, even if nothing would be seen.
    let _ = evaluator
        .maps()
        .replace_frontier(occupied(&[Point3::new(0.05, 0.05, 1.05)]));
    assert!(matches!(
        evaluator.evaluate(&pose, &sensor()),
        Err(EvaluationError::DegenerateBounds { .. })
    ));
}

#[test]
fn fixing_the_bounds_makes_the_evaluation_succeed() {
    let mut evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(
            VoxelMap::new(RESOLUTION),
            occupied(&[Point3::new(0.05, 0.05, 1.05)]),
        ),
        ExplorationBounds::new(Point3::origin(), Point3::new(0.2, 2.0, 2.0)),
    );
    let pose = Isometry3::translation(0.05, 0.05, 0.05);

    assert!(evaluator.evaluate(&pose, &sensor()).is_err());
    evaluator.set_bounds(bounds());
    assert!(evaluator.evaluate(&pose, &sensor()).unwrap().score.value > 0.0);
}
