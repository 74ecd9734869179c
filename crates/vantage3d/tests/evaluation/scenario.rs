use crate::{occupied, sensor, RESOLUTION};
use approx::assert_relative_eq;
use vantage3d::evaluation::{ExplorationBounds, PoseEvaluator};
use vantage3d::map::{MapSnapshots, OccupancyMap, VoxelMap};
use vantage3d::na::{Isometry3, Point3, Vector3};
use vantage3d::visualization::{discovered_cubes, ray_lines, score_label, MarkerAction};

fn evaluator(frontier: VoxelMap) -> PoseEvaluator<VoxelMap> {
    let bounds = ExplorationBounds::centered(Point3::origin(), Vector3::repeat(2.0));
    PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(VoxelMap::new(RESOLUTION), frontier),
        bounds,
    )
}

#[test]
fn single_visible_voxel_at_one_meter() {
    let frontier = occupied(&[Point3::new(0.05, 0.05, 1.05)]);
    let evaluator = evaluator(frontier.clone());
    let pose = Isometry3::translation(0.05, 0.05, 0.05);

    let eval = evaluator.evaluate(&pose, &sensor()).unwrap();

    assert_relative_eq!(eval.score.value, 0.0001966, epsilon = 1.0e-6);
    assert_eq!(eval.candidates_considered, 1);
    assert_eq!(eval.visibility.first_hit().len(), 1);
    assert!(eval.visibility.first_hit().contains(&Point3::new(0, 0, 10)));
    assert!(eval.visibility.subsequent_hit().is_empty());
    assert_eq!(eval.visibility.ray_segments().len(), 1);

    let cubes = discovered_cubes(&frontier, &eval.visibility);
    assert_eq!(cubes.len(), frontier.tree_depth() as usize + 1);
    let finest = &cubes[frontier.tree_depth() as usize];
    assert_eq!(finest.action, MarkerAction::Add);
    assert_eq!(finest.centers, vec![frontier.key_to_coord(&Point3::new(0, 0, 10))]);

    assert_eq!(ray_lines(&eval.visibility).segments.len(), 1);
    assert_eq!(score_label(&pose, &eval.score).text, "Score: 0.000197");
}

#[test]
fn colinear_voxels_share_a_single_ray() {
    let evaluator = evaluator(occupied(&[
        Point3::new(0.05, 0.05, 1.05),
        Point3::new(0.05, 0.05, 1.55),
    ]));
    let pose = Isometry3::translation(0.05, 0.05, 0.05);

    let eval = evaluator.evaluate(&pose, &sensor()).unwrap();

    assert!(eval.visibility.first_hit().contains(&Point3::new(0, 0, 10)));
    assert!(eval.visibility.subsequent_hit().contains(&Point3::new(0, 0, 15)));
    assert_eq!(eval.visibility.len(), 2);
    assert_eq!(eval.visibility.ray_segments().len(), 1);
    assert_relative_eq!(eval.score.value, 1.5 * 0.001 / 5.084, epsilon = 1.0e-6);
}

#[test]
fn every_revealed_voxel_raises_the_score() {
    let pose = Isometry3::translation(0.05, 0.05, 0.05);
    let mut points = vec![Point3::new(0.05, 0.05, 1.05)];
    let mut previous = evaluator(occupied(&points))
        .evaluate(&pose, &sensor())
        .unwrap()
        .score
        .value;

    for i in 1..5 {
        points.push(Point3::new(0.05 + 0.1 * i as f32, 0.05, 1.05));
        let value = evaluator(occupied(&points))
            .evaluate(&pose, &sensor())
            .unwrap()
            .score
            .value;
        assert_relative_eq!(value - previous, 0.001 / 5.084, epsilon = 1.0e-6);
        previous = value;
    }
}

#[test]
fn empty_frustum_scores_zero() {
    let evaluator = evaluator(occupied(&[Point3::new(0.05, 0.05, -1.05)]));
    let eval = evaluator
        .evaluate(&Isometry3::translation(0.05, 0.05, 0.05), &sensor())
        .unwrap();

    assert_eq!(eval.score.value, 0.0);
    assert_eq!(eval.candidates_considered, 0);
    assert!(eval.visibility.is_empty());
}
