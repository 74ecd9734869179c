use crate::{occupied, sensor, RESOLUTION};
use std::sync::Arc;
use vantage3d::evaluation::{ExplorationBounds, PoseEvaluator};
use vantage3d::map::{MapSnapshots, VoxelMap};
use vantage3d::na::{Isometry3, Point3, Vector3};

fn one_voxel() -> VoxelMap {
    occupied(&[Point3::new(0.05, 0.05, 1.05)])
}

fn two_voxels() -> VoxelMap {
    occupied(&[Point3::new(0.05, 0.05, 1.05), Point3::new(0.45, 0.05, 1.05)])
}

#[test]
fn refreshed_maps_are_used_by_the_next_evaluation() {
    let evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(VoxelMap::new(RESOLUTION), one_voxel()),
        ExplorationBounds::centered(Point3::origin(), Vector3::repeat(2.0)),
    );
    let pose = Isometry3::translation(0.05, 0.05, 0.05);

    let before = evaluator.evaluate(&pose, &sensor()).unwrap();
    let previous = evaluator.maps().replace_frontier(two_voxels());
    let after = evaluator.evaluate(&pose, &sensor()).unwrap();

    assert_eq!(previous.map(|map| map.len()), Some(1));
    assert_eq!(before.visibility.len(), 1);
    assert_eq!(after.visibility.len(), 2);
    assert!(after.score.value > before.score.value);
}

#[test]
fn centroids_replace_the_frontier_leaves_as_candidates() {
    let evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(VoxelMap::new(RESOLUTION), two_voxels()),
        ExplorationBounds::centered(Point3::origin(), Vector3::repeat(2.0)),
    );
    let pose = Isometry3::translation(0.05, 0.05, 0.05);

    let _ = evaluator
        .maps()
        .replace_centroids(Some(vec![Point3::new(0.07, 0.03, 1.02)]));
    let eval = evaluator.evaluate(&pose, &sensor()).unwrap();
    assert_eq!(eval.candidates_considered, 1);
    assert!(eval.visibility.first_hit().contains(&Point3::new(0, 0, 10)));

    let _ = evaluator.maps().replace_centroids(None);
    let eval = evaluator.evaluate(&pose, &sensor()).unwrap();
    assert_eq!(eval.candidates_considered, 2);
}

#[test]
fn evaluations_read_a_consistent_snapshot_while_maps_are_refreshed() {
    let evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(VoxelMap::new(RESOLUTION), one_voxel()),
        ExplorationBounds::centered(Point3::origin(), Vector3::repeat(2.0)),
    );
    let pose = Isometry3::translation(0.05, 0.05, 0.05);
    let maps = [Arc::new(one_voxel()), Arc::new(two_voxels())];

    std::thread::scope(|s| {
        let _ = s.spawn(|| {
            for i in 0..100 {
                let _ = evaluator.maps().replace_frontier(maps[i % 2].clone());
            }
        });

        for _ in 0..100 {
            let eval = evaluator.evaluate(&pose, &sensor()).unwrap();
            assert!(eval.visibility.len() == 1 || eval.visibility.len() == 2);
            assert_eq!(eval.candidates_considered, eval.visibility.len());
        }
    });

    // Held by `maps`, by the snapshots and by `current`.
    let current = evaluator.maps().snapshot().frontier.unwrap();
    assert!(Arc::strong_count(&current) <= 3);
}
