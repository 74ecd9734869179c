use crate::{occupied, sensor};
use vantage3d::evaluation::{select, CandidateSet, CastStrategy};
use vantage3d::na::{Isometry3, Point3};
use vantage3d::sensor::SensorModel;

#[test]
fn voxels_behind_known_obstacles_are_hidden() {
    let known = occupied(&[Point3::new(0.05, 0.05, 0.55)]);
    let frontier = occupied(&[
        Point3::new(0.05, 0.05, 1.05),
        Point3::new(0.05, 0.05, 1.55),
        // Visible through a free line of sight.
        Point3::new(0.45, 0.05, 1.05),
    ]);
    let pose = Isometry3::translation(0.05, 0.05, 0.05);
    let candidates = select(&frontier, &pose, &sensor());
    assert_eq!(candidates.len(), 3);

    for strategy in [CastStrategy::FurthestFirst, CastStrategy::Independent] {
        let visibility = strategy.cast(&known, &frontier, &candidates, &pose, &sensor());

        assert!(!visibility.contains(&Point3::new(0, 0, 10)), "{:?}", strategy);
        assert!(!visibility.contains(&Point3::new(0, 0, 15)), "{:?}", strategy);
        assert!(visibility.first_hit().contains(&Point3::new(4, 0, 10)), "{:?}", strategy);
    }
}

#[test]
fn voxels_closer_than_the_minimum_range_are_ignored() {
    let known = occupied(&[]);
    let frontier = occupied(&[Point3::new(0.05, 0.05, 0.15), Point3::new(0.05, 0.05, 1.05)]);
    let pose = Isometry3::translation(0.05, 0.05, 0.05);
    let candidates = select(&frontier, &pose, &sensor());

    let visibility = CastStrategy::FurthestFirst.cast(&known, &frontier, &candidates, &pose, &sensor());

    assert_eq!(visibility.len(), 1);
    assert!(visibility.first_hit().contains(&Point3::new(0, 0, 10)));
}

#[test]
fn candidate_at_the_viewpoint_casts_no_ray() {
    let known = occupied(&[]);
    let frontier = occupied(&[Point3::new(0.05, 0.05, 0.05), Point3::new(0.05, 0.05, 1.05)]);
    let pose = Isometry3::translation(0.05, 0.05, 0.05);
    let viewpoint = Point3::new(0.05, 0.05, 0.05);
    let sensor = SensorModel { min_range: 0.0, ..sensor() };

    let mut candidates = CandidateSet::new();
    let _ = candidates.insert(Point3::new(0, 0, 0), viewpoint, &viewpoint);
    let _ = candidates.insert(Point3::new(0, 0, 10), Point3::new(0.05, 0.05, 1.05), &viewpoint);

    for strategy in [CastStrategy::FurthestFirst, CastStrategy::Independent] {
        let visibility = strategy.cast(&known, &frontier, &candidates, &pose, &sensor);

        // Only the far candidate's ray, which starts in the viewpoint voxel.
        assert_eq!(visibility.ray_segments().len(), 1, "{:?}", strategy);
        assert!(visibility.first_hit().contains(&Point3::new(0, 0, 0)), "{:?}", strategy);
        assert!(
            visibility.subsequent_hit().contains(&Point3::new(0, 0, 10)),
            "{:?}",
            strategy
        );
        assert_eq!(visibility.len(), 2, "{:?}", strategy);
    }
}
