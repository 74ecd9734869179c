use crate::{sensor, RESOLUTION};
use vantage3d::evaluation::{select, CastStrategy, VisibilitySets};
use vantage3d::map::{OccupancyMap, VoxelMap};
use vantage3d::na::{Isometry3, Point3, Vector3};
use vantage3d::sensor::PixelGrid;

const STRATEGIES: [CastStrategy; 3] = [
    CastStrategy::FurthestFirst,
    CastStrategy::Independent,
    CastStrategy::Pixel(PixelGrid {
        width: 32,
        height: 24,
        step: 2,
    }),
];

fn random_point(rng: &mut oorandom::Rand32, mins: Point3<f32>, maxs: Point3<f32>) -> Point3<f32> {
    mins + (maxs - mins).component_mul(&Vector3::from_fn(|_, _| rng.rand_float()))
}

fn random_scene(rng: &mut oorandom::Rand32) -> (VoxelMap, VoxelMap) {
    let mut known = VoxelMap::new(RESOLUTION);
    let mut frontier = VoxelMap::new(RESOLUTION);

    for _ in 0..10 {
        let _ = known.set_occupied(&random_point(
            rng,
            Point3::new(-1.0, -1.0, 0.3),
            Point3::new(1.0, 1.0, 2.5),
        ));
    }
    for _ in 0..200 {
        let _ = frontier.set_occupied(&random_point(
            rng,
            Point3::new(-1.5, -1.5, -0.5),
            Point3::new(1.5, 1.5, 3.0),
        ));
    }

    (known, frontier)
}

fn check_consistency(frontier: &VoxelMap, visibility: &VisibilitySets, strategy: CastStrategy) {
    for key in visibility.first_hit() {
        assert!(
            !visibility.subsequent_hit().contains(key),
            "{:?} is both first and subsequent hit with {:?}",
            key,
            strategy
        );
    }

    for key in visibility.first_hit().iter().chain(visibility.subsequent_hit()) {
        assert!(frontier.has_occupied_voxel(key), "{:?}", strategy);
    }
}

#[test]
fn visibility_sets_are_disjoint_for_every_strategy() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..20 {
        let (known, frontier) = random_scene(&mut rng);
        let pose = Isometry3::translation(rng.rand_float() - 0.5, rng.rand_float() - 0.5, 0.0);
        let candidates = select(&frontier, &pose, &sensor());

        for strategy in STRATEGIES {
            let visibility = strategy.cast(&known, &frontier, &candidates, &pose, &sensor());
            check_consistency(&frontier, &visibility, strategy);
        }
    }
}

#[test]
fn casting_is_idempotent() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..10 {
        let (known, frontier) = random_scene(&mut rng);
        let pose = Isometry3::translation(0.0, 0.0, -0.2);
        let candidates = select(&frontier, &pose, &sensor());

        for strategy in STRATEGIES {
            let first = strategy.cast(&known, &frontier, &candidates, &pose, &sensor());
            let second = strategy.cast(&known, &frontier, &candidates, &pose, &sensor());
            assert_eq!(first, second, "{:?}", strategy);
        }
    }
}

#[test]
fn furthest_first_never_reveals_more_than_independent_rays() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..10 {
        let (known, frontier) = random_scene(&mut rng);
        let pose = Isometry3::identity();
        let candidates = select(&frontier, &pose, &sensor());

        let furthest_first =
            CastStrategy::FurthestFirst.cast(&known, &frontier, &candidates, &pose, &sensor());
        let independent =
            CastStrategy::Independent.cast(&known, &frontier, &candidates, &pose, &sensor());

        assert!(furthest_first.ray_segments().len() <= independent.ray_segments().len());
        for key in furthest_first.first_hit().iter().chain(furthest_first.subsequent_hit()) {
            assert!(independent.contains(key));
        }
    }
}
