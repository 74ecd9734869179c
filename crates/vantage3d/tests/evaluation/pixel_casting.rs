use crate::{occupied, sensor, RESOLUTION};
use vantage3d::evaluation::{CandidateSet, CastStrategy};
use vantage3d::map::VoxelMap;
use vantage3d::na::{Isometry3, Point3};
use vantage3d::sensor::PixelGrid;

/// Two square walls of frontier voxels, at depth 1.0 and 1.5, the far one
/// hidden behind the near one.
fn walls() -> VoxelMap {
    let mut points = vec![];

    for i in -3i32..3 {
        for j in -3i32..3 {
            let (x, y) = (i as f32 * RESOLUTION + 0.05, j as f32 * RESOLUTION + 0.05);
            points.push(Point3::new(x, y, 1.05));
            if i.abs() < 3 && j.abs() < 3 {
                points.push(Point3::new(x, y, 1.55));
            }
        }
    }

    occupied(&points)
}

#[test]
fn pixel_rays_reveal_the_near_wall_first() {
    let known = VoxelMap::new(RESOLUTION);
    let frontier = walls();
    let grid = PixelGrid::new(16, 16, 1);

    let visibility = CastStrategy::Pixel(grid).cast(
        &known,
        &frontier,
        &CandidateSet::new(),
        &Isometry3::identity(),
        &sensor(),
    );

    assert!(!visibility.first_hit().is_empty());
    assert!(!visibility.subsequent_hit().is_empty());
    assert!(visibility.first_hit().iter().all(|key| key.z == 10));
    assert!(visibility.subsequent_hit().iter().any(|key| key.z == 15));
    assert!(visibility
        .first_hit()
        .iter()
        .all(|key| !visibility.subsequent_hit().contains(key)));
    assert!(visibility.ray_segments().len() <= grid.num_rays());
}

#[test]
fn pixel_rays_start_at_the_minimum_range() {
    let known = VoxelMap::new(RESOLUTION);
    let frontier = occupied(&[Point3::new(0.05, 0.05, 0.15)]);
    let grid = PixelGrid::new(8, 8, 1);

    let visibility = CastStrategy::Pixel(grid).cast(
        &known,
        &frontier,
        &CandidateSet::new(),
        &Isometry3::translation(0.05, 0.05, 0.05),
        &sensor(),
    );

    assert!(visibility.is_empty());
}

#[test]
fn pixel_rays_stop_at_known_obstacles() {
    let known = occupied(&[Point3::new(0.05, 0.05, 0.55)]);
    let frontier = occupied(&[Point3::new(0.05, 0.05, 1.05)]);
    // The last of these four rays follows the optical axis.
    let grid = PixelGrid::new(2, 2, 1);
    let pose = Isometry3::translation(0.05, 0.05, 0.05);

    let visibility =
        CastStrategy::Pixel(grid).cast(&known, &frontier, &CandidateSet::new(), &pose, &sensor());
    assert!(visibility.is_empty());

    let visibility = CastStrategy::Pixel(grid).cast(
        &VoxelMap::new(RESOLUTION),
        &frontier,
        &CandidateSet::new(),
        &pose,
        &sensor(),
    );
    assert!(visibility.first_hit().contains(&Point3::new(0, 0, 10)));
}
