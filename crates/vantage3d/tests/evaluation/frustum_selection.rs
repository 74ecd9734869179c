use crate::{occupied, sensor};
use approx::assert_relative_eq;
use vantage3d::evaluation::{select, select_points};
use vantage3d::map::{OccupancyMap, VoxelMap};
use vantage3d::na::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

fn random_pose(rng: &mut oorandom::Rand32) -> Isometry3<f32> {
    let translation = Vector3::from_fn(|_, _| rng.rand_float() * 4.0 - 2.0);
    let axis_angle = Vector3::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0) * 3.0;
    Isometry3::from_parts(
        Translation3::from(translation),
        UnitQuaternion::new(axis_angle),
    )
}

#[test]
fn points_beyond_the_maximum_range_are_never_selected() {
    let mut rng = oorandom::Rand32::new(42);
    let sensor = sensor();

    for _ in 0..500 {
        let pose = random_pose(&mut rng);
        let beyond = pose * Point3::new(0.0, 0.0, 2.0 * sensor.max_range);
        let frontier = occupied(&[beyond]);

        assert!(select(&frontier, &pose, &sensor).is_empty());
        assert!(select_points(&frontier, &[beyond], &pose, &sensor).is_empty());
    }
}

#[test]
fn selected_candidates_satisfy_range_and_angle_bounds() {
    let mut rng = oorandom::Rand32::new(3);
    let sensor = sensor();

    for _ in 0..50 {
        let pose = random_pose(&mut rng);
        let mut frontier = VoxelMap::new(crate::RESOLUTION);
        for _ in 0..300 {
            let local = Point3::from(Vector3::from_fn(|_, _| rng.rand_float() * 6.0 - 3.0));
            let _ = frontier.set_occupied(&(pose * local));
        }

        let candidates = select(&frontier, &pose, &sensor);

        for leaf in frontier.occupied_leaves() {
            let local = pose.inverse_transform_point(&leaf.center);
            let inside = local.z >= sensor.min_range
                && local.z <= sensor.max_range
                && local.x.atan2(local.z).abs() <= sensor.horizontal_fov / 2.0
                && local.y.atan2(local.z).abs() <= sensor.vertical_fov / 2.0;

            assert_eq!(candidates.contains(&leaf.key), inside, "{:?}", local);
        }

        let viewpoint = Point3::from(pose.translation.vector);
        for candidate in candidates.iter() {
            assert_relative_eq!(
                candidate.distance,
                vantage3d::na::distance(&viewpoint, &candidate.centroid),
                epsilon = 1.0e-5
            );
            assert!(!candidate.visited);
        }
    }
}
