use rand::rngs::StdRng;
use rand::SeedableRng;
use vantage3d::bounding_volume::Aabb;
use vantage3d::evaluation::{CastStrategy, ExplorationBounds, PoseEvaluator};
use vantage3d::map::{MapSnapshots, Occupancy, VoxelMap};
use vantage3d::math::{Point, Vector};
use vantage3d::sampling::{sample_and_rank, SphericalCrownSampler};
use vantage3d::sensor::SensorModel;

fn main() {
    let target = Point::new(0.0, 0.0, 0.0);

    let mut known = VoxelMap::new(0.05);
    // The floor below the target.
    known.fill_aabb(
        &Aabb::new(Point::new(-1.0, -1.0, -0.45), Point::new(1.0, 1.0, -0.4)),
        Occupancy::Occupied,
    );
    let mut frontier = VoxelMap::new(0.05);
    frontier.fill_aabb(
        &Aabb::new(Point::new(-0.2, -0.2, -0.2), Point::new(0.2, 0.2, 0.2)),
        Occupancy::Occupied,
    );

    let evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(known, frontier),
        ExplorationBounds::centered(target, Vector::repeat(2.0)),
    )
    .with_strategy(CastStrategy::Independent);
    let sensor = SensorModel::new(0.3, 2.0, 58f32.to_radians(), 45f32.to_radians());
    let sampler = SphericalCrownSampler::new(target, 0.6, 1.2).expect("valid radii");
    let mut rng = StdRng::seed_from_u64(0);

    let ranked = sample_and_rank(&sampler, &evaluator, &sensor, 50, &mut rng)
        .expect("the maps and the sensor are valid");

    for (rank, eval) in ranked.iter().take(5).enumerate() {
        println!(
            "#{}: score {:.6} from {} ({} voxels revealed)",
            rank + 1,
            eval.score.value,
            eval.pose.translation.vector.transpose(),
            eval.visibility.len()
        );
    }
}
