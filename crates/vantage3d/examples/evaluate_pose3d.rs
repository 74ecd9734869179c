use vantage3d::bounding_volume::Aabb;
use vantage3d::evaluation::{ExplorationBounds, PoseEvaluator};
use vantage3d::map::{MapSnapshots, Occupancy, VoxelMap};
use vantage3d::math::{Isometry, Point, Vector};
use vantage3d::sensor::SensorModel;
use vantage3d::visualization::{
    discovered_cubes, frustum_lines, ray_lines, score_label, ColorRGBA, MarkerAction,
};

fn main() {
    // A wall hides part of a box of unobserved space.
    let mut known = VoxelMap::new(0.1);
    known.fill_aabb(
        &Aabb::new(Point::new(-0.3, -0.5, 1.0), Point::new(0.0, 0.5, 1.1)),
        Occupancy::Occupied,
    );
    let mut frontier = VoxelMap::new(0.1);
    frontier.fill_aabb(
        &Aabb::new(Point::new(-0.5, -0.5, 1.5), Point::new(0.5, 0.5, 2.0)),
        Occupancy::Occupied,
    );

    let evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(known, frontier),
        ExplorationBounds::centered(Point::new(0.0, 0.0, 1.5), Vector::repeat(3.0)),
    );
    let sensor = SensorModel::new(0.8, 3.5, 58f32.to_radians(), 45f32.to_radians());
    let pose = Isometry::translation(0.0, 0.0, 0.0);

    let eval = evaluator
        .evaluate(&pose, &sensor)
        .expect("the maps and the sensor are valid");

    println!("{}", score_label(&pose, &eval.score).text);
    println!(
        "{} candidates, {} first hits, {} subsequent hits, {} contributing rays.",
        eval.candidates_considered,
        eval.visibility.first_hit().len(),
        eval.visibility.subsequent_hit().len(),
        eval.visibility.ray_segments().len()
    );

    let snapshot = evaluator.maps().snapshot();
    let frontier = snapshot.frontier.expect("the frontier map is set");
    for list in discovered_cubes(&*frontier, &eval.visibility) {
        if list.action == MarkerAction::Add {
            println!(
                "{} cubes of size {} at depth {}.",
                list.centers.len(),
                list.size,
                list.depth
            );
        }
    }

    println!("{} ray segments.", ray_lines(&eval.visibility).segments.len());
    for [a, b] in frustum_lines(&pose, &sensor, ColorRGBA::BLUE).segments {
        println!("frustum edge: {a} -> {b}");
    }
}
