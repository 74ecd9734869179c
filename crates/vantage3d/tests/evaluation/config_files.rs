use crate::occupied;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vantage3d::config::{ConfigLoadError, StrategyKind, VantageConfig};
use vantage3d::evaluation::PoseEvaluator;
use vantage3d::map::{MapSnapshots, VoxelMap};
use vantage3d::na::Point3;
use vantage3d::sampling::sample_and_rank;

const CONFIG: &str = "
sensor:
  min_range: 0.2
  max_range: 2.0
  horizontal_fov_deg: 60.0
  vertical_fov_deg: 60.0
bounds:
  mins: [-1.0, -1.0, 0.0]
  maxs: [1.0, 1.0, 2.0]
raycast:
  strategy: independent
sampling:
  center: [0.05, 0.05, 1.05]
  min_radius: 0.5
  max_radius: 1.0
  num_poses: 12
  seed: 3
";

#[test]
fn configuration_files_drive_an_evaluation() {
    let path = std::env::temp_dir().join(format!("vantage3d-config-{}.yaml", std::process::id()));
    std::fs::write(&path, CONFIG).unwrap();
    let config = VantageConfig::load(&path);
    let _ = std::fs::remove_file(&path);
    let config = config.unwrap();

    assert_eq!(config.raycast.strategy, StrategyKind::Independent);
    assert_eq!(config.sampling.seed, Some(3));

    let evaluator = PoseEvaluator::with_snapshots(
        MapSnapshots::with_maps(
            VoxelMap::new(crate::RESOLUTION),
            occupied(&[Point3::new(0.05, 0.05, 1.05)]),
        ),
        config.to_bounds(),
    )
    .with_strategy(config.to_strategy());
    let sampler = config.to_crown_sampler().unwrap();
    let mut rng = StdRng::seed_from_u64(config.sampling.seed.unwrap_or_default());

    let ranked = sample_and_rank(
        &sampler,
        &evaluator,
        &config.to_sensor_model(),
        config.sampling.num_poses,
        &mut rng,
    )
    .unwrap();

    assert_eq!(ranked.len(), 12);
    assert!(ranked.iter().all(|eval| eval.visibility.len() <= 1));
}

#[test]
fn missing_files_are_io_errors() {
    let path = std::env::temp_dir().join("vantage3d-this-file-does-not-exist.yaml");
    assert!(matches!(
        VantageConfig::load(&path),
        Err(ConfigLoadError::Io(_))
    ));
}
