use super::{
    score, select, select_points, CastStrategy, EvaluationError, ExplorationBounds, Score,
    VisibilitySets,
};
use crate::map::{MapKind, MapSnapshots, OccupancyMap};
use crate::math::{Isometry, Real};
use crate::sensor::SensorModel;

/// The outcome of the evaluation of a pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// The evaluated pose.
    pub pose: Isometry<Real>,
    /// The information score of the pose.
    pub score: Score,
    /// The frontier voxels the pose would reveal.
    pub visibility: VisibilitySets,
    /// The number of candidates found inside the frustum.
    pub candidates_considered: usize,
}

/// Evaluates sensor poses against the latest map snapshots.
///
/// Each call to [`PoseEvaluator::evaluate`] takes a consistent snapshot of the
/// maps when it starts, so the maps can be refreshed through
/// [`PoseEvaluator::maps`] from another thread at any time.
pub struct PoseEvaluator<M> {
    maps: MapSnapshots<M>,
    bounds: ExplorationBounds,
    strategy: CastStrategy,
}

impl<M: OccupancyMap> PoseEvaluator<M> {
    /// An evaluator without maps, normalizing scores with `bounds`.
    pub fn new(bounds: ExplorationBounds) -> Self {
        Self::with_snapshots(MapSnapshots::new(), bounds)
    }

    /// An evaluator reading the given map snapshots.
    pub fn with_snapshots(maps: MapSnapshots<M>, bounds: ExplorationBounds) -> Self {
        Self {
            maps,
            bounds,
            strategy: CastStrategy::default(),
        }
    }

    /// Sets the raycasting strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: CastStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The map snapshots read by this evaluator.
    pub fn maps(&self) -> &MapSnapshots<M> {
        &self.maps
    }

    /// The exploration bounds used to normalize scores.
    pub fn bounds(&self) -> &ExplorationBounds {
        &self.bounds
    }

    /// Replaces the exploration bounds.
    pub fn set_bounds(&mut self, bounds: ExplorationBounds) {
        self.bounds = bounds;
    }

    /// The raycasting strategy.
    pub fn strategy(&self) -> CastStrategy {
        self.strategy
    }

    /// Evaluates how much unobserved space `sensor` would reveal from `pose`.
    ///
    /// Fails without casting any ray if the sensor model is malformed, if a map
    /// is missing, or if the exploration bounds are degenerate, checked in this
    /// order. A pose seeing no frontier voxel gets a zero score.
    pub fn evaluate(
        &self,
        pose: &Isometry<Real>,
        sensor: &SensorModel,
    ) -> Result<Evaluation, EvaluationError> {
        let result = self.try_evaluate(pose, sensor);

        if let Err(err) = &result {
            log::warn!("Refusing to evaluate pose {:?}: {}", pose.translation.vector, err);
        }

        result
    }

    fn try_evaluate(
        &self,
        pose: &Isometry<Real>,
        sensor: &SensorModel,
    ) -> Result<Evaluation, EvaluationError> {
        sensor.validate()?;

        let snapshot = self.maps.snapshot();
        let known = snapshot
            .known
            .ok_or(EvaluationError::MissingMap(MapKind::Known))?;
        let frontier = snapshot
            .frontier
            .ok_or(EvaluationError::MissingMap(MapKind::Frontier))?;

        let _ = self.bounds.weighted_volume(known.resolution())?;

        let candidates = match &snapshot.centroids {
            Some(centroids) => select_points(&*frontier, centroids, pose, sensor),
            None => select(&*frontier, pose, sensor),
        };

        let visibility = self
            .strategy
            .cast(&*known, &*frontier, &candidates, pose, sensor);
        let score = score(&*known, &visibility, &self.bounds)?;

        log::debug!(
            "Evaluated pose {:?}: {} candidates, {} first hits, {} subsequent hits, score {}.",
            pose.translation.vector,
            candidates.len(),
            visibility.first_hit().len(),
            visibility.subsequent_hit().len(),
            score.value
        );

        Ok(Evaluation {
            pose: *pose,
            score,
            visibility,
            candidates_considered: candidates.len(),
        })
    }
}
