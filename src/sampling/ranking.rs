use super::PoseSampler;
use crate::evaluation::{Evaluation, EvaluationError, PoseEvaluator};
use crate::map::OccupancyMap;
use crate::math::{Isometry, Real};
use crate::sensor::SensorModel;
use ordered_float::OrderedFloat;
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates every pose and sorts the results by decreasing score.
///
/// Poses with equal scores keep their relative order. The first error met
/// aborts the ranking.
pub fn rank_poses<M: OccupancyMap>(
    evaluator: &PoseEvaluator<M>,
    poses: &[Isometry<Real>],
    sensor: &SensorModel,
) -> Result<Vec<Evaluation>, EvaluationError> {
    #[cfg(feature = "parallel")]
    let evaluations: Result<Vec<_>, _> = poses
        .par_iter()
        .map(|pose| evaluator.evaluate(pose, sensor))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let evaluations: Result<Vec<_>, _> = poses
        .iter()
        .map(|pose| evaluator.evaluate(pose, sensor))
        .collect();

    let mut evaluations = evaluations?;
    evaluations.sort_by_key(|eval| core::cmp::Reverse(OrderedFloat(eval.score.value)));

    if let Some(best) = evaluations.first() {
        log::debug!(
            "Ranked {} poses, best score {} at {:?}.",
            evaluations.len(),
            best.score.value,
            best.pose.translation.vector
        );
    }

    Ok(evaluations)
}

/// Draws `n` poses from `sampler`, then ranks them with [`rank_poses`].
pub fn sample_and_rank<M, S, R>(
    sampler: &S,
    evaluator: &PoseEvaluator<M>,
    sensor: &SensorModel,
    n: usize,
    rng: &mut R,
) -> Result<Vec<Evaluation>, EvaluationError>
where
    M: OccupancyMap,
    S: PoseSampler + ?Sized,
    R: Rng + ?Sized,
{
    let poses = sampler.sample_n(n, rng);
    rank_poses(evaluator, &poses, sensor)
}
