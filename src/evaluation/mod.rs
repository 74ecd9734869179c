//! Evaluation of the information revealed by a sensor pose.
//!
//! The stages of an evaluation can be run separately:
//!
//! * [`select`] (or [`select_points`]) gathers the frontier voxels inside the frustum;
//! * [`cast`] (or [`CastStrategy::cast`]) classifies them by visibility;
//! * [`score`] turns the classification into a normalized score.
//!
//! [`PoseEvaluator`] runs all of them against shared map snapshots.

pub use self::candidate::{CandidateSet, CandidateVoxel};
pub use self::error::EvaluationError;
pub use self::evaluator::{Evaluation, PoseEvaluator};
pub use self::raycaster::{cast, CastStrategy};
pub use self::scorer::{information_score, score, ExplorationBounds, Score, SUBSEQUENT_HIT_WEIGHT};
pub use self::selector::{select, select_points};
pub use self::visibility::VisibilitySets;

mod candidate;
mod error;
mod evaluator;
mod raycaster;
mod scorer;
mod selector;
mod visibility;
