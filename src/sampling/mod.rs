//! Generation and ranking of candidate sensor poses.
//!
//! Samplers only produce poses. They are composed with a
//! [`PoseEvaluator`](crate::evaluation::PoseEvaluator) by [`rank_poses`] and
//! [`sample_and_rank`].

pub use self::look_at::look_at;
pub use self::ranking::{rank_poses, sample_and_rank};
pub use self::spherical_crown::{PoseSampler, SamplingError, SphericalCrownSampler};

mod look_at;
mod ranking;
mod spherical_crown;
