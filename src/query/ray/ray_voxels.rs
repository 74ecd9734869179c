use crate::map::{key_at, VoxelKey};
use crate::math::{Point, Real, Vector, DIM};
use crate::query::Ray;
use core::iter::FusedIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TraversalState {
    Start,
    Running,
    Done,
}

/// Iterator through the keys of the grid cells crossed by a ray or a segment.
///
/// This is a 3D digital differential analyzer: starting from the cell
/// containing the origin, it repeatedly steps into the neighbor cell whose
/// boundary the ray crosses first. Keys are yielded in the order the ray
/// enters them, each key exactly once.
///
/// Two flavors exist:
/// - [`VoxelTraversal::segment`] is half-open: the cell containing the
///   segment start is yielded, the cell containing the segment end is not.
///   When both points lie in the same cell, nothing is yielded.
/// - [`VoxelTraversal::ray`] yields the origin cell, then every cell the ray
///   enters at a distance not greater than `max_distance`.
///
/// Keys follow the convention of [`key_at`]: cell `k` spans
/// `[k * resolution, (k + 1) * resolution)` on each axis.
#[derive(Clone, Debug)]
pub struct VoxelTraversal {
    resolution: Real,
    current: VoxelKey,
    last: Option<VoxelKey>,
    step: [i32; DIM],
    t_max: Vector<Real>,
    t_delta: Vector<Real>,
    max_t: Real,
    state: TraversalState,
}

impl VoxelTraversal {
    /// Traverses the cells crossed by the segment `[from, to)`.
    pub fn segment(resolution: Real, from: &Point<Real>, to: &Point<Real>) -> Self {
        let start = key_at(resolution, from);
        let end = key_at(resolution, to);
        let delta = to - from;
        let length = delta.norm();

        if start == end || length <= Real::EPSILON {
            return Self::done(resolution, start);
        }

        Self::init(resolution, from, &(delta / length), length, Some(end))
    }

    /// Traverses the cells crossed by `ray` up to `max_distance` world units
    /// from its origin.
    ///
    /// The norm of `ray.dir` is irrelevant. If `ray.dir` is zero, only the
    /// origin cell is yielded.
    pub fn ray(resolution: Real, ray: &Ray, max_distance: Real) -> Self {
        match ray.dir.try_normalize(Real::EPSILON) {
            Some(dir) => Self::init(resolution, &ray.origin, &dir, max_distance, None),
            None => {
                let mut result = Self::done(resolution, key_at(resolution, &ray.origin));
                result.state = TraversalState::Start;
                result
            }
        }
    }

    /// The size of the cells being traversed.
    pub fn resolution(&self) -> Real {
        self.resolution
    }

    fn done(resolution: Real, key: VoxelKey) -> Self {
        Self {
            resolution,
            current: key,
            last: None,
            step: [0; DIM],
            t_max: Vector::repeat(Real::MAX),
            t_delta: Vector::repeat(Real::MAX),
            max_t: 0.0,
            state: TraversalState::Done,
        }
    }

    fn init(
        resolution: Real,
        origin: &Point<Real>,
        dir: &Vector<Real>,
        max_t: Real,
        last: Option<VoxelKey>,
    ) -> Self {
        let current = key_at(resolution, origin);
        let mut step = [0; DIM];
        let mut t_max = Vector::repeat(Real::MAX);
        let mut t_delta = Vector::repeat(Real::MAX);

        for i in 0..DIM {
            if dir[i] > 0.0 {
                let border = (current[i] + 1) as Real * resolution;
                step[i] = 1;
                t_max[i] = (border - origin[i]) / dir[i];
                t_delta[i] = resolution / dir[i];
            } else if dir[i] < 0.0 {
                let border = current[i] as Real * resolution;
                step[i] = -1;
                t_max[i] = (border - origin[i]) / dir[i];
                t_delta[i] = -resolution / dir[i];
            }
        }

        Self {
            resolution,
            current,
            last,
            step,
            t_max,
            t_delta,
            max_t,
            state: TraversalState::Start,
        }
    }
}

impl Iterator for VoxelTraversal {
    type Item = VoxelKey;

    fn next(&mut self) -> Option<VoxelKey> {
        match self.state {
            TraversalState::Done => None,
            TraversalState::Start => {
                self.state = TraversalState::Running;
                Some(self.current)
            }
            TraversalState::Running => {
                let axis = self.t_max.imin();

                // NOTE: `t > max_t` also catches the case where rounding errors made us
                //       miss the cell containing the segment end.
                if self.step[axis] == 0 || self.t_max[axis] > self.max_t {
                    self.state = TraversalState::Done;
                    return None;
                }

                self.current[axis] += self.step[axis];
                self.t_max[axis] += self.t_delta[axis];

                if self.last == Some(self.current) {
                    self.state = TraversalState::Done;
                    return None;
                }

                Some(self.current)
            }
        }
    }
}

impl FusedIterator for VoxelTraversal {}
