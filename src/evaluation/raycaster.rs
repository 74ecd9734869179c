use super::visibility::RayHits;
use super::{CandidateSet, VisibilitySets};
use crate::map::OccupancyMap;
use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::Ray;
use crate::sensor::{PixelGrid, SensorModel};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How rays are cast to classify the frontier voxels seen from a pose.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CastStrategy {
    /// Casts toward the candidates, furthest first, skipping every candidate
    /// already reached by a previous ray or hidden behind an obstacle met by a
    /// previous ray.
    #[default]
    FurthestFirst,
    /// Casts one ray toward every candidate, independently from the others.
    ///
    /// Rays are cast in parallel if the `parallel` feature is enabled.
    Independent,
    /// Casts one ray through every sampled pixel of the sensor image,
    /// ignoring the candidates.
    ///
    /// Rays are cast in parallel if the `parallel` feature is enabled.
    Pixel(PixelGrid),
}

impl CastStrategy {
    /// Classifies the frontier voxels seen by `sensor` placed at `pose`.
    ///
    /// The `known` map blocks rays and the occupied voxels of the `frontier`
    /// map are the voxels being classified. Whatever the strategy, the returned
    /// sets are disjoint. The visited flags of `candidates` are ignored.
    pub fn cast<K: OccupancyMap, F: OccupancyMap>(
        &self,
        known: &K,
        frontier: &F,
        candidates: &CandidateSet,
        pose: &Isometry<Real>,
        sensor: &SensorModel,
    ) -> VisibilitySets {
        let caster = RayCaster::new(known, frontier, pose, sensor);

        match self {
            CastStrategy::FurthestFirst => caster.furthest_first(candidates),
            CastStrategy::Independent => caster.independent(candidates),
            CastStrategy::Pixel(grid) => caster.pixels(grid),
        }
    }
}

/// Classifies the frontier voxels seen by `sensor` placed at `pose`, casting
/// toward the candidates furthest first.
///
/// This is [`CastStrategy::FurthestFirst`]:
///
/// 1. candidates are processed by decreasing distance to the viewpoint, and
///    skipped if already visited;
/// 2. a ray is cast toward the candidate voxel center and stops at the first
///    obstacle of `known`, or after `sensor.max_range`;
/// 3. along that ray, occupied `frontier` voxels at least `sensor.min_range`
///    away from the viewpoint are classified: the first one is a first-hit, the
///    next ones are subsequent-hits. All of them are marked visited;
/// 4. if an obstacle stopped the ray, the voxels between the obstacle and the
///    candidate are marked visited too since they cannot be seen.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use vantage3d::evaluation::{cast, select};
/// use vantage3d::map::VoxelMap;
/// use vantage3d::sensor::SensorModel;
/// use nalgebra::{Isometry3, Point3};
///
/// let known = VoxelMap::new(0.1);
/// let frontier = VoxelMap::from_occupied_points(
///     0.1,
///     &[Point3::new(0.05, 0.05, 1.05), Point3::new(0.05, 0.05, 1.55)],
/// );
/// let pose = Isometry3::translation(0.05, 0.05, 0.05);
/// let sensor = SensorModel::new(0.2, 3.0, 1.0, 1.0);
///
/// let candidates = select(&frontier, &pose, &sensor);
/// let visibility = cast(&known, &frontier, &candidates, &pose, &sensor);
///
/// // Both voxels are on the same line of sight: the furthest one is only seen behind the nearest.
/// assert!(visibility.first_hit().contains(&Point3::new(0, 0, 10)));
/// assert!(visibility.subsequent_hit().contains(&Point3::new(0, 0, 15)));
/// assert_eq!(visibility.ray_segments().len(), 1);
/// # }
/// ```
pub fn cast<K: OccupancyMap, F: OccupancyMap>(
    known: &K,
    frontier: &F,
    candidates: &CandidateSet,
    pose: &Isometry<Real>,
    sensor: &SensorModel,
) -> VisibilitySets {
    CastStrategy::FurthestFirst.cast(known, frontier, candidates, pose, sensor)
}

struct RayCaster<'a, K, F> {
    known: &'a K,
    frontier: &'a F,
    origin: Point<Real>,
    pose: &'a Isometry<Real>,
    sensor: &'a SensorModel,
}

impl<'a, K: OccupancyMap, F: OccupancyMap> RayCaster<'a, K, F> {
    fn new(
        known: &'a K,
        frontier: &'a F,
        pose: &'a Isometry<Real>,
        sensor: &'a SensorModel,
    ) -> Self {
        Self {
            known,
            frontier,
            origin: pose.translation.vector.into(),
            pose,
            sensor,
        }
    }

    /// The end of a ray: the first obstacle, or the point at `max_range`.
    ///
    /// Returns `None` for rays with a zero direction.
    fn end_point(&self, ray: &Ray) -> Option<(Point<Real>, bool)> {
        let terminus = ray.point_at_distance(self.sensor.max_range)?;

        match self.known.cast_nearest_surface(ray, self.sensor.max_range) {
            Some(hit) => Some((hit, true)),
            None => Some((terminus, false)),
        }
    }

    /// Classifies the frontier voxels crossed by `[start, end)`.
    fn classify(&self, start: &Point<Real>, end: &Point<Real>) -> RayHits {
        let mut hits = RayHits::default();

        for key in self.frontier.traverse_ray(start, end) {
            let center = self.frontier.key_to_coord(&key);

            if na::distance(&self.origin, &center) < self.sensor.min_range
                || !self.frontier.has_occupied_voxel(&key)
            {
                continue;
            }

            if hits.first.is_none() {
                hits.first = Some(key);
            } else {
                hits.subsequent.push(key);
            }
        }

        if hits.first.is_some() {
            hits.segment = Some([*start, *end]);
        }

        hits
    }

    fn furthest_first(&self, candidates: &CandidateSet) -> VisibilitySets {
        let mut pending = candidates.clone();
        pending.reset_visited();
        let mut result = VisibilitySets::new();
        let mut num_rays = 0;

        for id in candidates.furthest_first() {
            let candidate = pending.as_slice()[id];
            if candidate.visited {
                continue;
            }

            let _ = pending.mark_visited(&candidate.key);
            let target = self.frontier.key_to_coord(&candidate.key);
            let ray = Ray::through(self.origin, target);
            let Some((end, blocked)) = self.end_point(&ray) else {
                log::trace!("Skipping the candidate {:?} located at the viewpoint.", candidate.key);
                continue;
            };

            num_rays += 1;
            let hits = self.classify(&self.origin, &end);

            for key in hits.first.iter().chain(hits.subsequent.iter()) {
                let _ = pending.mark_visited(key);
            }

            if let Some(first) = hits.first {
                let _ = result.insert_first_hit(first);
            }
            for key in hits.subsequent {
                let _ = result.insert_subsequent_hit(key);
            }
            if let Some([start, end]) = hits.segment {
                result.record_segment(start, end);
            }

            if blocked {
                for key in self.frontier.traverse_ray(&end, &target) {
                    let _ = pending.mark_visited(&key);
                }
            }
        }

        log::trace!("Cast {} rays for {} candidates.", num_rays, candidates.len());
        result
    }

    fn independent(&self, candidates: &CandidateSet) -> VisibilitySets {
        let targets: Vec<Point<Real>> = candidates
            .furthest_first()
            .into_iter()
            .map(|id| self.frontier.key_to_coord(&candidates.as_slice()[id].key))
            .collect();
        let cast_one = |target: &Point<Real>| {
            let ray = Ray::through(self.origin, *target);
            self.end_point(&ray)
                .map(|(end, _)| self.classify(&self.origin, &end))
                .unwrap_or_default()
        };

        #[cfg(feature = "parallel")]
        let rays: Vec<RayHits> = targets.par_iter().map(cast_one).collect();
        #[cfg(not(feature = "parallel"))]
        let rays: Vec<RayHits> = targets.iter().map(cast_one).collect();

        Self::merge(rays)
    }

    fn pixels(&self, grid: &PixelGrid) -> VisibilitySets {
        let directions: Vec<_> = grid
            .directions(self.sensor)
            .map(|dir| self.pose * dir)
            .collect();
        let cast_one = |dir: &Vector<Real>| {
            let ray = Ray::new(self.origin, *dir);
            let start = ray.point_at(self.sensor.min_range);

            match self.end_point(&ray) {
                Some((end, _))
                    if na::distance(&self.origin, &start)
                        < na::distance(&self.origin, &end) - DEFAULT_EPSILON =>
                {
                    self.classify(&start, &end)
                }
                _ => RayHits::default(),
            }
        };

        #[cfg(feature = "parallel")]
        let rays: Vec<RayHits> = directions.par_iter().map(cast_one).collect();
        #[cfg(not(feature = "parallel"))]
        let rays: Vec<RayHits> = directions.iter().map(cast_one).collect();

        Self::merge(rays)
    }

    fn merge(rays: Vec<RayHits>) -> VisibilitySets {
        let num_rays = rays.len();
        let mut result = VisibilitySets::new();

        for hits in rays {
            result.append_ray(hits);
        }

        let removed = result.remove_overlaps();
        log::trace!(
            "Merged {} independent rays, {} voxels were both first and subsequent hits.",
            num_rays,
            removed
        );
        result
    }
}

