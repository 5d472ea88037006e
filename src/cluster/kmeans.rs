//! Naive Lloyd's k-means over Lab observations
//!
//! This is deliberately the naive algorithm, not an accelerated variant:
//! no k-d trees, no triangle-inequality pruning. Palette sizes are small
//! (typically 20 or fewer) and iteration counts are bounded, so the dominant
//! cost of O(pixels x k) per iteration is acceptable for single-image batch
//! processing.
//!
//! Cluster centers are seeded from randomly chosen observations, so the same
//! image can yield different (equally valid) centers across unseeded runs.
//! Use [`KMeans::with_seed`] for reproducible results.

use rand::{rngs::StdRng, SeedableRng};

use crate::cluster::Observation;
use crate::color::{distance_squared, LabColor};
use crate::constants::clustering;
use crate::error::{PaletteError, Result};

/// A cluster center together with the observations assigned to it
#[derive(Debug, Clone)]
pub struct Cluster {
    center: LabColor,
    observations: Vec<Observation>,
}

impl Cluster {
    pub(crate) fn new(center: LabColor) -> Self {
        Self {
            center,
            observations: Vec::new(),
        }
    }

    /// The cluster center (mean of member observations)
    pub fn center(&self) -> LabColor {
        self.center
    }

    /// Observations assigned to this cluster in the final iteration
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of member observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the cluster received no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// K-means partitioner with a configurable convergence policy
#[derive(Debug, Clone)]
pub struct KMeans {
    delta_threshold: f64,
    max_iterations: usize,
    seed: Option<u64>,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new()
    }
}

impl KMeans {
    /// Create a partitioner with default convergence parameters
    /// (delta threshold 0.05, iteration cap 100)
    pub fn new() -> Self {
        Self {
            delta_threshold: clustering::DELTA_THRESHOLD,
            max_iterations: clustering::MAX_ITERATIONS,
            seed: None,
        }
    }

    /// Create a partitioner with custom convergence parameters
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidParameter` if `delta_threshold` is
    /// outside the open interval (0, 1) or `max_iterations` is zero.
    pub fn with_options(delta_threshold: f64, max_iterations: usize) -> Result<Self> {
        if !(delta_threshold > 0.0 && delta_threshold < 1.0) {
            return Err(PaletteError::invalid_parameter(
                "delta_threshold",
                delta_threshold,
            ));
        }
        if max_iterations == 0 {
            return Err(PaletteError::invalid_parameter(
                "max_iterations",
                max_iterations,
            ));
        }
        Ok(Self {
            delta_threshold,
            max_iterations,
            seed: None,
        })
    }

    /// Seed the random center initialization for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Partition observations into exactly `k` clusters
    ///
    /// Runs naive Lloyd's k-means: random center seeding, squared-distance
    /// assignment with lowest-index tie-breaking, coordinate-wise mean
    /// updates. Iteration stops once the fraction of reassigned observations
    /// drops below the delta threshold, or at the iteration cap, in which
    /// case the current clusters are returned as a best-effort result (a
    /// warning is logged, not an error).
    ///
    /// # Errors
    ///
    /// - `PaletteError::EmptyInput` if `observations` is empty
    /// - `PaletteError::InvalidParameter` if `k` is zero or greater than the
    ///   number of observations
    pub fn partition(&self, observations: &[Observation], k: usize) -> Result<Vec<Cluster>> {
        self.partition_with_trace(observations, k)
            .map(|(clusters, _)| clusters)
    }

    /// Partition and also return the per-iteration reassignment counts.
    ///
    /// The trace holds, for each iteration that ran, how many observations
    /// changed cluster assignment during that iteration.
    fn partition_with_trace(
        &self,
        observations: &[Observation],
        k: usize,
    ) -> Result<(Vec<Cluster>, Vec<usize>)> {
        if k == 0 {
            return Err(PaletteError::invalid_parameter("k", k));
        }
        if observations.is_empty() {
            return Err(PaletteError::EmptyInput);
        }
        if k > observations.len() {
            return Err(PaletteError::invalid_parameter(
                "k",
                format!("{} (only {} observations)", k, observations.len()),
            ));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Seed centers from k distinct observations, sampled uniformly
        // without replacement. Distinct indices may still carry duplicate
        // colors; duplicate centers simply leave later clusters empty.
        let mut centers: Vec<LabColor> = rand::seq::index::sample(&mut rng, observations.len(), k)
            .into_iter()
            .map(|i| observations[i])
            .collect();

        // usize::MAX marks "not yet assigned" so the first pass counts every
        // observation as reassigned.
        let mut assignments = vec![usize::MAX; observations.len()];
        let total = observations.len() as f64;
        let mut trace = Vec::new();
        let mut converged = false;

        for iteration in 1..=self.max_iterations {
            // Assignment step
            let mut changed = 0usize;
            for (assignment, obs) in assignments.iter_mut().zip(observations) {
                let nearest = nearest_center(obs, &centers);
                if *assignment != nearest {
                    *assignment = nearest;
                    changed += 1;
                }
            }

            // Update step: each center becomes the mean of its members.
            // A cluster with no members keeps its previous center so the
            // division below can never produce NaN.
            let mut sums = vec![[0.0f64; 3]; k];
            let mut counts = vec![0usize; k];
            for (obs, &cluster) in observations.iter().zip(&assignments) {
                sums[cluster][0] += obs.l;
                sums[cluster][1] += obs.a;
                sums[cluster][2] += obs.b;
                counts[cluster] += 1;
            }
            for (idx, center) in centers.iter_mut().enumerate() {
                if counts[idx] > 0 {
                    let n = counts[idx] as f64;
                    *center = LabColor::new(sums[idx][0] / n, sums[idx][1] / n, sums[idx][2] / n);
                }
            }

            trace.push(changed);

            let fraction = changed as f64 / total;
            log::debug!(
                "k-means iteration {}: {} of {} observations reassigned ({:.4})",
                iteration,
                changed,
                observations.len(),
                fraction
            );

            if fraction < self.delta_threshold {
                converged = true;
                break;
            }
        }

        if !converged {
            log::warn!(
                "k-means hit the iteration cap ({}) before the reassignment fraction \
                 dropped below {}; returning best-effort clusters",
                self.max_iterations,
                self.delta_threshold
            );
        }

        let mut clusters: Vec<Cluster> = centers.into_iter().map(Cluster::new).collect();
        for (obs, &cluster) in observations.iter().zip(&assignments) {
            clusters[cluster].observations.push(*obs);
        }
        Ok((clusters, trace))
    }
}

/// Index of the nearest center by squared Lab distance.
/// Strict comparison keeps the lowest index on ties.
fn nearest_center(obs: &Observation, centers: &[LabColor]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (idx, center) in centers.iter().enumerate() {
        let d = distance_squared(obs, center);
        if d < best_distance {
            best_distance = d;
            best = idx;
        }
    }
    best
}
