//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN is a density-based clustering algorithm that groups points based on
//! neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinPts**: Minimum neighborhood size (the point itself counts) for a
//!   point to be "core".
//! - **Core point**: Its ε-neighborhood, itself included, has at least MinPts points.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in dataset order. For each unlabeled point P:
//!    - Find neighbors within ε
//!    - If the neighborhood (P included) has fewer than MinPts points, mark P
//!      as noise (may change later)
//!    - Else P is core: open a new cluster and expand from its neighbors
//!
//! 2. Expansion runs a FIFO frontier over one growable queue: each queued point
//!    that turns out to be core appends its own neighbors (minus anything
//!    already queued), and every queued point not yet owned by a cluster is
//!    claimed by the current one. Claiming is what promotes an earlier noise
//!    verdict into border membership.
//!
//! Border points reachable from two clusters go to whichever expansion reaches
//! them first. Together with the fixed scan and queue order this makes the
//! output fully deterministic, but dependent on dataset order — a property of
//! the reference algorithm, not a defect.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) with the brute-force neighbor scan used here.
//! - **Space**: O(n) for labels and the expansion queue.
//!
//! ## When to Use
//!
//! - Clusters have non-convex shapes
//! - Number of clusters unknown
//! - Data has outliers
//! - Clusters have similar density
//!
//! ## Limitations
//!
//! - Struggles with varying densities (consider OPTICS or HDBSCAN)
//! - ε parameter is sensitive and dataset-dependent
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use super::metric::{DistanceMetric, Euclidean};
use super::traits::Clustering;
use crate::error::{Error, Result};

/// Public label for points not absorbed by any cluster.
pub const NOISE: usize = usize::MAX;

/// Per-point state during a run.
///
/// `Noise` is provisional: a later expansion may still claim the point as a
/// border point. The reverse never happens; once in a cluster, a point stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    /// Not yet reached by the outer scan or any expansion frontier.
    Unvisited,
    /// Too sparse to seed a cluster; not (yet) reachable from one either.
    Noise,
    /// Owned by the cluster with this id.
    Cluster(usize),
}

/// DBSCAN clustering engine, generic over the distance metric.
#[derive(Debug, Clone)]
pub struct Dbscan<M = Euclidean> {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f32,
    /// Minimum neighborhood size (point itself included) for core classification.
    min_pts: usize,
    /// Injected distance function.
    metric: M,
}

/// A completed clustering: per-point labels plus cluster member lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbscanFit {
    /// One label per input point, in input order: a cluster id, or [`NOISE`].
    pub labels: Vec<usize>,
    /// Member indices per cluster, ids dense in creation order.
    ///
    /// Member order reflects absorption order and carries no meaning.
    pub clusters: Vec<Vec<usize>>,
}

impl DbscanFit {
    /// Number of clusters discovered.
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Indices of all noise points, in input order.
    pub fn noise_points(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == NOISE)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Dbscan {
    /// Create a new DBSCAN clusterer with the default [`Euclidean`] metric.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum neighborhood size (point itself included) to form
    ///   a dense region.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: Often determined by k-distance plot (k = min_pts - 1).
    /// - `min_pts`: 2 * dimension is a common heuristic. Minimum is 1.
    pub fn new(epsilon: f32, min_pts: usize) -> Self {
        Self {
            epsilon,
            min_pts,
            metric: Euclidean,
        }
    }
}

impl<M> Dbscan<M> {
    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum neighborhood size for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Replace the distance metric.
    ///
    /// Accepts any [`DistanceMetric`], including plain closures over two
    /// coordinate slices.
    pub fn with_metric<M2: DistanceMetric>(self, metric: M2) -> Dbscan<M2> {
        Dbscan {
            epsilon: self.epsilon,
            min_pts: self.min_pts,
            metric,
        }
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl<M: DistanceMetric> Dbscan<M> {
    /// Find all neighbors of `point_idx` within epsilon, in ascending index
    /// order, excluding the point itself.
    fn region_query(&self, data: &[Vec<f32>], point_idx: usize) -> Result<Vec<usize>> {
        let point = &data[point_idx];
        let mut neighbors = Vec::new();
        for (idx, other) in data.iter().enumerate() {
            if idx == point_idx {
                continue;
            }
            if self.metric.distance(point, other)? <= self.epsilon {
                neighbors.push(idx);
            }
        }
        Ok(neighbors)
    }

    /// Expand cluster `cluster_id` from core point `seed`, whose neighbor set
    /// becomes the initial frontier queue.
    ///
    /// The queue is FIFO and deduplicated against everything ever queued, so
    /// each point is enqueued at most once and termination is guaranteed.
    fn expand_cluster(
        &self,
        data: &[Vec<f32>],
        seed: usize,
        mut queue: Vec<usize>,
        labels: &mut [Label],
        clusters: &mut Vec<Vec<usize>>,
        cluster_id: usize,
    ) -> Result<()> {
        // The outer scan only expands from unlabeled points, so the seed is
        // unclaimed here.
        labels[seed] = Label::Cluster(cluster_id);
        clusters[cluster_id].push(seed);

        let mut queued = vec![false; data.len()];
        for &q in &queue {
            queued[q] = true;
        }

        let mut i = 0;
        while i < queue.len() {
            let q = queue[i];

            // Only points never visited before get their own region query; a
            // point already judged noise was queried by the outer scan and is
            // known not to be core.
            if labels[q] == Label::Unvisited {
                let neighbors = self.region_query(data, q)?;
                if neighbors.len() + 1 >= self.min_pts {
                    for n in neighbors {
                        if !queued[n] {
                            queued[n] = true;
                            queue.push(n);
                        }
                    }
                }
            }

            // Claim q unless some cluster already owns it. This promotes an
            // earlier Noise verdict into border membership; points owned by
            // another cluster are left alone (first claim wins).
            if !matches!(labels[q], Label::Cluster(_)) {
                labels[q] = Label::Cluster(cluster_id);
                clusters[cluster_id].push(q);
            }

            i += 1;
        }

        Ok(())
    }

    /// Run the full clustering and return labels plus cluster member lists.
    ///
    /// Parameters are validated before any distance is computed; an empty
    /// dataset yields an empty fit. Any metric failure (e.g.
    /// [`Error::DimensionMismatch`]) aborts the whole run with no partial
    /// result.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<DbscanFit> {
        if self.epsilon < 0.0 || self.epsilon.is_nan() {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be non-negative",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        let n = data.len();
        let mut labels = vec![Label::Unvisited; n];
        let mut clusters: Vec<Vec<usize>> = Vec::new();

        for point_idx in 0..n {
            // May have been claimed (or marked noise) by a prior iteration.
            if labels[point_idx] != Label::Unvisited {
                continue;
            }

            let neighbors = self.region_query(data, point_idx)?;

            // MinPts includes the point itself.
            if neighbors.len() + 1 < self.min_pts {
                labels[point_idx] = Label::Noise;
                continue;
            }

            let cluster_id = clusters.len();
            clusters.push(Vec::new());
            self.expand_cluster(
                data,
                point_idx,
                neighbors,
                &mut labels,
                &mut clusters,
                cluster_id,
            )?;
        }

        let labels = labels
            .into_iter()
            .map(|l| match l {
                Label::Cluster(c) => c,
                _ => NOISE,
            })
            .collect();

        Ok(DbscanFit { labels, clusters })
    }
}

impl<M: DistanceMetric> Clustering for Dbscan<M> {
    /// One label per point: a cluster id, or [`NOISE`] for outliers.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// To get the actual number of clusters, use [`Dbscan::fit`] and
    /// [`DbscanFit::n_clusters`].
    fn n_clusters(&self) -> usize {
        0 // Unknown until fit
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>>;

    /// Check if a label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl<M: DistanceMetric> DbscanExt for Dbscan<M> {
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        let fit = self.fit(data)?;
        Ok(fit
            .labels
            .into_iter()
            .map(|l| if l == NOISE { None } else { Some(l) })
            .collect())
    }
}
