//! Density-based clustering for dense vectors.
//!
//! ## DBSCAN
//!
//! DBSCAN (Ester et al., 1996) groups points by neighborhood density. Two
//! parameters control it:
//!
//! - **epsilon**: the neighborhood radius
//! - **min_pts**: how many points (the point itself included) a neighborhood
//!   must contain for its center to count as a *core point*
//!
//! Clusters grow outward from core points by absorbing everything
//! density-reachable from them; points reachable from no core point are labeled
//! noise. The number of clusters is discovered, not configured, and clusters may
//! have arbitrary, non-convex shapes.
//!
//! A point on the rim of a cluster (a *border point*) may be within epsilon of
//! cores from two different clusters. It is claimed by whichever cluster's
//! expansion reaches it first, so border assignments depend on dataset order.
//! This matches the reference algorithm.
//!
//! ## Distance metrics
//!
//! The engine never looks at coordinates directly; it goes through a
//! [`DistanceMetric`]. The default is [`Euclidean`], and any
//! `Fn(&[f32], &[f32]) -> f32` can be substituted.
//!
//! ## Usage
//!
//! ```rust
//! use denscan::cluster::{Clustering, Dbscan, NOISE};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! let labels = Dbscan::new(0.5, 2).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]); // First two together
//! assert_eq!(labels[2], labels[3]); // Last pair together
//! assert_ne!(labels[0], labels[2]); // In separate clusters
//! assert_eq!(labels[4], NOISE);     // The outlier is noise
//! ```

mod dbscan;
mod metric;
mod traits;

pub use dbscan::{Dbscan, DbscanExt, DbscanFit, NOISE};
pub use metric::{DistanceMetric, Euclidean};
pub use traits::Clustering;
