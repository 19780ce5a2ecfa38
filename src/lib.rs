//! Density clustering primitives.
//!
//! `denscan` is a small library implementing DBSCAN over dense vectors: given a
//! neighborhood radius and a minimum neighborhood size, it partitions points into
//! clusters plus a noise set, without requiring the number of clusters up front.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Dbscan`]: the clustering engine, with a full fit ([`DbscanFit`]) or plain
//!   per-point labels
//! - [`DistanceMetric`]: an injectable distance function ([`Euclidean`] by default)

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    Clustering, Dbscan, DbscanExt, DbscanFit, DistanceMetric, Euclidean, NOISE,
};
pub use error::{Error, Result};
