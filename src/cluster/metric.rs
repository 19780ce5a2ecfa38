//! Distance metrics for neighbor queries.
//!
//! The clustering engine treats distance as an external collaborator: a pure
//! function of two points that is non-negative and symmetric, and zero for
//! identical points. Swapping the metric changes which points are neighbors
//! without touching the engine.

use crate::error::{Error, Result};

/// A distance function, injectable into [`Dbscan`](super::Dbscan).
///
/// Implementations must be pure: same inputs, same output, no side effects.
pub trait DistanceMetric {
    /// Distance between `a` and `b`. Non-negative; symmetric.
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32>;
}

/// Straight-line (L2) distance. The default metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        if a.len() != b.len() {
            return Err(Error::DimensionMismatch {
                expected: a.len(),
                found: b.len(),
            });
        }
        Ok(a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f32>()
            .sqrt())
    }
}

/// Plain functions and closures work directly as (infallible) metrics.
impl<F> DistanceMetric for F
where
    F: Fn(&[f32], &[f32]) -> f32,
{
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        Ok(self(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_2d() {
        let d = Euclidean.distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_euclidean_identical_points() {
        let d = Euclidean.distance(&[1.5, -2.0], &[1.5, -2.0]).unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_euclidean_symmetric() {
        let a = [0.3, 1.2, -4.0];
        let b = [2.0, -0.5, 1.1];
        let ab = Euclidean.distance(&a, &b).unwrap();
        let ba = Euclidean.distance(&b, &a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_euclidean_dimension_mismatch() {
        let err = Euclidean.distance(&[0.0, 0.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_closure_as_metric() {
        let manhattan = |a: &[f32], b: &[f32]| {
            a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum::<f32>()
        };
        let d = manhattan.distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert_eq!(d, 7.0);
    }
}
