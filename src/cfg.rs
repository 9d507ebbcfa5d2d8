use crate::ellipsoid::Ellipsoid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn default_parallel() -> bool {
    false
}

fn default_parallel_threshold() -> usize {
    16_384
}

/// [crate::converter::Converter] parametrization
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchConfig {
    /// Reference ellipsoid all geodetic coordinates relate to
    #[cfg_attr(feature = "serde", serde(default))]
    pub ellipsoid: Ellipsoid,
    /// Spread large geodetic to ECEF batches over the rayon thread pool.
    /// Only effective when compiled with the "parallel" feature.
    #[cfg_attr(feature = "serde", serde(default = "default_parallel"))]
    pub parallel: bool,
    /// Minimal number of points for a batch to be processed in parallel
    #[cfg_attr(feature = "serde", serde(default = "default_parallel_threshold"))]
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::default(),
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl BatchConfig {
    /// Returns a copy of Self using given [Ellipsoid]
    pub fn with_ellipsoid(&self, ellipsoid: Ellipsoid) -> Self {
        let mut s = *self;
        s.ellipsoid = ellipsoid;
        s
    }
    /// Returns a copy of Self with parallel processing enabled
    /// for batches of `threshold` points or more
    pub fn with_parallel_threshold(&self, threshold: usize) -> Self {
        let mut s = *self;
        s.parallel = true;
        s.parallel_threshold = threshold;
        s
    }
}
