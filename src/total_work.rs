use crate::error::MetricsError;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Floating-point operations performed by one run, independent of worker count.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TotalWork {
    flops: f64,
}

impl TotalWork {
    pub fn new(flops: f64) -> Result<Self, MetricsError> {
        if flops.is_finite() && flops > 0.0 {
            Ok(Self { flops })
        } else {
            Err(MetricsError::NonPositiveWork(flops))
        }
    }

    /// Work of a kernel that performs `flops_per_point` operations on each cell of an `n` x `m` grid.
    pub fn from_grid(n: usize, m: usize, flops_per_point: f64) -> Result<Self, MetricsError> {
        Self::new(flops_per_point * n as f64 * m as f64)
    }

    pub fn flops(self) -> f64 {
        self.flops
    }
}

impl TryFrom<f64> for TotalWork {
    type Error = MetricsError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        TotalWork::new(value)
    }
}

impl From<TotalWork> for f64 {
    fn from(work: TotalWork) -> Self {
        work.flops
    }
}

impl fmt::Display for TotalWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} FLOP", self.flops)
    }
}
