use crate::error::MetricsError;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Number of threads or processes a sample was measured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerCount {
    inner: NonZeroUsize,
}

impl WorkerCount {
    pub const ONE: WorkerCount = WorkerCount {
        inner: NonZeroUsize::MIN,
    };

    pub fn new(count: usize) -> Result<Self, MetricsError> {
        NonZeroUsize::new(count)
            .map(|inner| Self { inner })
            .ok_or(MetricsError::ZeroWorkers)
    }

    pub fn get(self) -> usize {
        self.inner.get()
    }

    pub fn as_f64(self) -> f64 {
        self.inner.get() as f64
    }
}

impl TryFrom<usize> for WorkerCount {
    type Error = MetricsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        WorkerCount::new(value)
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward so width and alignment flags apply
        fmt::Display::fmt(&self.inner, f)
    }
}
