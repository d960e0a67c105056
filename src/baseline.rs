use crate::error::MetricsError;
use crate::sample::Sample;
use crate::worker_count::WorkerCount;

/// Which sample the speedup of every row is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaselinePolicy {
    /// The sample with the smallest worker count.
    #[default]
    Minimum,
    /// The sample with exactly this many workers; it must be present.
    Exactly(WorkerCount),
}

impl BaselinePolicy {
    pub fn from_option(workers: Option<WorkerCount>) -> Self {
        match workers {
            Some(count) => BaselinePolicy::Exactly(count),
            None => BaselinePolicy::Minimum,
        }
    }

    /// Picks the baseline sample. Expects worker counts to be unique.
    pub fn find(self, samples: &[Sample]) -> Result<Sample, MetricsError> {
        let wanted = match self {
            BaselinePolicy::Minimum => samples
                .iter()
                .map(|s| s.worker_count)
                .min()
                .ok_or(MetricsError::EmptySamples)?,
            BaselinePolicy::Exactly(count) => count,
        };
        samples
            .iter()
            .find(|s| s.worker_count == wanted)
            .copied()
            .ok_or(MetricsError::MissingBaseline(wanted.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(pairs: &[(usize, f64)]) -> Vec<Sample> {
        pairs
            .iter()
            .map(|&(w, t)| Sample::from_seconds(w, t).unwrap())
            .collect()
    }

    #[test]
    fn test_minimum_need_not_be_one() {
        let samples = samples(&[(2, 0.5), (4, 0.3), (8, 0.2)]);
        let baseline = BaselinePolicy::Minimum.find(&samples).unwrap();
        assert_eq!(baseline.worker_count.get(), 2);
    }

    #[test]
    fn test_exactly_reports_missing() {
        let samples = samples(&[(2, 0.5), (4, 0.3)]);
        let result = BaselinePolicy::Exactly(WorkerCount::ONE).find(&samples);
        assert!(matches!(result, Err(MetricsError::MissingBaseline(1))));
    }

    #[test]
    fn test_empty_has_no_minimum() {
        let result = BaselinePolicy::Minimum.find(&[]);
        assert!(matches!(result, Err(MetricsError::EmptySamples)));
    }
}
