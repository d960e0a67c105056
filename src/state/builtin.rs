use crate::sample::Sample;
use crate::state::experiments::Experiment;
use crate::state::experiments::SampleSource;
use crate::throughput_unit::ThroughputUnit;
use crate::total_work::TotalWork;

/// Grid rows of the exercise 4 kernel
pub const JACOBI_N: usize = 40_000;
/// Grid columns of the exercise 4 kernel
pub const JACOBI_M: usize = 600;
/// One multiply and one add per inner loop iteration
pub const JACOBI_FLOPS_PER_POINT: f64 = 2.0;

const THREADS: [usize; 5] = [1, 2, 4, 8, 16];

const VARIANTS: [(&str, &str, [f64; 5]); 3] = [
    (
        "jacobi-v1-barrier",
        "Version 1 (Implicit Barrier)",
        [0.025120, 0.020921, 0.012878, 0.007628, 0.004436],
    ),
    (
        "jacobi-v2-dynamic-nowait",
        "Version 2 (Dynamic + Nowait)",
        [0.025481, 0.018460, 0.011270, 0.007245, 0.005515],
    ),
    (
        "jacobi-v3-static-nowait",
        "Version 3 (Static + Nowait)",
        [0.023508, 0.018151, 0.013112, 0.007491, 0.004271],
    ),
];

/// Measured timings of the three barrier and scheduling variants of the exercise 4 kernel.
pub fn builtin_experiments() -> Vec<Experiment> {
    let work = TotalWork::from_grid(JACOBI_N, JACOBI_M, JACOBI_FLOPS_PER_POINT)
        .expect("grid constants describe positive work");
    VARIANTS
        .iter()
        .map(|(name, title, times)| Experiment {
            name: name.to_string(),
            title: Some(title.to_string()),
            total_work: work,
            unit: ThroughputUnit::MegaFlops,
            source: SampleSource::Inline(
                THREADS
                    .iter()
                    .zip(times)
                    .map(|(&workers, &seconds)| {
                        Sample::from_seconds(workers, seconds)
                            .expect("built-in timings are positive")
                    })
                    .collect(),
            ),
        })
        .collect()
}
