use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

/// Scale at which throughput is reported. One unit applies to every row of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThroughputUnit {
    Flops,
    KiloFlops,
    #[default]
    MegaFlops,
    GigaFlops,
}

impl ThroughputUnit {
    pub fn divisor(self) -> f64 {
        match self {
            ThroughputUnit::Flops => 1.0,
            ThroughputUnit::KiloFlops => 1e3,
            ThroughputUnit::MegaFlops => 1e6,
            ThroughputUnit::GigaFlops => 1e9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThroughputUnit::Flops => "FLOP/s",
            ThroughputUnit::KiloFlops => "KFLOP/s",
            ThroughputUnit::MegaFlops => "MFLOP/s",
            ThroughputUnit::GigaFlops => "GFLOP/s",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mflops() {
        assert_eq!(ThroughputUnit::default(), ThroughputUnit::MegaFlops);
        assert_eq!(ThroughputUnit::default().label(), "MFLOP/s");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ThroughputUnit::GigaFlops).unwrap();
        assert_eq!(json, "\"giga-flops\"");
    }
}
