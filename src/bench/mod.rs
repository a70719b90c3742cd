//! Benchmark and verification driver
//!
//! Generates seeded inputs, times every selected strategy, and checks each
//! one against the scan-based reference:
//!
//! 1. Build the input (uniform values, or a ±1 walk for strategies that
//!    need one)
//! 2. Time preprocessing and `queries` random queries
//! 3. Check the measured instance against [`NoPreRmq`] on the same number
//!    of random ranges

mod data;
mod timing;
mod verify;

pub use data::{plus_minus_data, random_tree, sample_range, uniform_data};
pub use timing::{format_duration, measure, Timing};
pub use verify::{verify_agreement, verify_all_ranges, VerifyError};

use crate::rmq::{NoPreRmq, RmqKind};
use thiserror::Error;
use tracing::{info, warn};

/// Errors in the benchmark configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The input must hold at least one element.
    #[error("data size must be greater than zero")]
    EmptyData,

    /// Nothing to run.
    #[error("no strategy selected")]
    NoStrategy,
}

/// Parameters of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of elements in the generated sequence.
    pub data_size: usize,

    /// Number of random queries, both for timing and for verification.
    pub queries: usize,

    /// Seed for data and query generation.
    pub seed: u64,

    /// Strategies to run, in order.
    pub strategies: Vec<RmqKind>,

    /// Largest input the quadratic [`RmqKind::Naive`] table is built for.
    pub naive_limit: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_size: 20_000,
            queries: 1_000_000,
            seed: 19_082_017,
            strategies: RmqKind::ALL.to_vec(),
            naive_limit: 5_000,
        }
    }
}

impl BenchConfig {
    /// Check the configuration before running it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_size == 0 {
            return Err(ConfigError::EmptyData);
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategy);
        }
        Ok(())
    }

    /// Whether `kind` is skipped under this configuration.
    pub fn skips(&self, kind: RmqKind) -> bool {
        kind == RmqKind::Naive && self.data_size > self.naive_limit
    }
}

/// Outcome for one strategy.
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// Strategy measured.
    pub kind: RmqKind,
    /// Phase timings.
    pub timing: Timing,
    /// Result of the cross-check against the reference; `None` for the
    /// reference itself.
    pub verified: Option<Result<(), VerifyError>>,
}

/// Run every strategy of `config` and collect the reports. Skipped
/// strategies produce no report.
pub fn run(config: &BenchConfig) -> Result<Vec<BenchReport>, ConfigError> {
    config.validate()?;

    let uniform = uniform_data(config.data_size, config.seed);
    let walk = plus_minus_data(config.data_size, config.seed);

    let mut reports = Vec::with_capacity(config.strategies.len());
    for &kind in &config.strategies {
        if config.skips(kind) {
            warn!(
                %kind,
                size = config.data_size,
                limit = config.naive_limit,
                "skipping quadratic strategy"
            );
            continue;
        }

        let data: &[i64] = if kind.requires_plus_minus() {
            &walk
        } else {
            &uniform
        };

        let mut rmq = kind.instantiate(data);
        let timing = measure(rmq.as_mut(), data.len(), config.queries, config.seed);

        let verified = (kind != RmqKind::NoPre).then(|| {
            let reference = NoPreRmq::new(data);
            verify_agreement(data, &reference, rmq.as_ref(), config.queries, config.seed)
        });

        match &verified {
            Some(Err(err)) => warn!(%kind, %err, "verification failed"),
            _ => info!(
                %kind,
                preprocess_ms = timing.preprocess.as_millis() as u64,
                query_ms = timing.query.as_millis() as u64,
                "strategy measured"
            ),
        }

        reports.push(BenchReport {
            kind,
            timing,
            verified,
        });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_driver() {
        let config = BenchConfig::default();
        assert_eq!(config.data_size, 20_000);
        assert_eq!(config.queries, 1_000_000);
        assert_eq!(config.seed, 19_082_017);
        assert!(config.validate().is_ok());
        assert!(config.skips(RmqKind::Naive));
        assert!(!config.skips(RmqKind::Cartesian));
    }

    #[test]
    fn rejects_empty_configurations() {
        let config = BenchConfig {
            data_size: 0,
            ..BenchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyData));

        let config = BenchConfig {
            strategies: Vec::new(),
            ..BenchConfig::default()
        };
        assert_eq!(run(&config).unwrap_err(), ConfigError::NoStrategy);
    }

    #[test]
    fn small_run_verifies_every_strategy() {
        let config = BenchConfig {
            data_size: 600,
            queries: 2_000,
            seed: 42,
            ..BenchConfig::default()
        };
        let reports = run(&config).unwrap();
        assert_eq!(reports.len(), RmqKind::ALL.len());
        assert!(reports[0].verified.is_none());
        for report in &reports[1..] {
            assert_eq!(report.verified, Some(Ok(())), "{}", report.kind);
        }
    }
}
