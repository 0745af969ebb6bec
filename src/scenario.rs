//! Batch runner for analyzing many households
//!
//! Holds one calculator and reuses it across profiles and alternative configs.

use crate::analysis::{AnalysisConfig, AnalysisResult, NeedsCalculator};
use crate::profile::ClientProfile;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Totals across a batch of analyses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub households: usize,
    pub underinsured: usize,
    pub total_needs: f64,
    pub total_existing: f64,
    pub total_gap: f64,
}

/// Runs needs analyses with a shared configuration
///
/// # Example
/// ```
/// use needs_analysis::{BatchRunner, ClientProfile};
///
/// let runner = BatchRunner::new();
/// let profiles = vec![ClientProfile::new("A", 30, 50_000.0)];
/// let results = runner.run_batch(&profiles);
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    calculator: NeedsCalculator,
}

impl BatchRunner {
    /// Runner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            calculator: NeedsCalculator::new(config),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.calculator.config()
    }

    pub fn run(&self, profile: &ClientProfile) -> AnalysisResult {
        self.calculator.compute(profile)
    }

    /// Analyze all profiles in parallel; output order matches input order
    pub fn run_batch(&self, profiles: &[ClientProfile]) -> Vec<AnalysisResult> {
        info!("running needs analysis for {} profiles", profiles.len());
        profiles
            .par_iter()
            .map(|p| self.calculator.compute(p))
            .collect()
    }

    /// Analyze one profile under several configurations
    pub fn run_scenarios(
        &self,
        profile: &ClientProfile,
        configs: &[AnalysisConfig],
    ) -> Vec<AnalysisResult> {
        configs
            .iter()
            .map(|config| NeedsCalculator::new(config.clone()).compute(profile))
            .collect()
    }

    pub fn summarize(results: &[AnalysisResult]) -> BatchSummary {
        results.iter().fold(BatchSummary::default(), |mut acc, r| {
            acc.households += 1;
            if r.is_underinsured() {
                acc.underinsured += 1;
            }
            acc.total_needs += r.total_family_needs;
            acc.total_existing += r.existing_coverage.total;
            acc.total_gap += r.coverage_gaps.total;
            acc
        })
    }
}
