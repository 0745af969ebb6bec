//! D.I.M.E. needs calculator
//!
//! Debt, Income, Mortgage, and Education needs plus final expenses, split into
//! personal, spouse, and children buckets and compared against existing
//! coverage.

use super::recommendations::{self, RuleSettings};
use super::result::{
    AnalysisResult, ChildrenNeeds, CoverageGaps, ExistingCoverage, PersonalNeeds, SpouseNeeds,
};
use crate::assumptions::PremiumRates;
use crate::error::AnalysisError;
use crate::profile::ClientProfile;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default personal gap above which term life is suggested
pub const DEFAULT_TERM_LIFE_THRESHOLD: f64 = 500_000.0;

/// Configuration for an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Count the mortgage in the debt sub-total and again as mortgage
    /// protection when the client wants it paid off.
    /// When false, a mortgage marked for payoff is counted only once.
    pub double_count_mortgage: bool,

    pub term_life_threshold: f64,

    /// Add the emergency fund recommendation when savings are under half a year of income
    pub emergency_fund_rule: bool,

    pub premium: PremiumRates,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            double_count_mortgage: true,
            term_life_threshold: DEFAULT_TERM_LIFE_THRESHOLD,
            emergency_fund_rule: false,
            premium: PremiumRates::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load a config from JSON; missing keys keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self, AnalysisError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, AnalysisError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| AnalysisError::Config(e.to_string()))?;
        if !config.term_life_threshold.is_finite() || config.term_life_threshold < 0.0 {
            return Err(AnalysisError::Config(format!(
                "term_life_threshold must be a non-negative number, got {}",
                config.term_life_threshold
            )));
        }
        Ok(config)
    }

    /// Mortgage counted once, as mortgage protection
    pub fn single_count_mortgage() -> Self {
        Self {
            double_count_mortgage: false,
            ..Self::default()
        }
    }

    fn rule_settings(&self) -> RuleSettings {
        RuleSettings {
            term_life_threshold: self.term_life_threshold,
            emergency_fund_rule: self.emergency_fund_rule,
        }
    }
}

fn gap(needs: f64, existing: f64) -> f64 {
    (needs - existing).max(0.0)
}

/// Stateless needs calculator; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct NeedsCalculator {
    config: AnalysisConfig,
}

impl NeedsCalculator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Compute the needs analysis for a profile
    pub fn compute(&self, profile: &ClientProfile) -> AnalysisResult {
        let p = profile.normalized();
        let married = p.marital_status.is_married();

        // Debt
        let mut debt_total = p.total_debts();
        let mortgage_protection = if p.pay_off_mortgage {
            if !self.config.double_count_mortgage {
                debt_total -= p.mortgage_balance;
            }
            p.mortgage_balance
        } else {
            0.0
        };

        // Income
        let personal_income_replacement = p.annual_income * p.years_to_replace as f64;
        let spouse_income_replacement = if married {
            p.spouse_annual_income * p.spouse_years_to_replace as f64
        } else {
            0.0
        };

        // Education
        let education_total = p.number_of_children as f64 * p.education_goal_per_child;

        let personal_needs = PersonalNeeds {
            debt: debt_total,
            income_replacement: personal_income_replacement,
            mortgage_protection,
            final_expenses: p.final_expense_goal,
            total: debt_total + personal_income_replacement + mortgage_protection + p.final_expense_goal,
        };
        let spouse_needs = married.then(|| SpouseNeeds {
            income_replacement: spouse_income_replacement,
            final_expenses: p.final_expense_goal,
            total: spouse_income_replacement + p.final_expense_goal,
        });
        let children_needs = ChildrenNeeds {
            education: education_total,
            total: education_total,
        };

        let spouse_total = spouse_needs.as_ref().map_or(0.0, |s| s.total);
        let total_family_needs = personal_needs.total + spouse_total + children_needs.total;

        let spouse_existing = if married { p.spouse_existing_life_insurance } else { 0.0 };
        let existing_coverage = ExistingCoverage {
            personal: p.existing_life_insurance,
            spouse: spouse_existing,
            total: p.existing_life_insurance + spouse_existing,
        };

        let personal_gap = gap(personal_needs.total, existing_coverage.personal);
        let spouse_gap = gap(spouse_total, existing_coverage.spouse);
        let children_gap = gap(children_needs.total, 0.0);
        let aggregate_clamped = gap(total_family_needs, existing_coverage.total);
        let coverage_gaps = CoverageGaps {
            personal: personal_gap,
            spouse: spouse_gap,
            children: children_gap,
            per_bucket_sum: personal_gap + spouse_gap + children_gap,
            aggregate_clamped,
            total: aggregate_clamped,
        };

        let estimated_monthly_premium = self.config.premium.estimate_monthly_premium(
            coverage_gaps.total,
            p.age,
            p.health_status,
        );

        let recommendations =
            recommendations::evaluate(&p, &coverage_gaps, self.config.rule_settings());

        debug!(
            "needs analysis for {}: needs={:.2} existing={:.2} gap={:.2} recommendations={}",
            p.name,
            total_family_needs,
            existing_coverage.total,
            coverage_gaps.total,
            recommendations.len()
        );

        AnalysisResult {
            debt_total,
            personal_income_replacement,
            spouse_income_replacement,
            mortgage_protection,
            education_total,
            personal_needs,
            spouse_needs,
            children_needs,
            total_family_needs,
            existing_coverage,
            coverage_gaps,
            estimated_monthly_premium,
            recommendations,
        }
    }
}

/// Compute with the default configuration
pub fn compute(profile: &ClientProfile) -> AnalysisResult {
    NeedsCalculator::default().compute(profile)
}
