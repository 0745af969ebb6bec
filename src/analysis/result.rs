//! Output structures for a needs analysis

use serde::{Deserialize, Serialize};

/// Needs carried by the primary client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalNeeds {
    pub debt: f64,
    pub income_replacement: f64,
    pub mortgage_protection: f64,
    pub final_expenses: f64,
    pub total: f64,
}

/// Needs carried by the spouse (married households only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpouseNeeds {
    pub income_replacement: f64,
    pub final_expenses: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildrenNeeds {
    pub education: f64,
    pub total: f64,
}

/// Life insurance already in force
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingCoverage {
    pub personal: f64,
    pub spouse: f64,
    pub total: f64,
}

/// Shortfall between needs and existing coverage, never negative
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageGaps {
    pub personal: f64,
    pub spouse: f64,
    pub children: f64,

    /// personal + spouse + children, each clamped before summing
    pub per_bucket_sum: f64,

    /// max(0, total family needs - total existing coverage)
    pub aggregate_clamped: f64,

    /// Headline gap; equal to `aggregate_clamped`
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationKind {
    Coverage,
    Education,
    Strategy,
    Savings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// One actionable recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// Complete needs analysis for one household
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub debt_total: f64,
    pub personal_income_replacement: f64,
    pub spouse_income_replacement: f64,
    pub mortgage_protection: f64,
    pub education_total: f64,

    pub personal_needs: PersonalNeeds,
    /// Present only for married households
    pub spouse_needs: Option<SpouseNeeds>,
    pub children_needs: ChildrenNeeds,
    pub total_family_needs: f64,

    pub existing_coverage: ExistingCoverage,
    pub coverage_gaps: CoverageGaps,

    /// Monthly premium estimate for the total gap
    pub estimated_monthly_premium: f64,

    pub recommendations: Vec<Recommendation>,
}

impl AnalysisResult {
    /// Sum of the needs buckets present for the household
    pub fn bucket_totals_sum(&self) -> f64 {
        self.personal_needs.total
            + self.spouse_needs.as_ref().map_or(0.0, |s| s.total)
            + self.children_needs.total
    }

    pub fn is_underinsured(&self) -> bool {
        self.coverage_gaps.total > 0.0
    }

    /// First recommendation with the given title
    pub fn recommendation(&self, title: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.title == title)
    }
}
