//! Rule-based recommendations evaluated against computed gaps
//!
//! Every rule is an independent predicate; all that apply fire, in the order
//! they are listed in `evaluate`.

use super::result::{CoverageGaps, Priority, Recommendation, RecommendationKind};
use crate::profile::ClientProfile;

pub const PERSONAL_COVERAGE: &str = "Personal Life Insurance Coverage";
pub const SPOUSE_COVERAGE: &str = "Spouse Life Insurance Coverage";
pub const CHILDREN_EDUCATION: &str = "Children's Education Funding";
pub const EDUCATION_STRATEGY: &str = "Education Funding Strategy";
pub const EMERGENCY_FUND: &str = "Emergency Fund Priority";

/// Thresholds and switches for rule evaluation
#[derive(Debug, Clone, Copy)]
pub struct RuleSettings {
    /// Personal gaps above this suggest term life; at or below, permanent
    pub term_life_threshold: f64,
    pub emergency_fund_rule: bool,
}

fn personal_coverage(gap: f64, term_life_threshold: f64) -> Recommendation {
    let description = if gap > term_life_threshold {
        "A 20-30 year term life policy provides substantial coverage at an affordable premium."
    } else {
        "Whole or universal life insurance provides permanent protection with cash value accumulation."
    };
    Recommendation {
        kind: RecommendationKind::Coverage,
        title: PERSONAL_COVERAGE.to_string(),
        description: description.to_string(),
        priority: Priority::High,
        amount: Some(gap),
    }
}

fn spouse_coverage(gap: f64) -> Recommendation {
    Recommendation {
        kind: RecommendationKind::Coverage,
        title: SPOUSE_COVERAGE.to_string(),
        description: "Cover the spouse's income and final expenses so the household stays protected if either earner dies.".to_string(),
        priority: Priority::High,
        amount: Some(gap),
    }
}

fn children_education(gap: f64) -> Recommendation {
    Recommendation {
        kind: RecommendationKind::Education,
        title: CHILDREN_EDUCATION.to_string(),
        description: "Dedicated coverage to fund each child's education goal.".to_string(),
        priority: Priority::Medium,
        amount: Some(gap),
    }
}

fn education_strategy() -> Recommendation {
    Recommendation {
        kind: RecommendationKind::Strategy,
        title: EDUCATION_STRATEGY.to_string(),
        description: "Separate education savings plan (529) combined with term insurance for comprehensive protection.".to_string(),
        priority: Priority::Medium,
        amount: None,
    }
}

fn emergency_fund() -> Recommendation {
    Recommendation {
        kind: RecommendationKind::Savings,
        title: EMERGENCY_FUND.to_string(),
        description: "Build emergency savings to 6 months of expenses before increasing insurance coverage.".to_string(),
        priority: Priority::High,
        amount: None,
    }
}

/// Evaluate all rules against already computed gaps
pub fn evaluate(
    profile: &ClientProfile,
    gaps: &CoverageGaps,
    settings: RuleSettings,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if gaps.personal > 0.0 {
        recommendations.push(personal_coverage(gaps.personal, settings.term_life_threshold));
    }

    // spouse gap is always 0 outside a married household
    if profile.marital_status.is_married() && gaps.spouse > 0.0 {
        recommendations.push(spouse_coverage(gaps.spouse));
    }

    if gaps.children > 0.0 {
        recommendations.push(children_education(gaps.children));
    }

    if profile.number_of_children > 0 && gaps.children > 0.0 {
        recommendations.push(education_strategy());
    }

    // savings that were never entered do not trigger the rule
    let low_savings = profile
        .current_savings
        .is_some_and(|savings| savings < profile.annual_income * 0.5);
    if settings.emergency_fund_rule && low_savings {
        recommendations.push(emergency_fund());
    }

    recommendations
}
