//! Needs analysis: calculator, result types, and recommendation rules
//!
//! # Example
//!
//! ```
//! use needs_analysis::{ClientProfile, NeedsCalculator, AnalysisConfig};
//!
//! let mut profile = ClientProfile::new("Alex Lee", 35, 80_000.0);
//! profile.years_to_replace = 10;
//! profile.final_expense_goal = 15_000.0;
//!
//! let calculator = NeedsCalculator::new(AnalysisConfig::default());
//! let result = calculator.compute(&profile);
//! assert_eq!(result.total_family_needs, 815_000.0);
//! ```

mod engine;
mod result;
pub mod recommendations;

pub use engine::{NeedsCalculator, AnalysisConfig, compute, DEFAULT_TERM_LIFE_THRESHOLD};
pub use result::{
    AnalysisResult,
    PersonalNeeds,
    SpouseNeeds,
    ChildrenNeeds,
    ExistingCoverage,
    CoverageGaps,
    Recommendation,
    RecommendationKind,
    Priority,
};
