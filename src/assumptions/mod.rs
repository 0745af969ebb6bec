//! Product choices and premium rating assumptions

pub mod options;
mod premium;

pub use options::{
    YEARS_TO_REPLACE_CHOICES, EDUCATION_GOAL_CHOICES, DEFAULT_FINAL_EXPENSE_GOAL,
    is_standard_years, is_standard_education_goal,
};
pub use premium::{PremiumRates, AgeBand, PREMIUM_AGE_BANDS_FILE};
