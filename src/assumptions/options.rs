//! Standard choices offered by the intake form
//!
//! The calculator accepts any value; these lists exist for callers that build
//! forms or flag non-standard selections.

/// Years of income to replace offered on the form
pub const YEARS_TO_REPLACE_CHOICES: [u32; 5] = [5, 10, 15, 20, 25];

/// Per-child education goals offered on the form
pub const EDUCATION_GOAL_CHOICES: [f64; 5] = [50_000.0, 75_000.0, 100_000.0, 150_000.0, 200_000.0];

/// Final expense goal pre-filled on the form (funeral, estate costs)
pub const DEFAULT_FINAL_EXPENSE_GOAL: f64 = 15_000.0;

pub fn is_standard_years(years: u32) -> bool {
    YEARS_TO_REPLACE_CHOICES.contains(&years)
}

pub fn is_standard_education_goal(goal: f64) -> bool {
    EDUCATION_GOAL_CHOICES.iter().any(|&g| (g - goal).abs() < 0.005)
}
