//! Client profile structures matching the intake form

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Marital status of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    /// Only a married household gets a spouse needs bucket
    pub fn is_married(&self) -> bool {
        matches!(self, MaritalStatus::Married)
    }

    /// Label as shown on the intake form
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported health status, used for premium estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

/// A single client's financial and family profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Client display name
    pub name: String,

    /// Current age in years
    pub age: u32,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub marital_status: MaritalStatus,

    #[serde(default)]
    pub occupation: Option<String>,

    #[serde(default)]
    pub health_status: HealthStatus,

    // Income replacement
    pub annual_income: f64,
    #[serde(default)]
    pub years_to_replace: u32,
    #[serde(default)]
    pub spouse_annual_income: f64,
    #[serde(default)]
    pub spouse_years_to_replace: u32,

    // Debts
    #[serde(default)]
    pub mortgage_balance: f64,
    /// Pay off the mortgage on death
    #[serde(default)]
    pub pay_off_mortgage: bool,
    #[serde(default)]
    pub credit_card_debt: f64,
    #[serde(default)]
    pub auto_loans: f64,
    #[serde(default)]
    pub student_loans: f64,
    #[serde(default)]
    pub other_debts: f64,

    // Education
    #[serde(default)]
    pub number_of_children: u32,
    #[serde(default)]
    pub education_goal_per_child: f64,

    // Existing coverage
    #[serde(default)]
    pub existing_life_insurance: f64,
    #[serde(default)]
    pub spouse_existing_life_insurance: f64,

    #[serde(default)]
    pub final_expense_goal: f64,

    /// Liquid savings, `None` when never entered; only read by the emergency fund rule
    #[serde(default)]
    pub current_savings: Option<f64>,
}

impl ClientProfile {
    /// Create a profile with the fields the caller must always supply
    pub fn new(name: impl Into<String>, age: u32, annual_income: f64) -> Self {
        Self {
            name: name.into(),
            age,
            annual_income,
            ..Default::default()
        }
    }

    /// Copy of this profile with every amount clamped to a finite, non-negative value
    pub fn normalized(&self) -> Self {
        let mut p = self.clone();
        for amount in [
            &mut p.annual_income,
            &mut p.spouse_annual_income,
            &mut p.mortgage_balance,
            &mut p.credit_card_debt,
            &mut p.auto_loans,
            &mut p.student_loans,
            &mut p.other_debts,
            &mut p.education_goal_per_child,
            &mut p.existing_life_insurance,
            &mut p.spouse_existing_life_insurance,
            &mut p.final_expense_goal,
        ] {
            *amount = super::coerce::clamp_amount(*amount);
        }
        p.current_savings = p.current_savings.map(super::coerce::clamp_amount);
        p
    }

    /// Sum of all debt fields, mortgage included
    pub fn total_debts(&self) -> f64 {
        self.mortgage_balance
            + self.credit_card_debt
            + self.auto_loans
            + self.student_loans
            + self.other_debts
    }
}
