//! String-typed intake record as collected by the client form

use super::coerce::{coerce_amount, coerce_count, coerce_flag, coerce_text};
use super::{ClientProfile, Gender, HealthStatus, MaritalStatus};
use crate::error::AnalysisError;
use serde::{Deserialize, Deserializer, Serialize};

/// A form value as it may arrive from JSON or CSV
#[derive(Deserialize)]
#[serde(untagged)]
enum FormValue {
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
}

/// Accept text, numbers, or booleans and keep them as text for coercion
fn form_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FormValue>::deserialize(deserializer)?.map(|value| match value {
        FormValue::Text(text) => text,
        FormValue::Int(n) => n.to_string(),
        FormValue::Float(x) => x.to_string(),
        FormValue::Flag(b) => b.to_string(),
    }))
}

/// Raw intake form values before coercion
///
/// Column names follow the intake form (camelCase). Every field is optional
/// text; numbers and booleans are accepted and kept as text, and
/// `to_profile` applies the coerce-or-default policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProfile {
    #[serde(deserialize_with = "form_text")]
    pub client_name: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub age: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub marital_status: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub occupation: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub health_status: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub annual_income: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub years_to_replace: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub spouse_income: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub spouse_years_to_replace: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub mortgage_balance: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub pay_off_mortgage: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub credit_card_debt: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub auto_loans: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub student_loans: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub other_debts: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub number_of_children: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub education_goal_per_child: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub existing_life_insurance: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub spouse_existing_life_insurance: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub final_expense_goal: Option<String>,
    #[serde(deserialize_with = "form_text")]
    pub current_savings: Option<String>,
}

fn parse_gender(raw: Option<&str>) -> Result<Option<Gender>, AnalysisError> {
    let Some(text) = coerce_text(raw) else {
        return Ok(None);
    };
    match text.to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Some(Gender::Male)),
        "female" | "f" => Ok(Some(Gender::Female)),
        "other" => Ok(Some(Gender::Other)),
        _ => Err(AnalysisError::invalid("gender", &text)),
    }
}

fn parse_marital_status(raw: Option<&str>) -> Result<MaritalStatus, AnalysisError> {
    let Some(text) = coerce_text(raw) else {
        return Ok(MaritalStatus::default());
    };
    match text.to_ascii_lowercase().as_str() {
        "single" => Ok(MaritalStatus::Single),
        "married" => Ok(MaritalStatus::Married),
        "divorced" => Ok(MaritalStatus::Divorced),
        "widowed" => Ok(MaritalStatus::Widowed),
        _ => Err(AnalysisError::invalid("maritalStatus", &text)),
    }
}

fn parse_health_status(raw: Option<&str>) -> Result<HealthStatus, AnalysisError> {
    let Some(text) = coerce_text(raw) else {
        return Ok(HealthStatus::default());
    };
    match text.to_ascii_lowercase().as_str() {
        "excellent" => Ok(HealthStatus::Excellent),
        "good" => Ok(HealthStatus::Good),
        "fair" => Ok(HealthStatus::Fair),
        "poor" => Ok(HealthStatus::Poor),
        _ => Err(AnalysisError::invalid("healthStatus", &text)),
    }
}

impl RawProfile {
    fn fields(&self) -> [&Option<String>; 22] {
        [
            &self.client_name,
            &self.age,
            &self.gender,
            &self.marital_status,
            &self.occupation,
            &self.health_status,
            &self.annual_income,
            &self.years_to_replace,
            &self.spouse_income,
            &self.spouse_years_to_replace,
            &self.mortgage_balance,
            &self.pay_off_mortgage,
            &self.credit_card_debt,
            &self.auto_loans,
            &self.student_loans,
            &self.other_debts,
            &self.number_of_children,
            &self.education_goal_per_child,
            &self.existing_life_insurance,
            &self.spouse_existing_life_insurance,
            &self.final_expense_goal,
            &self.current_savings,
        ]
    }

    /// Check the fields the form requires before a calculation (name, age, income)
    pub fn validate_required(&self) -> Result<(), AnalysisError> {
        let required = [
            ("clientName", &self.client_name),
            ("age", &self.age),
            ("annualIncome", &self.annual_income),
        ];
        for (field, value) in required {
            if coerce_text(value.as_deref()).is_none() {
                return Err(AnalysisError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Percentage of form fields that have been filled in (0-100)
    pub fn completion_percentage(&self) -> u8 {
        let fields = self.fields();
        let filled = fields
            .iter()
            .filter(|f| coerce_text(f.as_deref()).is_some())
            .count();
        ((filled as f64 / fields.len() as f64) * 100.0).round() as u8
    }

    /// Coerce into a typed profile
    pub fn to_profile(&self) -> Result<ClientProfile, AnalysisError> {
        Ok(ClientProfile {
            name: coerce_text(self.client_name.as_deref()).unwrap_or_default(),
            age: coerce_count("age", self.age.as_deref())?,
            gender: parse_gender(self.gender.as_deref())?,
            marital_status: parse_marital_status(self.marital_status.as_deref())?,
            occupation: coerce_text(self.occupation.as_deref()),
            health_status: parse_health_status(self.health_status.as_deref())?,
            annual_income: coerce_amount("annualIncome", self.annual_income.as_deref())?,
            years_to_replace: coerce_count("yearsToReplace", self.years_to_replace.as_deref())?,
            spouse_annual_income: coerce_amount("spouseIncome", self.spouse_income.as_deref())?,
            spouse_years_to_replace: coerce_count(
                "spouseYearsToReplace",
                self.spouse_years_to_replace.as_deref(),
            )?,
            mortgage_balance: coerce_amount("mortgageBalance", self.mortgage_balance.as_deref())?,
            pay_off_mortgage: coerce_flag("payOffMortgage", self.pay_off_mortgage.as_deref())?,
            credit_card_debt: coerce_amount("creditCardDebt", self.credit_card_debt.as_deref())?,
            auto_loans: coerce_amount("autoLoans", self.auto_loans.as_deref())?,
            student_loans: coerce_amount("studentLoans", self.student_loans.as_deref())?,
            other_debts: coerce_amount("otherDebts", self.other_debts.as_deref())?,
            number_of_children: coerce_count(
                "numberOfChildren",
                self.number_of_children.as_deref(),
            )?,
            education_goal_per_child: coerce_amount(
                "educationGoalPerChild",
                self.education_goal_per_child.as_deref(),
            )?,
            existing_life_insurance: coerce_amount(
                "existingLifeInsurance",
                self.existing_life_insurance.as_deref(),
            )?,
            spouse_existing_life_insurance: coerce_amount(
                "spouseExistingLifeInsurance",
                self.spouse_existing_life_insurance.as_deref(),
            )?,
            final_expense_goal: coerce_amount(
                "finalExpenseGoal",
                self.final_expense_goal.as_deref(),
            )?,
            current_savings: coerce_text(self.current_savings.as_deref())
                .map(|text| coerce_amount("currentSavings", Some(&text)))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn married_raw() -> RawProfile {
        RawProfile {
            client_name: text("Jordan Park"),
            age: text("42"),
            marital_status: text("Married"),
            health_status: text("excellent"),
            annual_income: text("100000"),
            years_to_replace: text("10"),
            spouse_income: text("60000"),
            spouse_years_to_replace: text("10"),
            number_of_children: text("2"),
            education_goal_per_child: text("100000"),
            final_expense_goal: text("15000"),
            pay_off_mortgage: text("no"),
            ..Default::default()
        }
    }

    #[test]
    fn test_to_profile() {
        let profile = married_raw().to_profile().unwrap();
        assert_eq!(profile.name, "Jordan Park");
        assert_eq!(profile.age, 42);
        assert_eq!(profile.marital_status, MaritalStatus::Married);
        assert_eq!(profile.health_status, HealthStatus::Excellent);
        assert_eq!(profile.annual_income, 100_000.0);
        assert_eq!(profile.spouse_annual_income, 60_000.0);
        assert_eq!(profile.number_of_children, 2);
        assert_eq!(profile.mortgage_balance, 0.0);
        assert!(!profile.pay_off_mortgage);
        assert_eq!(profile.gender, None);
    }

    #[test]
    fn test_blank_enums_default() {
        let raw = RawProfile {
            client_name: text("A"),
            marital_status: text(" "),
            ..Default::default()
        };
        let profile = raw.to_profile().unwrap();
        assert_eq!(profile.marital_status, MaritalStatus::Single);
        assert_eq!(profile.health_status, HealthStatus::Good);
    }

    #[test]
    fn test_unknown_enum_rejected() {
        let raw = RawProfile {
            marital_status: text("engaged"),
            ..Default::default()
        };
        assert!(matches!(
            raw.to_profile(),
            Err(AnalysisError::InvalidInput { field: "maritalStatus", .. })
        ));
    }

    #[test]
    fn test_validate_required() {
        assert!(married_raw().validate_required().is_ok());

        let mut raw = married_raw();
        raw.age = text("");
        assert!(matches!(
            raw.validate_required(),
            Err(AnalysisError::MissingField("age"))
        ));

        raw.client_name = None;
        assert!(matches!(
            raw.validate_required(),
            Err(AnalysisError::MissingField("clientName"))
        ));
    }

    #[test]
    fn test_completion_percentage() {
        assert_eq!(RawProfile::default().completion_percentage(), 0);
        // 12 of 22 fields filled
        assert_eq!(married_raw().completion_percentage(), 55);
    }

    #[test]
    fn test_deserialize_camel_case_json() {
        let raw: RawProfile = serde_json::from_str(
            r#"{"clientName":"Alex Lee","age":"35","annualIncome":"80000","payOffMortgage":"true"}"#,
        )
        .unwrap();
        let profile = raw.to_profile().unwrap();
        assert_eq!(profile.name, "Alex Lee");
        assert!(profile.pay_off_mortgage);
    }

    #[test]
    fn test_deserialize_numeric_json_values() {
        let raw: RawProfile = serde_json::from_str(
            r#"{"clientName":"A","age":35,"annualIncome":80000,"otherDebts":1250.5,"payOffMortgage":true,"currentSavings":null}"#,
        )
        .unwrap();
        assert_eq!(raw.age.as_deref(), Some("35"));
        raw.validate_required().unwrap();

        let profile = raw.to_profile().unwrap();
        assert_eq!(profile.age, 35);
        assert_eq!(profile.annual_income, 80_000.0);
        assert_eq!(profile.other_debts, 1_250.5);
        assert!(profile.pay_off_mortgage);
        assert_eq!(profile.current_savings, None);
    }

    #[test]
    fn test_out_of_range_json_count_is_invalid_input() {
        let raw: RawProfile =
            serde_json::from_str(r#"{"clientName":"A","numberOfChildren":99999999999}"#).unwrap();
        assert!(matches!(
            raw.to_profile(),
            Err(AnalysisError::InvalidInput { field: "numberOfChildren", .. })
        ));
    }

    #[test]
    fn test_savings_blank_vs_entered() {
        let mut raw = married_raw();
        assert_eq!(raw.to_profile().unwrap().current_savings, None);
        raw.current_savings = text("0");
        assert_eq!(raw.to_profile().unwrap().current_savings, Some(0.0));
    }
}
