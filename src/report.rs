//! Plain-text needs analysis report
//!
//! Rendering reads every figure from the `AnalysisResult`; nothing is recomputed.

use crate::analysis::AnalysisResult;
use crate::profile::ClientProfile;
use chrono::NaiveDate;
use std::fmt;

const RULE: &str = "=====================================";

/// Format an amount as whole dollars with thousands separators, e.g. `$1,215,000`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// File name used when exporting a client's report
pub fn report_file_name(client_name: &str) -> String {
    let stem = client_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_Insurance_Analysis.txt", stem)
}

/// Report for one client and their computed analysis
#[derive(Debug, Clone)]
pub struct NeedsReport<'a> {
    profile: &'a ClientProfile,
    result: &'a AnalysisResult,
    date: Option<NaiveDate>,
}

impl<'a> NeedsReport<'a> {
    pub fn new(profile: &'a ClientProfile, result: &'a AnalysisResult) -> Self {
        Self {
            profile,
            result,
            date: None,
        }
    }

    /// Stamp the report with a date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, amount: f64) -> fmt::Result {
    writeln!(f, "  {:<28}{:>16}", label, format_currency(amount))
}

impl fmt::Display for NeedsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.profile;
        let r = self.result;

        writeln!(f, "LIFE INSURANCE NEEDS ANALYSIS REPORT")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f)?;
        writeln!(f, "Client: {}", p.name)?;
        writeln!(f, "Age: {}", p.age)?;
        writeln!(f, "Marital Status: {}", p.marital_status)?;
        if let Some(date) = self.date {
            writeln!(f, "Date: {}", date.format("%Y-%m-%d"))?;
        }
        writeln!(f)?;

        writeln!(f, "ANALYSIS SUMMARY:")?;
        line(f, "Total Family Needs", r.total_family_needs)?;
        line(f, "Existing Coverage", r.existing_coverage.total)?;
        line(f, "Coverage Gap", r.coverage_gaps.total)?;
        line(f, "Estimated Monthly Premium", r.estimated_monthly_premium)?;
        writeln!(f)?;

        writeln!(f, "PERSONAL NEEDS:")?;
        line(f, "Debt", r.personal_needs.debt)?;
        line(f, "Income Replacement", r.personal_needs.income_replacement)?;
        line(f, "Mortgage Protection", r.personal_needs.mortgage_protection)?;
        line(f, "Final Expenses", r.personal_needs.final_expenses)?;
        line(f, "Total", r.personal_needs.total)?;
        writeln!(f)?;

        if let Some(spouse) = &r.spouse_needs {
            writeln!(f, "SPOUSE NEEDS:")?;
            line(f, "Income Replacement", spouse.income_replacement)?;
            line(f, "Final Expenses", spouse.final_expenses)?;
            line(f, "Total", spouse.total)?;
            writeln!(f)?;
        }

        writeln!(f, "CHILDREN NEEDS:")?;
        line(f, "Education", r.children_needs.education)?;
        line(f, "Total", r.children_needs.total)?;
        writeln!(f)?;

        writeln!(f, "EXISTING COVERAGE:")?;
        line(f, "Personal", r.existing_coverage.personal)?;
        if r.spouse_needs.is_some() {
            line(f, "Spouse", r.existing_coverage.spouse)?;
        }
        line(f, "Total", r.existing_coverage.total)?;
        writeln!(f)?;

        writeln!(f, "COVERAGE GAPS:")?;
        line(f, "Personal", r.coverage_gaps.personal)?;
        if r.spouse_needs.is_some() {
            line(f, "Spouse", r.coverage_gaps.spouse)?;
        }
        line(f, "Children", r.coverage_gaps.children)?;
        line(f, "Sum of Bucket Gaps", r.coverage_gaps.per_bucket_sum)?;
        line(f, "Household Gap", r.coverage_gaps.aggregate_clamped)?;
        writeln!(f)?;

        writeln!(f, "RECOMMENDATIONS:")?;
        if r.recommendations.is_empty() {
            writeln!(f, "- No additional coverage needed.")?;
        }
        for rec in &r.recommendations {
            match rec.amount {
                Some(amount) => writeln!(
                    f,
                    "- [{}] {} ({}): {}",
                    rec.priority.as_str(),
                    rec.title,
                    format_currency(amount),
                    rec.description
                )?,
                None => writeln!(
                    f,
                    "- [{}] {}: {}",
                    rec.priority.as_str(),
                    rec.title,
                    rec.description
                )?,
            }
        }
        writeln!(f)?;

        write!(f, "Generated by LifeGuard Pro Insurance Analysis System")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute;
    use crate::profile::MaritalStatus;

    fn sample() -> ClientProfile {
        let mut p = ClientProfile::new("Alex Lee", 35, 80_000.0);
        p.years_to_replace = 10;
        p.mortgage_balance = 200_000.0;
        p.pay_off_mortgage = true;
        p.final_expense_goal = 15_000.0;
        p.existing_life_insurance = 50_000.0;
        p
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(1_215_000.0), "$1,215,000");
        assert_eq!(format_currency(782.5), "$783");
        assert_eq!(format_currency(-45_000.4), "-$45,000");
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("Alex Lee"), "Alex_Lee_Insurance_Analysis.txt");
        assert_eq!(report_file_name("  Mary  Ann Smith "), "Mary_Ann_Smith_Insurance_Analysis.txt");
    }

    #[test]
    fn test_render_is_idempotent() {
        let profile = sample();
        let result = compute(&profile);
        let report = NeedsReport::new(&profile, &result);
        assert_eq!(report.render(), report.render());
    }

    #[test]
    fn test_render_contents() {
        let profile = sample();
        let result = compute(&profile);
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let text = NeedsReport::new(&profile, &result).with_date(date).render();

        assert!(text.starts_with("LIFE INSURANCE NEEDS ANALYSIS REPORT"));
        assert!(text.contains("Client: Alex Lee"));
        assert!(text.contains("Marital Status: Single\n"));
        assert!(text.contains("Date: 2026-10-16"));
        assert!(text.contains("$1,215,000"));
        assert!(text.contains("$1,165,000"));
        assert!(text.contains("- [high] Personal Life Insurance Coverage ($1,165,000): A 20-30 year term"));
        assert!(!text.contains("SPOUSE NEEDS"));
    }

    #[test]
    fn test_render_married_shows_spouse_section() {
        let mut profile = sample();
        profile.marital_status = MaritalStatus::Married;
        profile.spouse_annual_income = 60_000.0;
        profile.spouse_years_to_replace = 10;
        let result = compute(&profile);
        let text = NeedsReport::new(&profile, &result).render();

        assert!(text.contains("Marital Status: Married\n"));
        assert!(text.contains("SPOUSE NEEDS:"));
        assert!(text.contains("$615,000"));
        assert!(!text.contains("Date:"));
    }
}
