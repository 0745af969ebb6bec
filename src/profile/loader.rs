//! Load client profiles from an intake CSV export

use super::{ClientProfile, RawProfile};
use crate::error::AnalysisError;
use csv::Reader;
use log::info;
use std::path::Path;

fn row_error(row: usize, source: AnalysisError) -> AnalysisError {
    AnalysisError::Row {
        row,
        source: Box::new(source),
    }
}

/// Read raw intake rows from any reader (file, string buffer, stdin)
pub fn load_raw_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<RawProfile>, AnalysisError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let raw: RawProfile = result.map_err(|e| row_error(idx + 1, e.into()))?;
        rows.push(raw);
    }

    Ok(rows)
}

/// Load and coerce all profiles from any reader
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<ClientProfile>, AnalysisError> {
    load_raw_profiles_from_reader(reader)?
        .iter()
        .enumerate()
        .map(|(idx, raw)| raw.to_profile().map_err(|e| row_error(idx + 1, e)))
        .collect()
}

/// Load and coerce all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<ClientProfile>, AnalysisError> {
    let file = std::fs::File::open(path.as_ref())?;
    let profiles = load_profiles_from_reader(file)?;
    info!("loaded {} profiles from {}", profiles.len(), path.as_ref().display());
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::MaritalStatus;

    const INTAKE: &str = "\
clientName,age,maritalStatus,annualIncome,yearsToReplace,mortgageBalance,payOffMortgage,finalExpenseGoal,existingLifeInsurance
Alex Lee,35,single,80000,10,200000,yes,15000,50000
Jordan Park,42,married,100000,10,,no,15000,
";

    #[test]
    fn test_load_profiles_from_reader() {
        let profiles = load_profiles_from_reader(INTAKE.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 2);

        let alex = &profiles[0];
        assert_eq!(alex.name, "Alex Lee");
        assert_eq!(alex.years_to_replace, 10);
        assert_eq!(alex.mortgage_balance, 200_000.0);
        assert!(alex.pay_off_mortgage);
        assert_eq!(alex.existing_life_insurance, 50_000.0);

        let jordan = &profiles[1];
        assert_eq!(jordan.marital_status, MaritalStatus::Married);
        assert_eq!(jordan.mortgage_balance, 0.0);
        assert_eq!(jordan.existing_life_insurance, 0.0);
    }

    #[test]
    fn test_bad_row_reports_row_number() {
        let data = "clientName,age,annualIncome\nA,30,50000\nB,40,plenty\n";
        let err = load_profiles_from_reader(data.as_bytes()).unwrap_err();
        match err {
            AnalysisError::Row { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(
                    *source,
                    AnalysisError::InvalidInput { field: "annualIncome", .. }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
