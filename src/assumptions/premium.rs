//! Rough monthly premium estimate for a coverage gap

use crate::error::AnalysisError;
use crate::profile::HealthStatus;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// File holding premium age bands inside an assumptions directory
pub const PREMIUM_AGE_BANDS_FILE: &str = "premium_age_bands.csv";

/// Age band: applies to ages strictly below `max_age`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub max_age: u32,
    pub multiplier: f64,
}

/// Premium rating factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PremiumRates {
    /// Monthly premium per $1,000 of coverage before multipliers
    pub rate_per_thousand: f64,

    /// Age bands sorted by `max_age`
    pub age_bands: Vec<AgeBand>,

    /// Multiplier for ages past the last band
    pub oldest_multiplier: f64,

    pub excellent_health: f64,
    pub good_health: f64,
    /// Fair and poor health share one multiplier
    pub impaired_health: f64,
}

impl Default for PremiumRates {
    fn default() -> Self {
        Self {
            rate_per_thousand: 1.2,
            age_bands: vec![
                AgeBand { max_age: 30, multiplier: 0.5 },
                AgeBand { max_age: 40, multiplier: 0.7 },
                AgeBand { max_age: 50, multiplier: 1.0 },
            ],
            oldest_multiplier: 1.5,
            excellent_health: 0.8,
            good_health: 1.0,
            impaired_health: 1.3,
        }
    }
}

impl PremiumRates {
    /// Replace the age bands with the ones in `dir/premium_age_bands.csv`
    ///
    /// Columns: `max_age,multiplier`. Rows may be in any order.
    pub fn from_csv_path(dir: &Path) -> Result<Self, AnalysisError> {
        let file = File::open(dir.join(PREMIUM_AGE_BANDS_FILE))?;
        let mut reader = csv::Reader::from_reader(file);

        let mut age_bands = Vec::new();
        for result in reader.deserialize() {
            let band: AgeBand = result?;
            if !band.multiplier.is_finite() || band.multiplier < 0.0 {
                return Err(AnalysisError::Config(format!(
                    "age band {} has invalid multiplier {}",
                    band.max_age, band.multiplier
                )));
            }
            age_bands.push(band);
        }
        age_bands.sort_by_key(|b| b.max_age);

        Ok(Self {
            age_bands,
            ..Self::default()
        })
    }

    pub fn age_multiplier(&self, age: u32) -> f64 {
        self.age_bands
            .iter()
            .find(|b| age < b.max_age)
            .map(|b| b.multiplier)
            .unwrap_or(self.oldest_multiplier)
    }

    pub fn health_multiplier(&self, health: HealthStatus) -> f64 {
        match health {
            HealthStatus::Excellent => self.excellent_health,
            HealthStatus::Good => self.good_health,
            HealthStatus::Fair | HealthStatus::Poor => self.impaired_health,
        }
    }

    /// Monthly premium estimate for `coverage` dollars of new insurance
    pub fn estimate_monthly_premium(&self, coverage: f64, age: u32, health: HealthStatus) -> f64 {
        (coverage / 1000.0)
            * self.rate_per_thousand
            * self.age_multiplier(age)
            * self.health_multiplier(health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_age_bands() {
        let rates = PremiumRates::default();
        assert_eq!(rates.age_multiplier(25), 0.5);
        assert_eq!(rates.age_multiplier(30), 0.7);
        assert_eq!(rates.age_multiplier(45), 1.0);
        assert_eq!(rates.age_multiplier(50), 1.5);
        assert_eq!(rates.age_multiplier(80), 1.5);
    }

    #[test]
    fn test_estimate_monthly_premium() {
        let rates = PremiumRates::default();
        // 500k gap, age 35, excellent: 500 * 1.2 * 0.7 * 0.8
        assert_relative_eq!(
            rates.estimate_monthly_premium(500_000.0, 35, HealthStatus::Excellent),
            336.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            rates.estimate_monthly_premium(100_000.0, 55, HealthStatus::Poor),
            234.0,
            epsilon = 1e-9
        );
        assert_eq!(rates.estimate_monthly_premium(0.0, 55, HealthStatus::Poor), 0.0);
    }

    #[test]
    fn test_from_csv_path() {
        let dir = std::env::temp_dir().join(format!("premium_bands_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(PREMIUM_AGE_BANDS_FILE),
            "max_age,multiplier\n45,0.9\n35,0.6\n",
        )
        .unwrap();

        let rates = PremiumRates::from_csv_path(&dir).unwrap();
        assert_eq!(rates.age_multiplier(20), 0.6);
        assert_eq!(rates.age_multiplier(40), 0.9);
        assert_eq!(rates.age_multiplier(60), 1.5);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
