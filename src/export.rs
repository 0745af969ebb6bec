//! File outputs for batch runs: results CSV, saved analyses, client reports

use crate::analysis::AnalysisResult;
use crate::error::{AnalysisError, StoreError};
use crate::profile::ClientProfile;
use crate::report::{report_file_name, NeedsReport};
use crate::store::AnalysisStore;
use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One row of the results CSV
#[derive(Debug, Serialize)]
pub struct ResultRow<'a> {
    pub client_name: &'a str,
    pub total_family_needs: f64,
    pub existing_coverage: f64,
    pub personal_gap: f64,
    pub spouse_gap: f64,
    pub children_gap: f64,
    pub per_bucket_gap_sum: f64,
    pub total_gap: f64,
    pub estimated_monthly_premium: f64,
    pub recommendations: usize,
}

impl<'a> ResultRow<'a> {
    pub fn new(profile: &'a ClientProfile, result: &AnalysisResult) -> Self {
        Self {
            client_name: &profile.name,
            total_family_needs: result.total_family_needs,
            existing_coverage: result.existing_coverage.total,
            personal_gap: result.coverage_gaps.personal,
            spouse_gap: result.coverage_gaps.spouse,
            children_gap: result.coverage_gaps.children,
            per_bucket_gap_sum: result.coverage_gaps.per_bucket_sum,
            total_gap: result.coverage_gaps.total,
            estimated_monthly_premium: result.estimated_monthly_premium,
            recommendations: result.recommendations.len(),
        }
    }
}

/// Write one summary row per profile; `profiles` and `results` are paired by position
pub fn write_results<W: Write>(
    writer: W,
    profiles: &[ClientProfile],
    results: &[AnalysisResult],
) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(writer);
    for (profile, result) in profiles.iter().zip(results) {
        writer.serialize(ResultRow::new(profile, result))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_results_csv(
    path: &Path,
    profiles: &[ClientProfile],
    results: &[AnalysisResult],
) -> Result<(), AnalysisError> {
    let file = std::fs::File::create(path)?;
    write_results(file, profiles, results)?;
    info!("wrote {} result rows to {}", results.len(), path.display());
    Ok(())
}

/// Save every analysis in order; returns how many were saved
pub fn save_all<S: AnalysisStore + ?Sized>(
    store: &mut S,
    profiles: &[ClientProfile],
    results: &[AnalysisResult],
) -> Result<usize, StoreError> {
    let mut saved = 0;
    for (profile, result) in profiles.iter().zip(results) {
        store.save(profile, result)?;
        saved += 1;
    }
    Ok(saved)
}

/// First profile whose name matches exactly
pub fn find_client<'a>(profiles: &'a [ClientProfile], name: &str) -> Option<&'a ClientProfile> {
    profiles.iter().find(|p| p.name == name)
}

/// Render the report and write it under `out_dir`; returns the file path and text
pub fn write_report(
    out_dir: &Path,
    profile: &ClientProfile,
    result: &AnalysisResult,
    date: NaiveDate,
) -> Result<(PathBuf, String), AnalysisError> {
    let text = NeedsReport::new(profile, result).with_date(date).render();
    let path = out_dir.join(report_file_name(&profile.name));
    std::fs::write(&path, &text)?;
    info!("wrote report for {} to {}", profile.name, path.display());
    Ok((path, text))
}
