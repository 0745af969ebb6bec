//! Needs Analysis - life insurance needs engine using the D.I.M.E. method
//!
//! This library provides:
//! - Client profile types with an explicit coerce-or-default input boundary
//! - The needs calculator (debt, income, mortgage, education, final expenses)
//! - Rule-based coverage recommendations
//! - Plain-text report rendering and file exports
//! - Append-only analysis stores and a parallel batch runner

pub mod error;
pub mod profile;
pub mod assumptions;
pub mod analysis;
pub mod report;
pub mod export;
pub mod store;
pub mod scenario;

// Re-export commonly used types
pub use error::{AnalysisError, StoreError};
pub use profile::{ClientProfile, RawProfile, MaritalStatus, Gender, HealthStatus};
pub use assumptions::PremiumRates;
pub use analysis::{AnalysisConfig, AnalysisResult, NeedsCalculator, Recommendation};
pub use report::{NeedsReport, format_currency, report_file_name};
pub use store::{AnalysisStore, AnalysisRecord, MemoryStore, JsonLinesStore};
pub use scenario::{BatchRunner, BatchSummary};
