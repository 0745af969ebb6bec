//! Coerce-or-default conversion applied once at the input boundary
//!
//! Policy:
//! - blank or missing text becomes 0 (or the type's default)
//! - text that is not a finite number is rejected with `InvalidInput`
//! - negative numbers are clamped to 0
//!
//! The calculation code never parses or clamps on its own.

use crate::error::AnalysisError;
use log::warn;

/// Clamp a typed amount to a finite, non-negative value
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn is_blank(raw: Option<&str>) -> bool {
    raw.map_or(true, |s| s.trim().is_empty())
}

/// Parse a money or numeric field. Accepts a leading `$` and comma separators.
pub fn coerce_amount(field: &'static str, raw: Option<&str>) -> Result<f64, AnalysisError> {
    if is_blank(raw) {
        return Ok(0.0);
    }
    let text = raw.unwrap_or_default();

    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| AnalysisError::invalid(field, text))?;

    if !value.is_finite() {
        return Err(AnalysisError::invalid(field, text));
    }
    if value < 0.0 {
        warn!("clamping negative value {} for `{}` to 0", value, field);
        return Ok(0.0);
    }
    Ok(value)
}

/// Parse a count or year field; fractional input is truncated
pub fn coerce_count(field: &'static str, raw: Option<&str>) -> Result<u32, AnalysisError> {
    let value = coerce_amount(field, raw)?.trunc();
    if value > u32::MAX as f64 {
        return Err(AnalysisError::invalid(field, raw.unwrap_or_default()));
    }
    Ok(value as u32)
}

/// Parse a yes/no field
pub fn coerce_flag(field: &'static str, raw: Option<&str>) -> Result<bool, AnalysisError> {
    if is_blank(raw) {
        return Ok(false);
    }
    let text = raw.unwrap_or_default();
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" => Ok(false),
        _ => Err(AnalysisError::invalid(field, text)),
    }
}

/// Trimmed text, or `None` when blank
pub fn coerce_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
