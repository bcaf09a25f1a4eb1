//! Case validation.
//!
//! Turns an [`EcgCase`] into borrowed, checked features. Mandatory fields are
//! never defaulted: a missing one fails the whole case.

use ecg_model::{EcgCase, LeadMap};

use crate::error::{DiagnosisError, Result};

/// Features for AV conduction analysis.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AvFeatures<'a> {
    pub p_wave_count: u32,
    pub qrs_count: u32,
    pub pr_intervals: &'a [f64],
}

/// A case whose mandatory features are present and usable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValidatedCase<'a> {
    pub st_levels: &'a LeadMap,
    pub heart_rate: f64,
    pub rr_intervals: &'a [f64],
    pub qrs_duration: f64,
    pub qrs_voltages: &'a LeadMap,
    pub p_wave_presence: bool,
    pub av: Option<AvFeatures<'a>>,
}

impl<'a> ValidatedCase<'a> {
    pub fn from_case(case: &'a EcgCase) -> Result<Self> {
        let st_levels = require(case.st_levels.as_ref(), "st_levels")?;
        let heart_rate = require(case.heart_rate, "heart_rate")?;
        let rr_intervals = require(case.rr_intervals.as_deref(), "rr_intervals")?;
        let qrs_duration = require(case.qrs_duration, "qrs_duration")?;
        let qrs_voltages = require(case.qrs_voltages.as_ref(), "qrs_voltages")?;

        check_leads("st_levels", st_levels)?;
        check_measure("heart_rate", heart_rate)?;
        check_intervals("rr_intervals", rr_intervals)?;
        check_measure("qrs_duration", qrs_duration)?;
        check_leads("qrs_voltages", qrs_voltages)?;

        let av = if case.has_av_features() {
            let p_wave_count = require(case.p_wave_count, "p_wave_count")?;
            let qrs_count = require(case.qrs_count, "qrs_count")?;
            let pr_intervals = require(case.pr_intervals.as_deref(), "pr_intervals")?;
            check_intervals("pr_intervals", pr_intervals)?;
            Some(AvFeatures {
                p_wave_count,
                qrs_count,
                pr_intervals,
            })
        } else {
            None
        };

        Ok(Self {
            st_levels,
            heart_rate,
            rr_intervals,
            qrs_duration,
            qrs_voltages,
            p_wave_presence: case.p_wave_presence(),
            av,
        })
    }
}

/// Check a case without running any evaluator.
pub fn validate_case(case: &EcgCase) -> Result<()> {
    ValidatedCase::from_case(case).map(|_| ())
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(DiagnosisError::MissingRequiredField { field })
}

fn invalid(field: impl Into<String>, reason: impl Into<String>) -> DiagnosisError {
    DiagnosisError::InvalidValue {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Rates and durations: finite and non-negative.
///
/// Negative values are rejected here even though the evaluators would
/// accept them; a negative rate or duration is a measurement error.
fn check_measure(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid(field, format!("{value} is not finite")));
    }
    if value < 0.0 {
        return Err(invalid(field, format!("{value} is negative")));
    }
    Ok(())
}

fn check_intervals(field: &str, values: &[f64]) -> Result<()> {
    for (idx, &value) in values.iter().enumerate() {
        check_measure(&format!("{field}[{idx}]"), value)?;
    }
    Ok(())
}

/// Lead values are signed but must be finite.
fn check_leads(field: &str, leads: &LeadMap) -> Result<()> {
    for (lead, value) in leads {
        if !value.is_finite() {
            return Err(invalid(
                format!("{field}.{lead}"),
                format!("{value} is not finite"),
            ));
        }
    }
    Ok(())
}
