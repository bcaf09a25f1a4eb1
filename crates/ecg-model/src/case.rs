//! The pre-extracted feature set of one ECG.
//!
//! Every field is optional at the type level so that an incomplete feature
//! set can be represented and rejected with the name of the missing field,
//! instead of being silently defaulted.

use serde::{Deserialize, Serialize};

use crate::lead::LeadMap;

/// Feature set supplied by upstream waveform extraction.
///
/// # Example
///
/// ```
/// use ecg_model::EcgCase;
///
/// let case = EcgCase::new()
///     .with_heart_rate(72.0)
///     .with_rr_intervals(vec![830.0, 835.0])
///     .with_qrs_duration(96.0);
///
/// assert!(case.p_wave_presence());
/// assert!(!case.has_av_features());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EcgCase {
    /// Heart rate in beats per minute.
    pub heart_rate: Option<f64>,
    /// Chronological RR intervals in milliseconds.
    pub rr_intervals: Option<Vec<f64>>,
    /// Number of P waves in the analysis window.
    pub p_wave_count: Option<u32>,
    /// Number of QRS complexes in the analysis window.
    pub qrs_count: Option<u32>,
    /// Chronological PR intervals in milliseconds.
    pub pr_intervals: Option<Vec<f64>>,
    /// Average QRS duration in milliseconds.
    pub qrs_duration: Option<f64>,
    /// ST deviation per lead (mV).
    pub st_levels: Option<LeadMap>,
    /// Net QRS amplitude per lead (mV); negative for a dominant S wave.
    pub qrs_voltages: Option<LeadMap>,
    /// Whether P waves were detected; treated as `true` when absent.
    pub p_wave_presence: Option<bool>,
}

impl EcgCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heart_rate(mut self, bpm: f64) -> Self {
        self.heart_rate = Some(bpm);
        self
    }

    pub fn with_rr_intervals(mut self, intervals: Vec<f64>) -> Self {
        self.rr_intervals = Some(intervals);
        self
    }

    /// Set the three AV conduction features together.
    pub fn with_av_features(mut self, p_waves: u32, qrs: u32, pr_intervals: Vec<f64>) -> Self {
        self.p_wave_count = Some(p_waves);
        self.qrs_count = Some(qrs);
        self.pr_intervals = Some(pr_intervals);
        self
    }

    pub fn with_qrs_duration(mut self, ms: f64) -> Self {
        self.qrs_duration = Some(ms);
        self
    }

    pub fn with_st_levels(mut self, levels: LeadMap) -> Self {
        self.st_levels = Some(levels);
        self
    }

    pub fn with_qrs_voltages(mut self, voltages: LeadMap) -> Self {
        self.qrs_voltages = Some(voltages);
        self
    }

    pub fn with_p_wave_presence(mut self, present: bool) -> Self {
        self.p_wave_presence = Some(present);
        self
    }

    /// P-wave presence with the absent-means-present default applied.
    pub fn p_wave_presence(&self) -> bool {
        self.p_wave_presence.unwrap_or(true)
    }

    /// Whether AV conduction analysis was requested.
    ///
    /// Keyed on `p_wave_count` alone; the QRS count and PR intervals are
    /// expected to accompany it.
    pub fn has_av_features(&self) -> bool {
        self.p_wave_count.is_some()
    }
}
