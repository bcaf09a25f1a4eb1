//! Numeric cutoffs used by the evaluators.
//!
//! The defaults are the compiled-in clinical criteria. A partial TOML
//! document can override individual values:
//!
//! ```toml
//! [st]
//! limb_elevation_mv = 0.15
//!
//! [rhythm]
//! tachycardia_bpm = 110.0
//! ```
//!
//! Sections and keys that are not given keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

/// ST segment cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StThresholds {
    /// Elevation cutoff for I, II, III, aVR, aVL, aVF (mV).
    pub limb_elevation_mv: f64,
    /// Elevation cutoff for V-leads (mV).
    pub precordial_elevation_mv: f64,
    /// Any lead strictly below this is depressed (mV).
    pub depression_mv: f64,
    /// Elevated leads a region needs before it localizes.
    pub min_region_leads: usize,
}

impl Default for StThresholds {
    fn default() -> Self {
        Self {
            limb_elevation_mv: 0.10,
            precordial_elevation_mv: 0.20,
            depression_mv: -0.05,
            min_region_leads: 2,
        }
    }
}

/// QRS duration cutoffs for bundle branch blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QrsThresholds {
    /// Minimum duration for any block diagnosis (ms).
    pub block_ms: f64,
    /// Minimum duration for LBBB (ms).
    pub complete_block_ms: f64,
}

impl Default for QrsThresholds {
    fn default() -> Self {
        Self {
            block_ms: 120.0,
            complete_block_ms: 150.0,
        }
    }
}

/// AV conduction cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvThresholds {
    pub wenckebach_min_samples: usize,
    pub mobitz_ii_min_samples: usize,
    /// PR standard deviation below which PR is considered constant (ms).
    pub mobitz_ii_max_pr_std_ms: f64,
    /// Dropped beats for a high-grade block.
    pub high_grade_min_dropped: u32,
    /// Dropped beats for a 3rd degree block.
    pub complete_min_dropped: u32,
    /// Lower edge of the conducted PR band (ms).
    pub pr_short_ms: f64,
    /// Upper edge of the conducted PR band (ms).
    pub pr_long_ms: f64,
}

impl Default for AvThresholds {
    fn default() -> Self {
        Self {
            wenckebach_min_samples: 3,
            mobitz_ii_min_samples: 2,
            mobitz_ii_max_pr_std_ms: 5.0,
            high_grade_min_dropped: 2,
            complete_min_dropped: 3,
            pr_short_ms: 120.0,
            pr_long_ms: 240.0,
        }
    }
}

/// QRS voltage criteria for hypertrophy (mV).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HypertrophyThresholds {
    /// Cornell aVL + V3 cutoff, male.
    pub cornell_male_mv: f64,
    /// Cornell aVL + V3 cutoff, female.
    pub cornell_female_mv: f64,
    /// Sokolow-Lyon V1 + max(V5, V6) cutoff.
    pub sokolow_lyon_mv: f64,
    pub rvh_v1_min_mv: f64,
    pub rvh_v6_max_mv: f64,
}

impl Default for HypertrophyThresholds {
    fn default() -> Self {
        Self {
            cornell_male_mv: 2.8,
            cornell_female_mv: 2.0,
            sokolow_lyon_mv: 3.5,
            rvh_v1_min_mv: 0.7,
            rvh_v6_max_mv: 0.3,
        }
    }
}

/// Heart rate and RR variability cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RhythmThresholds {
    pub bradycardia_bpm: f64,
    pub tachycardia_bpm: f64,
    /// RR std above which a slow rhythm is sinus arrhythmia (ms).
    pub sinus_arrhythmia_rr_std_ms: f64,
    /// RR std above which a fast rhythm is atrial fibrillation (ms).
    pub fibrillation_rr_std_ms: f64,
    /// RR std below which a normal-rate rhythm is regular (ms).
    pub regular_rr_std_ms: f64,
}

impl Default for RhythmThresholds {
    fn default() -> Self {
        Self {
            bradycardia_bpm: 60.0,
            tachycardia_bpm: 100.0,
            sinus_arrhythmia_rr_std_ms: 100.0,
            fibrillation_rr_std_ms: 50.0,
            regular_rr_std_ms: 30.0,
        }
    }
}

/// All cutoffs, one section per evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdConfig {
    pub st: StThresholds,
    pub qrs: QrsThresholds,
    pub av: AvThresholds,
    pub hypertrophy: HypertrophyThresholds,
    pub rhythm: RhythmThresholds,
}

impl ThresholdConfig {
    /// Parse a TOML override on top of the defaults and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!(
            limb_st_mv = config.st.limb_elevation_mv,
            precordial_st_mv = config.st.precordial_elevation_mv,
            block_ms = config.qrs.block_ms,
            "Loaded threshold overrides"
        );
        Ok(config)
    }

    /// Check that values are finite and that paired cutoffs are ordered.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("st.limb_elevation_mv", self.st.limb_elevation_mv),
            ("st.precordial_elevation_mv", self.st.precordial_elevation_mv),
            ("st.depression_mv", self.st.depression_mv),
            ("qrs.block_ms", self.qrs.block_ms),
            ("qrs.complete_block_ms", self.qrs.complete_block_ms),
            ("av.mobitz_ii_max_pr_std_ms", self.av.mobitz_ii_max_pr_std_ms),
            ("av.pr_short_ms", self.av.pr_short_ms),
            ("av.pr_long_ms", self.av.pr_long_ms),
            ("hypertrophy.cornell_male_mv", self.hypertrophy.cornell_male_mv),
            ("hypertrophy.cornell_female_mv", self.hypertrophy.cornell_female_mv),
            ("hypertrophy.sokolow_lyon_mv", self.hypertrophy.sokolow_lyon_mv),
            ("hypertrophy.rvh_v1_min_mv", self.hypertrophy.rvh_v1_min_mv),
            ("hypertrophy.rvh_v6_max_mv", self.hypertrophy.rvh_v6_max_mv),
            ("rhythm.bradycardia_bpm", self.rhythm.bradycardia_bpm),
            ("rhythm.tachycardia_bpm", self.rhythm.tachycardia_bpm),
            ("rhythm.sinus_arrhythmia_rr_std_ms", self.rhythm.sinus_arrhythmia_rr_std_ms),
            ("rhythm.fibrillation_rr_std_ms", self.rhythm.fibrillation_rr_std_ms),
            ("rhythm.regular_rr_std_ms", self.rhythm.regular_rr_std_ms),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, value));
            }
        }

        if self.st.min_region_leads == 0 {
            return Err(invalid("st.min_region_leads", self.st.min_region_leads));
        }
        if self.qrs.block_ms > self.qrs.complete_block_ms {
            return Err(invalid("qrs.complete_block_ms", self.qrs.complete_block_ms));
        }
        if self.av.pr_short_ms > self.av.pr_long_ms {
            return Err(invalid("av.pr_long_ms", self.av.pr_long_ms));
        }
        if self.av.high_grade_min_dropped > self.av.complete_min_dropped {
            return Err(invalid("av.complete_min_dropped", self.av.complete_min_dropped));
        }
        if self.rhythm.bradycardia_bpm > self.rhythm.tachycardia_bpm {
            return Err(invalid("rhythm.tachycardia_bpm", self.rhythm.tachycardia_bpm));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: impl std::fmt::Display) -> StandardsError {
    StandardsError::InvalidValue {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ThresholdConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_override_is_default() {
        let config = ThresholdConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThresholdConfig::default());
    }

    #[test]
    fn rejects_nan() {
        let mut config = ThresholdConfig::default();
        config.rhythm.regular_rr_std_ms = f64::NAN;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            StandardsError::InvalidValue {
                field: "rhythm.regular_rr_std_ms",
                ..
            }
        ));
    }
}
