//! Diagnostic record types.
//!
//! Labels serialize as the clinical strings reported to readers, e.g.
//! `"RBBB"` or `"Mobitz I (Wenckebach)"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Region that localized ST elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StLocalization {
    pub region: Region,
    /// Elevated member leads, in region order.
    pub leads: Vec<String>,
    /// Highest ST value among `leads` (mV).
    pub max_st_elev: f64,
}

/// ST segment analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StAnalysis {
    /// True iff a region localized the elevation.
    pub st_elevation: bool,
    pub localization: Option<StLocalization>,
    /// True if any lead is depressed below the depression cutoff.
    pub st_depression: bool,
}

/// Bundle branch / intraventricular conduction abnormality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConductionBlock {
    #[serde(rename = "RBBB")]
    Rbbb,
    #[serde(rename = "LBBB")]
    Lbbb,
    /// Non-specific intraventricular conduction delay
    #[serde(rename = "IVCD")]
    Ivcd,
}

impl ConductionBlock {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rbbb => "RBBB",
            Self::Lbbb => "LBBB",
            Self::Ivcd => "IVCD",
        }
    }
}

/// Ventricular hypertrophy pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hypertrophy {
    #[serde(rename = "LVH")]
    Lvh,
    #[serde(rename = "RVH")]
    Rvh,
}

impl Hypertrophy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lvh => "LVH",
            Self::Rvh => "RVH",
        }
    }
}

/// Overall rhythm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rhythm {
    #[serde(rename = "Normal sinus rhythm")]
    NormalSinus,
    #[serde(rename = "Sinus bradycardia")]
    SinusBradycardia,
    #[serde(rename = "Sinus arrhythmia")]
    SinusArrhythmia,
    #[serde(rename = "Junctional bradycardia")]
    JunctionalBradycardia,
    #[serde(rename = "Sinus tachycardia")]
    SinusTachycardia,
    #[serde(rename = "Atrial fibrillation")]
    AtrialFibrillation,
    #[serde(rename = "SVT")]
    Svt,
    #[serde(rename = "Unclassified rhythm")]
    Unclassified,
}

impl Rhythm {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NormalSinus => "Normal sinus rhythm",
            Self::SinusBradycardia => "Sinus bradycardia",
            Self::SinusArrhythmia => "Sinus arrhythmia",
            Self::JunctionalBradycardia => "Junctional bradycardia",
            Self::SinusTachycardia => "Sinus tachycardia",
            Self::AtrialFibrillation => "Atrial fibrillation",
            Self::Svt => "SVT",
            Self::Unclassified => "Unclassified rhythm",
        }
    }
}

/// AV conduction classification, in increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AvClassification {
    #[default]
    #[serde(rename = "Normal conduction")]
    Normal,
    #[serde(rename = "Mobitz I (Wenckebach)")]
    MobitzI,
    #[serde(rename = "Mobitz II")]
    MobitzII,
    #[serde(rename = "High-grade AV block")]
    HighGrade,
    #[serde(rename = "3rd degree AV block")]
    ThirdDegree,
}

impl AvClassification {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal conduction",
            Self::MobitzI => "Mobitz I (Wenckebach)",
            Self::MobitzII => "Mobitz II",
            Self::HighGrade => "High-grade AV block",
            Self::ThirdDegree => "3rd degree AV block",
        }
    }
}

/// AV conduction analysis.
///
/// The optional fields are filled by the classification that produced them:
/// `pattern` and `pr_progression` by Mobitz I, `pattern` and `pr_variation`
/// by Mobitz II, `atrial_rate` and `ventricular_rate` by 3rd degree block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvConduction {
    pub p_waves: u32,
    pub qrs_complexes: u32,
    pub missing_beats: u32,
    pub classification: AvClassification,
    /// Conduction ratio such as `"5:4"` or `"3:1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// PR intervals restated with a unit, e.g. `"160ms"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr_progression: Option<Vec<String>>,
    /// PR standard deviation, e.g. `"1.2ms"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr_variation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atrial_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ventricular_rate: Option<u32>,
}

/// Merged output of one diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub st_analysis: StAnalysis,
    /// Present only when AV features were supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub av_conduction: Option<AvConduction>,
    /// Present only when a block was diagnosed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conduction_abnormality: Option<ConductionBlock>,
    /// Present only when hypertrophy was diagnosed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypertrophy: Option<Hypertrophy>,
    pub rhythm: Rhythm,
}

impl DiagnosticRecord {
    /// Whether any evaluator reached an abnormal finding.
    pub fn has_findings(&self) -> bool {
        let st = self.st_analysis.st_elevation || self.st_analysis.st_depression;
        let av = self
            .av_conduction
            .as_ref()
            .is_some_and(|av| av.classification != AvClassification::Normal);
        st || av
            || self.conduction_abnormality.is_some()
            || self.hypertrophy.is_some()
            || self.rhythm != Rhythm::NormalSinus
    }
}

macro_rules! display_via_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_via_label!(ConductionBlock, Hypertrophy, Rhythm, AvClassification);
