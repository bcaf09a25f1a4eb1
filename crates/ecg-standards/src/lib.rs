//! Diagnostic criteria for the ECG classification core.
//!
//! This crate provides:
//!
//! - **Thresholds**: every numeric cutoff the evaluators compare against
//! - **Regions**: the anatomical region to lead table used for ST localization
//! - **Standards**: both bundled, built once and shared by reference
//!
//! # Example
//!
//! ```
//! use ecg_model::Region;
//! use ecg_standards::{Standards, ThresholdConfig};
//!
//! let standards = ecg_standards::standard();
//! assert_eq!(standards.regions.leads(Region::Inferior), &["II", "III", "aVF"]);
//!
//! let strict = ThresholdConfig::from_toml_str("[st]\nlimb_elevation_mv = 0.05\n")?;
//! let custom = Standards::new(strict, standards.regions);
//! assert_eq!(custom.thresholds.st.limb_elevation_mv, 0.05);
//! # Ok::<(), ecg_standards::StandardsError>(())
//! ```

use std::sync::LazyLock;

pub mod error;
pub mod regions;
pub mod thresholds;

pub use error::{Result, StandardsError};
pub use regions::{RegionLeads, RegionMap};
pub use thresholds::{
    AvThresholds, HypertrophyThresholds, QrsThresholds, RhythmThresholds, StThresholds,
    ThresholdConfig,
};

/// Threshold configuration paired with a region table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Standards {
    pub thresholds: ThresholdConfig,
    pub regions: RegionMap,
}

impl Standards {
    pub fn new(thresholds: ThresholdConfig, regions: RegionMap) -> Self {
        Self {
            thresholds,
            regions,
        }
    }
}

static STANDARD: LazyLock<Standards> = LazyLock::new(Standards::default);

/// The compiled-in criteria.
pub fn standard() -> &'static Standards {
    &STANDARD
}
