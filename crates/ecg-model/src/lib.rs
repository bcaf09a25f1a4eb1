//! ECG data model types.
//!
//! This crate provides the input and output shapes of the diagnosis core:
//! - **Leads**: lead identifiers, limb/precordial grouping, and per-lead value maps
//! - **Regions**: anatomical zones used to localize ST elevation
//! - **Case**: the pre-extracted feature set of one cardiac cycle
//! - **Record**: the merged diagnostic record and its sub-records
//!
//! # Module Organization
//!
//! - [`lead`]: Lead groups and lead-map helpers
//! - [`region`]: Anatomical regions
//! - [`case`]: The [`EcgCase`] input document
//! - [`record`]: [`DiagnosticRecord`] and the per-evaluator outputs

pub mod case;
pub mod lead;
pub mod record;
pub mod region;

pub use case::EcgCase;
pub use lead::{LeadGroup, LeadMap, lead_value};
pub use record::{
    AvClassification, AvConduction, ConductionBlock, DiagnosticRecord, Hypertrophy, Rhythm,
    StAnalysis, StLocalization,
};
pub use region::Region;
