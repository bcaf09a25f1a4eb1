//! Rule-based ECG classification core.
//!
//! Classifies one cardiac cycle's worth of pre-extracted ECG features into
//! ST segment findings, bundle branch block, AV conduction block, ventricular
//! hypertrophy and rhythm, then merges them into a [`DiagnosticRecord`].
//!
//! # Example
//!
//! ```
//! use ecg_diagnose::diagnose;
//! use ecg_model::{EcgCase, LeadMap, Rhythm};
//!
//! let case = EcgCase::new()
//!     .with_heart_rate(72.0)
//!     .with_rr_intervals(vec![830.0, 835.0, 828.0])
//!     .with_qrs_duration(96.0)
//!     .with_st_levels(LeadMap::new())
//!     .with_qrs_voltages(LeadMap::new());
//!
//! let record = diagnose(&case)?;
//! assert_eq!(record.rhythm, Rhythm::NormalSinus);
//! assert!(record.conduction_abnormality.is_none());
//! # Ok::<(), ecg_diagnose::DiagnosisError>(())
//! ```
//!
//! # Design Principles
//!
//! - **Stateless evaluators**: each is a pure function of its inputs and thresholds
//! - **Ordered cascades**: rule priority is an explicit table, first match wins
//! - **Fail fast**: a missing mandatory feature rejects the case, nothing is defaulted

mod av;
mod block;
mod diagnose;
mod error;
mod hypertrophy;
mod rhythm;
mod rules;
mod st;
mod stats;
mod validate;

// Orchestration
pub use diagnose::{diagnose, diagnose_with};

// Error type
pub use error::{DiagnosisError, Result};

// Individual evaluators
pub use av::analyze_av_conduction;
pub use block::classify_block;
pub use hypertrophy::evaluate_hypertrophy;
pub use rhythm::classify_rhythm;
pub use st::{analyze_st_segment, elevation_threshold};

// Validation
pub use validate::validate_case;
