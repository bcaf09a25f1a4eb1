//! Orchestration of the five evaluators.

use ecg_model::{DiagnosticRecord, EcgCase};
use ecg_standards::Standards;

use crate::av::analyze_av_conduction;
use crate::block::classify_block;
use crate::error::Result;
use crate::hypertrophy::evaluate_hypertrophy;
use crate::rhythm::classify_rhythm;
use crate::st::analyze_st_segment;
use crate::validate::ValidatedCase;

/// Diagnose a case against the compiled-in criteria.
pub fn diagnose(case: &EcgCase) -> Result<DiagnosticRecord> {
    diagnose_with(case, ecg_standards::standard())
}

/// Diagnose a case against explicit criteria.
///
/// The case is validated first; on failure no evaluator runs and no partial
/// record is produced. AV conduction is analyzed only when the case carries
/// a P-wave count.
pub fn diagnose_with(case: &EcgCase, standards: &Standards) -> Result<DiagnosticRecord> {
    let case = ValidatedCase::from_case(case).inspect_err(|err| {
        tracing::warn!(field = err.field(), error = %err, "Rejected ECG case");
    })?;
    let thresholds = &standards.thresholds;

    let st_analysis = analyze_st_segment(case.st_levels, &thresholds.st, &standards.regions);

    let av_conduction = case.av.map(|av| {
        analyze_av_conduction(
            av.p_wave_count,
            av.qrs_count,
            av.pr_intervals,
            &thresholds.av,
        )
    });
    if av_conduction.is_none() {
        tracing::debug!("No P-wave count supplied, skipping AV conduction analysis");
    }

    let conduction_abnormality =
        classify_block(case.qrs_duration, case.qrs_voltages, &thresholds.qrs);
    let hypertrophy = evaluate_hypertrophy(case.qrs_voltages, &thresholds.hypertrophy);
    let rhythm = classify_rhythm(
        case.heart_rate,
        case.rr_intervals,
        case.p_wave_presence,
        &thresholds.rhythm,
    );

    tracing::debug!(
        st_elevation = st_analysis.st_elevation,
        st_depression = st_analysis.st_depression,
        av = av_conduction.as_ref().map(|av| av.classification.label()),
        block = conduction_abnormality.map(|block| block.label()),
        hypertrophy = hypertrophy.map(|h| h.label()),
        rhythm = %rhythm,
        "ECG diagnosis complete"
    );

    Ok(DiagnosticRecord {
        st_analysis,
        av_conduction,
        conduction_abnormality,
        hypertrophy,
        rhythm,
    })
}
