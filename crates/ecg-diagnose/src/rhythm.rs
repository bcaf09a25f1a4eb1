//! Rhythm classification from rate, RR regularity and P waves.

use ecg_model::Rhythm;
use ecg_standards::RhythmThresholds;

use crate::rules::{Rule, first_match};
use crate::stats::population_std;

struct RhythmInput {
    heart_rate: f64,
    rr_std: f64,
    p_waves: bool,
    thresholds: RhythmThresholds,
}

impl RhythmInput {
    fn slow(&self) -> bool {
        self.heart_rate < self.thresholds.bradycardia_bpm
    }

    fn fast(&self) -> bool {
        self.heart_rate > self.thresholds.tachycardia_bpm
    }
}

const RHYTHM_RULES: &[Rule<RhythmInput, Rhythm>] = &[
    Rule {
        name: "junctional_bradycardia",
        when: |i| i.slow() && !i.p_waves,
        then: |_| Rhythm::JunctionalBradycardia,
    },
    Rule {
        name: "sinus_arrhythmia",
        when: |i| i.slow() && i.rr_std > i.thresholds.sinus_arrhythmia_rr_std_ms,
        then: |_| Rhythm::SinusArrhythmia,
    },
    Rule {
        name: "sinus_bradycardia",
        when: |i| i.slow(),
        then: |_| Rhythm::SinusBradycardia,
    },
    Rule {
        name: "atrial_fibrillation",
        when: |i| i.fast() && i.rr_std > i.thresholds.fibrillation_rr_std_ms,
        then: |_| Rhythm::AtrialFibrillation,
    },
    Rule {
        name: "sinus_tachycardia",
        when: |i| i.fast() && i.p_waves,
        then: |_| Rhythm::SinusTachycardia,
    },
    Rule {
        name: "svt",
        when: |i| i.fast(),
        then: |_| Rhythm::Svt,
    },
    Rule {
        name: "normal_sinus",
        when: |i| {
            !i.slow() && !i.fast() && i.rr_std < i.thresholds.regular_rr_std_ms && i.p_waves
        },
        then: |_| Rhythm::NormalSinus,
    },
];

/// Classify the overall rhythm.
///
/// RR spread is the population standard deviation, taken as 0 with fewer
/// than two intervals.
pub fn classify_rhythm(
    heart_rate: f64,
    rr_intervals: &[f64],
    p_wave_presence: bool,
    thresholds: &RhythmThresholds,
) -> Rhythm {
    let rr_std = if rr_intervals.len() > 1 {
        population_std(rr_intervals)
    } else {
        0.0
    };
    let input = RhythmInput {
        heart_rate,
        rr_std,
        p_waves: p_wave_presence,
        thresholds: *thresholds,
    };
    first_match(RHYTHM_RULES, &input).unwrap_or(Rhythm::Unclassified)
}
