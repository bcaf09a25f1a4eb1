//! AV conduction block classification.
//!
//! Works from beat counts and the chronological PR sequence. Nothing is
//! classified unless P waves outnumber QRS complexes; after that the
//! cascade is Mobitz I, Mobitz II, 3rd degree, high-grade. A single dropped
//! beat that matches neither Mobitz pattern stays "Normal conduction".

use ecg_model::{AvClassification, AvConduction};
use ecg_standards::AvThresholds;

use crate::rules::{Rule, first_match};
use crate::stats::population_std;

struct AvInput {
    p_waves: u32,
    qrs_complexes: u32,
    /// P count minus QRS count.
    dropped: i64,
    pr_intervals: Vec<f64>,
    pr_std: f64,
    thresholds: AvThresholds,
}

impl AvInput {
    fn base(&self) -> AvConduction {
        AvConduction {
            p_waves: self.p_waves,
            qrs_complexes: self.qrs_complexes,
            missing_beats: self.p_waves.saturating_sub(self.qrs_complexes),
            classification: AvClassification::Normal,
            ..AvConduction::default()
        }
    }

    fn classified(&self, classification: AvClassification) -> AvConduction {
        AvConduction {
            classification,
            ..self.base()
        }
    }
}

/// PR lengthens beat to beat, then the last PR resets below the first.
fn is_wenckebach_sequence(pr: &[f64]) -> bool {
    let Some((&last, leading)) = pr.split_last() else {
        return false;
    };
    let Some(&first) = pr.first() else {
        return false;
    };
    leading.windows(2).all(|pair| pair[1] > pair[0]) && last < first
}

/// No PR falls inside the conducted band.
fn is_dissociated(pr: &[f64], thresholds: &AvThresholds) -> bool {
    pr.iter()
        .all(|&value| value < thresholds.pr_short_ms || value > thresholds.pr_long_ms)
}

const AV_RULES: &[Rule<AvInput, AvConduction>] = &[
    Rule {
        name: "mobitz_i",
        when: |i| {
            i.pr_intervals.len() >= i.thresholds.wenckebach_min_samples
                && is_wenckebach_sequence(&i.pr_intervals)
        },
        then: |i| {
            let n = i.pr_intervals.len();
            AvConduction {
                pattern: Some(format!("{}:{}", n + 1, n)),
                pr_progression: Some(
                    i.pr_intervals
                        .iter()
                        .map(|value| format!("{value}ms"))
                        .collect(),
                ),
                ..i.classified(AvClassification::MobitzI)
            }
        },
    },
    Rule {
        name: "mobitz_ii",
        when: |i| {
            i.pr_intervals.len() >= i.thresholds.mobitz_ii_min_samples
                && i.pr_std < i.thresholds.mobitz_ii_max_pr_std_ms
        },
        then: |i| AvConduction {
            pattern: Some(format!("{}:1", i.dropped + 1)),
            pr_variation: Some(format!("{:.1}ms", i.pr_std)),
            ..i.classified(AvClassification::MobitzII)
        },
    },
    Rule {
        name: "third_degree",
        when: |i| {
            i.dropped >= i64::from(i.thresholds.high_grade_min_dropped)
                && i.dropped >= i64::from(i.thresholds.complete_min_dropped)
                && is_dissociated(&i.pr_intervals, &i.thresholds)
        },
        then: |i| AvConduction {
            atrial_rate: Some(i.p_waves),
            ventricular_rate: Some(i.qrs_complexes),
            ..i.classified(AvClassification::ThirdDegree)
        },
    },
    Rule {
        name: "high_grade",
        when: |i| i.dropped >= i64::from(i.thresholds.high_grade_min_dropped),
        then: |i| i.classified(AvClassification::HighGrade),
    },
];

/// Classify AV conduction from beat counts and PR intervals.
pub fn analyze_av_conduction(
    p_wave_count: u32,
    qrs_count: u32,
    pr_intervals: &[f64],
    thresholds: &AvThresholds,
) -> AvConduction {
    let input = AvInput {
        p_waves: p_wave_count,
        qrs_complexes: qrs_count,
        dropped: i64::from(p_wave_count) - i64::from(qrs_count),
        pr_intervals: pr_intervals.to_vec(),
        pr_std: population_std(pr_intervals),
        thresholds: *thresholds,
    };

    if input.dropped <= 0 {
        return input.base();
    }

    let result = first_match(AV_RULES, &input).unwrap_or_else(|| input.base());
    tracing::debug!(
        dropped = input.dropped,
        classification = %result.classification,
        "AV conduction classified"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(p: u32, qrs: u32, pr: &[f64]) -> AvConduction {
        analyze_av_conduction(p, qrs, pr, &AvThresholds::default())
    }

    #[test]
    fn wenckebach_sequence_shape() {
        assert!(is_wenckebach_sequence(&[160.0, 165.0, 170.0, 150.0]));
        assert!(is_wenckebach_sequence(&[200.0, 220.0, 180.0]));
        // plateau in the leading run
        assert!(!is_wenckebach_sequence(&[160.0, 160.0, 170.0, 150.0]));
        // no reset below the first PR
        assert!(!is_wenckebach_sequence(&[160.0, 165.0, 170.0, 160.0]));
        assert!(!is_wenckebach_sequence(&[]));
    }

    #[test]
    fn more_qrs_than_p_is_normal() {
        let result = analyze(3, 5, &[160.0, 200.0, 150.0]);
        assert_eq!(result.classification, AvClassification::Normal);
        assert_eq!(result.missing_beats, 0);
    }

    #[test]
    fn mobitz_ii_reports_ratio_and_variation() {
        let result = analyze(6, 4, &[180.0, 182.0, 181.0, 180.0]);
        assert_eq!(result.classification, AvClassification::MobitzII);
        assert_eq!(result.pattern.as_deref(), Some("3:1"));
        assert_eq!(result.pr_variation.as_deref(), Some("0.8ms"));
        assert_eq!(result.missing_beats, 2);
    }

    #[test]
    fn wenckebach_outranks_mobitz_ii() {
        // short sequence with low spread still matches Mobitz I first
        let result = analyze(4, 3, &[160.0, 162.0, 159.0]);
        assert_eq!(result.classification, AvClassification::MobitzI);
        assert_eq!(result.pattern.as_deref(), Some("4:3"));
    }

    #[test]
    fn single_drop_without_pattern_stays_normal() {
        let result = analyze(5, 4, &[150.0, 200.0, 170.0, 230.0]);
        assert_eq!(result.classification, AvClassification::Normal);
        assert_eq!(result.missing_beats, 1);
        assert!(result.pattern.is_none());
    }

    #[test]
    fn two_drops_without_pattern_is_high_grade() {
        let result = analyze(6, 4, &[150.0, 200.0, 170.0, 230.0]);
        assert_eq!(result.classification, AvClassification::HighGrade);
        assert!(result.atrial_rate.is_none());
    }

    #[test]
    fn pr_inside_band_blocks_third_degree() {
        let result = analyze(8, 4, &[100.0, 250.0, 180.0, 250.0]);
        assert_eq!(result.classification, AvClassification::HighGrade);
    }

    #[test]
    fn three_drops_without_pr_samples_is_third_degree() {
        let result = analyze(8, 4, &[]);
        assert_eq!(result.classification, AvClassification::ThirdDegree);
        assert_eq!(result.atrial_rate, Some(8));
        assert_eq!(result.ventricular_rate, Some(4));
    }

    #[test]
    fn two_drops_without_pr_samples_is_high_grade() {
        let result = analyze(6, 4, &[]);
        assert_eq!(result.classification, AvClassification::HighGrade);
        assert!(result.atrial_rate.is_none());
    }

    #[test]
    fn two_drops_with_dissociated_pr_is_still_high_grade() {
        let result = analyze(6, 4, &[100.0, 250.0, 100.0, 250.0]);
        assert_eq!(result.classification, AvClassification::HighGrade);
    }
}
