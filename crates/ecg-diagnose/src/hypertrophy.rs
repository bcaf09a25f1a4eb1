//! Ventricular hypertrophy voltage criteria.

use ecg_model::{Hypertrophy, LeadMap, lead_value};
use ecg_standards::HypertrophyThresholds;

use crate::rules::{Rule, first_match};

struct VoltageInput {
    avl: f64,
    v1: f64,
    v3: f64,
    v5: f64,
    v6: f64,
    thresholds: HypertrophyThresholds,
}

impl VoltageInput {
    /// Cornell voltage, aVL + V3.
    ///
    /// The female cutoff is OR-ed in without a sex condition, so the check
    /// reduces to the lower of the two cutoffs.
    // TODO: gate the female cutoff on patient sex once EcgCase carries it.
    fn cornell(&self) -> bool {
        let sum = self.avl + self.v3;
        sum > self.thresholds.cornell_male_mv || sum > self.thresholds.cornell_female_mv
    }

    /// Sokolow-Lyon, V1 + max(V5, V6).
    fn sokolow_lyon(&self) -> bool {
        self.v1 + self.v5.max(self.v6) > self.thresholds.sokolow_lyon_mv
    }
}

const HYPERTROPHY_RULES: &[Rule<VoltageInput, Hypertrophy>] = &[
    Rule {
        name: "lvh",
        when: |i| i.cornell() || i.sokolow_lyon(),
        then: |_| Hypertrophy::Lvh,
    },
    Rule {
        name: "rvh",
        when: |i| i.v1 > i.thresholds.rvh_v1_min_mv && i.v6 < i.thresholds.rvh_v6_max_mv,
        then: |_| Hypertrophy::Rvh,
    },
];

/// Classify hypertrophy from net QRS voltages. Missing leads read as 0.
pub fn evaluate_hypertrophy(
    qrs_voltages: &LeadMap,
    thresholds: &HypertrophyThresholds,
) -> Option<Hypertrophy> {
    let input = VoltageInput {
        avl: lead_value(qrs_voltages, "aVL"),
        v1: lead_value(qrs_voltages, "V1"),
        v3: lead_value(qrs_voltages, "V3"),
        v5: lead_value(qrs_voltages, "V5"),
        v6: lead_value(qrs_voltages, "V6"),
        thresholds: *thresholds,
    };
    first_match(HYPERTROPHY_RULES, &input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(pairs: &[(&str, f64)]) -> Option<Hypertrophy> {
        let voltages: LeadMap = pairs
            .iter()
            .map(|(lead, value)| (lead.to_string(), *value))
            .collect();
        evaluate_hypertrophy(&voltages, &HypertrophyThresholds::default())
    }

    #[test]
    fn cornell_fires_above_lower_cutoff() {
        assert_eq!(evaluate(&[("aVL", 1.0), ("V3", 1.1)]), Some(Hypertrophy::Lvh));
        assert_eq!(evaluate(&[("aVL", 1.0), ("V3", 1.0)]), None);
    }

    #[test]
    fn sokolow_lyon_uses_taller_lateral_lead() {
        assert_eq!(
            evaluate(&[("V1", 1.0), ("V5", 2.6), ("V6", 1.0)]),
            Some(Hypertrophy::Lvh)
        );
        assert_eq!(
            evaluate(&[("V1", 1.0), ("V5", 1.0), ("V6", 2.6)]),
            Some(Hypertrophy::Lvh)
        );
    }

    #[test]
    fn rvh_needs_tall_v1_and_small_v6() {
        assert_eq!(evaluate(&[("V1", 0.9), ("V6", 0.2)]), Some(Hypertrophy::Rvh));
        assert_eq!(evaluate(&[("V1", 0.9), ("V6", 0.3)]), None);
        assert_eq!(evaluate(&[("V1", 0.7), ("V6", 0.0)]), None);
    }

    #[test]
    fn no_voltages_no_diagnosis() {
        assert_eq!(evaluate(&[]), None);
    }
}
