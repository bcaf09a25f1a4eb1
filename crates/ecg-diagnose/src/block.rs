//! Bundle branch block classification.

use ecg_model::{ConductionBlock, LeadMap, lead_value};
use ecg_standards::QrsThresholds;

use crate::rules::{Rule, first_match};

struct BlockInput {
    qrs_duration: f64,
    /// V1 + V2 net QRS voltage.
    net_voltage: f64,
    thresholds: QrsThresholds,
}

const BLOCK_RULES: &[Rule<BlockInput, ConductionBlock>] = &[
    Rule {
        name: "rbbb",
        when: |i| i.qrs_duration >= i.thresholds.block_ms && i.net_voltage > 0.0,
        then: |_| ConductionBlock::Rbbb,
    },
    Rule {
        name: "lbbb",
        when: |i| i.qrs_duration >= i.thresholds.complete_block_ms && i.net_voltage < 0.0,
        then: |_| ConductionBlock::Lbbb,
    },
    Rule {
        name: "ivcd",
        when: |i| i.qrs_duration >= i.thresholds.block_ms,
        then: |_| ConductionBlock::Ivcd,
    },
];

/// Classify a wide QRS by the polarity of V1 + V2.
///
/// Returns `None` for a QRS narrower than the block cutoff.
pub fn classify_block(
    qrs_duration: f64,
    qrs_voltages: &LeadMap,
    thresholds: &QrsThresholds,
) -> Option<ConductionBlock> {
    let input = BlockInput {
        qrs_duration,
        net_voltage: lead_value(qrs_voltages, "V1") + lead_value(qrs_voltages, "V2"),
        thresholds: *thresholds,
    };
    first_match(BLOCK_RULES, &input)
}
