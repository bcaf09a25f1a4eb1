//! Lead identifiers and per-lead value maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lead identifier keyed map of signed millivolt values.
///
/// Keys need not cover all twelve leads; absent leads are simply not
/// assessed downstream. A `BTreeMap` keeps iteration order stable.
pub type LeadMap = BTreeMap<String, f64>;

/// Electrode group a lead belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadGroup {
    /// I, II, III, aVR, aVL, aVF
    Limb,
    /// V1-V6 and the posterior V7-V9
    Precordial,
}

impl LeadGroup {
    /// Group of a lead code. Codes starting with `V` are precordial.
    pub fn of(lead: &str) -> Self {
        if lead.starts_with('V') {
            Self::Precordial
        } else {
            Self::Limb
        }
    }
}

/// Value of `lead` in `map`, or 0 when the lead was not measured.
pub fn lead_value(map: &LeadMap, lead: &str) -> f64 {
    map.get(lead).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_prefix() {
        for lead in ["V1", "V4", "V6", "V7", "V9"] {
            assert_eq!(LeadGroup::of(lead), LeadGroup::Precordial, "{lead}");
        }
        for lead in ["I", "II", "III", "aVR", "aVL", "aVF"] {
            assert_eq!(LeadGroup::of(lead), LeadGroup::Limb, "{lead}");
        }
    }

    #[test]
    fn missing_lead_reads_as_zero() {
        let mut map = LeadMap::new();
        map.insert("V1".to_string(), -0.4);
        assert_eq!(lead_value(&map, "V1"), -0.4);
        assert_eq!(lead_value(&map, "V2"), 0.0);
    }
}
