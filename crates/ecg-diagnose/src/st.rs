//! ST segment deviation and localization.

use std::collections::BTreeSet;

use ecg_model::{LeadGroup, LeadMap, StAnalysis, StLocalization};
use ecg_standards::{RegionMap, StThresholds};

/// Elevation cutoff for a lead, picked by its group.
pub fn elevation_threshold(lead: &str, thresholds: &StThresholds) -> f64 {
    match LeadGroup::of(lead) {
        LeadGroup::Precordial => thresholds.precordial_elevation_mv,
        LeadGroup::Limb => thresholds.limb_elevation_mv,
    }
}

/// Classify per-lead ST deviation and localize elevation.
///
/// A lead is elevated when it strictly exceeds its group cutoff; otherwise it
/// counts toward depression when strictly below the depression cutoff.
/// Regions are tried in map order and the first with enough elevated leads
/// is reported.
pub fn analyze_st_segment(
    st_levels: &LeadMap,
    thresholds: &StThresholds,
    regions: &RegionMap,
) -> StAnalysis {
    let mut elevated: BTreeSet<&str> = BTreeSet::new();
    let mut st_depression = false;

    for (lead, &value) in st_levels {
        if value > elevation_threshold(lead, thresholds) {
            elevated.insert(lead.as_str());
        } else if value < thresholds.depression_mv {
            st_depression = true;
        }
    }

    let localization = regions.iter().find_map(|entry| {
        let leads: Vec<&str> = entry
            .leads
            .iter()
            .copied()
            .filter(|lead| elevated.contains(lead))
            .collect();
        if leads.len() < thresholds.min_region_leads {
            return None;
        }
        let max_st_elev = leads
            .iter()
            .filter_map(|lead| st_levels.get(*lead).copied())
            .fold(f64::NEG_INFINITY, f64::max);
        Some(StLocalization {
            region: entry.region,
            leads: leads.into_iter().map(str::to_string).collect(),
            max_st_elev,
        })
    });

    if let Some(found) = &localization {
        tracing::debug!(
            region = %found.region,
            leads = ?found.leads,
            max_st_elev = found.max_st_elev,
            "ST elevation localized"
        );
    }

    StAnalysis {
        st_elevation: localization.is_some(),
        localization,
        st_depression,
    }
}
