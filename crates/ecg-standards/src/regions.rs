//! Anatomical region to lead tables.

use ecg_model::Region;

/// Member leads of one region, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionLeads {
    pub region: Region,
    pub leads: &'static [&'static str],
}

const STANDARD_REGIONS: &[RegionLeads] = &[
    RegionLeads {
        region: Region::Anterior,
        leads: &["V1", "V2", "V3", "V4"],
    },
    RegionLeads {
        region: Region::Inferior,
        leads: &["II", "III", "aVF"],
    },
    RegionLeads {
        region: Region::Lateral,
        leads: &["I", "aVL", "V5", "V6"],
    },
    RegionLeads {
        region: Region::Posterior,
        leads: &["V7", "V8", "V9"],
    },
];

/// Fixed region table, iterated in localization priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionMap {
    entries: &'static [RegionLeads],
}

impl RegionMap {
    /// The standard Anterior, Inferior, Lateral, Posterior table.
    pub const fn standard() -> Self {
        Self {
            entries: STANDARD_REGIONS,
        }
    }

    /// Regions in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionLeads> {
        self.entries.iter()
    }

    /// Member leads of `region`.
    pub fn leads(&self, region: Region) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|entry| entry.region == region)
            .map(|entry| entry.leads)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RegionMap {
    fn default() -> Self {
        Self::standard()
    }
}
