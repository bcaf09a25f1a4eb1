use std::fmt;

use serde::{Deserialize, Serialize};

/// Anatomical zone whose member leads localize ST elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Anterior,
    Inferior,
    Lateral,
    Posterior,
}

impl Region {
    /// All regions in localization priority order.
    pub const fn all() -> &'static [Self] {
        &[Self::Anterior, Self::Inferior, Self::Lateral, Self::Posterior]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Anterior => "Anterior",
            Self::Inferior => "Inferior",
            Self::Lateral => "Lateral",
            Self::Posterior => "Posterior",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
