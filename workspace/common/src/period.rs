use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DashboardError;

const ACTIVE_BUTTON_CLASS: &str = "bg-purple-600 text-white shadow-lg shadow-purple-500/50";
const IDLE_BUTTON_CLASS: &str = "bg-white/10 text-purple-200 hover:bg-white/20";

/// Reporting period offered by the header selector.
///
/// The selection only drives which button is highlighted. Datasets are the
/// same for every period, see [`crate::DashboardData::for_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    /// Button order in the header.
    pub const ALL: [Period; 3] = [Period::Week, Period::Month, Period::Year];

    pub fn key(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Label shown on the selector button.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "Semaine",
            Period::Month => "Mois",
            Period::Year => "Année",
        }
    }

    /// Style of this period's button given the current selection.
    pub fn button_class(&self, selected: Period) -> &'static str {
        if *self == selected {
            ACTIVE_BUTTON_CLASS
        } else {
            IDLE_BUTTON_CLASS
        }
    }

    pub fn is_active(&self, selected: Period) -> bool {
        *self == selected
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Period {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(DashboardError::UnknownPeriod(other.to_string())),
        }
    }
}
