use serde::{Deserialize, Serialize};

/// Direction of a metric's period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    /// Badge colors: green for up, red for down.
    pub fn badge_class(&self) -> &'static str {
        match self {
            TrendDirection::Up => "bg-emerald-500/20 text-emerald-300",
            TrendDirection::Down => "bg-red-500/20 text-red-300",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            TrendDirection::Up => "fas fa-arrow-trend-up",
            TrendDirection::Down => "fas fa-arrow-trend-down",
        }
    }
}

/// Icon shown in a metric card's gradient tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricIcon {
    Revenue,
    Customers,
    Orders,
    Conversion,
}

impl MetricIcon {
    pub fn icon_class(&self) -> &'static str {
        match self {
            MetricIcon::Revenue => "fas fa-dollar-sign",
            MetricIcon::Customers => "fas fa-users",
            MetricIcon::Orders => "fas fa-cart-shopping",
            MetricIcon::Conversion => "fas fa-wave-square",
        }
    }
}

/// Summary tile for one KPI. Values are pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    /// Signed percentage, e.g. `+12.5%`.
    pub change: String,
    pub trend: TrendDirection,
    pub icon: MetricIcon,
    /// Tailwind gradient stops for the icon tile.
    pub gradient: String,
}

/// Label/value row of the quick statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStat {
    pub label: String,
    pub value: String,
    /// Background class of the status dot.
    pub dot_class: String,
}
