//! Entrance transition for the dashboard sections.
//!
//! Every section starts hidden and offset, then slides to its resting place
//! once the dashboard has been painted. The transition runs once per mount.

use serde::{Deserialize, Serialize};

const CARD_STAGGER_MS: u32 = 100;

/// A block of the dashboard with its own entrance offset and delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    MetricCard(usize),
    RevenueChart,
    SalesChart,
    CategoryChart,
    QuickStats,
}

impl Section {
    pub fn delay_ms(&self) -> u32 {
        match self {
            Section::Header => 0,
            Section::MetricCard(index) => *index as u32 * CARD_STAGGER_MS,
            Section::RevenueChart => 400,
            Section::SalesChart => 500,
            Section::CategoryChart => 600,
            Section::QuickStats => 700,
        }
    }

    fn duration_class(&self) -> &'static str {
        match self {
            Section::Header => "duration-1000",
            _ => "duration-700",
        }
    }

    fn hidden_class(&self) -> &'static str {
        match self {
            Section::Header => "-translate-y-4 opacity-0",
            Section::RevenueChart => "-translate-x-8 opacity-0",
            Section::SalesChart => "translate-x-8 opacity-0",
            Section::MetricCard(_) | Section::CategoryChart | Section::QuickStats => {
                "translate-y-8 opacity-0"
            }
        }
    }

    fn shown_class(&self) -> &'static str {
        match self {
            Section::RevenueChart | Section::SalesChart => "translate-x-0 opacity-100",
            _ => "translate-y-0 opacity-100",
        }
    }

    /// Transform and transition classes for the current mount state.
    pub fn classes(&self, mounted: bool) -> String {
        let state = if mounted {
            self.shown_class()
        } else {
            self.hidden_class()
        };
        format!("transform transition-all {} {}", self.duration_class(), state)
    }

    /// Inline style carrying the staggered delay, if any.
    pub fn style(&self) -> Option<String> {
        match self.delay_ms() {
            0 => None,
            delay => Some(format!("transition-delay: {}ms", delay)),
        }
    }
}

/// One-way mount flag: starts `false`, can only ever become `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntranceFlag {
    mounted: bool,
}

impl EntranceFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entrance as played. Returns `true` only for the call that
    /// flipped the flag.
    pub fn mount(&mut self) -> bool {
        let flipped = !self.mounted;
        self.mounted = true;
        flipped
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_flag_flips_once() {
        let mut flag = EntranceFlag::new();
        assert!(!flag.is_mounted());
        assert!(flag.mount());
        assert!(flag.is_mounted());
        assert!(!flag.mount());
        assert!(flag.is_mounted());
    }

    #[test]
    fn test_hidden_then_shown_classes() {
        let header = Section::Header;
        assert_eq!(
            header.classes(false),
            "transform transition-all duration-1000 -translate-y-4 opacity-0"
        );
        assert_eq!(
            header.classes(true),
            "transform transition-all duration-1000 translate-y-0 opacity-100"
        );

        assert!(Section::RevenueChart.classes(false).contains("-translate-x-8"));
        assert!(Section::SalesChart.classes(false).contains(" translate-x-8"));
        assert!(Section::SalesChart.classes(true).contains("translate-x-0"));
        assert!(Section::QuickStats.classes(false).contains("translate-y-8"));
    }

    #[test]
    fn test_card_delays_are_staggered() {
        let delays: Vec<u32> = (0..4).map(|i| Section::MetricCard(i).delay_ms()).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(Section::MetricCard(0).style(), None);
        assert_eq!(
            Section::MetricCard(2).style().as_deref(),
            Some("transition-delay: 200ms")
        );
    }

    #[test]
    fn test_chart_panels_follow_cards() {
        assert_eq!(Section::RevenueChart.delay_ms(), 400);
        assert_eq!(Section::SalesChart.delay_ms(), 500);
        assert_eq!(Section::CategoryChart.delay_ms(), 600);
        assert_eq!(Section::QuickStats.delay_ms(), 700);
    }
}
