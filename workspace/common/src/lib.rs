//! Shared dashboard model used by both the host binary and the Yew frontend.
//!
//! Everything here is plain data plus pure helpers: the static datasets,
//! the period selector, entrance animation classes and the Plotly figures
//! built from the datasets. Nothing in this crate touches the DOM, so it is
//! unit-tested natively.

pub mod animation;
pub mod charts;
pub mod datasets;
pub mod format;
pub mod metrics;
pub mod period;

pub use animation::{EntranceFlag, Section};
pub use charts::{ChartTheme, Figure, category_figure, revenue_figure, sales_figure};
pub use datasets::{
    CATEGORY_PALETTE, CategoryShare, DashboardData, ProductSales, RevenuePoint, category_shares,
    metric_cards, palette_color, product_sales, quick_stats, revenue_series,
};
pub use metrics::{MetricCard, MetricIcon, QuickStat, TrendDirection};
pub use period::Period;

use thiserror::Error;

/// Errors raised while interpreting dashboard inputs coming from outside the
/// crate (CLI flags, browser storage).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("unknown period '{0}', expected one of: week, month, year")]
    UnknownPeriod(String),
}
