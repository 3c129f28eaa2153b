mod chart;
mod header;
mod metric_cards;
mod quick_stats;
mod view;

pub use view::Dashboard;
