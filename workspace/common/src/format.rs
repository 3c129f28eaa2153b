use crate::datasets::CategoryShare;

/// Whole-number percentage, e.g. `35%`.
pub fn format_share_percent(percent: f64) -> String {
    format!("{:.0}%", percent)
}

/// Pie slice label: `"{name} {percent}%"`.
///
/// The share is already a percentage, so it is printed as-is rather than
/// renormalized against the total of all slices.
pub fn share_label(share: &CategoryShare) -> String {
    format!("{} {}", share.name, format_share_percent(share.percent))
}
