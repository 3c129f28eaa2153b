//! Static datasets rendered by the dashboard.
//!
//! These are fixed literals; nothing recomputes or mutates them at runtime.

use serde::{Deserialize, Serialize};

use crate::metrics::{MetricCard, MetricIcon, QuickStat, TrendDirection};
use crate::period::Period;

/// Slice colors of the category pie, cycled by slice index.
pub const CATEGORY_PALETTE: [&str; 4] = ["#8b5cf6", "#ec4899", "#f59e0b", "#10b981"];

/// Monthly revenue against its target, in currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub actual: f64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product: String,
    pub sales: u32,
}

/// Share of a product category, already expressed as a percentage.
/// Shares are not checked to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub percent: f64,
}

pub fn palette_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

pub fn revenue_series() -> Vec<RevenuePoint> {
    [
        ("Jan", 45000.0, 42000.0),
        ("Fév", 52000.0, 48000.0),
        ("Mar", 48000.0, 50000.0),
        ("Avr", 61000.0, 55000.0),
        ("Mai", 58000.0, 58000.0),
        ("Jun", 67000.0, 62000.0),
    ]
    .into_iter()
    .map(|(month, actual, target)| RevenuePoint {
        month: month.to_string(),
        actual,
        target,
    })
    .collect()
}

pub fn product_sales() -> Vec<ProductSales> {
    [
        ("Produit A", 4200),
        ("Produit B", 3800),
        ("Produit C", 2900),
        ("Produit D", 2100),
    ]
    .into_iter()
    .map(|(product, sales)| ProductSales {
        product: product.to_string(),
        sales,
    })
    .collect()
}

pub fn category_shares() -> Vec<CategoryShare> {
    [
        ("Électronique", 35.0),
        ("Mode", 28.0),
        ("Maison", 22.0),
        ("Sports", 15.0),
    ]
    .into_iter()
    .map(|(name, percent)| CategoryShare {
        name: name.to_string(),
        percent,
    })
    .collect()
}

pub fn metric_cards() -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Revenu Total".to_string(),
            value: "67 000€".to_string(),
            change: "+12.5%".to_string(),
            trend: TrendDirection::Up,
            icon: MetricIcon::Revenue,
            gradient: "from-violet-500 to-purple-600".to_string(),
        },
        MetricCard {
            title: "Clients Actifs".to_string(),
            value: "2,847".to_string(),
            change: "+8.2%".to_string(),
            trend: TrendDirection::Up,
            icon: MetricIcon::Customers,
            gradient: "from-blue-500 to-cyan-600".to_string(),
        },
        MetricCard {
            title: "Commandes".to_string(),
            value: "1,234".to_string(),
            change: "+23.1%".to_string(),
            trend: TrendDirection::Up,
            icon: MetricIcon::Orders,
            gradient: "from-pink-500 to-rose-600".to_string(),
        },
        MetricCard {
            title: "Taux Conversion".to_string(),
            value: "3.24%".to_string(),
            change: "-2.4%".to_string(),
            trend: TrendDirection::Down,
            icon: MetricIcon::Conversion,
            gradient: "from-orange-500 to-amber-600".to_string(),
        },
    ]
}

pub fn quick_stats() -> Vec<QuickStat> {
    [
        ("Panier Moyen", "54.32€", "bg-purple-500"),
        ("Nouveaux Clients", "342", "bg-pink-500"),
        ("Taux Retour", "2.1%", "bg-orange-500"),
        ("Satisfaction", "94%", "bg-emerald-500"),
    ]
    .into_iter()
    .map(|(label, value, dot_class)| QuickStat {
        label: label.to_string(),
        value: value.to_string(),
        dot_class: dot_class.to_string(),
    })
    .collect()
}

/// Everything the dashboard renders for one period selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub period: Period,
    pub revenue: Vec<RevenuePoint>,
    pub sales: Vec<ProductSales>,
    pub categories: Vec<CategoryShare>,
    pub metrics: Vec<MetricCard>,
    pub quick_stats: Vec<QuickStat>,
}

impl DashboardData {
    /// Datasets for `period`.
    ///
    /// The selector is decorative: every period yields the same literals and
    /// only `period` itself differs.
    pub fn for_period(period: Period) -> Self {
        Self {
            period,
            revenue: revenue_series(),
            sales: product_sales(),
            categories: category_shares(),
            metrics: metric_cards(),
            quick_stats: quick_stats(),
        }
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::for_period(Period::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_sizes() {
        let data = DashboardData::default();
        assert_eq!(data.metrics.len(), 4);
        assert_eq!(data.quick_stats.len(), 4);
        assert_eq!(data.revenue.len(), 6);
        assert_eq!(data.sales.len(), 4);
        assert_eq!(data.categories.len(), 4);
    }

    #[test]
    fn test_revenue_months_are_ordered() {
        let months: Vec<String> = revenue_series().into_iter().map(|p| p.month).collect();
        assert_eq!(months, vec!["Jan", "Fév", "Mar", "Avr", "Mai", "Jun"]);
    }

    #[test]
    fn test_category_shares_literals() {
        let percents: Vec<f64> = category_shares().iter().map(|c| c.percent).collect();
        assert_eq!(percents, vec![35.0, 28.0, 22.0, 15.0]);
        assert_eq!(percents.iter().sum::<f64>(), 100.0);
    }

    #[test]
    fn test_trend_directions() {
        let trends: Vec<TrendDirection> = metric_cards().iter().map(|m| m.trend).collect();
        assert_eq!(
            trends,
            vec![
                TrendDirection::Up,
                TrendDirection::Up,
                TrendDirection::Up,
                TrendDirection::Down
            ]
        );

        for card in metric_cards() {
            let expected = if card.change.starts_with('-') {
                TrendDirection::Down
            } else {
                TrendDirection::Up
            };
            assert_eq!(card.trend, expected, "card {}", card.title);
        }
    }

    #[test]
    fn test_palette_cycles_by_index() {
        assert_eq!(palette_color(0), "#8b5cf6");
        assert_eq!(palette_color(3), "#10b981");
        assert_eq!(palette_color(4), palette_color(0));
        assert_eq!(palette_color(9), palette_color(1));
    }

    #[test]
    fn test_period_does_not_change_datasets() {
        let month = DashboardData::for_period(Period::Month);
        for period in Period::ALL {
            let data = DashboardData::for_period(period);
            assert_eq!(data.period, period);
            assert_eq!(data.revenue, month.revenue);
            assert_eq!(data.sales, month.sales);
            assert_eq!(data.categories, month.categories);
            assert_eq!(data.metrics, month.metrics);
            assert_eq!(data.quick_stats, month.quick_stats);
        }
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        assert_eq!(DashboardData::default(), DashboardData::default());
    }
}
