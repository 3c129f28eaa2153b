//! Plotly figures for the three dashboard charts.
//!
//! Figures are plain JSON so the frontend can hand them to `Plotly.newPlot`
//! unchanged and the host binary can print them.

use serde::Serialize;
use serde_json::{Value, json};

use crate::datasets::{CategoryShare, ProductSales, RevenuePoint, palette_color};
use crate::format::share_label;

/// A Plotly `{data, layout, config}` triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

/// Colors shared by every chart of the dark dashboard theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub axis_color: String,
    pub grid_color: String,
    pub tooltip_background: String,
    pub tooltip_border: String,
    pub tooltip_font: String,
    pub primary: String,
    pub secondary: String,
    pub animation_ms: u32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            axis_color: "#c4b5fd".to_string(),
            grid_color: "#ffffff20".to_string(),
            tooltip_background: "#1e1b4b".to_string(),
            tooltip_border: "#8b5cf6".to_string(),
            tooltip_font: "#fff".to_string(),
            primary: "#8b5cf6".to_string(),
            secondary: "#ec4899".to_string(),
            animation_ms: 1500,
        }
    }
}

impl ChartTheme {
    fn axis(&self) -> Value {
        json!({
            "color": self.axis_color,
            "showgrid": true,
            "gridcolor": self.grid_color,
            "griddash": "dash",
            "zeroline": false
        })
    }

    fn base_layout(&self) -> Value {
        json!({
            "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "showlegend": false,
            "hoverlabel": {
                "bgcolor": self.tooltip_background,
                "bordercolor": self.tooltip_border,
                "font": {"color": self.tooltip_font}
            },
            "transition": {"duration": self.animation_ms, "easing": "cubic-in-out"}
        })
    }

    fn cartesian_layout(&self) -> Value {
        let mut layout = self.base_layout();
        layout["xaxis"] = self.axis();
        layout["yaxis"] = self.axis();
        layout
    }

    fn config() -> Value {
        json!({"responsive": true, "displayModeBar": false})
    }
}

/// Filled area for actual revenue plus a dashed target line, sharing axes.
pub fn revenue_figure(points: &[RevenuePoint], theme: &ChartTheme) -> Figure {
    let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
    let actual: Vec<f64> = points.iter().map(|p| p.actual).collect();
    let target: Vec<f64> = points.iter().map(|p| p.target).collect();

    let data = json!([
        {
            "x": months,
            "y": actual,
            "type": "scatter",
            "mode": "lines",
            "fill": "tozeroy",
            "fillcolor": "rgba(139, 92, 246, 0.35)",
            "line": {"color": theme.primary, "width": 3, "shape": "spline"},
            "name": "Revenu"
        },
        {
            "x": months,
            "y": target,
            "type": "scatter",
            "mode": "lines+markers",
            "line": {"color": theme.secondary, "width": 2, "dash": "dash", "shape": "spline"},
            "marker": {"color": theme.secondary, "size": 8},
            "name": "Objectif"
        }
    ]);

    Figure {
        data,
        layout: theme.cartesian_layout(),
        config: ChartTheme::config(),
    }
}

pub fn sales_figure(sales: &[ProductSales], theme: &ChartTheme) -> Figure {
    let products: Vec<&str> = sales.iter().map(|s| s.product.as_str()).collect();
    let counts: Vec<u32> = sales.iter().map(|s| s.sales).collect();

    let data = json!([{
        "x": products,
        "y": counts,
        "type": "bar",
        "marker": {"color": theme.primary},
        "name": "Ventes"
    }]);

    let mut layout = theme.cartesian_layout();
    layout["bargap"] = json!(0.2);

    Figure {
        data,
        layout,
        config: ChartTheme::config(),
    }
}

/// Pie over category shares, one palette color per slice.
pub fn category_figure(shares: &[CategoryShare], theme: &ChartTheme) -> Figure {
    let names: Vec<&str> = shares.iter().map(|s| s.name.as_str()).collect();
    let values: Vec<f64> = shares.iter().map(|s| s.percent).collect();
    let labels: Vec<String> = shares.iter().map(share_label).collect();
    let colors: Vec<&str> = (0..shares.len()).map(palette_color).collect();

    let data = json!([{
        "labels": names,
        "values": values,
        "text": labels,
        "type": "pie",
        "textinfo": "text",
        "textposition": "outside",
        "hoverinfo": "label+value",
        "sort": false,
        "marker": {"colors": colors}
    }]);

    let mut layout = theme.base_layout();
    layout["font"] = json!({"color": theme.tooltip_font});

    Figure {
        data,
        layout,
        config: ChartTheme::config(),
    }
}
