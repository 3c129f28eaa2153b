use std::rc::Rc;

use common::{
    CategoryShare, DashboardData, MetricCard, Period, ProductSales, QuickStat, RevenuePoint, Section,
};
use yew::prelude::*;

use super::chart::{CategoryChart, RevenueChart, SalesChart};
use super::header::DashboardHeader;
use super::metric_cards::MetricCards;
use super::quick_stats::QuickStats;
use crate::hooks::use_mounted;
use crate::settings::get_settings;

/// Datasets split into shared handles so each child only re-renders when
/// its own slice changes.
struct Datasets {
    metrics: Rc<Vec<MetricCard>>,
    revenue: Rc<Vec<RevenuePoint>>,
    sales: Rc<Vec<ProductSales>>,
    categories: Rc<Vec<CategoryShare>>,
    quick_stats: Rc<Vec<QuickStat>>,
}

impl From<DashboardData> for Datasets {
    fn from(data: DashboardData) -> Self {
        Self {
            metrics: Rc::new(data.metrics),
            revenue: Rc::new(data.revenue),
            sales: Rc::new(data.sales),
            categories: Rc::new(data.categories),
            quick_stats: Rc::new(data.quick_stats),
        }
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    title: AttrValue,
    section: Section,
    mounted: bool,
    children: Children,
}

#[function_component(Panel)]
fn panel(props: &PanelProps) -> Html {
    html! {
        <div
            class={classes!(
                "bg-white/10", "backdrop-blur-lg", "rounded-2xl", "p-6", "border", "border-white/20",
                props.section.classes(props.mounted)
            )}
            style={props.section.style()}
        >
            <h3 class="text-xl font-bold text-white mb-4">{&props.title}</h3>
            { for props.children.iter() }
        </div>
    }
}

/// Self-contained business dashboard. Takes no props.
///
/// The period selector is decorative: the datasets are built once per mount
/// and never depend on the selection, so changing it only restyles the
/// header buttons.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let mounted = use_mounted();
    let period = use_state(Period::default);
    let data = use_memo((), |_| Datasets::from(DashboardData::default()));
    let height_px = get_settings().chart_height_px;

    let on_select = {
        let period = period.clone();
        Callback::from(move |selected: Period| {
            log::debug!("Period selected: {}", selected);
            period.set(selected);
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 p-6">
            <div class="max-w-7xl mx-auto">
                <DashboardHeader selected={*period} {on_select} {mounted} />
                <MetricCards metrics={data.metrics.clone()} {mounted} />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <Panel title="Évolution du Revenu" section={Section::RevenueChart} {mounted}>
                        <RevenueChart points={data.revenue.clone()} {height_px} />
                    </Panel>
                    <Panel title="Ventes par Produit" section={Section::SalesChart} {mounted}>
                        <SalesChart sales={data.sales.clone()} {height_px} />
                    </Panel>
                    <Panel title="Répartition par Catégorie" section={Section::CategoryChart} {mounted}>
                        <CategoryChart shares={data.categories.clone()} {height_px} />
                    </Panel>
                    <Panel title="Statistiques Rapides" section={Section::QuickStats} {mounted}>
                        <QuickStats stats={data.quick_stats.clone()} />
                    </Panel>
                </div>
            </div>
        </div>
    }
}
