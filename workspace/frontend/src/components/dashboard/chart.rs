use std::rc::Rc;

use common::{
    CategoryShare, ChartTheme, Figure, ProductSales, RevenuePoint, category_figure, revenue_figure,
    sales_figure,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::common::error::ErrorDisplay;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(root: &Element, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

fn render_figure(element: &Element, figure: &Figure) -> Result<(), JsValue> {
    new_plot(
        element,
        to_js(&figure.data)?,
        to_js(&figure.layout)?,
        to_js(&figure.config)?,
    )?;
    Ok(())
}

fn describe_js_error(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| "Plotly failed to render the chart".to_string())
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub id: AttrValue,
    pub figure: Rc<Figure>,
    pub height_px: u32,
}

/// Hands a figure to Plotly once the container node exists. Re-plots only
/// when the figure itself changes or the user retries after a failure.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let chart_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let attempt = use_state(|| 0u32);

    {
        let chart_ref = chart_ref.clone();
        let error = error.clone();
        let id = props.id.clone();
        use_effect_with((props.figure.clone(), *attempt), move |(figure, _)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                log::trace!("Plotting chart {}", id);
                match render_figure(&element, figure) {
                    Ok(()) => error.set(None),
                    Err(e) => {
                        let message = describe_js_error(&e);
                        log::error!("Failed to render chart {}: {}", id, message);
                        error.set(Some(message));
                    }
                }
            }
            || ()
        });
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    html! {
        <>
            if let Some(message) = (*error).clone() {
                <ErrorDisplay {message} on_retry={Some(on_retry)} />
            }
            <div
                ref={chart_ref}
                id={props.id.clone()}
                class="chart-container"
                style={format!("height: {}px;", props.height_px)}
            ></div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevenueChartProps {
    pub points: Rc<Vec<RevenuePoint>>,
    pub height_px: u32,
}

#[function_component(RevenueChart)]
pub fn revenue_chart(props: &RevenueChartProps) -> Html {
    let figure = use_memo(props.points.clone(), |points| {
        revenue_figure(points, &ChartTheme::default())
    });

    html! {
        <PlotlyChart id="chart-revenue" {figure} height_px={props.height_px} />
    }
}

#[derive(Properties, PartialEq)]
pub struct SalesChartProps {
    pub sales: Rc<Vec<ProductSales>>,
    pub height_px: u32,
}

#[function_component(SalesChart)]
pub fn sales_chart(props: &SalesChartProps) -> Html {
    let figure = use_memo(props.sales.clone(), |sales| {
        sales_figure(sales, &ChartTheme::default())
    });

    html! {
        <PlotlyChart id="chart-sales" {figure} height_px={props.height_px} />
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub shares: Rc<Vec<CategoryShare>>,
    pub height_px: u32,
}

#[function_component(CategoryChart)]
pub fn category_chart(props: &CategoryChartProps) -> Html {
    let figure = use_memo(props.shares.clone(), |shares| {
        category_figure(shares, &ChartTheme::default())
    });

    html! {
        <div class="flex items-center justify-center">
            <PlotlyChart id="chart-categories" {figure} height_px={props.height_px} />
        </div>
    }
}
