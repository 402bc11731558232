//! SVG bar and pie charts for the dashboard.

use leptos::prelude::*;

use crate::state::dashboard::{CategoryTotal, MonthlyTotal, bar_heights, pie_slices};
use crate::util::format::{format_currency, format_percentage};

const BAR_CHART_WIDTH: f64 = 720.0;
const BAR_CHART_HEIGHT: f64 = 240.0;
const BAR_LABEL_SPACE: f64 = 24.0;
const PIE_SIZE: f64 = 240.0;

fn num(v: f64) -> String {
    format!("{v:.2}")
}

/// Monthly spend as vertical bars, one per month.
#[component]
pub fn BarChart(#[prop(into)] monthly: Signal<Vec<MonthlyTotal>>) -> impl IntoView {
    let bars = move || {
        let months = monthly.get();
        let plot_height = BAR_CHART_HEIGHT - BAR_LABEL_SPACE;
        let heights = bar_heights(&months, plot_height);
        #[allow(clippy::cast_precision_loss)]
        let slot = BAR_CHART_WIDTH / months.len().max(1) as f64;
        let bar_width = slot * 0.6;
        months
            .into_iter()
            .zip(heights)
            .enumerate()
            .map(|(i, (month, height))| {
                #[allow(clippy::cast_precision_loss)]
                let x = slot * i as f64 + (slot - bar_width) / 2.0;
                let y = plot_height - height;
                let tooltip = format!("{}: {}", month.label, format_currency(month.amount, "USD"));
                view! {
                    <g class="bar-chart__bar">
                        <rect x=num(x) y=num(y) width=num(bar_width) height=num(height) fill="#8884D8">
                            <title>{tooltip}</title>
                        </rect>
                        <text x=num(x + bar_width / 2.0) y=num(BAR_CHART_HEIGHT - 6.0) text-anchor="middle" font-size="10">
                            {month.label}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {BAR_CHART_WIDTH} {BAR_CHART_HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
        >
            {bars}
        </svg>
    }
}

/// Category share of a month's spend, with a percentage legend.
#[component]
pub fn PieChart(#[prop(into)] categories: Signal<Vec<CategoryTotal>>, #[prop(into)] total: Signal<f64>) -> impl IntoView {
    let center = PIE_SIZE / 2.0;
    let radius = PIE_SIZE / 2.0 - 4.0;

    let wedges = move || {
        pie_slices(&categories.get())
            .into_iter()
            .map(|slice| {
                let tooltip = format!("{}: {}", slice.name, format_currency(slice.value, "USD"));
                if slice.is_full_circle() {
                    view! {
                        <circle cx=num(center) cy=num(center) r=num(radius) fill=slice.color>
                            <title>{tooltip}</title>
                        </circle>
                    }
                    .into_any()
                } else {
                    view! {
                        <path d=slice.path(center, center, radius) fill=slice.color>
                            <title>{tooltip}</title>
                        </path>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    let legend = move || {
        let total = total.get();
        pie_slices(&categories.get())
            .into_iter()
            .map(|slice| {
                view! {
                    <li class="pie-chart__legend-item">
                        <span class="pie-chart__swatch" style=format!("background-color: {}", slice.color)></span>
                        {format!("{} ({}%)", slice.name, format_percentage(slice.value, total))}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="pie-chart">
            <svg viewBox=format!("0 0 {PIE_SIZE} {PIE_SIZE}") width=num(PIE_SIZE) height=num(PIE_SIZE)>
                {wedges}
            </svg>
            <ul class="pie-chart__legend">{legend}</ul>
        </div>
    }
}
