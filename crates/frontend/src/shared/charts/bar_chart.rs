//! Grouped vertical bar chart (category buckets, N series per bucket).

use super::scale::{extent_with_zero, nice_ticks, LinearScale};
use super::{ChartHover, GRID_COLOR, TICK_COLOR, ZERO_LINE_COLOR};
use crate::shared::components::tooltip::ChartTooltip;
use crate::shared::tooltip::HoveredPoint;
use leptos::prelude::*;

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 300.0;
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

/// One bar inside a group; fill is decided by the caller (static series
/// colour or sign-based).
#[derive(Clone, Debug, PartialEq)]
pub struct BarCell {
    pub value: f64,
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub bars: Vec<BarCell>,
    pub hover: HoveredPoint,
}

#[component]
pub fn BarChart(groups: Vec<BarGroup>, y_fmt: fn(f64) -> String) -> impl IntoView {
    let hover = ChartHover::new();

    let inner_w = VIEW_W - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_h = VIEW_H - MARGIN_TOP - MARGIN_BOTTOM;
    let grid_x2 = VIEW_W - MARGIN_RIGHT;
    let tick_x = MARGIN_LEFT - 8.0;
    let label_y = VIEW_H - 8.0;

    let all_values = groups.iter().flat_map(|g| g.bars.iter().map(|b| b.value));
    let (min, max) = extent_with_zero(all_values);
    let y_scale = LinearScale::new((min * 1.05, max * 1.05), (VIEW_H - MARGIN_BOTTOM, MARGIN_TOP));
    let zero_y = y_scale.map(0.0);
    let ticks = nice_ticks(min, max, 4);

    let n = groups.len().max(1);
    let series_count = groups.iter().map(|g| g.bars.len()).max().unwrap_or(1).max(1);
    let slot_w = inner_w / n as f64;
    let bar_w = (slot_w * 0.6 / series_count as f64).min(25.0);

    let grid_lines = ticks
        .iter()
        .map(|tick| {
            let y = y_scale.map(*tick);
            let text_y = y + 3.0;
            let label = y_fmt(*tick);
            view! {
                <line x1=MARGIN_LEFT x2=grid_x2 y1=y y2=y stroke=GRID_COLOR stroke-dasharray="3 3" />
                <text x=tick_x y=text_y text-anchor="end" font-size="10" fill=TICK_COLOR>
                    {label}
                </text>
            }
        })
        .collect_view();

    let bars = groups
        .iter()
        .enumerate()
        .map(|(gi, group)| {
            let slot_x = MARGIN_LEFT + slot_w * gi as f64;
            let group_w = bar_w * group.bars.len() as f64;
            let first_x = slot_x + (slot_w - group_w) / 2.0;
            let label_x = slot_x + slot_w / 2.0;
            let label = group.label.clone();
            let datum = group.hover.clone();

            let rects = group
                .bars
                .iter()
                .enumerate()
                .map(|(bi, bar)| {
                    let x = first_x + bar_w * bi as f64;
                    let value_y = y_scale.map(bar.value);
                    let (y, height) = if bar.value >= 0.0 {
                        (value_y, zero_y - value_y)
                    } else {
                        (zero_y, value_y - zero_y)
                    };
                    let fill = bar.fill.clone();
                    view! { <rect x=x y=y width=bar_w height=height fill=fill rx="2" /> }
                })
                .collect_view();

            view! {
                {rects}
                <text x=label_x y=label_y text-anchor="middle" font-size="10" fill=TICK_COLOR>
                    {label}
                </text>
                <rect
                    x=slot_x
                    y=MARGIN_TOP
                    width=slot_w
                    height=inner_h
                    fill="transparent"
                    on:mouseenter=move |_| hover.enter(datum.clone())
                />
            }
        })
        .collect_view();

    let view_box = format!("0 0 {} {}", VIEW_W, VIEW_H);

    view! {
        <div
            class="chart"
            on:mousemove=move |ev| hover.track(&ev)
            on:mouseleave=move |_| hover.leave()
        >
            <svg viewBox=view_box class="chart__svg">
                {grid_lines}
                <line x1=MARGIN_LEFT x2=grid_x2 y1=zero_y y2=zero_y stroke=ZERO_LINE_COLOR />
                {bars}
            </svg>
            <ChartTooltip hover=hover />
        </div>
    }
}
