//! Horizontal ranked bar chart (top/bottom-N leaderboards).

use super::bar_chart::BarCell;
use super::scale::{extent_with_zero, nice_ticks, LinearScale};
use super::{ChartHover, GRID_COLOR, TICK_COLOR, ZERO_LINE_COLOR};
use crate::shared::components::tooltip::ChartTooltip;
use crate::shared::tooltip::HoveredPoint;
use leptos::prelude::*;

const VIEW_W: f64 = 640.0;
const LABEL_W: f64 = 150.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 8.0;
const MARGIN_BOTTOM: f64 = 24.0;
const BAR_H: f64 = 8.0;
const BAR_GAP: f64 = 2.0;
const ROW_PAD: f64 = 8.0;

/// One ranked row with one bar per series. Fills are decided by the caller,
/// which is how highlight sets (VIP/critical) override the base colour.
#[derive(Clone, Debug, PartialEq)]
pub struct HBarRow {
    pub label: String,
    pub bars: Vec<BarCell>,
    pub hover: HoveredPoint,
}

impl HBarRow {
    /// Single-series convenience used by most rankings.
    pub fn single(label: String, value: f64, fill: String, hover: HoveredPoint) -> Self {
        Self {
            label,
            bars: vec![BarCell { value, fill }],
            hover,
        }
    }
}

#[component]
pub fn HBarChart(rows: Vec<HBarRow>, x_fmt: fn(f64) -> String) -> impl IntoView {
    let hover = ChartHover::new();

    let series_count = rows.iter().map(|r| r.bars.len()).max().unwrap_or(1).max(1);
    let row_h = (BAR_H + BAR_GAP) * series_count as f64 + ROW_PAD;

    let inner_w = VIEW_W - LABEL_W - MARGIN_RIGHT;
    let view_h = MARGIN_TOP + row_h * rows.len() as f64 + MARGIN_BOTTOM;
    let axis_y = view_h - MARGIN_BOTTOM;
    let text_bottom_y = view_h - 8.0;

    let all_values = rows.iter().flat_map(|r| r.bars.iter().map(|b| b.value));
    let (min, max) = extent_with_zero(all_values);
    let x_scale = LinearScale::new((min * 1.05, max * 1.05), (LABEL_W, VIEW_W - MARGIN_RIGHT));
    let zero_x = x_scale.map(0.0);
    let ticks = nice_ticks(min, max, 4);

    let tick_marks = ticks
        .iter()
        .map(|tick| {
            let x = x_scale.map(*tick);
            let label = x_fmt(*tick);
            view! {
                <line x1=x x2=x y1=MARGIN_TOP y2=axis_y stroke=GRID_COLOR stroke-dasharray="3 3" />
                <text x=x y=text_bottom_y text-anchor="middle" font-size="10" fill=TICK_COLOR>
                    {label}
                </text>
            }
        })
        .collect_view();

    let bar_rows = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let row_top = MARGIN_TOP + row_h * i as f64;
            let text_y = row_top + row_h / 2.0 + 3.0;
            let label_x = LABEL_W - 8.0;

            let bars = row
                .bars
                .iter()
                .enumerate()
                .map(|(bi, bar)| {
                    let y = row_top + ROW_PAD / 2.0 + (BAR_H + BAR_GAP) * bi as f64;
                    let value_x = x_scale.map(bar.value);
                    let (x, width) = if bar.value >= 0.0 {
                        (zero_x, value_x - zero_x)
                    } else {
                        (value_x, zero_x - value_x)
                    };
                    let fill = bar.fill.clone();
                    view! { <rect x=x y=y width=width height=BAR_H fill=fill rx="2" /> }
                })
                .collect_view();

            let label = row.label.clone();
            let datum = row.hover.clone();
            view! {
                <text x=label_x y=text_y text-anchor="end" font-size="9" fill="#64748b" font-weight="600">
                    {label}
                </text>
                {bars}
                <rect
                    x=LABEL_W
                    y=row_top
                    width=inner_w
                    height=row_h
                    fill="transparent"
                    on:mouseenter=move |_| hover.enter(datum.clone())
                />
            }
        })
        .collect_view();

    let view_box = format!("0 0 {} {}", VIEW_W, view_h);

    view! {
        <div
            class="chart"
            on:mousemove=move |ev| hover.track(&ev)
            on:mouseleave=move |_| hover.leave()
        >
            <svg viewBox=view_box class="chart__svg">
                {tick_marks}
                <line x1=zero_x x2=zero_x y1=MARGIN_TOP y2=axis_y stroke=ZERO_LINE_COLOR stroke-width="2" />
                {bar_rows}
            </svg>
            <ChartTooltip hover=hover />
        </div>
    }
}
