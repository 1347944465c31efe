//! Single-series area chart over labeled buckets (monthly seasonality).

use super::scale::{extent_with_zero, nice_ticks, LinearScale};
use super::{ChartHover, GRID_COLOR, TICK_COLOR};
use crate::shared::components::tooltip::ChartTooltip;
use crate::shared::tooltip::HoveredPoint;
use leptos::prelude::*;

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 300.0;
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AreaPoint {
    pub label: String,
    pub value: f64,
    pub hover: HoveredPoint,
}

#[component]
pub fn AreaChart(
    points: Vec<AreaPoint>,
    color: &'static str,
    /// Step interpolation (logistics stages) instead of a straight polyline.
    #[prop(optional)]
    step: bool,
    /// Draw a dot on every bucket.
    #[prop(optional)]
    dots: bool,
    y_fmt: fn(f64) -> String,
) -> impl IntoView {
    let hover = ChartHover::new();

    let inner_w = VIEW_W - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_h = VIEW_H - MARGIN_TOP - MARGIN_BOTTOM;
    let base_y = VIEW_H - MARGIN_BOTTOM;
    let grid_x2 = VIEW_W - MARGIN_RIGHT;
    let tick_x = MARGIN_LEFT - 8.0;
    let label_y = VIEW_H - 8.0;

    let (min, max) = extent_with_zero(points.iter().map(|p| p.value));
    let y_scale = LinearScale::new((min, max * 1.05), (base_y, MARGIN_TOP));
    let ticks = nice_ticks(min, max, 4);

    let n = points.len();
    let x_at = move |i: usize| {
        if n <= 1 {
            MARGIN_LEFT + inner_w / 2.0
        } else {
            MARGIN_LEFT + inner_w * i as f64 / (n - 1) as f64
        }
    };

    // Line path, optionally stepped after each bucket.
    let mut line_d = String::new();
    for (i, point) in points.iter().enumerate() {
        let x = x_at(i);
        let y = y_scale.map(point.value);
        if i == 0 {
            line_d.push_str(&format!("M{:.1},{:.1}", x, y));
        } else if step {
            let prev_y = y_scale.map(points[i - 1].value);
            line_d.push_str(&format!(" L{:.1},{:.1} L{:.1},{:.1}", x, prev_y, x, y));
        } else {
            line_d.push_str(&format!(" L{:.1},{:.1}", x, y));
        }
    }
    let area_d = if n == 0 {
        String::new()
    } else {
        format!(
            "{} L{:.1},{:.1} L{:.1},{:.1} Z",
            line_d,
            x_at(n - 1),
            base_y,
            x_at(0),
            base_y
        )
    };

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

    let x_labels = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = x_at(i);
            let label = point.label.clone();
            view! {
                <text x=x y=label_y text-anchor="middle" font-size="10" fill=TICK_COLOR>
                    {label}
                </text>
            }
        })
        .collect_view();

    let dot_marks = dots.then(|| {
        points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let cx = x_at(i);
                let cy = y_scale.map(point.value);
                view! { <circle cx=cx cy=cy r="3" fill=color /> }
            })
            .collect_view()
    });

    // One invisible column per bucket drives the hover channel.
    let slot_w = if n == 0 { inner_w } else { inner_w / n as f64 };
    let hover_slots = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = x_at(i) - slot_w / 2.0;
            let datum = point.hover.clone();
            view! {
                <rect
                    x=x
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
                <path d=area_d fill=color fill-opacity="0.12" stroke="none" />
                <path d=line_d fill="none" stroke=color stroke-width="3" stroke-linejoin="round" />
                {dot_marks}
                {x_labels}
                {hover_slots}
            </svg>
            <ChartTooltip hover=hover />
        </div>
    }
}
