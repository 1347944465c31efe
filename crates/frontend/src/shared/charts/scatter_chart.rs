//! Scatter / bubble chart in two-dimensional measure space.

use super::scale::{extent, extent_with_zero, nice_ticks, LinearScale};
use super::{ChartHover, GRID_COLOR, TICK_COLOR, ZERO_LINE_COLOR};
use crate::shared::components::tooltip::ChartTooltip;
use crate::shared::tooltip::HoveredPoint;
use leptos::prelude::*;

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 320.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 32.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Circle radius in view units; bubble charts derive it from a third
    /// measure, plain scatters pass a constant.
    pub r: f64,
    pub fill: String,
    pub opacity: f64,
    pub hover: HoveredPoint,
}

#[component]
pub fn ScatterChart(
    points: Vec<ScatterPoint>,
    x_fmt: fn(f64) -> String,
    y_fmt: fn(f64) -> String,
    /// Anchor the x domain at zero instead of the data minimum.
    #[prop(optional)]
    x_from_zero: bool,
    /// Dashed reference line at y = 0.
    #[prop(optional)]
    zero_line: bool,
) -> impl IntoView {
    let hover = ChartHover::new();

    let grid_x2 = VIEW_W - MARGIN_RIGHT;
    let axis_y = VIEW_H - MARGIN_BOTTOM;
    let tick_x = MARGIN_LEFT - 8.0;
    let label_y = VIEW_H - 10.0;

    let (x_min, x_max) = if x_from_zero {
        let (_, max) = extent(points.iter().map(|p| p.x));
        (0.0, max)
    } else {
        extent(points.iter().map(|p| p.x))
    };
    let (y_min, y_max) = extent_with_zero(points.iter().map(|p| p.y));

    let x_scale = LinearScale::new((x_min, x_max * 1.05), (MARGIN_LEFT, grid_x2));
    let y_scale = LinearScale::new((y_min * 1.05, y_max * 1.05), (axis_y, MARGIN_TOP));
    let zero_y = y_scale.map(0.0);

    let y_ticks = nice_ticks(y_min, y_max, 4)
        .into_iter()
        .map(|tick| {
            let y = y_scale.map(tick);
            let text_y = y + 3.0;
            let label = y_fmt(tick);
            view! {
                <line x1=MARGIN_LEFT x2=grid_x2 y1=y y2=y stroke=GRID_COLOR stroke-dasharray="3 3" />
                <text x=tick_x y=text_y text-anchor="end" font-size="10" fill=TICK_COLOR>
                    {label}
                </text>
            }
        })
        .collect_view();

    let x_ticks = nice_ticks(x_min, x_max, 5)
        .into_iter()
        .map(|tick| {
            let x = x_scale.map(tick);
            let label = x_fmt(tick);
            view! {
                <text x=x y=label_y text-anchor="middle" font-size="10" fill=TICK_COLOR>
                    {label}
                </text>
            }
        })
        .collect_view();

    let marks = points
        .iter()
        .map(|point| {
            let cx = x_scale.map(point.x);
            let cy = y_scale.map(point.y);
            let r = point.r;
            let opacity = point.opacity;
            let fill = point.fill.clone();
            let datum = point.hover.clone();
            view! {
                <circle
                    cx=cx
                    cy=cy
                    r=r
                    fill=fill
                    fill-opacity=opacity
                    on:mouseenter=move |_| hover.enter(datum.clone())
                />
            }
        })
        .collect_view();

    let zero_ref = zero_line.then(|| {
        view! {
            <line x1=MARGIN_LEFT x2=grid_x2 y1=zero_y y2=zero_y stroke=ZERO_LINE_COLOR stroke-width="2" stroke-dasharray="5 5" />
        }
    });

    let view_box = format!("0 0 {} {}", VIEW_W, VIEW_H);

    view! {
        <div
            class="chart"
            on:mousemove=move |ev| hover.track(&ev)
            on:mouseleave=move |_| hover.leave()
        >
            <svg viewBox=view_box class="chart__svg">
                {y_ticks}
                {x_ticks}
                {zero_ref}
                {marks}
            </svg>
            <ChartTooltip hover=hover />
        </div>
    }
}
