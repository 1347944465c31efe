//! Floating tooltip rendered inside a chart container.

use crate::shared::charts::ChartHover;
use crate::shared::tooltip::{build_tooltip, ValueTone};
use leptos::prelude::*;

fn tone_class(tone: ValueTone) -> &'static str {
    match tone {
        ValueTone::Loss => "chart-tooltip__value chart-tooltip__value--loss",
        ValueTone::Gain => "chart-tooltip__value chart-tooltip__value--gain",
        ValueTone::Accent => "chart-tooltip__value chart-tooltip__value--accent",
        ValueTone::Muted => "chart-tooltip__value chart-tooltip__value--muted",
        ValueTone::Plain => "chart-tooltip__value",
    }
}

/// Renders nothing while no datum is hovered; otherwise the formatted rows
/// next to the pointer.
#[component]
pub fn ChartTooltip(hover: ChartHover) -> impl IntoView {
    move || {
        hover.point.get().map(|point| {
            let model = build_tooltip(&point);
            let (x, y) = hover.pointer.get();
            let style = format!("left: {:.0}px; top: {:.0}px;", x + 14.0, y + 14.0);

            let rows = model
                .rows
                .into_iter()
                .map(|row| {
                    let class = tone_class(row.tone);
                    view! {
                        <div class="chart-tooltip__row">
                            <span class="chart-tooltip__label">{row.label}</span>
                            <span class=class>{row.value}</span>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="chart-tooltip" style=style>
                    <div class="chart-tooltip__title">{model.title}</div>
                    {rows}
                </div>
            }
        })
    }
}
