//! Static KPI card: label, pre-formatted value, trend badge.

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour pair of the trend badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrendTone {
    #[default]
    Success,
    Accent,
}

/// Pure rendering; formatting of `value` and `trend` is the caller's job.
#[component]
pub fn KpiCard(
    title: String,
    value: String,
    trend: String,
    icon_name: &'static str,
    #[prop(optional)] tone: TrendTone,
) -> impl IntoView {
    let badge_class = match tone {
        TrendTone::Success => "kpi-card__trend kpi-card__trend--success",
        TrendTone::Accent => "kpi-card__trend kpi-card__trend--accent",
    };

    view! {
        <div class="kpi-card">
            <div class="kpi-card__content">
                <p class="kpi-card__label">{title}</p>
                <h2 class="kpi-card__value">{value}</h2>
                <div class=badge_class>{trend}</div>
            </div>
            <div class="kpi-card__icon">{icon(icon_name)}</div>
        </div>
    }
}
