//! Country rollups: market leader, global bubble map, loss rankings and the
//! shipping-vs-margin relation.

use super::api;
use crate::shared::charts::hbar_chart::{HBarChart, HBarRow};
use crate::shared::charts::palette;
use crate::shared::charts::scale::extent;
use crate::shared::charts::scatter_chart::{ScatterChart, ScatterPoint};
use crate::shared::components::panel::Panel;
use crate::shared::components::status::{ErrorCard, LoadingCard};
use crate::shared::format::{format_axis_currency, format_axis_currency_k, format_count, format_currency};
use crate::shared::icons::icon;
use crate::shared::remote::Remote;
use crate::shared::tooltip::{HoveredPoint, SeriesValue};
use contracts::views::countries::CountriesAnalysis;
use leptos::prelude::*;
use leptos::task::spawn_local;

const BUBBLE_R_MIN: f64 = 5.0;
const BUBBLE_R_MAX: f64 = 18.0;

fn axis_count(value: f64) -> String {
    format!("{:.0}", value)
}

fn axis_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

fn bubble_points(analysis: &CountriesAnalysis) -> Vec<ScatterPoint> {
    let (profit_min, profit_max) = extent(analysis.bubble_data.iter().map(|b| b.profit));
    let profit_span = (profit_max - profit_min).max(f64::EPSILON);

    analysis
        .bubble_data
        .iter()
        .map(|bubble| {
            let share = (bubble.profit - profit_min) / profit_span;
            ScatterPoint {
                x: bubble.orders,
                y: bubble.sales,
                r: BUBBLE_R_MIN + (BUBBLE_R_MAX - BUBBLE_R_MIN) * share,
                fill: if bubble.profit < 0.0 {
                    palette::ROSE.to_string()
                } else {
                    palette::VIOLET.to_string()
                },
                opacity: 0.6,
                hover: HoveredPoint {
                    country: Some(bubble.country.clone()),
                    series: vec![
                        SeriesValue::new("Pedidos", bubble.orders),
                        SeriesValue::new("Ventas", bubble.sales),
                        SeriesValue::new("Ganancia", bubble.profit),
                    ],
                    ..Default::default()
                },
            }
        })
        .collect()
}

fn bottom_country_rows(analysis: &CountriesAnalysis) -> Vec<HBarRow> {
    analysis
        .bottom_countries
        .iter()
        .map(|entry| {
            HBarRow::single(
                entry.country.clone(),
                entry.profit,
                palette::ROSE.to_string(),
                HoveredPoint {
                    country: Some(entry.country.clone()),
                    series: vec![SeriesValue::new("Profit", entry.profit)],
                    ..Default::default()
                },
            )
        })
        .collect()
}

fn critical_geo_rows(analysis: &CountriesAnalysis) -> Vec<HBarRow> {
    analysis
        .critical_geo
        .iter()
        .map(|entry| {
            HBarRow::single(
                entry.country.clone(),
                entry.count,
                palette::SLATE.to_string(),
                HoveredPoint {
                    country: Some(entry.country.clone()),
                    series: vec![SeriesValue::new("Clientes Críticos", entry.count)],
                    ..Default::default()
                },
            )
        })
        .collect()
}

fn shipping_points(analysis: &CountriesAnalysis) -> Vec<ScatterPoint> {
    analysis
        .shipping_relation
        .iter()
        .map(|entry| ScatterPoint {
            x: entry.avg_shipping,
            y: entry.profit_margin,
            r: 5.0,
            fill: if entry.profit_margin < 0.0 {
                palette::ROSE.to_string()
            } else {
                palette::ORANGE.to_string()
            },
            opacity: 0.6,
            hover: HoveredPoint {
                country: Some(entry.country.clone()),
                series: vec![
                    SeriesValue::new("Envío Promedio", entry.avg_shipping),
                    SeriesValue::new("Margen %", entry.profit_margin),
                ],
                ..Default::default()
            },
        })
        .collect()
}

#[component]
pub fn CountriesView() -> impl IntoView {
    let state = RwSignal::new(Remote::<CountriesAnalysis>::Loading);

    spawn_local(async move {
        match api::load_countries().await {
            Ok(snapshot) => state.set(Remote::Ready(snapshot)),
            Err(err) => {
                log::error!("Failed to load country analysis: {}", err);
                state.set(Remote::Failed(err));
            }
        }
    });

    move || match state.get() {
        Remote::Loading => {
            view! { <LoadingCard message="Mapeando rentabilidad global..." /> }.into_any()
        }
        Remote::Failed(reason) => view! { <ErrorCard reason=reason /> }.into_any(),
        Remote::Ready(snapshot) => view! { <CountriesReady snapshot=snapshot /> }.into_any(),
    }
}

#[component]
fn CountriesReady(snapshot: CountriesAnalysis) -> impl IntoView {
    let bubbles = bubble_points(&snapshot);
    let bottom_countries = bottom_country_rows(&snapshot);
    let critical_geo = critical_geo_rows(&snapshot);
    let shipping = shipping_points(&snapshot);

    let leader = snapshot.outlier;
    let leader_sales = format_currency(leader.sales);
    let leader_orders = format_count(leader.orders);
    let leader_profit = format_currency(leader.profit);

    view! {
        <div class="view view--countries">
            <div class="leader-card">
                <div class="leader-card__identity">
                    <div class="leader-card__icon">{icon("globe")}</div>
                    <div>
                        <h2 class="leader-card__title">{format!("Líder: {}", leader.country)}</h2>
                        <p class="leader-card__kicker">"Excluido del scatter para normalizar escala"</p>
                    </div>
                </div>
                <div class="leader-card__stats">
                    <div class="leader-card__stat">
                        <p class="leader-card__stat-label">"Ventas"</p>
                        <p class="leader-card__stat-value">{leader_sales}</p>
                    </div>
                    <div class="leader-card__stat">
                        <p class="leader-card__stat-label">"Pedidos"</p>
                        <p class="leader-card__stat-value">{leader_orders}</p>
                    </div>
                    <div class="leader-card__stat leader-card__stat--profit">
                        <p class="leader-card__stat-label">"Profit"</p>
                        <p class="leader-card__stat-value">{leader_profit}</p>
                    </div>
                </div>
            </div>

            <Panel title="Distribución de Mercado Global: Volumen vs Lealtad (Sin USA)" class="panel--violet">
                <ScatterChart
                    points=bubbles
                    x_fmt=axis_count
                    y_fmt=format_axis_currency_k
                    x_from_zero=true
                    zero_line=true
                />
            </Panel>

            <div class="view__grid view__grid--two">
                <Panel title="Top 15: Países con Mayor Pérdida Neta" class="panel--rose">
                    <HBarChart rows=bottom_countries x_fmt=format_axis_currency_k />
                </Panel>
                <Panel title="Países con más Clientes en Pérdida">
                    <HBarChart rows=critical_geo x_fmt=axis_count />
                </Panel>
            </div>

            <Panel title="Análisis Operativo: ¿El flete mata el margen del país?" class="panel--orange">
                <ScatterChart
                    points=shipping
                    x_fmt=format_axis_currency
                    y_fmt=axis_percent
                    x_from_zero=true
                    zero_line=true
                />
            </Panel>
        </div>
    }
}
