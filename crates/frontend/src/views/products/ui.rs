//! Product audit: expensive-shipping impact, top losses and lowest sales.

use super::api;
use crate::shared::charts::hbar_chart::{HBarChart, HBarRow};
use crate::shared::charts::palette;
use crate::shared::charts::scatter_chart::{ScatterChart, ScatterPoint};
use crate::shared::components::panel::Panel;
use crate::shared::components::status::{ErrorCard, LoadingCard};
use crate::shared::format::{format_axis_currency, format_axis_currency_k};
use crate::shared::remote::Remote;
use crate::shared::tooltip::{HoveredPoint, SeriesValue};
use contracts::views::products::ProductAnalysis;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn axis_currency_abs(value: f64) -> String {
    format_axis_currency(value.abs())
}

fn shipping_points(analysis: &ProductAnalysis) -> Vec<ScatterPoint> {
    analysis
        .shipping
        .iter()
        .map(|entry| ScatterPoint {
            x: entry.shipping_cost,
            y: entry.profit,
            r: 5.0,
            fill: if entry.profit < 0.0 {
                palette::ROSE.to_string()
            } else {
                palette::VIOLET.to_string()
            },
            opacity: 0.6,
            hover: HoveredPoint {
                name: Some(entry.name.clone()),
                full_name: Some(entry.full_name.clone()),
                series: vec![
                    SeriesValue::new("Gasto Envío", entry.shipping_cost),
                    SeriesValue::new("Profit", entry.profit),
                ],
                ..Default::default()
            },
        })
        .collect()
}

fn loss_rows(analysis: &ProductAnalysis) -> Vec<HBarRow> {
    analysis
        .top_losses
        .iter()
        .map(|entry| {
            HBarRow::single(
                entry.name.clone(),
                entry.loss_amount,
                palette::ROSE.to_string(),
                HoveredPoint {
                    name: Some(entry.name.clone()),
                    full_name: Some(entry.full_name.clone()),
                    series: vec![
                        SeriesValue::new("Pérdida Neta", entry.loss_amount),
                        SeriesValue::new("Ventas", entry.sales),
                    ],
                    ..Default::default()
                },
            )
        })
        .collect()
}

fn bottom_rows(analysis: &ProductAnalysis) -> Vec<HBarRow> {
    analysis
        .bottom_20
        .iter()
        .map(|entry| {
            HBarRow::single(
                entry.name.clone(),
                entry.sales,
                palette::SLATE_SOFT.to_string(),
                HoveredPoint {
                    name: Some(entry.name.clone()),
                    full_name: Some(entry.full_name.clone()),
                    series: vec![SeriesValue::new("Ventas", entry.sales)],
                    ..Default::default()
                },
            )
        })
        .collect()
}

#[component]
pub fn ProductsView() -> impl IntoView {
    let state = RwSignal::new(Remote::<ProductAnalysis>::Loading);

    spawn_local(async move {
        match api::load_products().await {
            Ok(snapshot) => state.set(Remote::Ready(snapshot)),
            Err(err) => {
                log::error!("Failed to load product analysis: {}", err);
                state.set(Remote::Failed(err));
            }
        }
    });

    move || match state.get() {
        Remote::Loading => view! {
            <LoadingCard message="Auditando fletes y rentabilidad de 300 operaciones críticas..." />
        }
        .into_any(),
        Remote::Failed(reason) => view! { <ErrorCard reason=reason /> }.into_any(),
        Remote::Ready(snapshot) => view! { <ProductsReady snapshot=snapshot /> }.into_any(),
    }
}

#[component]
fn ProductsReady(snapshot: ProductAnalysis) -> impl IntoView {
    let shipping = shipping_points(&snapshot);
    let losses = loss_rows(&snapshot);
    let bottom = bottom_rows(&snapshot);

    view! {
        <div class="view view--products">
            <Panel title="Impacto de Envíos Caros en la Utilidad" class="panel--orange">
                <ScatterChart
                    points=shipping
                    x_fmt=format_axis_currency
                    y_fmt=format_axis_currency_k
                    x_from_zero=true
                    zero_line=true
                />
            </Panel>

            <div class="view__grid view__grid--two">
                <Panel title="Top 25: Productos con Mayor Pérdida ($)" class="panel--rose">
                    <HBarChart rows=losses x_fmt=axis_currency_abs />
                </Panel>
                <Panel title="Productos con Menor Desplazamiento ($)">
                    <HBarChart rows=bottom x_fmt=format_axis_currency />
                </Panel>
            </div>
        </div>
    }
}
