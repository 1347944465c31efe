//! Customer portfolio: segmentation map plus the four ranked charts.
//!
//! VIP and critical sets are derived from the ranked lists on every snapshot
//! and drive both the scatter colours and the per-bar highlights.

use super::api;
use crate::shared::charts::hbar_chart::{HBarChart, HBarRow};
use crate::shared::charts::palette;
use crate::shared::charts::scatter_chart::{ScatterChart, ScatterPoint};
use crate::shared::components::panel::Panel;
use crate::shared::components::status::{ErrorCard, LoadingCard};
use crate::shared::format::format_axis_currency_k;
use crate::shared::icons::icon;
use crate::shared::remote::Remote;
use crate::shared::tooltip::{HoveredPoint, SeriesValue};
use contracts::views::customers::{CustomerAnalysis, CustomerEntry, CustomerSegments};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn axis_count(value: f64) -> String {
    format!("{:.0}", value)
}

fn customer_hover(entry: &CustomerEntry) -> HoveredPoint {
    HoveredPoint {
        name: Some(entry.name.clone()),
        net_profit: Some(entry.profit),
        series: vec![
            SeriesValue::new("Órdenes", entry.orders),
            SeriesValue::new("Ventas", entry.sales),
        ],
        ..Default::default()
    }
}

fn segmentation_points(data: &CustomerAnalysis, segments: &CustomerSegments) -> Vec<ScatterPoint> {
    data.segmentation
        .iter()
        .map(|entry| {
            let highlighted = segments.is_vip(&entry.name) || segments.is_critical(&entry.name);
            let fill = if segments.is_vip(&entry.name) {
                palette::EMERALD_DEEP
            } else if segments.is_critical(&entry.name) {
                palette::CRIMSON
            } else if entry.profit < 0.0 {
                palette::ROSE
            } else {
                palette::VIOLET
            };
            ScatterPoint {
                x: entry.orders,
                y: entry.sales,
                r: 5.0,
                fill: fill.to_string(),
                opacity: if highlighted { 1.0 } else { 0.4 },
                hover: customer_hover(entry),
            }
        })
        .collect()
}

/// Ranked rows with the highlight colour applied to segment members.
fn ranked_rows(
    entries: &[CustomerEntry],
    value_of: fn(&CustomerEntry) -> f64,
    series_name: &'static str,
    base: &'static str,
    highlight: &'static str,
    highlight_set: &std::collections::HashSet<String>,
) -> Vec<HBarRow> {
    entries
        .iter()
        .map(|entry| {
            let fill = if highlight_set.contains(&entry.name) {
                highlight
            } else {
                base
            };
            let mut hover = customer_hover(entry);
            hover.series = vec![SeriesValue::new(series_name, value_of(entry))];
            HBarRow::single(entry.name.clone(), value_of(entry), fill.to_string(), hover)
        })
        .collect()
}

#[component]
pub fn CustomersView() -> impl IntoView {
    let state = RwSignal::new(Remote::<CustomerAnalysis>::Loading);

    spawn_local(async move {
        match api::load_customers().await {
            Ok(snapshot) => state.set(Remote::Ready(snapshot)),
            Err(err) => {
                log::error!("Failed to load customer analysis: {}", err);
                state.set(Remote::Failed(err));
            }
        }
    });

    move || match state.get() {
        Remote::Loading => {
            view! { <LoadingCard message="Analizando comportamiento de cartera..." /> }.into_any()
        }
        Remote::Failed(reason) => view! { <ErrorCard reason=reason /> }.into_any(),
        Remote::Ready(snapshot) => view! { <CustomersReady snapshot=snapshot /> }.into_any(),
    }
}

#[component]
fn CustomersReady(snapshot: CustomerAnalysis) -> impl IntoView {
    let segments = CustomerSegments::derive(&snapshot);

    let segmentation = segmentation_points(&snapshot, &segments);
    let top_profitable = ranked_rows(
        &snapshot.top_profitable,
        |entry| entry.profit,
        "profit",
        palette::EMERALD,
        palette::EMERALD_DEEP,
        &segments.vips,
    );
    let top_revenue = ranked_rows(
        &snapshot.top_revenue,
        |entry| entry.sales,
        "sales",
        palette::SLATE_SOFT,
        palette::EMERALD_DEEP,
        &segments.vips,
    );
    let bottom_profitable = ranked_rows(
        &snapshot.bottom_profitable,
        |entry| entry.profit,
        "profit",
        palette::ROSE,
        palette::CRIMSON,
        &segments.criticals,
    );
    let bottom_revenue = ranked_rows(
        &snapshot.bottom_revenue,
        |entry| entry.sales,
        "sales",
        palette::SLATE_FAINT,
        palette::CRIMSON,
        &segments.criticals,
    );

    view! {
        <div class="view view--customers">
            <Panel title="Mapa de Frecuencia vs Volumen">
                <ScatterChart
                    points=segmentation
                    x_fmt=axis_count
                    y_fmt=format_axis_currency_k
                    x_from_zero=true
                    zero_line=true
                />
            </Panel>

            <div class="profile-card">
                <div class="profile-card__badge">
                    <div class="profile-card__icon">{icon("users")}</div>
                    <h3 class="profile-card__title">"Perfil de Cartera"</h3>
                    <p class="profile-card__kicker">"Business Intelligence"</p>
                </div>
                <div class="profile-card__grid">
                    <CustomerInsight
                        title="Núcleo VIP"
                        description="Clientes estrella en la intersección de Volumen y Margen (Verde intenso)."
                        tone="success"
                    />
                    <CustomerInsight
                        title="Riesgo Crítico"
                        description="Clientes con frecuencia alta pero rentabilidad negativa (Rojo carmesí)."
                        tone="error"
                    />
                    <CustomerInsight
                        title="Potencial"
                        description="Baja frecuencia pero tickets altos. Fomentar recurrencia."
                        tone="info"
                    />
                    <div class="profile-card__strategy">
                        <p class="profile-card__strategy-label">"Estrategia Sugerida:"</p>
                        <p class="profile-card__strategy-text">
                            "Priorizar fidelización VIP y restringir descuentos mayores al 6%."
                        </p>
                    </div>
                </div>
            </div>

            <div class="view__grid view__grid--two">
                <Panel title="Top 20: Más Rentables">
                    <HBarChart rows=top_profitable x_fmt=format_axis_currency_k />
                </Panel>
                <Panel title="Top 20: Mayor Facturación">
                    <HBarChart rows=top_revenue x_fmt=format_axis_currency_k />
                </Panel>
                <Panel title="Bottom 20: Menos Rentables">
                    <HBarChart rows=bottom_profitable x_fmt=format_axis_currency_k />
                </Panel>
                <Panel title="Bottom 20: Menor Facturación">
                    <HBarChart rows=bottom_revenue x_fmt=format_axis_currency_k />
                </Panel>
            </div>
        </div>
    }
}

#[component]
fn CustomerInsight(
    title: &'static str,
    description: &'static str,
    tone: &'static str,
) -> impl IntoView {
    let bar_class = match tone {
        "success" => "customer-insight__bar customer-insight__bar--success",
        "error" => "customer-insight__bar customer-insight__bar--error",
        _ => "customer-insight__bar customer-insight__bar--info",
    };

    view! {
        <div class="customer-insight">
            <div class=bar_class></div>
            <div>
                <p class="customer-insight__title">{title}</p>
                <p class="customer-insight__description">{description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, sales: f64, profit: f64, orders: f64) -> CustomerEntry {
        CustomerEntry {
            name: name.to_string(),
            sales,
            profit,
            orders,
        }
    }

    fn fixture() -> CustomerAnalysis {
        CustomerAnalysis {
            top_profitable: vec![entry("A", 1_000.0, 100.0, 4.0)],
            top_revenue: vec![
                entry("A", 1_000.0, 100.0, 4.0),
                entry("B", 2_000.0, 5.0, 7.0),
            ],
            bottom_profitable: vec![entry("C", 50.0, -80.0, 2.0)],
            bottom_revenue: vec![
                entry("C", 50.0, -80.0, 2.0),
                entry("D", 40.0, 1.0, 1.0),
            ],
            segmentation: vec![
                entry("A", 1_000.0, 100.0, 4.0),
                entry("B", 2_000.0, 5.0, 7.0),
                entry("C", 50.0, -80.0, 2.0),
                entry("D", 40.0, 1.0, 1.0),
            ],
        }
    }

    #[test]
    fn segment_members_get_highlight_colours_on_the_map() {
        let data = fixture();
        let segments = CustomerSegments::derive(&data);
        let points = segmentation_points(&data, &segments);

        let fills: Vec<&str> = points.iter().map(|p| p.fill.as_str()).collect();
        assert_eq!(
            fills,
            vec![
                palette::EMERALD_DEEP, // A: VIP
                palette::VIOLET,       // B: neutral, positive profit
                palette::CRIMSON,      // C: critical
                palette::VIOLET,       // D: neutral
            ]
        );
        assert_eq!(points[0].opacity, 1.0);
        assert_eq!(points[1].opacity, 0.4);
    }

    #[test]
    fn loss_making_neutrals_use_the_loss_colour() {
        let mut data = fixture();
        data.segmentation = vec![entry("E", 300.0, -10.0, 3.0)];
        let segments = CustomerSegments::derive(&data);

        let points = segmentation_points(&data, &segments);
        assert_eq!(points[0].fill, palette::ROSE);
    }

    #[test]
    fn ranked_rows_highlight_only_segment_members() {
        let data = fixture();
        let segments = CustomerSegments::derive(&data);

        let rows = ranked_rows(
            &data.top_revenue,
            |entry| entry.sales,
            "sales",
            palette::SLATE_SOFT,
            palette::EMERALD_DEEP,
            &segments.vips,
        );
        assert_eq!(rows[0].bars[0].fill, palette::EMERALD_DEEP);
        assert_eq!(rows[1].bars[0].fill, palette::SLATE_SOFT);
    }
}
