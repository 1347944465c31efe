//! Overview: KPI cards, strategic objectives and the two seasonality charts.

use super::api::{self, OverviewSnapshot};
use crate::shared::charts::area_chart::{AreaChart, AreaPoint};
use crate::shared::charts::palette;
use crate::shared::components::kpi_card::{KpiCard, TrendTone};
use crate::shared::components::panel::Panel;
use crate::shared::components::status::{ErrorCard, LoadingCard};
use crate::shared::format::{format_axis_k, format_currency};
use crate::shared::icons::icon;
use crate::shared::remote::Remote;
use crate::shared::tooltip::{HoveredPoint, SeriesValue};
use contracts::views::overview::ChartData;
use leptos::prelude::*;
use leptos::task::spawn_local;

const BUSINESS_QUESTIONS: &[&str] = &[
    "¿Tiene estacionalidad la venta de los productos de supertienda?",
    "¿Cuál es la eficiencia en la entrega de los productos en general?",
    "¿Hay una política confiable de descuentos que asegure la máxima ganancia?",
    "¿Son adecuados los costos de flete o interfieren en la ganancia?",
    "¿Los clientes de mayor facturación son realmente los más rentables?",
    "¿Qué clientes reportan menos ganancia? ¿Son aquellos a los que se les vende menos?",
    "¿Qué países son los que representan el mejor mercado, y cuáles son los peores?",
];

fn axis_days(value: f64) -> String {
    format!("{:.0}d", value)
}

fn sales_points(charts: &ChartData) -> Vec<AreaPoint> {
    charts
        .sales_over_time
        .iter()
        .map(|month| AreaPoint {
            label: month.date.clone(),
            value: month.sales,
            hover: HoveredPoint {
                label: Some(month.date.clone()),
                series: vec![SeriesValue::new("Ventas", month.sales)],
                ..Default::default()
            },
        })
        .collect()
}

fn lead_time_points(charts: &ChartData) -> Vec<AreaPoint> {
    charts
        .sales_over_time
        .iter()
        .map(|month| AreaPoint {
            label: month.date.clone(),
            value: month.days_to_ship,
            hover: HoveredPoint {
                label: Some(month.date.clone()),
                series: vec![SeriesValue::new("Días Despacho", month.days_to_ship)],
                ..Default::default()
            },
        })
        .collect()
}

#[component]
pub fn OverviewView() -> impl IntoView {
    let state = RwSignal::new(Remote::<OverviewSnapshot>::Loading);

    spawn_local(async move {
        match api::load_overview().await {
            Ok(snapshot) => state.set(Remote::Ready(snapshot)),
            Err(err) => {
                log::error!("Failed to load overview: {}", err);
                state.set(Remote::Failed(err));
            }
        }
    });

    move || match state.get() {
        Remote::Loading => {
            view! { <LoadingCard message="Iniciando Sistema de Inteligencia..." /> }.into_any()
        }
        Remote::Failed(reason) => view! { <ErrorCard reason=reason /> }.into_any(),
        Remote::Ready(snapshot) => view! { <OverviewReady snapshot=snapshot /> }.into_any(),
    }
}

#[component]
fn OverviewReady(snapshot: OverviewSnapshot) -> impl IntoView {
    let kpis = snapshot.kpis;
    let sales = sales_points(&snapshot.charts);
    let lead_time = lead_time_points(&snapshot.charts);

    let questions = BUSINESS_QUESTIONS
        .iter()
        .copied()
        .map(|text| view! { <BusinessQuestion text=text /> })
        .collect_view();

    view! {
        <div class="view view--overview">
            <div class="view__grid view__grid--three">
                <KpiCard
                    title=format!("Ingresos Totales {}", kpis.current_year)
                    value=format_currency(kpis.gross_revenue)
                    trend=kpis.sales_trend
                    icon_name="dollar"
                />
                <KpiCard
                    title="Ticket Promedio (AOV)".to_string()
                    value=format_currency(kpis.avg_order)
                    trend=kpis.order_trend
                    icon_name="cart"
                />
                <KpiCard
                    title="Margen de Utilidad".to_string()
                    value=kpis.profit_margin
                    trend="Meta: 15%".to_string()
                    icon_name="percent"
                    tone=TrendTone::Accent
                />
            </div>

            <div class="intro-card">
                <div class="intro-card__header">
                    <div class="intro-card__icon">{icon("target")}</div>
                    <div>
                        <h2 class="intro-card__title">"Objetivos Estratégicos"</h2>
                        <p class="intro-card__kicker">"Hoja de ruta para la toma de decisiones"</p>
                    </div>
                </div>
                <div class="intro-card__columns">
                    <div class="intro-card__text">
                        <p>
                            "Bienvenido al sistema de inteligencia de SuperTienda Pro. Este panel "
                            "audita la salud operativa y financiera de la empresa a través del "
                            "análisis de más de 50,000 transacciones consolidadas."
                        </p>
                        <p>
                            "El análisis se despliega para resolver las incógnitas que determinan "
                            "el crecimiento sostenible de la operación global:"
                        </p>
                    </div>
                    <div class="intro-card__questions">{questions}</div>
                </div>
            </div>

            <div class="view__grid view__grid--two">
                <Panel title="Tendencia de Ventas (Estacionalidad Histórica)">
                    <AreaChart points=sales color=palette::VIOLET y_fmt=format_axis_k />
                </Panel>
                <Panel title="Eficiencia de Despacho (Lead Time)">
                    <p class="panel__note">"Días promedio desde pedido hasta envío"</p>
                    <AreaChart points=lead_time color=palette::INDIGO step=true dots=true y_fmt=axis_days />
                </Panel>
            </div>
        </div>
    }
}

#[component]
fn BusinessQuestion(text: &'static str) -> impl IntoView {
    view! {
        <div class="question">
            <div class="question__dot"></div>
            <p class="question__text">{text}</p>
        </div>
    }
}
