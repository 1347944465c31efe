//! Discount audit: category profitability, sub-category ranking, loss
//! erosion by discount bracket and the 25 most-discounted products.

use super::api::{self, DiscountsSnapshot};
use crate::shared::charts::bar_chart::{BarCell, BarChart, BarGroup};
use crate::shared::charts::hbar_chart::{HBarChart, HBarRow};
use crate::shared::charts::palette;
use crate::shared::components::status::{ErrorCard, LoadingCard};
use crate::shared::format::format_axis_k;
use crate::shared::icons::icon;
use crate::shared::remote::Remote;
use crate::shared::tooltip::{HoveredPoint, SeriesValue};
use contracts::views::discounts::{DiscountGroup, DiscountProduct, SubCategoryPoint};
use contracts::views::overview::CategoryPoint;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn category_groups(categories: &[CategoryPoint]) -> Vec<BarGroup> {
    categories
        .iter()
        .map(|cat| BarGroup {
            label: cat.category.clone(),
            bars: vec![
                BarCell {
                    value: cat.sales,
                    fill: palette::SLATE_SOFT.to_string(),
                },
                BarCell {
                    value: cat.profit,
                    fill: palette::VIOLET.to_string(),
                },
                BarCell {
                    value: cat.discount_value,
                    fill: palette::ROSE_SOFT.to_string(),
                },
            ],
            hover: HoveredPoint {
                category: Some(cat.category.clone()),
                series: vec![
                    SeriesValue::new("Ventas", cat.sales),
                    SeriesValue::new("Profit", cat.profit),
                    SeriesValue::new("Discount_Value", cat.discount_value),
                ],
                ..Default::default()
            },
        })
        .collect()
}

fn subcategory_rows(subcategories: &[SubCategoryPoint]) -> Vec<HBarRow> {
    subcategories
        .iter()
        .map(|sub| HBarRow {
            label: sub.sub_category.clone(),
            bars: vec![
                BarCell {
                    value: sub.sales,
                    fill: palette::SLATE_SOFT.to_string(),
                },
                BarCell {
                    value: sub.profit,
                    fill: if sub.profit < 0.0 {
                        palette::ROSE.to_string()
                    } else {
                        palette::VIOLET.to_string()
                    },
                },
            ],
            hover: HoveredPoint {
                name: Some(sub.sub_category.clone()),
                series: vec![
                    SeriesValue::new("Ventas", sub.sales),
                    SeriesValue::new("Profit", sub.profit),
                ],
                ..Default::default()
            },
        })
        .collect()
}

fn bracket_groups(groups: &[DiscountGroup], series_name: &str, sign_colors: bool) -> Vec<BarGroup> {
    groups
        .iter()
        .map(|bracket| {
            let fill = if !sign_colors {
                palette::ROSE.to_string()
            } else if bracket.profit >= 0.0 {
                palette::EMERALD.to_string()
            } else {
                palette::ROSE.to_string()
            };
            BarGroup {
                label: bracket.group.clone(),
                bars: vec![BarCell {
                    value: bracket.profit,
                    fill,
                }],
                hover: HoveredPoint {
                    label: Some(bracket.group.clone()),
                    series: vec![SeriesValue::new(series_name, bracket.profit)],
                    ..Default::default()
                },
            }
        })
        .collect()
}

fn product_rows(products: &[DiscountProduct]) -> Vec<HBarRow> {
    products
        .iter()
        .map(|product| HBarRow {
            label: product.name.clone(),
            bars: vec![
                BarCell {
                    value: product.discount_value,
                    fill: palette::ROSE_SOFT.to_string(),
                },
                BarCell {
                    value: product.profit,
                    fill: if product.profit < 0.0 {
                        palette::ROSE.to_string()
                    } else {
                        palette::VIOLET.to_string()
                    },
                },
            ],
            hover: HoveredPoint {
                name: Some(product.name.clone()),
                full_name: Some(product.full_name.clone()),
                net_profit: Some(product.profit),
                series: vec![
                    SeriesValue::new("Descuento", product.discount_value),
                    SeriesValue::new("Profit", product.profit),
                ],
                ..Default::default()
            },
        })
        .collect()
}

#[component]
pub fn DiscountsView() -> impl IntoView {
    let state = RwSignal::new(Remote::<DiscountsSnapshot>::Loading);

    spawn_local(async move {
        match api::load_discounts().await {
            Ok(snapshot) => state.set(Remote::Ready(snapshot)),
            Err(err) => {
                log::error!("Failed to load discount audit: {}", err);
                state.set(Remote::Failed(err));
            }
        }
    });

    move || match state.get() {
        Remote::Loading => {
            view! { <LoadingCard message="Iniciando Auditoría de Margen..." /> }.into_any()
        }
        Remote::Failed(reason) => view! { <ErrorCard reason=reason /> }.into_any(),
        Remote::Ready(snapshot) => view! { <DiscountsReady snapshot=snapshot /> }.into_any(),
    }
}

#[component]
fn DiscountsReady(snapshot: DiscountsSnapshot) -> impl IntoView {
    let categories = category_groups(&snapshot.charts.category_data);
    let subcategories = subcategory_rows(&snapshot.subcategories);
    let loss_groups = bracket_groups(&snapshot.loss_impact.data, "Pérdida", false);
    let net_groups = bracket_groups(&snapshot.net_impact.data, "Profit", true);
    let products = product_rows(&snapshot.top_discounts);

    let total_loss = snapshot.loss_impact.total_loss_formatted;
    let total_net = snapshot.net_impact.total_net_loss_formatted;

    view! {
        <div class="view view--discounts">
            <div class="view__grid view__grid--two">
                <div class="panel">
                    <h3 class="panel__title">"Rentabilidad por Categoría"</h3>
                    <div class="panel__body">
                        <BarChart groups=categories y_fmt=format_axis_k />
                    </div>
                </div>
                <div class="panel">
                    <h3 class="panel__title">
                        "Ranking de Rentabilidad por tipo de Producto (Ordenado por profit)"
                    </h3>
                    <div class="panel__body">
                        <HBarChart rows=subcategories x_fmt=format_axis_k />
                    </div>
                </div>
            </div>

            <div class="view__grid view__grid--two">
                <div class="view__stack">
                    <div class="panel">
                        <header class="panel__header">
                            <div>
                                <h3 class="panel__title">"Análisis de Pérdida Directa"</h3>
                                <h4 class="panel__subtitle">"Valuación por Grupo de Descuento"</h4>
                            </div>
                            <div class="badge badge--rose">
                                <span>"Fuga: "</span>
                                <strong>{total_loss}</strong>
                            </div>
                        </header>
                        <div class="panel__body">
                            <BarChart groups=loss_groups y_fmt=format_axis_k />
                        </div>
                    </div>

                    <div class="panel">
                        <header class="panel__header">
                            <div>
                                <h3 class="panel__title">"Rentabilidad Neta Total"</h3>
                                <h4 class="panel__subtitle">"Cruce de Profit vs Descuento"</h4>
                            </div>
                            <div class="badge badge--emerald">
                                <span>"Saldo Profit: "</span>
                                <strong>{total_net}</strong>
                            </div>
                        </header>
                        <div class="panel__body">
                            <BarChart groups=net_groups y_fmt=format_axis_k />
                        </div>
                    </div>
                </div>

                <div class="panel panel--tall">
                    <header class="panel__header">
                        <div>
                            <h3 class="panel__title">"Top 25: Descuentos vs Rentabilidad"</h3>
                            <p class="panel__note">"Impacto monetario por SKU (Pérdida en Coral)"</p>
                        </div>
                        <div class="panel__icon panel__icon--rose">{icon("percent")}</div>
                    </header>
                    <div class="panel__body">
                        <HBarChart rows=products x_fmt=format_axis_k />
                    </div>
                    <div class="insight-card">
                        <div class="insight-card__header">
                            {icon("layout-dashboard")}
                            <h4>"Executive Insight"</h4>
                        </div>
                        <p class="insight-card__text">
                            "Se detecta una correlación crítica: los productos con mayor volumen "
                            "de descuento (barra coral) coinciden sistemáticamente con los mayores "
                            "márgenes negativos. Se requiere intervención de precios."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
