//! Conclusions report. Fully static: findings, conclusion cards and the
//! action plan are editorial content, no fetch is involved.

use crate::shared::icons::icon;
use leptos::prelude::*;

const FINDINGS_LEFT: &[&str] = &[
    "Históricamente el año comienza en el punto más bajo en ventas y asciende hasta diciembre.",
    "Las caídas en ventas más pronunciadas suceden en Julio y Octubre.",
    "El promedio de entregas es de 4 días desde que se postea el pedido.",
    "En muebles, los descuentos son mayores que la ganancia; las mesas son las que tienen pérdidas.",
    "Pérdidas inician desde descuentos del 6%; mayores al 20% generan pérdidas masivas ($920K).",
    "Mayor volumen de descuento coincide sistemáticamente con los mayores márgenes negativos.",
];

const FINDINGS_RIGHT: &[&str] = &[
    "No hay evidencia de que los costos por transporte sean la causa raíz de pérdidas en la venta de un producto o en un país.",
    "Identificados los 25 productos con más pérdida neta y menores ventas (requieren prueba de rotación).",
    "Debido a la diversificación en el inventario, el mayor número de pedidos no coincide con los clientes estrella ni críticos.",
    "Dentro de los clientes a los que más se factura existen algunos que no están en la lista de los que más ganancia se obtiene.",
    "De los 25 clientes menos rentables, sólo uno está dentro de los 25 a los que se factura menos. Revisar a estos clientes críticos.",
    "Determinar si el mercado interno de los países identificados con mayor pérdida es propicio para el negocio.",
];

#[component]
pub fn ConclusionsView() -> impl IntoView {
    let left = FINDINGS_LEFT
        .iter()
        .copied()
        .map(|text| view! { <FindingItem text=text /> })
        .collect_view();
    let right = FINDINGS_RIGHT
        .iter()
        .copied()
        .map(|text| view! { <FindingItem text=text /> })
        .collect_view();

    view! {
        <div class="view view--conclusions">
            <div class="hero-card">
                <span class="hero-card__badge">"Resumen General"</span>
                <h2 class="hero-card__title">
                    "La operación es sólida, pero la rentabilidad está siendo saboteada por el Pricing."
                </h2>
                <p class="hero-card__text">
                    "Tras auditar 10MB de transacciones, confirmamos que el volumen de ventas "
                    "($12.6M) es excepcional. Sin embargo, el margen neto del 11.6% puede subir "
                    "al 15% eliminando fugas específicas en subcategorías y países críticos."
                </p>
            </div>

            <div class="findings-card">
                <div class="findings-card__header">
                    <div class="findings-card__icon">{icon("sparkles")}</div>
                    <div>
                        <h3 class="findings-card__kicker">"Resumen Ejecutivo"</h3>
                        <p class="findings-card__title">"Hallazgos Clave en SuperTienda Pro"</p>
                    </div>
                </div>
                <div class="findings-card__columns">
                    <div class="findings-card__column">{left}</div>
                    <div class="findings-card__column">{right}</div>
                </div>
            </div>

            <div class="view__grid view__grid--two">
                <ConclusionCard
                    icon_name="alert-triangle"
                    category="Categorías y Margen"
                    title="El Problema de Furniture (Tables)"
                    description="Las mesas presentan el margen negativo más profundo. No es un error logístico, es un error de descuento excesivo que liquida la utilidad base."
                    impact="alto"
                    evidence="Ranking de Rentabilidad por tipo de Producto"
                />
                <ConclusionCard
                    icon_name="truck"
                    category="Logística Internacional"
                    title="Mito del Flete Caro"
                    description="Los datos desmienten que el transporte afecte el margen. Los países con envíos de +$120 son rentables; las pérdidas ocurren en envíos de -$20 por precios mal calculados."
                    impact="medio"
                    evidence="Impacto de Envíos Caros en la Utilidad"
                />
                <ConclusionCard
                    icon_name="users"
                    category="Gestión de Cartera"
                    title="Concentración VIP Exitosa"
                    description="Existe una intersección sana de clientes que generan alto volumen y alta rentabilidad (VIPs). Estos representan el motor de crecimiento de la empresa."
                    impact="alto"
                    evidence="Mapa de Frecuencia vs Volumen"
                />
                <ConclusionCard
                    icon_name="trending-up"
                    category="Estrategia de Ventas"
                    title="Ticket Promedio en Riesgo"
                    description="Aunque el ticket promedio de $504 es saludable, la proliferación de productos con ventas mínimas ensucia la eficiencia del inventario."
                    impact="medio"
                    evidence="Productos con Menor Desplazamiento"
                />
            </div>

            <div class="action-plan">
                <h3 class="action-plan__title">
                    {icon("check-circle")}
                    "Plan de Acción Recomendado (Q1 2026)"
                </h3>
                <div class="action-plan__grid">
                    <ActionItem
                        step="01"
                        title="Auditoría de Precios"
                        text="Ajustar el precio base en mercados con envíos económicos y margen negativo."
                    />
                    <ActionItem
                        step="02"
                        title="Optimización de Mesas"
                        text="Restringir descuentos en la subcategoría 'Tables' a un máximo del 10% para recuperar el punto de equilibrio."
                    />
                    <ActionItem
                        step="03"
                        title="Retención VIP"
                        text="Lanzar programa de lealtad exclusivo para los clientes identificados en el cuadrante de alto valor."
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn FindingItem(text: &'static str) -> impl IntoView {
    view! {
        <div class="finding">
            <div class="finding__icon">{icon("check-circle")}</div>
            <p class="finding__text">{text}</p>
        </div>
    }
}

#[component]
fn ConclusionCard(
    icon_name: &'static str,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    /// "alto" | "medio" | "bajo"; drives the badge colour.
    impact: &'static str,
    evidence: &'static str,
) -> impl IntoView {
    let badge_class = match impact {
        "alto" => "conclusion-card__impact conclusion-card__impact--high",
        "medio" => "conclusion-card__impact conclusion-card__impact--medium",
        _ => "conclusion-card__impact conclusion-card__impact--low",
    };

    view! {
        <div class="conclusion-card">
            <div class="conclusion-card__header">
                <div class="conclusion-card__icon">{icon(icon_name)}</div>
                <span class=badge_class>{format!("Impacto {}", impact)}</span>
            </div>
            <p class="conclusion-card__category">{category}</p>
            <h4 class="conclusion-card__title">{title}</h4>
            <p class="conclusion-card__description">{description}</p>
            <div class="conclusion-card__evidence">{format!("Ver Gráfica: {}", evidence)}</div>
        </div>
    }
}

#[component]
fn ActionItem(step: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="action-item">
            <span class="action-item__step">{step}</span>
            <div class="action-item__content">
                <h5 class="action-item__title">{title}</h5>
                <p class="action-item__text">{text}</p>
            </div>
        </div>
    }
}
