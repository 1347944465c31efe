//! Tooltip content model.
//!
//! Pure construction of the hover tooltip: series classification, value
//! formatting, tone selection and the synthetic net-profit row. The Leptos
//! wrapper that positions the result lives in
//! `shared::components::tooltip`.

use crate::shared::format::{format_count, format_currency, format_percent};

/// How a series' numeric values are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureKind {
    Currency,
    Percentage,
    Count,
}

/// Colour class of one formatted value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueTone {
    /// Negative values, always.
    Loss,
    /// Non-negative synthetic net profit.
    Gain,
    /// Profit-like or percentage series.
    Accent,
    /// Sales-like series.
    Muted,
    Plain,
}

/// Classification table. Matched case-insensitively against the series name;
/// percentage wins over count, anything unmatched is currency.
const PERCENT_KEYWORDS: &[&str] = &["margin", "margen", "%"];
const COUNT_KEYWORDS: &[&str] = &[
    "orders", "pedidos", "órdenes", "days", "días", "name", "clientes",
];
/// Names that already denote profit/loss in either locale; suppresses the
/// synthetic row.
const PROFIT_KEYWORDS: &[&str] = &["profit", "ganancia", "pérdida"];
const SALES_KEYWORDS: &[&str] = &["sales", "ventas"];

pub fn classify_series(name: &str) -> MeasureKind {
    let lower = name.to_lowercase();
    if PERCENT_KEYWORDS.iter().any(|k| lower.contains(k)) {
        MeasureKind::Percentage
    } else if COUNT_KEYWORDS.iter().any(|k| lower.contains(k)) {
        MeasureKind::Count
    } else {
        MeasureKind::Currency
    }
}

/// One visible series value at the hovered datum.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesValue {
    pub name: String,
    pub value: f64,
}

impl SeriesValue {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// The hovered chart datum: identifying labels, the visible series values
/// and, when the datum carries one, the net-profit measure used for the
/// synthetic row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoveredPoint {
    pub label: Option<String>,
    pub country: Option<String>,
    pub full_name: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub net_profit: Option<f64>,
    pub series: Vec<SeriesValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
    pub tone: ValueTone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipModel {
    pub title: String,
    pub rows: Vec<TooltipRow>,
}

/// Build the ordered tooltip rows for a hovered datum.
///
/// Title precedence: country, full name, short name, category, axis label;
/// first non-empty wins. Tone order: sign first, then name-based overrides.
pub fn build_tooltip(point: &HoveredPoint) -> TooltipModel {
    let title = [
        &point.country,
        &point.full_name,
        &point.name,
        &point.category,
        &point.label,
    ]
    .into_iter()
    .flatten()
    .find(|s| !s.is_empty())
    .cloned()
    .unwrap_or_default();

    let mut rows: Vec<TooltipRow> = point
        .series
        .iter()
        .map(|series| {
            let kind = classify_series(&series.name);
            let value = match kind {
                MeasureKind::Percentage => format_percent(series.value),
                MeasureKind::Count => format_count(series.value),
                MeasureKind::Currency => format_currency(series.value),
            };
            let lower = series.name.to_lowercase();
            let tone = if series.value < 0.0 {
                ValueTone::Loss
            } else if lower.contains("profit") || kind == MeasureKind::Percentage {
                ValueTone::Accent
            } else if SALES_KEYWORDS.iter().any(|k| lower.contains(k)) {
                ValueTone::Muted
            } else {
                ValueTone::Plain
            };
            TooltipRow {
                label: series.name.replace('_', " "),
                value,
                tone,
            }
        })
        .collect();

    // Charts that omit profit from their axes still carry it on the datum;
    // surface it so the point colour is explained. Skipped when any visible
    // series already denotes profit/loss.
    if let Some(profit) = point.net_profit {
        let already_shown = point.series.iter().any(|series| {
            let lower = series.name.to_lowercase();
            PROFIT_KEYWORDS.iter().any(|k| lower.contains(k))
        });
        if !already_shown {
            rows.push(TooltipRow {
                label: "Ganancia Real".to_string(),
                value: format_currency(profit),
                tone: if profit >= 0.0 {
                    ValueTone::Gain
                } else {
                    ValueTone::Loss
                },
            });
        }
    }

    TooltipModel { title, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_series_wins_over_count_and_keeps_sign_tone() {
        let point = HoveredPoint {
            label: Some("Nigeria".to_string()),
            series: vec![SeriesValue::new("profit_margin", -3.5)],
            ..Default::default()
        };

        let model = build_tooltip(&point);
        assert_eq!(model.rows[0].value, "-3.50%");
        assert_eq!(model.rows[0].tone, ValueTone::Loss);
        // Underscores become spaces in the label.
        assert_eq!(model.rows[0].label, "profit margin");
    }

    #[test]
    fn sales_series_formats_as_neutral_currency() {
        let point = HoveredPoint {
            label: Some("Ene".to_string()),
            series: vec![SeriesValue::new("Sales", 125_000.0)],
            ..Default::default()
        };

        let model = build_tooltip(&point);
        assert_eq!(model.rows[0].value, "$125,000.00");
        assert_eq!(model.rows[0].tone, ValueTone::Muted);
    }

    #[test]
    fn count_series_drops_currency_sign_and_decimals() {
        let point = HoveredPoint {
            series: vec![SeriesValue::new("Órdenes", 2_827.0)],
            ..Default::default()
        };

        assert_eq!(build_tooltip(&point).rows[0].value, "2,827");
    }

    #[test]
    fn positive_profit_series_uses_the_accent_tone() {
        let point = HoveredPoint {
            series: vec![SeriesValue::new("Profit", 510.2)],
            ..Default::default()
        };

        let row = &build_tooltip(&point).rows[0];
        assert_eq!(row.value, "$510.20");
        assert_eq!(row.tone, ValueTone::Accent);
    }

    #[test]
    fn title_prefers_country_over_every_other_label() {
        let point = HoveredPoint {
            label: Some("Eje".to_string()),
            country: Some("France".to_string()),
            full_name: Some("Full".to_string()),
            name: Some("Short".to_string()),
            category: Some("Cat".to_string()),
            ..Default::default()
        };
        assert_eq!(build_tooltip(&point).title, "France");

        let point = HoveredPoint {
            label: Some("Eje".to_string()),
            country: Some(String::new()),
            name: Some("Short".to_string()),
            ..Default::default()
        };
        // Empty labels are skipped, not selected.
        assert_eq!(build_tooltip(&point).title, "Short");
    }

    #[test]
    fn net_profit_injects_a_ganancia_real_row() {
        let point = HoveredPoint {
            name: Some("Aaron Bergman".to_string()),
            net_profit: Some(-200.0),
            series: vec![
                SeriesValue::new("orders", 40.0),
                SeriesValue::new("sales", 5_000.0),
            ],
            ..Default::default()
        };

        let model = build_tooltip(&point);
        assert_eq!(model.rows.len(), 3);
        let synthetic = model.rows.last().unwrap();
        assert_eq!(synthetic.label, "Ganancia Real");
        assert_eq!(synthetic.value, "-$200.00");
        assert_eq!(synthetic.tone, ValueTone::Loss);
    }

    #[test]
    fn synthetic_row_is_not_duplicated_when_profit_is_visible() {
        for series_name in ["Profit", "Pérdida Neta", "Ganancia Real"] {
            let point = HoveredPoint {
                net_profit: Some(120.0),
                series: vec![SeriesValue::new(series_name, 120.0)],
                ..Default::default()
            };
            assert_eq!(build_tooltip(&point).rows.len(), 1, "{series_name}");
        }
    }

    #[test]
    fn positive_net_profit_uses_the_gain_tone() {
        let point = HoveredPoint {
            net_profit: Some(0.0),
            series: vec![SeriesValue::new("Ventas", 10.0)],
            ..Default::default()
        };

        let synthetic = build_tooltip(&point).rows.pop().unwrap();
        assert_eq!(synthetic.tone, ValueTone::Gain);
        assert_eq!(synthetic.value, "$0.00");
    }

    #[test]
    fn building_twice_yields_identical_output() {
        let point = HoveredPoint {
            country: Some("Turkey".to_string()),
            net_profit: Some(-98_447.0),
            series: vec![
                SeriesValue::new("Ventas", 157_400.0),
                SeriesValue::new("Clientes Críticos", 84.0),
            ],
            ..Default::default()
        };

        assert_eq!(build_tooltip(&point), build_tooltip(&point));
    }
}
