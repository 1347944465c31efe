use serde::{Deserialize, Serialize};

/// Headline KPI metrics for the most recent year, served by `/api/kpis`.
///
/// Trend and margin strings arrive pre-formatted by the API (e.g. "+4.2%",
/// "11.6%"); the frontend renders them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiStats {
    pub gross_revenue: f64,
    pub avg_order: f64,
    pub profit_margin: String,
    pub sales_trend: String,
    pub order_trend: String,
    pub current_year: i32,
}

/// One monthly bucket of the seasonality series. Ordering is chronological
/// and must be preserved as delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub date: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Days_to_Ship")]
    pub days_to_ship: f64,
}

/// Per-category totals for the grouped profitability chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
    #[serde(rename = "Discount_Value")]
    pub discount_value: f64,
}

/// Response of `/api/charts`, shared by the overview and discounts views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub sales_over_time: Vec<MonthlyPoint>,
    pub category_data: Vec<CategoryPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chart_data_parses_wire_field_names() {
        let payload = json!({
            "sales_over_time": [
                {"date": "Ene", "Sales": 120_500.0, "Days_to_Ship": 4.2},
                {"date": "Feb", "Sales": 98_300.5, "Days_to_Ship": 3.9}
            ],
            "category_data": [
                {"Category": "Furniture", "Sales": 5000.0, "Profit": -120.0, "Discount_Value": 340.0}
            ]
        });

        let data: ChartData = serde_json::from_value(payload).unwrap();
        assert_eq!(data.sales_over_time.len(), 2);
        assert_eq!(data.sales_over_time[0].date, "Ene");
        assert_eq!(data.sales_over_time[1].days_to_ship, 3.9);
        assert_eq!(data.category_data[0].category, "Furniture");
        assert_eq!(data.category_data[0].discount_value, 340.0);
    }

    #[test]
    fn kpi_stats_keeps_preformatted_strings() {
        let payload = json!({
            "gross_revenue": 4_299_866.23,
            "avg_order": 504.17,
            "profit_margin": "11.6%",
            "sales_trend": "+4.85%",
            "order_trend": "+1.2%",
            "current_year": 2015
        });

        let kpis: KpiStats = serde_json::from_value(payload).unwrap();
        assert_eq!(kpis.profit_margin, "11.6%");
        assert_eq!(kpis.sales_trend, "+4.85%");
        assert_eq!(kpis.current_year, 2015);
    }
}
