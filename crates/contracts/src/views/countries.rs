use serde::{Deserialize, Serialize};

/// One country on the global bubble chart; bubble size encodes profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub country: String,
    pub sales: f64,
    pub profit: f64,
    pub orders: f64,
}

/// One row of the bottom-countries loss ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProfit {
    pub country: String,
    pub profit: f64,
}

/// Average shipping cost vs profit margin for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRelation {
    pub country: String,
    pub avg_shipping: f64,
    pub profit_margin: f64,
}

/// Count of loss-making customers concentrated in one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalGeo {
    pub country: String,
    pub count: f64,
}

/// Response of `/api/countries-analysis`. The market leader is excluded from
/// `bubble_data` and reported separately as `outlier` to keep the scatter
/// scale readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountriesAnalysis {
    pub outlier: BubblePoint,
    pub bottom_countries: Vec<CountryProfit>,
    pub shipping_relation: Vec<ShippingRelation>,
    pub critical_geo: Vec<CriticalGeo>,
    pub bubble_data: Vec<BubblePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn countries_analysis_parses_full_payload() {
        let payload = json!({
            "outlier": {"country": "United States", "sales": 2_297_200.0, "profit": 286_397.0, "orders": 9_994},
            "bottom_countries": [
                {"country": "Turkey", "profit": -98_447.0}
            ],
            "shipping_relation": [
                {"country": "Nigeria", "avg_shipping": 17.3, "profit_margin": -42.5}
            ],
            "critical_geo": [
                {"country": "Turkey", "count": 84}
            ],
            "bubble_data": [
                {"country": "France", "sales": 858_900.0, "profit": 109_029.0, "orders": 2_827}
            ]
        });

        let data: CountriesAnalysis = serde_json::from_value(payload).unwrap();
        assert_eq!(data.outlier.country, "United States");
        assert_eq!(data.outlier.orders, 9_994.0);
        assert!(data.bottom_countries[0].profit < 0.0);
        assert_eq!(data.critical_geo[0].count, 84.0);
        assert_eq!(data.bubble_data[0].country, "France");
    }
}
