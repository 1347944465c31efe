use serde::{Deserialize, Serialize};

/// One order plotted on the shipping-cost vs profit scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingEntry {
    pub name: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub shipping_cost: f64,
    pub profit: f64,
    #[serde(default)]
    pub order_id: Option<String>,
}

/// One row of the top-losses ranking. `loss_amount` is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossEntry {
    pub name: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub loss_amount: f64,
    pub sales: f64,
}

/// One row of the lowest-sales ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomEntry {
    pub name: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub sales: f64,
}

/// Response of `/api/products-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAnalysis {
    pub shipping: Vec<ShippingEntry>,
    pub top_losses: Vec<LossEntry>,
    pub bottom_20: Vec<BottomEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_analysis_parses_all_sections() {
        let payload = json!({
            "shipping": [
                {"name": "Cisco TelePres...", "fullName": "Cisco TelePresence System", "shipping_cost": 923.63, "profit": -1_811.08, "order_id": "ES-2014-1651774"}
            ],
            "top_losses": [
                {"name": "Motorola Smart...", "fullName": "Motorola Smart Phone", "loss_amount": -4_082.65, "sales": 2_799.96}
            ],
            "bottom_20": [
                {"name": "Boston Markers", "fullName": "Boston Markers, Easy-Erase", "sales": 2.48}
            ]
        });

        let analysis: ProductAnalysis = serde_json::from_value(payload).unwrap();
        assert_eq!(analysis.shipping[0].order_id.as_deref(), Some("ES-2014-1651774"));
        assert!(analysis.top_losses[0].loss_amount < 0.0);
        assert_eq!(analysis.bottom_20[0].sales, 2.48);
    }

    #[test]
    fn shipping_entry_tolerates_missing_order_id() {
        let payload = json!({
            "name": "Nokia Smart Phone",
            "fullName": "Nokia Smart Phone, Full Size",
            "shipping_cost": 804.5,
            "profit": 510.2
        });

        let entry: ShippingEntry = serde_json::from_value(payload).unwrap();
        assert_eq!(entry.order_id, None);
    }
}
