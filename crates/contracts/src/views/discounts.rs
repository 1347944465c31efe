use serde::{Deserialize, Serialize};

/// Per-sub-category totals served by `/api/subcategories`, ranked by profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategoryPoint {
    #[serde(rename = "Sub-Category")]
    pub sub_category: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
}

/// One of the 25 most-discounted products, served by `/api/top-discounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountProduct {
    /// Truncated name used as the axis label.
    pub name: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub profit: f64,
    #[serde(rename = "discountValue")]
    pub discount_value: f64,
}

/// Aggregated profit for one discount bracket ("0-5%", "6-10%", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountGroup {
    pub group: String,
    pub profit: f64,
}

/// Response of `/api/discount-margin-impact`: direct losses per bracket plus
/// the pre-formatted total the header badge displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountImpact {
    pub data: Vec<DiscountGroup>,
    pub total_loss_formatted: String,
}

/// Response of `/api/discount-margin-netimpact`: net profit per bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetDiscountImpact {
    pub data: Vec<DiscountGroup>,
    pub total_net_loss_formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subcategory_parses_hyphenated_wire_name() {
        let payload = json!([
            {"Sub-Category": "Tables", "Sales": 60_000.0, "Profit": -8_200.0},
            {"Sub-Category": "Copiers", "Sales": 42_000.0, "Profit": 11_500.0}
        ]);

        let rows: Vec<SubCategoryPoint> = serde_json::from_value(payload).unwrap();
        assert_eq!(rows[0].sub_category, "Tables");
        assert!(rows[0].profit < 0.0);
    }

    #[test]
    fn discount_product_parses_camel_case_fields() {
        let payload = json!({
            "name": "Bretford CR4500...",
            "fullName": "Bretford CR4500 Series Slim Rectangular Table",
            "profit": -1_862.31,
            "discountValue": 2_230.5
        });

        let product: DiscountProduct = serde_json::from_value(payload).unwrap();
        assert_eq!(
            product.full_name,
            "Bretford CR4500 Series Slim Rectangular Table"
        );
        assert_eq!(product.discount_value, 2_230.5);
    }

    #[test]
    fn impact_payloads_keep_group_order() {
        let payload = json!({
            "data": [
                {"group": "0%", "profit": 1_200.0},
                {"group": "6-10%", "profit": -340.0},
                {"group": "Más de 20%", "profit": -920_100.0}
            ],
            "total_loss_formatted": "$-924,161 USD"
        });

        let impact: DiscountImpact = serde_json::from_value(payload).unwrap();
        let groups: Vec<&str> = impact.data.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(groups, vec!["0%", "6-10%", "Más de 20%"]);
        assert_eq!(impact.total_loss_formatted, "$-924,161 USD");
    }
}
