use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One customer with the measures every ranking and the segmentation map use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerEntry {
    pub name: String,
    pub sales: f64,
    pub profit: f64,
    pub orders: f64,
}

/// Response of `/api/customers-analysis`: four ranked lists plus the full
/// segmentation scatter. Name uniqueness inside one list is assumed, not
/// enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAnalysis {
    pub top_profitable: Vec<CustomerEntry>,
    pub top_revenue: Vec<CustomerEntry>,
    pub bottom_profitable: Vec<CustomerEntry>,
    pub bottom_revenue: Vec<CustomerEntry>,
    pub segmentation: Vec<CustomerEntry>,
}

/// Customer classification derived client-side from the ranked lists.
///
/// VIPs are the exact name-intersection of top-by-profit and top-by-revenue;
/// criticals the intersection of bottom-by-profit and bottom-by-revenue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerSegments {
    pub vips: HashSet<String>,
    pub criticals: HashSet<String>,
}

impl CustomerSegments {
    /// Pure derivation over the snapshot; does not mutate the source lists
    /// and must be recomputed whenever the snapshot is replaced.
    pub fn derive(analysis: &CustomerAnalysis) -> Self {
        Self {
            vips: intersect_names(&analysis.top_profitable, &analysis.top_revenue),
            criticals: intersect_names(&analysis.bottom_profitable, &analysis.bottom_revenue),
        }
    }

    pub fn is_vip(&self, name: &str) -> bool {
        self.vips.contains(name)
    }

    pub fn is_critical(&self, name: &str) -> bool {
        self.criticals.contains(name)
    }
}

fn intersect_names(left: &[CustomerEntry], right: &[CustomerEntry]) -> HashSet<String> {
    let left_names: HashSet<&str> = left.iter().map(|c| c.name.as_str()).collect();
    right
        .iter()
        .filter(|c| left_names.contains(c.name.as_str()))
        .map(|c| c.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, sales: f64, profit: f64, orders: f64) -> CustomerEntry {
        CustomerEntry {
            name: name.to_string(),
            sales,
            profit,
            orders,
        }
    }

    fn analysis(
        top_profitable: Vec<CustomerEntry>,
        top_revenue: Vec<CustomerEntry>,
        bottom_profitable: Vec<CustomerEntry>,
        bottom_revenue: Vec<CustomerEntry>,
    ) -> CustomerAnalysis {
        CustomerAnalysis {
            top_profitable,
            top_revenue,
            bottom_profitable,
            bottom_revenue,
            segmentation: Vec::new(),
        }
    }

    #[test]
    fn vips_are_the_exact_intersection_of_top_lists() {
        let data = analysis(
            vec![entry("A", 100.0, 100.0, 5.0), entry("X", 90.0, 80.0, 4.0)],
            vec![entry("A", 100.0, 100.0, 5.0), entry("B", 200.0, 10.0, 9.0)],
            vec![],
            vec![],
        );

        let segments = CustomerSegments::derive(&data);
        assert_eq!(segments.vips, HashSet::from(["A".to_string()]));
        assert!(segments.criticals.is_empty());
    }

    #[test]
    fn criticals_are_the_exact_intersection_of_bottom_lists() {
        let data = analysis(
            vec![],
            vec![],
            vec![entry("C", 10.0, -50.0, 2.0), entry("Y", 12.0, -30.0, 1.0)],
            vec![entry("C", 10.0, -50.0, 2.0), entry("D", 8.0, 3.0, 1.0)],
        );

        let segments = CustomerSegments::derive(&data);
        assert_eq!(segments.criticals, HashSet::from(["C".to_string()]));
        assert!(segments.vips.is_empty());
    }

    #[test]
    fn empty_side_yields_empty_segment() {
        let data = analysis(
            vec![],
            vec![entry("A", 100.0, 100.0, 5.0)],
            vec![entry("C", 10.0, -50.0, 2.0)],
            vec![],
        );

        let segments = CustomerSegments::derive(&data);
        assert!(segments.vips.is_empty());
        assert!(segments.criticals.is_empty());
    }

    #[test]
    fn derive_does_not_mutate_the_snapshot() {
        let data = analysis(
            vec![entry("A", 100.0, 100.0, 5.0)],
            vec![entry("A", 100.0, 100.0, 5.0), entry("B", 200.0, 10.0, 9.0)],
            vec![entry("C", 10.0, -50.0, 2.0)],
            vec![entry("C", 10.0, -50.0, 2.0), entry("D", 8.0, 3.0, 1.0)],
        );
        let before = data.clone();

        let first = CustomerSegments::derive(&data);
        let second = CustomerSegments::derive(&data);

        assert_eq!(data, before);
        assert_eq!(first, second);
    }

    #[test]
    fn fixture_lists_classify_a_as_vip_and_c_as_critical() {
        let data = analysis(
            vec![entry("A", 1_000.0, 100.0, 4.0)],
            vec![entry("A", 1_000.0, 100.0, 4.0), entry("B", 2_000.0, 5.0, 7.0)],
            vec![entry("C", 50.0, -80.0, 2.0)],
            vec![entry("C", 50.0, -80.0, 2.0), entry("D", 40.0, 1.0, 1.0)],
        );

        let segments = CustomerSegments::derive(&data);
        assert!(segments.is_vip("A"));
        assert!(!segments.is_vip("B"));
        assert!(segments.is_critical("C"));
        assert!(!segments.is_critical("D"));
    }

    #[test]
    fn analysis_parses_camel_case_wire_names() {
        let payload = json!({
            "topProfitable": [{"name": "A", "sales": 1.0, "profit": 2.0, "orders": 3.0}],
            "topRevenue": [],
            "bottomProfitable": [],
            "bottomRevenue": [],
            "segmentation": [{"name": "A", "sales": 1.0, "profit": 2.0, "orders": 3}]
        });

        let data: CustomerAnalysis = serde_json::from_value(payload).unwrap();
        assert_eq!(data.top_profitable[0].name, "A");
        // Integer order counts coerce into the f64 measure.
        assert_eq!(data.segmentation[0].orders, 3.0);
    }
}
