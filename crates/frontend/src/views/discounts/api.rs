use crate::shared::api_utils::fetch_json;
use contracts::views::discounts::{
    DiscountImpact, DiscountProduct, NetDiscountImpact, SubCategoryPoint,
};
use contracts::views::overview::ChartData;

/// Everything the discounts audit renders; all five payloads must decode
/// before the view leaves its loading state.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscountsSnapshot {
    pub charts: ChartData,
    pub subcategories: Vec<SubCategoryPoint>,
    pub top_discounts: Vec<DiscountProduct>,
    pub loss_impact: DiscountImpact,
    pub net_impact: NetDiscountImpact,
}

/// GET the five discount-audit endpoints.
pub async fn load_discounts() -> Result<DiscountsSnapshot, String> {
    let charts = fetch_json::<ChartData>("/api/charts").await?;
    let subcategories = fetch_json::<Vec<SubCategoryPoint>>("/api/subcategories").await?;
    let top_discounts = fetch_json::<Vec<DiscountProduct>>("/api/top-discounts").await?;
    let loss_impact = fetch_json::<DiscountImpact>("/api/discount-margin-impact").await?;
    let net_impact = fetch_json::<NetDiscountImpact>("/api/discount-margin-netimpact").await?;
    Ok(DiscountsSnapshot {
        charts,
        subcategories,
        top_discounts,
        loss_impact,
        net_impact,
    })
}
