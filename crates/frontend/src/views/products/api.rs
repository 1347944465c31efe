use crate::shared::api_utils::fetch_json;
use contracts::views::products::ProductAnalysis;

/// GET `/api/products-analysis`.
pub async fn load_products() -> Result<ProductAnalysis, String> {
    fetch_json("/api/products-analysis").await
}
