use crate::shared::api_utils::fetch_json;
use contracts::views::customers::CustomerAnalysis;

/// GET `/api/customers-analysis`.
pub async fn load_customers() -> Result<CustomerAnalysis, String> {
    fetch_json("/api/customers-analysis").await
}
