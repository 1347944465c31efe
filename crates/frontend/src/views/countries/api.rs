use crate::shared::api_utils::fetch_json;
use contracts::views::countries::CountriesAnalysis;

/// GET `/api/countries-analysis`.
pub async fn load_countries() -> Result<CountriesAnalysis, String> {
    fetch_json("/api/countries-analysis").await
}
