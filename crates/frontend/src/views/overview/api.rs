use crate::shared::api_utils::fetch_json;
use contracts::views::overview::{ChartData, KpiStats};

/// Everything the overview renders; both payloads must be present.
#[derive(Clone, Debug, PartialEq)]
pub struct OverviewSnapshot {
    pub kpis: KpiStats,
    pub charts: ChartData,
}

/// GET `/api/kpis` + `/api/charts`.
pub async fn load_overview() -> Result<OverviewSnapshot, String> {
    let kpis = fetch_json::<KpiStats>("/api/kpis").await?;
    let charts = fetch_json::<ChartData>("/api/charts").await?;
    Ok(OverviewSnapshot { kpis, charts })
}
