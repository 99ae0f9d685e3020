//! Server-rendered dashboard page

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::{error::ApiError, v1::RegionQuery};
use crate::{
    dashboard::{AppState, DashboardSnapshot},
    domain::Region,
    evaluator::Banner,
};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub region: Option<String>,
    /// Set by the "Generate Strategy" button
    #[serde(default)]
    pub suggest: bool,
}

/// GET / - full dashboard, recomputed on every request
pub async fn index(
    State(st): State<AppState>,
    Query(q): Query<PageQuery>,
) -> Result<Html<String>, ApiError> {
    let region = RegionQuery { region: q.region }.parse()?;
    let snapshot = st.dashboard.refresh(region).await;
    let suggestion = q.suggest.then(|| st.dashboard.recommend());
    Ok(Html(render(&snapshot, suggestion)?))
}

/// View model for `templates/dashboard.html`
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    snapshot: &'a DashboardSnapshot,
    suggestion: Option<&'a str>,
    regions: Vec<RegionOption>,
    bars: Vec<BarView>,
}

struct RegionOption {
    region: Region,
    selected: bool,
}

struct BarView {
    label: &'static str,
    power_mw: u32,
    /// Width relative to the larger bar
    width_pct: u64,
}

impl<'a> DashboardPage<'a> {
    pub fn new(snapshot: &'a DashboardSnapshot, suggestion: Option<&'a str>) -> Self {
        let regions = Region::all()
            .into_iter()
            .map(|region| RegionOption {
                region,
                selected: region == snapshot.region,
            })
            .collect();

        let max = snapshot
            .chart
            .iter()
            .map(|b| b.power_mw)
            .max()
            .unwrap_or(0)
            .max(1);
        let bars = snapshot
            .chart
            .iter()
            .map(|b| BarView {
                label: b.label,
                power_mw: b.power_mw,
                width_pct: u64::from(b.power_mw) * 100 / u64::from(max),
            })
            .collect();

        Self {
            snapshot,
            suggestion,
            regions,
            bars,
        }
    }

    fn banners(&self, panel: &str) -> Vec<&Banner> {
        self.snapshot
            .evaluation
            .banners
            .iter()
            .filter(|b| b.panel == panel)
            .collect()
    }
}

pub fn render(snapshot: &DashboardSnapshot, suggestion: Option<&str>) -> Result<String, ApiError> {
    DashboardPage::new(snapshot, suggestion)
        .render()
        .map_err(|e| ApiError::InternalError(format!("render dashboard template: {e}")))
}
