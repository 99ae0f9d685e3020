use axum::{
    extract::{Query, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

use super::{
    error::ApiError,
    response::{success, ApiResponse},
};
use crate::{
    dashboard::{AppState, DashboardSnapshot},
    domain::Region,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/recommendation", post(post_recommendation))
        .route("/regions", get(list_regions))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

impl RegionQuery {
    pub fn parse(&self) -> Result<Option<Region>, ApiError> {
        self.region
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(|r| {
                Region::from_str(r)
                    .map_err(|_| ApiError::BadRequest(format!("unknown region '{r}'")))
            })
            .transpose()
    }
}

/// GET /api/v1/dashboard - one fresh refresh of every panel
pub async fn get_dashboard(
    State(st): State<AppState>,
    Query(q): Query<RegionQuery>,
) -> Result<ApiResponse<DashboardSnapshot>, ApiError> {
    let region = q.parse()?;
    let start = Instant::now();
    let snapshot = st.dashboard.refresh(region).await;
    Ok(success(snapshot).with_duration(start.elapsed().as_millis() as u64))
}

#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub suggestion: &'static str,
}

/// POST /api/v1/recommendation - random policy suggestion
pub async fn post_recommendation(State(st): State<AppState>) -> ApiResponse<Recommendation> {
    success(Recommendation {
        suggestion: st.dashboard.recommend(),
    })
}

#[derive(Debug, Serialize)]
pub struct RegionList {
    pub regions: Vec<Region>,
    pub default: Region,
}

pub async fn list_regions(State(st): State<AppState>) -> ApiResponse<RegionList> {
    success(RegionList {
        regions: Region::all(),
        default: st.dashboard.default_region(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_query_parse() {
        let q = RegionQuery {
            region: Some("Delhi".to_string()),
        };
        assert_eq!(q.parse().unwrap(), Some(Region::Delhi));

        assert_eq!(RegionQuery::default().parse().unwrap(), None);

        let empty = RegionQuery {
            region: Some(String::new()),
        };
        assert_eq!(empty.parse().unwrap(), None);

        let bad = RegionQuery {
            region: Some("Kerala".to_string()),
        };
        assert!(matches!(bad.parse(), Err(ApiError::BadRequest(_))));
    }
}
