use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::MutexGuard;

use dashboard_app::{LoadEvent, LoadPhase, SessionState, share_link as build_share_link, validate_inputs};
use dashboard_core::{CostReport, Credentials, DateRange};

use crate::{errors::HttpError, state::HttpState};

#[derive(Debug, Default, Deserialize)]
pub struct LoadRequest {
    pub api_key: Option<String>,
    pub organization_key: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EmptyRequest {}

/// Session snapshot returned to callers. Credentials are deliberately not
/// echoed back.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub phase: LoadPhase,
    pub generation: u64,
    pub start_date: String,
    pub end_date: String,
    pub report: Option<CostReport>,
    pub error: Option<String>,
}

impl SessionView {
    fn of(session: &SessionState) -> Self {
        Self {
            phase: session.phase,
            generation: session.generation,
            start_date: session.range.start.clone(),
            end_date: session.range.end.clone(),
            report: session.report.clone(),
            error: session.error.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShareLinkResponse {
    pub link: String,
}

fn lock_session(state: &HttpState) -> Result<MutexGuard<'_, SessionState>, HttpError> {
    state.session.lock().map_err(|_| {
        HttpError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "session state poisoned",
            None,
        )
    })
}

/// Validate the merged inputs, start a new load generation, perform the
/// single outbound fetch, and fold the completion back into the session.
/// A stale completion (the session restarted meanwhile) is discarded by
/// the reducer. Invalid inputs never reach the network and never disturb
/// the current dataset.
pub async fn load(
    State(state): State<HttpState>,
    Json(req): Json<LoadRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let (credentials, range, generation) = {
        let mut session = lock_session(&state)?;
        let credentials = Credentials {
            api_key: req.api_key.unwrap_or_else(|| session.credentials.api_key.clone()),
            organization_key: req
                .organization_key
                .unwrap_or_else(|| session.credentials.organization_key.clone()),
        };
        let range = DateRange {
            start: req.start_date.unwrap_or_else(|| session.range.start.clone()),
            end: req.end_date.unwrap_or_else(|| session.range.end.clone()),
        };
        validate_inputs(&credentials, &range)?;
        session.set_inputs(credentials.clone(), range.clone());
        let generation = session.begin_load();
        (credentials, range, generation)
    };

    let result = state.client.fetch_activity(&credentials, &range).await;

    let mut session = lock_session(&state)?;
    let event = match result {
        Ok(records) => LoadEvent::Succeeded {
            generation,
            records,
        },
        Err(err) => LoadEvent::Failed {
            generation,
            message: err.to_string(),
        },
    };
    session.apply(event, &state.table);
    Ok(Json(SessionView::of(&session)))
}

pub async fn report(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let session = lock_session(&state)?;
    Ok(Json(SessionView::of(&session)))
}

pub async fn share_link(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let session = lock_session(&state)?;
    let link = build_share_link(&state.page_url, &session.credentials, &session.range)?;
    Ok(Json(ShareLinkResponse { link }))
}
