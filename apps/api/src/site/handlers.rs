use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::site::views;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GateQuery {
    pub manage: Option<String>,
}

/// The active profile travels in the query string; the static script keeps
/// a copy in browser storage for link rewriting but the server never holds
/// a session.
#[derive(Deserialize)]
pub struct ProfileQuery {
    pub profile: Option<u64>,
}

/// GET /
pub async fn gate(
    State(state): State<AppState>,
    Query(q): Query<GateQuery>,
) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    Ok(Html(views::render_gate(
        &state.config.site_name,
        &doc,
        q.manage.is_some(),
    )))
}

/// GET /browse
/// Requires an active profile; anything else bounces to the gate.
pub async fn browse(
    State(state): State<AppState>,
    Query(q): Query<ProfileQuery>,
) -> Result<Response, AppError> {
    let doc = state.store.load().await?;
    let Some(profile) = q.profile.and_then(|id| doc.profile(id)) else {
        return Ok(Redirect::to("/").into_response());
    };
    Ok(Html(views::render_browse(&state.config.site_name, &doc, profile)).into_response())
}

/// GET /skills
pub async fn skills(
    State(state): State<AppState>,
    Query(q): Query<ProfileQuery>,
) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    let profile = q.profile.and_then(|id| doc.profile(id));
    Ok(Html(views::render_skills(
        &state.config.site_name,
        &doc,
        profile,
    )))
}

/// GET /about
pub async fn about(
    State(state): State<AppState>,
    Query(q): Query<ProfileQuery>,
) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    let profile = q.profile.and_then(|id| doc.profile(id));
    Ok(Html(views::render_about(
        &state.config.site_name,
        &doc,
        profile,
    )))
}
