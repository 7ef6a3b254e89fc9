use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html
};
use media_status::{ColorToken, DerivedStatusSource, StatusDisplay, StatusKey, display_for};

use crate::error::AppError;
use crate::handlers::api::{StatusQuery, parse_vocabulary};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "chip.html")]
struct ChipTemplate<'a> {
    status: &'a str,
    color: ColorToken,
    label: &'a str
}

#[derive(Template)]
#[template(path = "progress.html")]
struct ProgressTemplate<'a> {
    status: &'a str,
    percent: i64
}

#[tracing::instrument(skip(state))]
pub async fn status_fragment(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>
) -> Result<Html<String>, AppError> {
    let status = query.derived_status().as_str();
    let html = match display_for(&query, state.registry.canonical()) {
        StatusDisplay::Progress { percent } => ProgressTemplate { status, percent }.render()?,
        StatusDisplay::Chip(chip) => ChipTemplate {
            status,
            color: chip.color,
            label: &chip.label
        }
        .render()?
    };
    Ok(Html(html))
}

#[tracing::instrument(skip(state))]
pub async fn resolved_fragment(
    State(state): State<AppState>,
    Path((vocabulary, status)): Path<(String, String)>
) -> Result<Html<String>, AppError> {
    let vocabulary = parse_vocabulary(&vocabulary)?;
    let chip = state.registry.lookup(vocabulary, &status);
    let template = ChipTemplate {
        status: &status,
        color: chip.color,
        label: &chip.label
    };
    Ok(Html(template.render()?))
}
