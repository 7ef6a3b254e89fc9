use std::borrow::Cow;

use axum::{
    extract::{Path, Query, State},
    response::Json
};
use media_status::{
    CanonicalStatus, ColorToken, DerivedStatusSource, StatusPresentation, Vocabulary, display_for
};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub file_reference_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub progress: Option<f64>
}

/// Forms submit `progress=` for a blank input, which means "no progress".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom)
    }
}

impl DerivedStatusSource for StatusQuery {
    fn file_reference_id(&self) -> Option<&str> {
        self.file_reference_id.as_deref()
    }

    fn progress(&self) -> Option<f64> {
        self.progress
    }
}

#[derive(Debug, Serialize)]
pub struct DerivedStatusResponse {
    pub status: CanonicalStatus,
    pub color: ColorToken,
    pub label: Cow<'static, str>,
    pub display: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<i64>
}

pub(crate) fn parse_vocabulary(raw: &str) -> Result<Vocabulary, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(format!("Unknown vocabulary: {raw}")))
}

#[tracing::instrument(skip(state))]
pub async fn derived_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>
) -> Json<DerivedStatusResponse> {
    let status = query.derived_status();
    let chip = state.registry.canonical().get(status);
    let display = display_for(&query, state.registry.canonical());

    Json(DerivedStatusResponse {
        status,
        color: chip.color,
        label: chip.label,
        display: display.kind(),
        percent: display.percent()
    })
}

#[tracing::instrument(skip(state))]
pub async fn status_presentation(
    State(state): State<AppState>,
    Path((vocabulary, status)): Path<(String, String)>
) -> Result<Json<StatusPresentation>, AppError> {
    let vocabulary = parse_vocabulary(&vocabulary)?;
    Ok(Json(state.registry.lookup(vocabulary, &status)))
}

#[tracing::instrument(skip(state))]
pub async fn registries(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut tables = serde_json::Map::new();
    for vocabulary in Vocabulary::ALL {
        let rows: Vec<_> = state
            .registry
            .table(vocabulary)
            .into_iter()
            .map(|(status, p)| {
                serde_json::json!({
                    "status": status,
                    "color": p.color,
                    "label": p.label
                })
            })
            .collect();
        tables.insert(vocabulary.to_string(), serde_json::Value::Array(rows));
    }
    Json(serde_json::Value::Object(tables))
}
