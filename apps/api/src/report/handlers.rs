//! Axum route handlers for the Report API.

use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::report::display::{score_symbols, DisplayScore};
use crate::report::extractor::{parse_report, ParsedReport};
use crate::report::gender::{GrammaticalGender, GENDER_OPTIONS};
use crate::report::render::render_markdown;
use crate::report::requester::{generate_report, RawReport, ReportFailure, ReportRequest};
use crate::state::AppState;

const MISSING_INPUT_MESSAGE: &str = "Por favor, preencha seu gênero e o destino desejado.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    pub destination: String,
    pub gender_identity: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ok,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct ScoreDisplay {
    /// `None` when the score is unavailable.
    pub units: Option<DisplayScore>,
    pub symbols: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report_id: Uuid,
    pub destination: String,
    pub gender_identity: String,
    pub register: GrammaticalGender,
    pub searched_on: NaiveDate,
    pub status: ReportStatus,
    #[serde(flatten)]
    pub parsed: ParsedReport,
    pub display: ScoreDisplay,
    /// Model text, or the failure message when `status` is `failed`.
    pub raw_text: String,
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct GenderOptionsResponse {
    pub options: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/genders
///
/// Options for the gender selector. Free text is accepted by the report endpoint too.
pub async fn handle_gender_options() -> Json<GenderOptionsResponse> {
    Json(GenderOptionsResponse {
        options: GENDER_OPTIONS.to_vec(),
    })
}

/// POST /api/v1/reports
///
/// Full pipeline: prompt → one Gemini call with web search → parse → render.
/// Provider failures come back as 200 with `status: "failed"`; the failure text is the report.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let destination = request.destination.trim();
    let gender_identity = request.gender_identity.trim();

    if destination.is_empty() || gender_identity.is_empty() {
        return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string()));
    }

    let report_id = Uuid::new_v4();
    info!("Report {report_id}: analysing '{destination}'");

    let raw = generate_report(
        state.model.as_ref(),
        &ReportRequest {
            destination: destination.to_string(),
            gender_identity: gender_identity.to_string(),
            api_key: state.config.gemini_api_key.clone(),
        },
    )
    .await;

    if let Some(ReportFailure::Configuration) = raw.failure() {
        return Err(AppError::Configuration(raw.text().into_owned()));
    }

    let (status, parsed) = match &raw {
        RawReport::Text(text) => {
            let parsed = parse_report(text);
            if parsed.score.is_none() {
                warn!("Report {report_id}: score line not found in model output");
            }
            (ReportStatus::Ok, parsed)
        }
        RawReport::Failure(_) => (ReportStatus::Failed, ParsedReport::default()),
    };

    let searched_on = Utc::now().date_naive();
    let markdown = render_markdown(destination, &raw, &parsed, searched_on);

    Ok(Json(ReportResponse {
        report_id,
        destination: destination.to_string(),
        gender_identity: gender_identity.to_string(),
        register: GrammaticalGender::classify(gender_identity),
        searched_on,
        status,
        display: ScoreDisplay {
            units: parsed.score.map(DisplayScore::from_score),
            symbols: score_symbols(parsed.score),
        },
        parsed,
        raw_text: raw.text().into_owned(),
        markdown,
    }))
}
