//! Report Requester — builds the safety prompt and makes the single search-augmented LLM call.
//!
//! Never returns an error: every outcome, including a missing credential or a failed
//! transport, comes back as a displayable `RawReport`.

use std::borrow::Cow;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::llm_client::prompts::{NO_EMOJI_INSTRUCTION, RECENCY_INSTRUCTION};
use crate::llm_client::{
    GenerateContentRequest, GenerateContentResponse, GenerativeModel, Tool, MODEL,
};
use crate::report::gender::GrammaticalGender;
use crate::report::prompts::REPORT_PROMPT_TEMPLATE;
use crate::report::sections::{SectionKey, SCORE_LABEL, SCORE_LINE_FORMAT};

/// One user submission.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub destination: String,
    pub gender_identity: String,
    /// `None` or blank means the operator never configured a credential.
    pub api_key: Option<String>,
}

/// Why a report could not be produced. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportFailure {
    #[error("ERRO: A chave da API Gemini não foi configurada. Defina GEMINI_API_KEY nas configurações do servidor.")]
    Configuration,

    #[error("ERRO: Não foi possível gerar o relatório para '{destination}' devido a um problema na API Gemini: {detail}")]
    Provider { destination: String, detail: String },

    #[error("ERRO: Não foi possível gerar o relatório.{diagnostic}")]
    EmptyResponse { diagnostic: String },
}

/// What the model produced for one request, or why it produced nothing usable.
#[derive(Debug, Clone, PartialEq)]
pub enum RawReport {
    Text(String),
    Failure(ReportFailure),
}

impl RawReport {
    /// The displayable body: the model's text, or the `ERRO:`-prefixed failure message.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            RawReport::Text(text) => Cow::Borrowed(text),
            RawReport::Failure(failure) => Cow::Owned(failure.to_string()),
        }
    }

    pub fn failure(&self) -> Option<&ReportFailure> {
        match self {
            RawReport::Text(_) => None,
            RawReport::Failure(failure) => Some(failure),
        }
    }
}

/// Assembles the instruction document for one destination and gender identity.
///
/// User values are substituted last so that braces inside them are never
/// mistaken for template placeholders.
pub fn build_report_prompt(destination: &str, gender_identity: &str) -> String {
    let gender = GrammaticalGender::classify(gender_identity);

    REPORT_PROMPT_TEMPLATE
        .replace("{recency_instruction}", RECENCY_INSTRUCTION)
        .replace("{gender_instruction}", gender.instruction())
        .replace("{no_emoji_instruction}", NO_EMOJI_INSTRUCTION)
        .replace("{score_label}", SCORE_LABEL)
        .replace("{score_format}", SCORE_LINE_FORMAT)
        .replace("{justification_label}", SectionKey::Justification.label())
        .replace("{summary_label}", SectionKey::Summary.label())
        .replace("{alerts_label}", SectionKey::SafetyAlerts.label())
        .replace("{tips_label}", SectionKey::LocalTips.label())
        .replace("{gender_identity}", gender_identity)
        .replace("{destination}", destination)
}

/// Generates a raw safety report: one attempt, no retries, no caching.
///
/// A missing credential short-circuits before the prompt is even built.
pub async fn generate_report(model: &dyn GenerativeModel, request: &ReportRequest) -> RawReport {
    let Some(api_key) = request
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
    else {
        warn!("Report requested but no Gemini API key is configured");
        return RawReport::Failure(ReportFailure::Configuration);
    };

    info!(
        "Using model '{}' to analyse '{}' (register: {:?})",
        MODEL,
        request.destination,
        GrammaticalGender::classify(&request.gender_identity)
    );

    let prompt = build_report_prompt(&request.destination, &request.gender_identity);
    let payload = GenerateContentRequest::user_prompt(prompt).with_tool(Tool::google_search());

    match model.generate_content(api_key, MODEL, &payload).await {
        Ok(response) => match response.text() {
            Some(text) => {
                info!(
                    "Report for '{}' received ({} chars)",
                    request.destination,
                    text.len()
                );
                RawReport::Text(text)
            }
            None => {
                let diagnostic = describe_empty_response(&request.destination, &response);
                warn!(
                    "Model returned no usable text for '{}':{}",
                    request.destination, diagnostic
                );
                RawReport::Failure(ReportFailure::EmptyResponse { diagnostic })
            }
        },
        Err(e) => {
            error!("Gemini API call failed for '{}': {e}", request.destination);
            RawReport::Failure(ReportFailure::Provider {
                destination: request.destination.clone(),
                detail: e.to_string(),
            })
        }
    }
}

/// Explains an empty response using whatever metadata the provider exposed.
fn describe_empty_response(destination: &str, response: &GenerateContentResponse) -> String {
    let mut diagnostic = String::new();

    if let Some(candidate) = response.candidates.first() {
        if let Some(reason) = &candidate.finish_reason {
            diagnostic.push_str(&format!(" Motivo da finalização: {reason}."));
        }
        if !candidate.safety_ratings.is_empty() {
            let ratings: Vec<String> = candidate
                .safety_ratings
                .iter()
                .map(|r| r.to_string())
                .collect();
            diagnostic.push_str(&format!(
                " Classificações de segurança: {}.",
                ratings.join(", ")
            ));
        }
    } else if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        diagnostic.push_str(&format!(" Prompt bloqueado pelo provedor: {reason}."));
    }

    if diagnostic.is_empty() {
        diagnostic = format!(" O modelo retornou uma resposta vazia para '{destination}'.");
    }

    diagnostic
}
