//! In-memory `GenerativeModel` for tests. Records every request it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerativeModel,
    LlmError, Part,
};

pub enum FakeBehavior {
    Respond(GenerateContentResponse),
    Fail(String),
}

pub struct FakeModel {
    behavior: FakeBehavior,
    calls: Mutex<Vec<(String, GenerateContentRequest)>>,
}

impl FakeModel {
    pub fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A model that answers every call with `text` as a single part.
    pub fn replying(text: &str) -> Self {
        Self::new(FakeBehavior::Respond(GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![Part {
                        text: Some(text.to_string()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
                safety_ratings: Vec::new(),
            }],
            ..Default::default()
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(FakeBehavior::Fail(message.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// `(model, request)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, GenerateContentRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for FakeModel {
    async fn generate_content(
        &self,
        _api_key: &str,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));

        match &self.behavior {
            FakeBehavior::Respond(response) => Ok(response.clone()),
            FakeBehavior::Fail(message) => Err(LlmError::Api {
                status: 504,
                message: message.clone(),
            }),
        }
    }
}
