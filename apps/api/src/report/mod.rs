// Safety report pipeline: prompt → single Gemini call → section extraction → display.
// All LLM calls go through llm_client — no direct Gemini HTTP calls here.

pub mod display;
pub mod extractor;
pub mod gender;
pub mod handlers;
pub mod prompts;
pub mod render;
pub mod requester;
pub mod sections;
