//! Prompt parsing DTOs
//!
//! Responses use the camelCase shape of the domain `ParsedPrompt`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parse prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ParsePromptRequest {
    pub prompt: String,
}

/// A handle and its 1-based reference index
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceResponse {
    pub handle: String,
    pub ref_index: usize,
}

/// Parse prompt response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsePromptResponse {
    pub cleaned_prompt: String,
    pub references: Vec<ReferenceResponse>,
    /// Distinct handles in order of first appearance
    pub handles: Vec<String>,
}

impl ParsePromptResponse {
    pub fn new(parsed: nanobanana::ParsedPrompt, handles: Vec<String>) -> Self {
        Self {
            cleaned_prompt: parsed.cleaned_prompt,
            references: parsed
                .references
                .into_iter()
                .map(|r| ReferenceResponse {
                    handle: r.handle,
                    ref_index: r.ref_index,
                })
                .collect(),
            handles,
        }
    }
}
