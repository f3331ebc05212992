//! ParsedPrompt - A prompt with `@handle` references rewritten

use serde::{Deserialize, Serialize};

/// A handle and the 1-based position of its reference image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub handle: String,
    pub ref_index: usize,
}

/// Output of prompt parsing.
///
/// `references` is sorted by `ref_index`, which runs `1..=references.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPrompt {
    /// Prompt with every handle replaced by `Reference Image N`
    pub cleaned_prompt: String,
    pub references: Vec<Reference>,
}

/// A parsed prompt whose references were looked up against known elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPrompt {
    pub prompt: String,
    /// Image sources in `ref_index` order
    pub input_images: Vec<String>,
    /// Handles that had no matching element
    pub missing: Vec<String>,
}
