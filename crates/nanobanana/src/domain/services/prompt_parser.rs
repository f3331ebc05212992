//! Prompt Reference Parser
//!
//! Rewrites `@handle` tokens into positional `Reference Image N` placeholders.
//! Each distinct handle gets a 1-based index in order of first appearance, so
//! the caller can line up reference images with the numbers the model sees.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{Element, ParsedPrompt, Reference, ResolvedPrompt};
use crate::domain::value_objects::prompt_handle_regex;

const REFERENCE_PREFIX: &str = "Reference Image ";

/// Parse a prompt into its cleaned form and ordered handle references.
///
/// Total over all inputs. Text without handle tokens, including a bare `@`,
/// comes back unchanged with no references.
pub fn parse_prompt_for_elements(prompt: &str) -> ParsedPrompt {
    let matches: Vec<_> = prompt_handle_regex().find_iter(prompt).collect();

    let mut indices: HashMap<&str, usize> = HashMap::new();
    for m in &matches {
        let next = indices.len() + 1;
        indices.entry(m.as_str()).or_insert(next);
    }

    // HashMap iteration order is arbitrary; the sort restores index order
    let mut references: Vec<Reference> = indices
        .iter()
        .map(|(handle, &ref_index)| Reference {
            handle: (*handle).to_string(),
            ref_index,
        })
        .collect();
    references.sort_by_key(|r| r.ref_index);

    let mut cleaned_prompt = String::with_capacity(prompt.len());
    let mut last = 0;
    for m in &matches {
        cleaned_prompt.push_str(&prompt[last..m.start()]);
        cleaned_prompt.push_str(REFERENCE_PREFIX);
        cleaned_prompt.push_str(&indices[m.as_str()].to_string());
        last = m.end();
    }
    cleaned_prompt.push_str(&prompt[last..]);

    ParsedPrompt {
        cleaned_prompt,
        references,
    }
}

/// Distinct handles in order of first appearance
pub fn extract_handles(prompt: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    prompt_handle_regex()
        .find_iter(prompt)
        .map(|m| m.as_str())
        .filter(|handle| seen.insert(*handle))
        .map(str::to_string)
        .collect()
}

/// Look up each reference's element by exact handle.
///
/// Images come out in `ref_index` order. References without an element are
/// skipped and listed in `missing`.
pub fn resolve_references(parsed: &ParsedPrompt, elements: &[Element]) -> ResolvedPrompt {
    let mut input_images = Vec::with_capacity(parsed.references.len());
    let mut missing = Vec::new();

    for reference in &parsed.references {
        match elements.iter().find(|e| e.handle == reference.handle) {
            Some(element) => input_images.push(element.image_url.clone()),
            None => missing.push(reference.handle.clone()),
        }
    }

    ResolvedPrompt {
        prompt: parsed.cleaned_prompt.clone(),
        input_images,
        missing,
    }
}
