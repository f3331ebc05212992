//! Handle grammars
//!
//! Two grammars coexist. Prompts recognise `@[A-Za-z0-9_]+`, while element
//! creation accepts `@[A-Za-z0-9_-]+`. A hyphenated handle can be stored but is
//! never matched inside a prompt; callers surface this with
//! [`is_prompt_handle`] instead of rejecting the handle.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::errors::DomainError;

/// Matches handle tokens inside free-form prompt text
pub(crate) fn prompt_handle_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"@[A-Za-z0-9_]+").expect("valid regex"))
}

fn element_handle_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^@[A-Za-z0-9_-]+$").expect("valid regex"))
}

/// Check a handle against the element-creation grammar
pub fn validate_element_handle(handle: &str) -> Result<(), DomainError> {
    if element_handle_regex().is_match(handle) {
        Ok(())
    } else {
        Err(DomainError::Validation(
            "Handle must contain only letters, numbers, underscores, and hyphens".to_string(),
        ))
    }
}

/// Whether the whole handle would be matched as one token in a prompt
pub fn is_prompt_handle(handle: &str) -> bool {
    prompt_handle_regex()
        .find(handle)
        .is_some_and(|m| m.start() == 0 && m.end() == handle.len())
}

/// Trim user input, add the `@` prefix if missing, and validate it
pub fn normalize_handle(input: &str) -> Result<String, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("Please enter a handle".to_string()));
    }

    let handle = if trimmed.starts_with('@') {
        trimmed.to_string()
    } else {
        format!("@{}", trimmed)
    };

    validate_element_handle(&handle)?;
    Ok(handle)
}
