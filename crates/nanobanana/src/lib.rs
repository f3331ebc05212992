//! Nano Banana Domain Library
//!
//! Core domain types and interfaces for the Nano Banana image generator.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Element, ParsedPrompt, GeneratedImage)
//!   - `value_objects/`: Immutable value types (AspectRatio, Quality, Resolution, handles)
//!   - `services/`: Pure domain services (prompt reference parsing and resolution)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (image generation, image hosting)
//!
//! # Usage
//!
//! ```rust
//! use nanobanana::parse_prompt_for_elements;
//!
//! let parsed = parse_prompt_for_elements("@Riley holding @Max");
//! assert_eq!(parsed.cleaned_prompt, "Reference Image 1 holding Reference Image 2");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    extract_handles, get_resolution, is_prompt_handle, normalize_handle,
    parse_prompt_for_elements, resolve_references, validate_element_handle, AspectRatio,
    DomainError, Element, GeneratedImage, ParsedPrompt, Quality, Reference, ResolvedPrompt,
    Resolution, ASPECT_RATIOS, HANDLE_IN_USE,
};
pub use ports::{
    // Repositories
    ElementRepository,
    // Services
    GenerationRequest,
    ImageGenerator,
    ImageHost,
};
