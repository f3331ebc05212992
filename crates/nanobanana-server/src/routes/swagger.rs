//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AspectRatioOption,
    // Element models
    CreateElementRequest,
    DeleteElementResponse,
    ElementResponse,
    // Image models
    GenerateImageRequest,
    GenerateImageResponse,
    // Prompt models
    ParsePromptRequest,
    ParsePromptResponse,
    ReferenceResponse,
    ResolutionsResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Element endpoints
        super::element::list_elements,
        super::element::create_element,
        super::element::delete_element,
        // Image endpoints
        super::image::generate_image,
        super::resolution::list_resolutions,
        // Prompt endpoints
        super::prompt::parse_prompt,
    ),
    info(
        title = "Nano Banana API",
        version = "0.1.0",
        description = "Prompt-to-image generation with `@handle` element references.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Element", description = "Element - Reference images addressable by @handle"),
        (name = "Image", description = "Image - Generation proxy and resolution table"),
        (name = "Prompt", description = "Prompt - @handle reference parsing"),
    ),
    components(
        schemas(
            // Element
            CreateElementRequest,
            ElementResponse,
            DeleteElementResponse,
            // Image
            GenerateImageRequest,
            GenerateImageResponse,
            AspectRatioOption,
            ResolutionsResponse,
            // Prompt
            ParsePromptRequest,
            ParsePromptResponse,
            ReferenceResponse,
        )
    ),
)]
pub struct ApiDoc;
