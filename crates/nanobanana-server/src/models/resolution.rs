//! Resolution table DTOs

use serde::Serialize;
use utoipa::ToSchema;

use nanobanana::{get_resolution, AspectRatio, Quality, ASPECT_RATIOS};

/// Output sizes for one aspect ratio
#[derive(Debug, Serialize, ToSchema)]
pub struct AspectRatioOption {
    pub value: String,
    pub label: String,
    pub standard: String,
    pub high: String,
    pub ultra: String,
}

impl From<AspectRatio> for AspectRatioOption {
    fn from(ratio: AspectRatio) -> Self {
        Self {
            value: ratio.to_string(),
            label: ratio.label().to_string(),
            standard: get_resolution(ratio, Quality::Standard).to_string(),
            high: get_resolution(ratio, Quality::High).to_string(),
            ultra: get_resolution(ratio, Quality::Ultra).to_string(),
        }
    }
}

/// Resolution table response
#[derive(Debug, Serialize, ToSchema)]
pub struct ResolutionsResponse {
    pub default_aspect_ratio: String,
    pub default_quality: String,
    pub aspect_ratios: Vec<AspectRatioOption>,
}

impl ResolutionsResponse {
    pub fn table() -> Self {
        Self {
            default_aspect_ratio: AspectRatio::default().to_string(),
            default_quality: Quality::default().to_string(),
            aspect_ratios: ASPECT_RATIOS.into_iter().map(Into::into).collect(),
        }
    }
}
