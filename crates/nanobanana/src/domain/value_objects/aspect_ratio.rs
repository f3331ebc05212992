//! AspectRatio - Output image shape

use serde::{Deserialize, Serialize};

/// Supported aspect ratios
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "21:9")]
    Cinematic,
}

/// All aspect ratios in picker order
pub const ASPECT_RATIOS: [AspectRatio; 5] = [
    AspectRatio::Widescreen,
    AspectRatio::Square,
    AspectRatio::Portrait,
    AspectRatio::Standard,
    AspectRatio::Cinematic,
];

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Cinematic => "21:9",
        }
    }

    /// Human-readable label shown next to the ratio
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9 (Default)",
            AspectRatio::Square => "1:1 (Square)",
            AspectRatio::Portrait => "9:16 (Portrait)",
            AspectRatio::Standard => "4:3 (Standard)",
            AspectRatio::Cinematic => "21:9 (Cinematic)",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ASPECT_RATIOS
            .into_iter()
            .find(|ratio| ratio.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown aspect ratio: {}", s))
    }
}
