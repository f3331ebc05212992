//! Quality - Output resolution tier

use serde::{Deserialize, Serialize};

/// Quality tier; each step doubles both dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Standard,
    High,
    Ultra,
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quality::Standard => write!(f, "standard"),
            Quality::High => write!(f, "high"),
            Quality::Ultra => write!(f, "ultra"),
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Quality::Standard),
            "high" => Ok(Quality::High),
            "ultra" => Ok(Quality::Ultra),
            _ => Err(format!("Unknown quality: {}", s)),
        }
    }
}
