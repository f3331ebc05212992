//! Resolution - Pixel dimensions in `WIDTHxHEIGHT` form

use serde::{Deserialize, Serialize};

use super::{AspectRatio, Quality};

/// Output dimensions, written as `1376x768` on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Look up the output size for an aspect ratio and quality tier
pub fn get_resolution(aspect_ratio: AspectRatio, quality: Quality) -> Resolution {
    let (width, height) = match aspect_ratio {
        AspectRatio::Widescreen => (1376, 768),
        AspectRatio::Square => (1024, 1024),
        AspectRatio::Portrait => (768, 1376),
        AspectRatio::Standard => (1200, 896),
        AspectRatio::Cinematic => (1584, 672),
    };
    let scale = match quality {
        Quality::Standard => 1,
        Quality::High => 2,
        Quality::Ultra => 4,
    };
    Resolution::new(width * scale, height * scale)
}

fn parse_dimension(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_once('x')
            .and_then(|(w, h)| Some(Resolution::new(parse_dimension(w)?, parse_dimension(h)?)))
            .ok_or_else(|| format!("Invalid resolution (expected WIDTHxHEIGHT): {}", s))
    }
}

impl TryFrom<String> for Resolution {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Resolution> for String {
    fn from(value: Resolution) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_table() {
        let cases = [
            (AspectRatio::Widescreen, Quality::Standard, "1376x768"),
            (AspectRatio::Widescreen, Quality::Ultra, "5504x3072"),
            (AspectRatio::Square, Quality::High, "2048x2048"),
            (AspectRatio::Portrait, Quality::High, "1536x2752"),
            (AspectRatio::Standard, Quality::Ultra, "4800x3584"),
            (AspectRatio::Cinematic, Quality::Standard, "1584x672"),
            (AspectRatio::Cinematic, Quality::High, "3168x1344"),
        ];
        for (ratio, quality, expected) in cases {
            assert_eq!(get_resolution(ratio, quality).to_string(), expected);
        }
    }

    #[test]
    fn test_defaults() {
        let resolution = get_resolution(AspectRatio::default(), Quality::default());
        assert_eq!(resolution, Resolution::new(1376, 768));
    }

    #[test]
    fn test_parse_resolution() {
        assert_eq!("1024x1024".parse::<Resolution>(), Ok(Resolution::new(1024, 1024)));
        assert!("1024".parse::<Resolution>().is_err());
        assert!("x768".parse::<Resolution>().is_err());
        assert!("+1024x768".parse::<Resolution>().is_err());
        assert!("1024X768".parse::<Resolution>().is_err());
        assert!("1024x768x2".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_aspect_ratio_round_trips_through_str() {
        for ratio in crate::domain::ASPECT_RATIOS {
            assert_eq!(ratio.as_str().parse::<AspectRatio>(), Ok(ratio));
        }
        assert!("3:2".parse::<AspectRatio>().is_err());
    }
}
