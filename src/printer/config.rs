//! # Paper Configuration
//!
//! Paper presets and the named text sizes used by the receipt templates.
//!
//! ## Supported Paper
//!
//! | Preset | Width (px) | Typical device |
//! |--------|------------|----------------|
//! | Normal | 384 | 58mm terminals |
//! | Large | 576 | 80mm `CPOS` terminals |
//!
//! ## Usage
//!
//! ```
//! use printslip::printer::PaperWidth;
//!
//! let paper = PaperWidth::from_device_model("CPOS-X1");
//! assert_eq!(paper.pixels(), 576);
//! ```

use serde::{Deserialize, Serialize};

/// Device model marker for terminals with the wide print head.
const LARGE_PAPER_MODEL: &str = "CPOS";

/// # Paper Width Preset
///
/// The canvas width is fixed for the lifetime of a receipt and chosen from
/// one of two presets based on the target print head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperWidth {
    /// 384 px print head
    #[default]
    Normal,
    /// 576 px print head
    Large,
}

impl PaperWidth {
    /// Width of the printable area in pixels.
    #[inline]
    pub fn pixels(self) -> u32 {
        match self {
            Self::Normal => 384,
            Self::Large => 576,
        }
    }

    /// Pick the preset for a device model string.
    ///
    /// Models containing `CPOS` carry the wide head; everything else uses
    /// the normal one.
    pub fn from_device_model(model: &str) -> Self {
        if model.contains(LARGE_PAPER_MODEL) {
            Self::Large
        } else {
            Self::Normal
        }
    }

    /// Parse a preset name (`"normal"`, `"large"`, `"384"`, `"576"`).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "normal" | "384" => Ok(Self::Normal),
            "large" | "576" => Ok(Self::Large),
            _ => Err(format!(
                "Unknown paper '{}'. Use 'normal' (384px) or 'large' (576px)",
                s
            )),
        }
    }
}

/// Named text sizes and feed heights, in pixels.
pub struct PrintSize;

impl PrintSize {
    pub const SMALL: f32 = 18.0;
    pub const NORMAL: f32 = 22.0;
    /// Receipt title
    pub const TYPE: f32 = 32.0;
    pub const AMOUNT: f32 = 50.0;
    /// Separator lines
    pub const LINE: f32 = 30.0;
    /// Blank space left for a signature
    pub const SIGN_FEED: f32 = 100.0;
    /// Trailing margin before the tear bar
    pub const TAIL_FEED: f32 = 60.0;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_widths() {
        assert_eq!(PaperWidth::Normal.pixels(), 384);
        assert_eq!(PaperWidth::Large.pixels(), 576);
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(PaperWidth::default(), PaperWidth::Normal);
    }

    #[test]
    fn test_device_model_selection() {
        assert_eq!(PaperWidth::from_device_model("CPOS-X"), PaperWidth::Large);
        assert_eq!(PaperWidth::from_device_model("iMark P2"), PaperWidth::Normal);
        assert_eq!(PaperWidth::from_device_model(""), PaperWidth::Normal);
    }

    #[test]
    fn test_parse() {
        assert_eq!(PaperWidth::parse("LARGE"), Ok(PaperWidth::Large));
        assert_eq!(PaperWidth::parse("384"), Ok(PaperWidth::Normal));
        assert!(PaperWidth::parse("a4").is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PaperWidth::Large).unwrap();
        assert_eq!(json, "\"large\"");
    }
}
