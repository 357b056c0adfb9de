use crate::packer::PackConfig;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Dimensions of the atlas page in texels, written as `{width}x{height}`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for TextureSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once('x')
            .ok_or_else(|| anyhow::anyhow!("expected {{width}}x{{height}}, got \"{s}\""))?;
        Ok(TextureSize {
            width: width.trim().parse()?,
            height: height.trim().parse()?,
        })
    }
}

impl Display for TextureSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything that determines how a charset is turned into an atlas
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AtlasSettings {
    /// Dimensions of the atlas page
    pub texture_size: TextureSize,
    /// Height of the tallest glyph in texels, ignored if `auto_height` is set
    pub char_height: u32,
    /// Search the largest character height that still fits the page
    pub auto_height: bool,
    /// Minimum number of texels between any two glyph bitmaps
    pub spacing: u32,
    /// Padding added around every glyph outline, in texels
    pub smooth_pixels: u32,
    /// Distance field range in font units, before scaling
    pub range: f64,
    #[serde(default)]
    pub pack_config: PackConfig,
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            texture_size: TextureSize {
                width: 2048,
                height: 2048,
            },
            char_height: 32,
            auto_height: false,
            spacing: 2,
            smooth_pixels: 2,
            range: 1.0,
            pack_config: PackConfig::default(),
        }
    }
}
