use atlas_pack::glyph::AtlasSettings;
use atlas_pack::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the atlas generator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct AtlasConfig {
    /// Page dimensions, glyph sizing and packer configuration
    pub settings: AtlasSettings,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
