use crate::glyph::TextureSize;
use serde::{Deserialize, Serialize};

/// External representation of a [`Charset`](crate::glyph::Charset): the glyphs to put in an atlas.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtAtlasInstance {
    /// Name of the instance, typically the font it was extracted from
    pub name: String,
    pub glyphs: Vec<ExtGlyph>,
}

/// External representation of a [`Glyph`](crate::glyph::Glyph)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtGlyph {
    /// Unicode codepoint, unique within an instance
    pub codepoint: u32,
    /// Bounding box of the outline in font units.
    /// Absent for glyphs without an outline, such as whitespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<ExtGlyphBox>,
    /// Horizontal advance in font units
    pub advance: f64,
}

/// Bounding box in font units, with its left bottom corner at (x_min, y_min), a width and height
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtGlyphBox {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of an [`Atlas`](crate::glyph::Atlas)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtAtlas {
    pub texture_size: TextureSize,
    pub char_height: u32,
    /// Factor from font units to texels
    pub scaling: f64,
    pub spacing: u32,
    /// Fraction of the page covered by glyph bitmaps
    pub density: f64,
    pub glyph_padding: f64,
    pub pixel_range: f64,
    pub ascent: f64,
    pub glyphs: Vec<ExtAtlasGlyph>,
}

/// A glyph as placed in an atlas
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtAtlasGlyph {
    pub codepoint: u32,
    /// Normalized horizontal advance
    pub advance: f64,
    /// Texels occupied by the glyph's bitmap, padding included.
    /// Absent for glyphs that are not in the atlas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<ExtPlacement>,
    /// Offset from outline coordinates to the bitmap's lower-left corner, in texels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<(f64, f64)>,
    /// Normalized outline bounds, y pointing down
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<ExtBounds>,
    /// Texture coordinates of the bitmap, v pointing down
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uv_bounds: Option<ExtBounds>,
}

/// Rectangle of texels with its left bottom corner at (x, y)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}
