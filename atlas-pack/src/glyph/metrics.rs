use crate::entities::Canvas;
use crate::glyph::SizedCharset;
use itertools::Itertools;

/// Axis-aligned bounds given by their extreme coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// What a renderer needs to know about a single glyph of the atlas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub codepoint: u32,
    /// Outline bounds, normalized to the font's height, with y pointing down
    pub bounds: Option<Bounds>,
    /// Texture coordinates of the glyph's bitmap, including its padding, with v pointing down
    pub uv_bounds: Option<Bounds>,
    /// Normalized horizontal advance
    pub advance: f64,
}

/// Font-wide and per-glyph metrics of a packed atlas.
///
/// Lengths are normalized so that the distance from the lowest descender to the highest ascender is 1.
/// Glyphs without an outline count as sitting on the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasMetrics {
    /// Padding around every glyph bitmap, normalized
    pub glyph_padding: f64,
    /// Distance field range in texels
    pub pixel_range: f64,
    /// Normalized height of the highest ascender above the baseline
    pub ascent: f64,
    pub glyphs: Vec<GlyphMetrics>,
}

impl AtlasMetrics {
    /// Derives the metrics of a charset whose items have been packed onto `canvas`.
    /// `range` is the distance field range in font units.
    pub fn compute(charset: &SizedCharset, canvas: &Canvas, range: f64) -> Self {
        // glyphs without an outline sit on the baseline
        let seed = if charset.glyphs.iter().any(|g| g.bbox.is_none()) {
            (0.0, 0.0)
        } else {
            (f64::INFINITY, f64::NEG_INFINITY)
        };
        let (min_y, max_top) = charset
            .glyphs
            .iter()
            .filter_map(|g| g.bbox)
            .map(|bbox| (bbox.y, bbox.top()))
            .fold(seed, |(lo, hi), (y, top)| {
                (f64::min(lo, y), f64::max(hi, top))
            });
        let scale = 1.0 / (max_top - min_y);

        let (tex_w, tex_h) = (canvas.width() as f64, canvas.height() as f64);

        let glyphs = charset
            .glyphs
            .iter()
            .map(|glyph| {
                let bounds = glyph.bbox.map(|bbox| Bounds {
                    min_x: scale * bbox.x,
                    min_y: -scale * bbox.top(),
                    max_x: scale * bbox.right(),
                    max_y: -scale * bbox.y,
                });
                // sample texel centers
                let uv_bounds = charset.placement(glyph).map(|p| Bounds {
                    min_x: (p.x as f64 + 0.5) / tex_w,
                    min_y: 1.0 - (p.top() as f64 + 0.5) / tex_h,
                    max_x: (p.right() as f64 + 0.5) / tex_w,
                    max_y: 1.0 - (p.y as f64 + 0.5) / tex_h,
                });
                GlyphMetrics {
                    codepoint: glyph.codepoint,
                    bounds,
                    uv_bounds,
                    advance: scale * glyph.advance,
                }
            })
            .collect_vec();

        AtlasMetrics {
            glyph_padding: charset.smooth_pixels as f64 * scale,
            pixel_range: charset.scaling * range,
            ascent: scale * max_top,
            glyphs,
        }
    }
}
