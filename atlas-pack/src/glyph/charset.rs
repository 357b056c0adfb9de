use crate::GeometryViolation;
use crate::geometry::primitives::{GlyphRect, PxRect};
use anyhow::{Result, ensure};
use ordered_float::OrderedFloat;

/// Outline metrics of a single glyph, in font units.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub codepoint: u32,
    /// Bounding box of the outline, `None` for glyphs without one (whitespace)
    pub bbox: Option<GlyphRect>,
    /// Horizontal advance
    pub advance: f64,
}

impl Glyph {
    /// Whether the glyph has an outline that needs a place in the atlas
    pub fn is_drawable(&self) -> bool {
        self.bbox
            .is_some_and(|bbox| bbox.width > 0.0 && bbox.height > 0.0)
    }
}

/// Set of glyphs to be put in one atlas.
#[derive(Clone, Debug)]
pub struct Charset {
    glyphs: Vec<Glyph>,
    /// Height of the tallest drawable glyph, in font units
    max_height: f64,
}

/// A glyph scaled to a character height, with its footprint in the atlas.
#[derive(Clone, Debug, PartialEq)]
pub struct SizedGlyph {
    pub codepoint: u32,
    /// Scaled bounding box, `None` if the glyph is not drawable
    pub bbox: Option<GlyphRect>,
    pub advance: f64,
    /// Offset from outline coordinates to the lower-left corner of the glyph's bitmap, in texels
    pub translation: (f64, f64),
    /// Index of the glyph's item in [`SizedCharset::items`]
    pub item: Option<usize>,
}

/// A [`Charset`] scaled to a given character height.
///
/// `items` holds one rectangle per drawable glyph: the rounded-up scaled bounding box
/// surrounded by `smooth_pixels` of padding on every side.
#[derive(Clone, Debug)]
pub struct SizedCharset {
    pub char_height: u32,
    /// Factor from font units to texels
    pub scaling: f64,
    pub smooth_pixels: u32,
    pub glyphs: Vec<SizedGlyph>,
    pub items: Vec<PxRect>,
}

impl Charset {
    pub fn new(glyphs: Vec<Glyph>) -> Result<Self> {
        for glyph in &glyphs {
            ensure!(
                glyph.advance.is_finite(),
                "glyph {} has a non-finite advance",
                glyph.codepoint
            );
            if let Some(bbox) = glyph.bbox {
                ensure!(
                    [bbox.x, bbox.y, bbox.width, bbox.height]
                        .iter()
                        .all(|v| v.is_finite())
                        && bbox.width >= 0.0
                        && bbox.height >= 0.0,
                    "glyph {} has an invalid bounding box: {bbox}",
                    glyph.codepoint
                );
            }
        }
        let max_height = glyphs
            .iter()
            .filter(|g| g.is_drawable())
            .filter_map(|g| g.bbox)
            .map(|bbox| OrderedFloat(bbox.height))
            .max();
        let Some(OrderedFloat(max_height)) = max_height else {
            anyhow::bail!("charset contains no drawable glyphs");
        };

        Ok(Charset { glyphs, max_height })
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn n_drawable(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_drawable()).count()
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Scales the charset so that the tallest glyph is `char_height` texels high,
    /// and derives the atlas footprint of every drawable glyph.
    ///
    /// Fails if `char_height` is zero or a padded footprint does not fit the texel coordinate range.
    pub fn size(
        &self,
        char_height: u32,
        smooth_pixels: u32,
    ) -> Result<SizedCharset, GeometryViolation> {
        if char_height == 0 {
            return Err(GeometryViolation::ZeroCharHeight);
        }
        let padding = smooth_pixels
            .checked_mul(2)
            .ok_or(GeometryViolation::PaddingOverflow { smooth_pixels })?;
        let scaling = char_height as f64 / self.max_height;
        let smooth = smooth_pixels as f64;

        let mut items = vec![];
        let glyphs = self
            .glyphs
            .iter()
            .map(|glyph| -> Result<SizedGlyph, GeometryViolation> {
                let advance = glyph.advance * scaling;
                match glyph.bbox.filter(|_| glyph.is_drawable()) {
                    Some(mut bbox) => {
                        bbox.scale(scaling);
                        let overflow = GeometryViolation::GlyphOverflow {
                            codepoint: glyph.codepoint,
                            char_height,
                            smooth_pixels,
                        };
                        let width = padded_texels(bbox.width, padding).ok_or(overflow.clone())?;
                        let height = padded_texels(bbox.height, padding).ok_or(overflow)?;
                        items.push(PxRect::with_size(width, height));
                        Ok(SizedGlyph {
                            codepoint: glyph.codepoint,
                            bbox: Some(bbox),
                            advance,
                            translation: (-bbox.x + smooth, -bbox.y + smooth),
                            item: Some(items.len() - 1),
                        })
                    }
                    None => Ok(SizedGlyph {
                        codepoint: glyph.codepoint,
                        bbox: None,
                        advance,
                        translation: (smooth, smooth),
                        item: None,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SizedCharset {
            char_height,
            scaling,
            smooth_pixels,
            glyphs,
            items,
        })
    }
}

/// Number of whole texels covering `length`, plus `padding`
fn padded_texels(length: f64, padding: u32) -> Option<u32> {
    let texels = length.ceil();
    if texels <= u32::MAX as f64 {
        (texels as u32).checked_add(padding)
    } else {
        None
    }
}

impl SizedCharset {
    /// Position of the glyph's padded bitmap in the atlas
    pub fn placement(&self, glyph: &SizedGlyph) -> Option<PxRect> {
        glyph.item.map(|i| self.items[i])
    }
}
