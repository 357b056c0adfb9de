use crate::geometry::primitives::GlyphRect;
use crate::glyph::{Charset, Glyph};
use crate::io::ext_repr::{ExtAtlasInstance, ExtGlyph};
use anyhow::{Result, bail};
use itertools::Itertools;
use log::{info, warn};

/// Converts an external instance into a [`Charset`].
pub fn import(ext_instance: &ExtAtlasInstance) -> Result<Charset> {
    if let Some(dup) = ext_instance
        .glyphs
        .iter()
        .map(|g| g.codepoint)
        .duplicates()
        .next()
    {
        bail!("codepoint {dup} occurs more than once in instance {}", ext_instance.name);
    }

    let glyphs = ext_instance.glyphs.iter().map(import_glyph).collect_vec();
    let charset = Charset::new(glyphs)?;

    let n_blank = charset.glyphs().len() - charset.n_drawable();
    info!(
        "[IMPORT] instance {}: {} glyphs, {} without outline",
        ext_instance.name,
        charset.glyphs().len(),
        n_blank
    );
    Ok(charset)
}

pub fn import_glyph(ext_glyph: &ExtGlyph) -> Glyph {
    let bbox = ext_glyph
        .bbox
        .map(|b| GlyphRect::new(b.x_min, b.y_min, b.width, b.height));
    if let Some(bbox) = bbox.filter(|b| b.width == 0.0 || b.height == 0.0) {
        warn!(
            "[IMPORT] glyph {} has a degenerate bounding box {bbox}, it will not be packed",
            ext_glyph.codepoint
        );
    }
    Glyph {
        codepoint: ext_glyph.codepoint,
        bbox,
        advance: ext_glyph.advance,
    }
}
