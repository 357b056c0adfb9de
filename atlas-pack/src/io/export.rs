use crate::geometry::primitives::PxRect;
use crate::glyph::{Atlas, Bounds, TextureSize};
use crate::io::ext_repr::{ExtAtlas, ExtAtlasGlyph, ExtBounds, ExtPlacement};
use itertools::Itertools;

/// Converts a packed [`Atlas`] into its external representation.
pub fn export(atlas: &Atlas) -> ExtAtlas {
    let charset = &atlas.charset;
    let metrics = &atlas.metrics;

    let glyphs = charset
        .glyphs
        .iter()
        .zip(metrics.glyphs.iter())
        .map(|(glyph, glyph_metrics)| {
            debug_assert_eq!(glyph.codepoint, glyph_metrics.codepoint);
            let placement = charset.placement(glyph);
            ExtAtlasGlyph {
                codepoint: glyph.codepoint,
                advance: glyph_metrics.advance,
                placement: placement.map(ext_placement),
                translation: placement.map(|_| glyph.translation),
                bounds: glyph_metrics.bounds.map(ext_bounds),
                uv_bounds: glyph_metrics.uv_bounds.map(ext_bounds),
            }
        })
        .collect_vec();

    ExtAtlas {
        texture_size: TextureSize {
            width: atlas.canvas.width(),
            height: atlas.canvas.height(),
        },
        char_height: charset.char_height,
        scaling: charset.scaling,
        spacing: atlas.spacing,
        density: atlas.density(),
        glyph_padding: metrics.glyph_padding,
        pixel_range: metrics.pixel_range,
        ascent: metrics.ascent,
        glyphs,
    }
}

pub fn ext_placement(rect: PxRect) -> ExtPlacement {
    ExtPlacement {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
    }
}

pub fn ext_bounds(bounds: Bounds) -> ExtBounds {
    ExtBounds {
        min_x: bounds.min_x,
        min_y: bounds.min_y,
        max_x: bounds.max_x,
        max_y: bounds.max_y,
    }
}
