use crate::{GeometryViolation, PackError};
use crate::autosize::AutoSizer;
use crate::entities::Canvas;
use crate::glyph::{AtlasMetrics, AtlasSettings, Charset, SizedCharset};
use crate::packer::{MaxRectsPacker, PackReport};
use log::info;
use std::time::Instant;
use thousands::Separable;

/// A charset packed onto a single atlas page
#[derive(Clone, Debug)]
pub struct Atlas {
    pub canvas: Canvas,
    pub spacing: u32,
    /// The charset at the height it was packed with, items hold their final positions
    pub charset: SizedCharset,
    pub metrics: AtlasMetrics,
    pub report: PackReport,
    /// Number of packing runs it took to find the layout
    pub n_attempts: usize,
}

impl Atlas {
    pub fn char_height(&self) -> u32 {
        self.charset.char_height
    }

    pub fn density(&self) -> f64 {
        self.report.density()
    }
}

/// Packs the drawable glyphs of `charset` onto one atlas page as configured by `settings`.
///
/// With `auto_height`, the largest character height that fits is searched for,
/// otherwise the charset is packed at `char_height` or not at all.
pub fn build_atlas(charset: &Charset, settings: &AtlasSettings) -> Result<Atlas, PackError> {
    let start = Instant::now();
    let canvas = Canvas::try_new(settings.texture_size.width, settings.texture_size.height)?;
    let packer = MaxRectsPacker::new(canvas, settings.spacing, settings.pack_config)?;

    let attempt = |char_height: u32| -> Result<(SizedCharset, PackReport), PackError> {
        let mut sized = charset.size(char_height, settings.smooth_pixels)?;
        let report = packer.pack(&mut sized.items)?;
        Ok((sized, report))
    };

    let ((sized, report), n_attempts) = if settings.auto_height {
        info!(
            "[ATLAS] searching the largest char height for {} glyphs on a {} page",
            charset.n_drawable(),
            settings.texture_size
        );
        let search = AutoSizer::for_canvas(&canvas).search(|char_height| {
            match attempt(char_height) {
                // a glyph beyond the coordinate range is larger than any page
                Err(PackError::InvalidGeometry(GeometryViolation::GlyphOverflow { .. })) => {
                    Err(PackError::Infeasible {
                        n_placed: 0,
                        n_items: charset.n_drawable(),
                    })
                }
                result => result,
            }
        })?;
        (search.outcome, search.n_attempts)
    } else {
        info!("[ATLAS] using char height {}", settings.char_height);
        (attempt(settings.char_height)?, 1)
    };

    let metrics = AtlasMetrics::compute(&sized, &canvas, settings.range);

    info!(
        "[ATLAS] packed {} glyphs at char height {} in {:.3}ms ({} runs), density: {:.3}%, used area: {} texels",
        report.n_items,
        sized.char_height,
        start.elapsed().as_secs_f64() * 1000.0,
        n_attempts,
        report.density() * 100.0,
        report.used_area.separate_with_commas()
    );

    Ok(Atlas {
        canvas,
        spacing: settings.spacing,
        charset: sized,
        metrics,
        report,
        n_attempts,
    })
}
