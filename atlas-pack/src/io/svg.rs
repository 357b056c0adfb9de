use crate::glyph::Atlas;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Draw the spacing margin around every glyph as a dashed outline
    #[serde(default)]
    pub draw_spacing: bool,
    ///Draw the character (or its codepoint) on top of every glyph
    #[serde(default)]
    pub draw_labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            draw_spacing: true,
            draw_labels: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f32,
    pub canvas_fill: Color,
    pub item_fill: Color,
    pub spacing_stroke: Color,
    pub label_fill: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::EARTH_TONES
    }
}

impl SvgTheme {
    pub const EARTH_TONES: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        canvas_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
        spacing_stroke: Color(0x2D, 0x2D, 0x2D),
        label_fill: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        canvas_fill: Color(0xD3, 0xD3, 0xD3),
        item_fill: Color(0x7A, 0x7A, 0x7A),
        spacing_stroke: Color(0x63, 0x63, 0x63),
        label_fill: Color(0xFF, 0xFF, 0xFF),
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Draws the page of an atlas with all placed glyph bitmaps.
/// The atlas' lower-left origin is mapped to the lower-left corner of the drawing.
pub fn atlas_to_svg(atlas: &Atlas, options: SvgDrawOptions, title: &str) -> Document {
    let (width, height) = (atlas.canvas.width() as f32, atlas.canvas.height() as f32);
    let theme = &options.theme;
    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f32::min(width, height) * 0.025;
    let margin = 0.05 * f32::max(width, height);

    let label = {
        //print some information above the left top of the canvas
        let label_content = format!(
            "{}x{} | char height: {} | glyphs: {} | density: {:.3}% | {}",
            atlas.canvas.width(),
            atlas.canvas.height(),
            atlas.char_height(),
            atlas.report.n_items,
            atlas.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let canvas_rect = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", theme.canvas_fill.to_string())
        .set("stroke", "black")
        .set("stroke-width", 2.0 * stroke_width);

    let mut items_group = Group::new().set("id", "glyphs");
    let half_spacing = atlas.spacing as f32 / 2.0;

    for glyph in &atlas.charset.glyphs {
        let Some(p) = atlas.charset.placement(glyph) else {
            continue;
        };
        let (x, y_top) = (p.x as f32, height - p.top() as f32);
        let (w, h) = (p.width as f32, p.height as f32);
        let name = glyph_name(glyph.codepoint);

        let mut group = Group::new()
            .set("id", format!("glyph_{}", glyph.codepoint))
            .add(Title::new(format!("{name}, placement: {p}")))
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y_top)
                    .set("width", w)
                    .set("height", h)
                    .set("fill", theme.item_fill.to_string())
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width),
            );

        if options.draw_spacing && atlas.spacing > 0 {
            group = group.add(
                Rectangle::new()
                    .set("x", x - half_spacing)
                    .set("y", y_top - half_spacing)
                    .set("width", w + atlas.spacing as f32)
                    .set("height", h + atlas.spacing as f32)
                    .set("fill", "none")
                    .set("stroke", theme.spacing_stroke.to_string())
                    .set("stroke-opacity", "0.5")
                    .set("stroke-width", 0.5 * stroke_width)
                    .set(
                        "stroke-dasharray",
                        format!("{} {}", 1.0 * stroke_width, 2.0 * stroke_width),
                    ),
            );
        }

        if options.draw_labels {
            let size = 0.6 * f32::min(w, h);
            group = group.add(
                Text::new(name)
                    .set("x", x + 0.5 * w)
                    .set("y", y_top + 0.5 * h)
                    .set("font-size", size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("fill", theme.label_fill.to_string()),
            );
        }

        items_group = items_group.add(group);
    }

    Document::new()
        .set(
            "viewBox",
            (-margin, -margin - font_size, width + 2.0 * margin, height + 2.0 * margin + font_size),
        )
        .add(canvas_rect)
        .add(items_group)
        .add(label)
}

fn glyph_name(codepoint: u32) -> String {
    match char::from_u32(codepoint).filter(|c| c.is_alphanumeric()) {
        Some(c) => c.to_string(),
        None => format!("U+{codepoint:04X}"),
    }
}
