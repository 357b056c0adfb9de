use std::path::PathBuf;

use atlas_pack::glyph::TextureSize;
use clap::Parser;
use log::LevelFilter;

use crate::config::AtlasConfig;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Texture dimensions, overrides the config file
    #[arg(short = 'T', long, value_name = "{width}x{height}")]
    pub texture_size: Option<TextureSize>,
    /// Maximum character height in texels, overrides the config file
    #[arg(short = 'L', long)]
    pub char_height: Option<u32>,
    /// Inter-character spacing in texels, overrides the config file
    #[arg(short = 'S', long)]
    pub spacing: Option<u32>,
    /// Padding around every glyph in texels, overrides the config file
    #[arg(long)]
    pub smooth_pixels: Option<u32>,
    /// Distance field range in font units, overrides the config file
    #[arg(short = 'R', long)]
    pub range: Option<f64>,
    /// Search the largest character height that fits the texture, overrides the config file
    #[arg(long, value_name = "true|false")]
    pub auto_height: Option<bool>,
}

impl Cli {
    /// Applies the command line overrides on top of `config`.
    pub fn apply_overrides(&self, config: &mut AtlasConfig) {
        let settings = &mut config.settings;
        if let Some(texture_size) = self.texture_size {
            settings.texture_size = texture_size;
        }
        if let Some(char_height) = self.char_height {
            settings.char_height = char_height;
        }
        if let Some(spacing) = self.spacing {
            settings.spacing = spacing;
        }
        if let Some(smooth_pixels) = self.smooth_pixels {
            settings.smooth_pixels = smooth_pixels;
        }
        if let Some(range) = self.range {
            settings.range = range;
        }
        if let Some(auto_height) = self.auto_height {
            settings.auto_height = auto_height;
        }
    }
}
