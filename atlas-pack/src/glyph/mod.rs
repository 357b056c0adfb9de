mod atlas;
mod charset;
mod metrics;
mod settings;

#[doc(inline)]
pub use atlas::Atlas;
#[doc(inline)]
pub use atlas::build_atlas;
#[doc(inline)]
pub use charset::Charset;
#[doc(inline)]
pub use charset::Glyph;
#[doc(inline)]
pub use charset::SizedCharset;
#[doc(inline)]
pub use charset::SizedGlyph;
#[doc(inline)]
pub use metrics::AtlasMetrics;
#[doc(inline)]
pub use metrics::Bounds;
#[doc(inline)]
pub use metrics::GlyphMetrics;
#[doc(inline)]
pub use settings::AtlasSettings;
#[doc(inline)]
pub use settings::TextureSize;
