mod rect;

#[doc(inline)]
pub use rect::GlyphRect;
#[doc(inline)]
pub use rect::PxRect;
#[doc(inline)]
pub use rect::Rect;
