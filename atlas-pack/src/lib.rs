//! Packing engine for single-page glyph texture atlases.
//!
//! Items (glyph bitmap footprints) are placed onto a fixed-size canvas with a
//! maximal-rectangles free-space strategy, keeping a minimum spacing between any two items.
//! On top of the packer, an auto-sizer searches for the largest character height whose
//! glyph set still fits the canvas.

/// Geometric primitives and the free-rectangle splitting rule
pub mod geometry;

/// Canvas and free-space bookkeeping used during a packing run
pub mod entities;

/// The maximal-rectangles packer
pub mod packer;

/// Search for the largest character height that still packs
pub mod autosize;

/// Turning glyph outlines' bounding boxes into items and atlas metrics
pub mod glyph;

/// Importing and exporting instances and atlases
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::GeometryViolation;
#[doc(inline)]
pub use error::PackError;
