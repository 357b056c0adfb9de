use thiserror::Error;

/// Reasons a packing run, or a search over packing runs, did not produce a layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// No free rectangle could accommodate the next item.
    /// Positions of the items visited so far are not to be trusted.
    #[error("packing infeasible: no room left after placing {n_placed} of {n_items} items")]
    Infeasible { n_placed: usize, n_items: usize },
    /// The input violates a precondition of the packer, nothing was placed.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(GeometryViolation),
    /// Not even the smallest candidate size produced a layout that fits.
    #[error("no feasible size found: nothing packs at a height of 1 texel")]
    NoFeasibleSize,
}

/// Inputs that would make the packer produce nonsensical placements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryViolation {
    #[error("canvas has a zero dimension ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("spacing {spacing} exceeds canvas dimensions ({width}x{height})")]
    SpacingExceedsCanvas { spacing: u32, width: u32, height: u32 },
    #[error("canvas {width}x{height} with spacing {spacing} exceeds the coordinate range")]
    CoordinateOverflow { spacing: u32, width: u32, height: u32 },
    #[error("item {index} has a zero dimension ({width}x{height})")]
    EmptyItem { index: usize, width: u32, height: u32 },
    #[error("character height must be at least 1 texel")]
    ZeroCharHeight,
    #[error("padding of {smooth_pixels} texels on both sides exceeds the coordinate range")]
    PaddingOverflow { smooth_pixels: u32 },
    #[error(
        "glyph {codepoint} at char height {char_height} with padding {smooth_pixels} exceeds the coordinate range"
    )]
    GlyphOverflow {
        codepoint: u32,
        char_height: u32,
        smooth_pixels: u32,
    },
}

impl From<GeometryViolation> for PackError {
    fn from(violation: GeometryViolation) -> Self {
        PackError::InvalidGeometry(violation)
    }
}
