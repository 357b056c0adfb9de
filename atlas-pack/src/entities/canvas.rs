use crate::error::GeometryViolation;
use crate::geometry::primitives::PxRect;

/// A single atlas page, items are placed within `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn try_new(width: u32, height: u32) -> Result<Self, GeometryViolation> {
        if width == 0 || height == 0 {
            return Err(GeometryViolation::EmptyCanvas { width, height });
        }
        Ok(Canvas { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn area(&self) -> u64 {
        self.bbox().area()
    }

    /// The whole canvas as a single free rectangle.
    pub fn bbox(&self) -> PxRect {
        PxRect::with_size(self.width, self.height)
    }

    /// Checks whether `spacing` can be enforced between items on this canvas.
    /// Every coordinate the packer computes stays below `dimension + spacing`, which must be representable.
    pub fn check_spacing(&self, spacing: u32) -> Result<(), GeometryViolation> {
        let (width, height) = (self.width, self.height);
        if spacing > width || spacing > height {
            return Err(GeometryViolation::SpacingExceedsCanvas {
                spacing,
                width,
                height,
            });
        }
        if width.checked_add(spacing).is_none() || height.checked_add(spacing).is_none() {
            return Err(GeometryViolation::CoordinateOverflow {
                spacing,
                width,
                height,
            });
        }
        Ok(())
    }
}
