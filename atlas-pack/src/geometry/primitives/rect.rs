use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul};

/// Axis-aligned rectangle with its origin at the lower-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

/// Rectangle in texels, the only variant the packer operates on.
pub type PxRect = Rect<u32>;

/// Rectangle in (scaled) font units, describing glyph geometry before it is rounded to texels.
pub type GlyphRect = Rect<f64>;

impl<T> Rect<T>
where
    T: Copy + Add<Output = T>,
{
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> T {
        self.y + self.height
    }

    pub fn right(&self) -> T {
        self.x + self.width
    }
}

impl<T> Rect<T>
where
    T: Copy + Mul<Output = T>,
{
    /// Multiplies position and size by `factor`.
    /// A negative factor yields a meaningless rectangle.
    pub fn scale(&mut self, factor: T) {
        self.x = self.x * factor;
        self.y = self.y * factor;
        self.width = self.width * factor;
        self.height = self.height * factor;
    }
}

impl PxRect {
    /// Rectangle of the given size, positioned at the origin.
    pub fn with_size(width: u32, height: u32) -> Self {
        Rect::new(0, 0, width, height)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the footprints of `self` and `other` come closer than `spacing` to each other.
    /// Rectangles separated by a gap smaller than `spacing` (touching ones included) overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &PxRect, spacing: u32) -> bool {
        !(self.right() + spacing <= other.x
            || other.right() + spacing <= self.x
            || self.top() + spacing <= other.y
            || other.top() + spacing <= self.y)
    }

    /// Whether `item` is small enough to be placed inside `self`, ignoring positions.
    #[inline(always)]
    pub fn can_fit(&self, item: &PxRect) -> bool {
        self.width >= item.width && self.height >= item.height
    }

    /// Whether `other` lies entirely within `self`, shared edges included.
    #[inline(always)]
    pub fn contains(&self, other: &PxRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.top() <= self.top()
    }
}

impl GlyphRect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl<T: Display> Display for Rect<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}
