mod canvas;
mod free_space;

#[doc(inline)]
pub use canvas::Canvas;
#[doc(inline)]
pub use free_space::FreeSpace;
