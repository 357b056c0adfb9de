pub mod primitives;

mod split;

#[doc(inline)]
pub use split::make_splits;
