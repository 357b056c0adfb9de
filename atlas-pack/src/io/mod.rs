/// External (serializable) representations of all input and output of the library.
pub mod ext_repr;

/// Conversion of external representations into internal ones.
pub mod import;

/// Conversion of internal representations into external ones.
pub mod export;

/// Visual representation of an atlas layout.
pub mod svg;
