//! Decoding of GeoJSON text into the crate's model types such as [`crate::GeoJson`],
//! [`crate::GeoFeature`] and [`crate::Geometry`].
//!
//! JSON syntax is handled by `serde_json`; this module walks the resulting value tree.
//! Encoding the model back to GeoJSON is not supported.

mod convert;
mod parse;
mod read;

pub use convert::*;
pub use parse::*;
pub use read::*;
