//! Typed GeoJSON decoding.
//!
//! Turns GeoJSON text into geometries, features and feature collections with structurally
//! validated coordinates and typed property values.
//!
//! ```rust
//! use geodecode_geometry::parse_geojson;
//!
//! let document = parse_geojson(r#"{"type": "Point", "coordinates": [30.5, 50.5]}"#).unwrap();
//! let point = document.as_geometry().and_then(|g| g.as_point()).unwrap();
//! assert_eq!(point.x(), 30.5);
//! ```

pub mod error;
mod geo;
pub mod geojson;

pub use error::{ErrorKind, GeoJsonError};
pub use geo::*;
pub use geojson::*;
