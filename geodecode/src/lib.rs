//! # geodecode
//!
//! Decodes GeoJSON text into a strongly-typed model of geometries, features and feature
//! collections.
//!
//! ## Supported geometry types
//! - `Point`, `MultiPoint`
//! - `LineString`
//! - `Polygon`, `MultiPolygon`
//!
//! `MultiLineString` is part of the model but is rejected on input, as is `GeometryCollection`.
//!
//! ## Usage Example
//!
//! ```rust
//! use geodecode::{GeoJson, parse_geojson};
//!
//! let text = r#"{
//!     "type": "Feature",
//!     "geometry": {"type": "Point", "coordinates": [13.4, 52.5]},
//!     "properties": {"name": "Berlin"}
//! }"#;
//!
//! let GeoJson::Feature(feature) = parse_geojson(text).unwrap() else {
//!     panic!("expected a feature");
//! };
//! assert_eq!(feature.properties.get("name").and_then(|v| v.as_str()), Some("Berlin"));
//! ```

pub use geodecode_geometry as geometry;
pub use geodecode_geometry::*;
