use super::FromGeoJson;
use crate::{GeoJson, error::Result};
use log::debug;
use serde_json::Value as JsonValue;
use std::str::FromStr;

/// Parses GeoJSON text into a [`GeoJson`] document.
pub fn parse_geojson(json: &str) -> Result<GeoJson> {
	let value: JsonValue = serde_json::from_str(json)?;
	convert_geojson(&value)
}

/// Converts an already parsed JSON tree into a [`GeoJson`] document.
pub fn convert_geojson(json: &JsonValue) -> Result<GeoJson> {
	let document = GeoJson::from_geojson(json)?;
	debug!("decoded GeoJSON document of type {}", document.type_name());
	Ok(document)
}

/// Parses GeoJSON text directly into any decodable model type, e.g. a single
/// [`GeoFeature`](crate::GeoFeature) or a [`Geometry`](crate::Geometry).
pub fn parse_geojson_as<T: FromGeoJson>(json: &str) -> Result<T> {
	let value: JsonValue = serde_json::from_str(json)?;
	T::from_geojson(&value)
}

impl FromStr for GeoJson {
	type Err = crate::GeoJsonError;

	fn from_str(s: &str) -> Result<Self> {
		parse_geojson(s)
	}
}
