use super::parse_geojson;
use crate::GeoJson;
use anyhow::{Context, Result};
use std::io::Read;

/// Reads a complete GeoJSON document from `reader` and decodes it.
pub fn read_geojson(mut reader: impl Read) -> Result<GeoJson> {
	let mut buffer = String::new();
	reader
		.read_to_string(&mut buffer)
		.context("failed to read GeoJSON input")?;
	Ok(parse_geojson(&buffer)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ErrorKind, GeoJsonError};
	use std::io::Cursor;

	#[test]
	fn read_basic() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let document = read_geojson(Cursor::new(json))?;
		let collection = document.as_collection().unwrap();
		assert_eq!(collection.len(), 1);
		assert_eq!(collection.features[0].geometry.type_name(), "Point");
		Ok(())
	}

	#[test]
	fn decode_error_is_preserved() {
		let err = read_geojson(Cursor::new(r#"{"type":"MultiLineString","coordinates":[]}"#)).unwrap_err();
		let err = err.downcast_ref::<GeoJsonError>().unwrap();
		assert_eq!(err.kind(), ErrorKind::UnsupportedGeometryType);
	}

	#[test]
	fn invalid_utf8() {
		let err = read_geojson(Cursor::new(vec![0xff, 0xfe])).unwrap_err();
		assert_eq!(err.to_string(), "failed to read GeoJSON input");
	}
}
