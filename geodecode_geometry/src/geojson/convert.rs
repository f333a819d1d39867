//! Conversion rules from a generic [`serde_json::Value`] tree into the typed model.
//!
//! Each model type implements [`FromGeoJson`]. Object-shaped types (`Geometry`, `GeoFeature`,
//! `GeoCollection`, `GeoJson`) dispatch on the `type` member; geometry shapes decode the raw
//! `coordinates` array of their kind. The first violation aborts the whole conversion.

use crate::{
	Coordinates, GeoCollection, GeoFeature, GeoIdentifier, GeoJson, GeoJsonError, GeoProperties, GeoValue, Geometry,
	LineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
	error::Result, fail,
};
use log::trace;
use serde_json::{Map, Number, Value as JsonValue};

/// Type-directed decoding from a generic JSON node.
pub trait FromGeoJson: Sized {
	fn from_geojson(json: &JsonValue) -> Result<Self>;
}

/// Name of the JSON kind of `json`, for error messages.
fn kind_of(json: &JsonValue) -> &'static str {
	match json {
		JsonValue::Null => "null",
		JsonValue::Bool(_) => "boolean",
		JsonValue::Number(_) => "number",
		JsonValue::String(_) => "string",
		JsonValue::Array(_) => "array",
		JsonValue::Object(_) => "object",
	}
}

/// Tags a JSON number: unsigned if it fits in u64, signed if it fits in i64, double otherwise.
fn tag_number<T: From<u64> + From<i64> + From<f64>>(number: &Number) -> T {
	if let Some(v) = number.as_u64() {
		T::from(v)
	} else if let Some(v) = number.as_i64() {
		T::from(v)
	} else {
		T::from(number.as_f64().unwrap_or_default())
	}
}

fn expect_array<'a>(json: &'a JsonValue, what: &str) -> Result<&'a Vec<JsonValue>> {
	match json {
		JsonValue::Array(array) => Ok(array),
		_ => fail!(TypeError, "{what} must be an array, found {}", kind_of(json)),
	}
}

fn expect_number(json: &JsonValue) -> Result<f64> {
	match json {
		JsonValue::Number(number) => Ok(number.as_f64().unwrap_or_default()),
		_ => fail!(TypeError, "coordinate must be a number, found {}", kind_of(json)),
	}
}

/// Decodes every element of an array with the rule of `T`, preserving order.
fn convert_array<T: FromGeoJson>(json: &JsonValue, what: &str) -> Result<Vec<T>> {
	expect_array(json, what)?.iter().map(T::from_geojson).collect()
}

impl FromGeoJson for GeoValue {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		Ok(match json {
			JsonValue::Null => GeoValue::Null,
			JsonValue::Bool(b) => GeoValue::Bool(*b),
			JsonValue::Number(n) => tag_number(n),
			JsonValue::String(s) => GeoValue::String(s.clone()),
			JsonValue::Array(array) => {
				GeoValue::Array(array.iter().map(GeoValue::from_geojson).collect::<Result<_>>()?)
			}
			JsonValue::Object(_) => GeoValue::Object(GeoProperties::from_geojson(json)?),
		})
	}
}

impl FromGeoJson for GeoProperties {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		let JsonValue::Object(object) = json else {
			fail!(TypeError, "properties must be an object, found {}", kind_of(json));
		};
		object
			.iter()
			.map(|(key, value)| Ok::<_, GeoJsonError>((key.clone(), GeoValue::from_geojson(value)?)))
			.collect()
	}
}

impl FromGeoJson for GeoIdentifier {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		match json {
			JsonValue::String(s) => Ok(GeoIdentifier::String(s.clone())),
			JsonValue::Number(n) => Ok(tag_number(n)),
			_ => fail!(
				InvalidIdentifier,
				"Feature id must be a string or number, found {}",
				kind_of(json)
			),
		}
	}
}

/// A position: at least two numbers, anything after the second is dropped.
impl FromGeoJson for Coordinates {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		let position = expect_array(json, "position")?;
		if position.len() < 2 {
			fail!(
				MalformedGeometry,
				"coordinates array must have at least 2 numbers, found {}",
				position.len()
			);
		}
		Ok(Coordinates::new(expect_number(&position[0])?, expect_number(&position[1])?))
	}
}

impl FromGeoJson for PointGeometry {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		Coordinates::from_geojson(json).map(PointGeometry)
	}
}

impl FromGeoJson for MultiPointGeometry {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		convert_array(json, "MultiPoint coordinates").map(MultiPointGeometry)
	}
}

impl FromGeoJson for LineStringGeometry {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		convert_array(json, "LineString coordinates").map(LineStringGeometry)
	}
}

impl FromGeoJson for RingGeometry {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		convert_array(json, "linear ring").map(RingGeometry)
	}
}

/// First ring is the outer ring, the rest are holes in source order.
impl FromGeoJson for PolygonGeometry {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		let rings = convert_array::<RingGeometry>(json, "Polygon coordinates")?;
		PolygonGeometry::from_rings(rings)
			.ok_or_else(|| GeoJsonError::MalformedGeometry("Polygon must have at least one linear ring".to_string()))
	}
}

impl FromGeoJson for MultiPolygonGeometry {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		convert_array(json, "MultiPolygon coordinates").map(MultiPolygonGeometry)
	}
}

type GeometryRule = fn(&JsonValue) -> Result<Geometry>;

fn geometry_rule(geometry_type: &str) -> Option<GeometryRule> {
	let rule: GeometryRule = match geometry_type {
		"Point" => |c| PointGeometry::from_geojson(c).map(Geometry::Point),
		"MultiPoint" => |c| MultiPointGeometry::from_geojson(c).map(Geometry::MultiPoint),
		"LineString" => |c| LineStringGeometry::from_geojson(c).map(Geometry::LineString),
		"Polygon" => |c| PolygonGeometry::from_geojson(c).map(Geometry::Polygon),
		"MultiPolygon" => |c| MultiPolygonGeometry::from_geojson(c).map(Geometry::MultiPolygon),
		// "MultiLineString" and "GeometryCollection" have no decoding rule.
		_ => return None,
	};
	Some(rule)
}

impl FromGeoJson for Geometry {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		let JsonValue::Object(object) = json else {
			fail!(MalformedGeometry, "Geometry must be an object, found {}", kind_of(json));
		};

		let geometry_type = match object.get("type") {
			None => fail!(MalformedGeometry, "Geometry must have a type property"),
			Some(JsonValue::String(t)) => t.as_str(),
			Some(other) => fail!(MalformedGeometry, "Geometry type must be a string, found {}", kind_of(other)),
		};

		let Some(coordinates) = object.get("coordinates") else {
			fail!(MalformedGeometry, "{geometry_type} geometry must have a coordinates property");
		};
		if !coordinates.is_array() {
			fail!(
				MalformedGeometry,
				"{geometry_type} coordinates property must be an array, found {}",
				kind_of(coordinates)
			);
		}

		let Some(rule) = geometry_rule(geometry_type) else {
			return Err(GeoJsonError::UnsupportedGeometryType(geometry_type.to_string()));
		};

		trace!("decoding {geometry_type} geometry");
		rule(coordinates)
	}
}

impl FromGeoJson for GeoFeature {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		let JsonValue::Object(object) = json else {
			fail!(MalformedFeature, "Feature must be an object, found {}", kind_of(json));
		};

		match object.get("type") {
			None => fail!(MalformedFeature, "Feature must have a type property"),
			Some(t) if t.as_str() == Some("Feature") => {}
			Some(_) => fail!(MalformedFeature, "Feature type must be Feature"),
		}

		let Some(geometry) = object.get("geometry") else {
			fail!(MalformedFeature, "Feature must have a geometry property");
		};
		let mut feature = GeoFeature::new(Geometry::from_geojson(geometry)?);

		if let Some(id) = object.get("id") {
			feature.id = Some(GeoIdentifier::from_geojson(id)?);
		}

		match object.get("properties") {
			None | Some(JsonValue::Null) => {}
			Some(properties @ JsonValue::Object(_)) => feature.properties = GeoProperties::from_geojson(properties)?,
			Some(other) => fail!(
				MalformedFeature,
				"Feature properties must be an object or null, found {}",
				kind_of(other)
			),
		}

		trace!("decoded feature with {} properties", feature.properties.len());
		Ok(feature)
	}
}

fn collection_from_object(object: &Map<String, JsonValue>) -> Result<GeoCollection> {
	let Some(features) = object.get("features") else {
		fail!(MalformedDocument, "FeatureCollection must have a features property");
	};
	let JsonValue::Array(features) = features else {
		fail!(
			MalformedDocument,
			"FeatureCollection features property must be an array, found {}",
			kind_of(features)
		);
	};
	trace!("decoding FeatureCollection with {} features", features.len());
	features.iter().map(GeoFeature::from_geojson).collect()
}

impl FromGeoJson for GeoCollection {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		let JsonValue::Object(object) = json else {
			fail!(MalformedDocument, "FeatureCollection must be an object, found {}", kind_of(json));
		};
		match object.get("type") {
			None => fail!(MalformedDocument, "FeatureCollection must have a type property"),
			Some(t) if t.as_str() == Some("FeatureCollection") => {}
			Some(_) => fail!(MalformedDocument, "FeatureCollection type must be FeatureCollection"),
		}
		collection_from_object(object)
	}
}

/// Top-level dispatch. Any `type` other than `FeatureCollection` or `Feature` is read as a
/// bare geometry.
impl FromGeoJson for GeoJson {
	fn from_geojson(json: &JsonValue) -> Result<Self> {
		let JsonValue::Object(object) = json else {
			fail!(MalformedDocument, "GeoJSON must be an object, found {}", kind_of(json));
		};
		let Some(document_type) = object.get("type") else {
			fail!(MalformedDocument, "GeoJSON must have a type property");
		};

		match document_type.as_str() {
			Some("FeatureCollection") => collection_from_object(object).map(GeoJson::FeatureCollection),
			Some("Feature") => GeoFeature::from_geojson(json).map(GeoJson::Feature),
			_ => Geometry::from_geojson(json).map(GeoJson::Geometry),
		}
	}
}
