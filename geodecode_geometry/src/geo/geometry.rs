use super::*;
use std::fmt::Debug;

/// One of the six coordinate-based GeoJSON shapes.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	#[must_use]
	pub fn new_point(x: f64, y: f64) -> Self {
		Self::Point(PointGeometry::new(Coordinates::new(x, y)))
	}

	/// Returns the GeoJSON `type` discriminator of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	#[must_use]
	pub fn as_point(&self) -> Option<&PointGeometry> {
		match self {
			Geometry::Point(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_multi_point(&self) -> Option<&MultiPointGeometry> {
		match self {
			Geometry::MultiPoint(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_line_string(&self) -> Option<&LineStringGeometry> {
		match self {
			Geometry::LineString(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_polygon(&self) -> Option<&PolygonGeometry> {
		match self {
			Geometry::Polygon(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_multi_polygon(&self) -> Option<&MultiPolygonGeometry> {
		match self {
			Geometry::MultiPolygon(g) => Some(g),
			_ => None,
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl From<PointGeometry> for Geometry {
	fn from(value: PointGeometry) -> Self {
		Geometry::Point(value)
	}
}

impl From<MultiPointGeometry> for Geometry {
	fn from(value: MultiPointGeometry) -> Self {
		Geometry::MultiPoint(value)
	}
}

impl From<LineStringGeometry> for Geometry {
	fn from(value: LineStringGeometry) -> Self {
		Geometry::LineString(value)
	}
}

impl From<MultiLineStringGeometry> for Geometry {
	fn from(value: MultiLineStringGeometry) -> Self {
		Geometry::MultiLineString(value)
	}
}

impl From<PolygonGeometry> for Geometry {
	fn from(value: PolygonGeometry) -> Self {
		Geometry::Polygon(value)
	}
}

impl From<MultiPolygonGeometry> for Geometry {
	fn from(value: MultiPolygonGeometry) -> Self {
		Geometry::MultiPolygon(value)
	}
}
