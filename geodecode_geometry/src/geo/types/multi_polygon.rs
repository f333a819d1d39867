use super::PolygonGeometry;

/// An ordered collection of polygons.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

crate::impl_composite_geometry!(MultiPolygonGeometry, PolygonGeometry);

impl From<Vec<PolygonGeometry>> for MultiPolygonGeometry {
	fn from(value: Vec<PolygonGeometry>) -> Self {
		Self(value)
	}
}
