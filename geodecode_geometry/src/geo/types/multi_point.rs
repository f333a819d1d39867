use super::PointGeometry;

/// An ordered collection of points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

crate::impl_composite_geometry!(MultiPointGeometry, PointGeometry);
crate::impl_from_array!(MultiPointGeometry, PointGeometry);
