use super::LineStringGeometry;

/// An ordered collection of line strings.
///
/// Part of the model, but GeoJSON input declaring `"MultiLineString"` is rejected by the decoder.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

crate::impl_composite_geometry!(MultiLineStringGeometry, LineStringGeometry);
crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
