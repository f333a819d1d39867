use super::*;

/// A decoded GeoJSON document: a bare geometry, a single feature or a feature collection.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoCollection),
}

impl GeoJson {
	/// Returns the `type` discriminator of the document.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			GeoJson::Geometry(g) => g.type_name(),
			GeoJson::Feature(_) => "Feature",
			GeoJson::FeatureCollection(_) => "FeatureCollection",
		}
	}

	#[must_use]
	pub fn as_geometry(&self) -> Option<&Geometry> {
		match self {
			GeoJson::Geometry(g) => Some(g),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_feature(&self) -> Option<&GeoFeature> {
		match self {
			GeoJson::Feature(f) => Some(f),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_collection(&self) -> Option<&GeoCollection> {
		match self {
			GeoJson::FeatureCollection(c) => Some(c),
			_ => None,
		}
	}

	/// Consumes the document and returns its features. A bare geometry has none.
	#[must_use]
	pub fn into_features(self) -> Vec<GeoFeature> {
		match self {
			GeoJson::Geometry(_) => Vec::new(),
			GeoJson::Feature(f) => vec![f],
			GeoJson::FeatureCollection(c) => c.features,
		}
	}
}

impl From<Geometry> for GeoJson {
	fn from(value: Geometry) -> Self {
		GeoJson::Geometry(value)
	}
}

impl From<GeoFeature> for GeoJson {
	fn from(value: GeoFeature) -> Self {
		GeoJson::Feature(value)
	}
}

impl From<GeoCollection> for GeoJson {
	fn from(value: GeoCollection) -> Self {
		GeoJson::FeatureCollection(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn feature() -> GeoFeature {
		GeoFeature::new(Geometry::new_point(1.0, 2.0))
	}

	#[test]
	fn type_names() {
		assert_eq!(GeoJson::from(Geometry::new_point(0.0, 0.0)).type_name(), "Point");
		assert_eq!(GeoJson::from(feature()).type_name(), "Feature");
		assert_eq!(GeoJson::from(GeoCollection::new()).type_name(), "FeatureCollection");
	}

	#[test]
	fn into_features() {
		assert!(GeoJson::from(Geometry::new_point(0.0, 0.0)).into_features().is_empty());
		assert_eq!(GeoJson::from(feature()).into_features(), vec![feature()]);
		let collection = GeoCollection::from(vec![feature(), feature()]);
		assert_eq!(GeoJson::from(collection).into_features().len(), 2);
	}

	#[test]
	fn accessors() {
		let doc = GeoJson::from(feature());
		assert!(doc.as_feature().is_some());
		assert!(doc.as_geometry().is_none());
		assert!(doc.as_collection().is_none());
	}
}
