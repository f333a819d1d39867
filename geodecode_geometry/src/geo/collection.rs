use super::GeoFeature;

/// An ordered sequence of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, feature: GeoFeature) {
		self.features.push(feature);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}

impl<'a> IntoIterator for &'a GeoCollection {
	type Item = &'a GeoFeature;
	type IntoIter = std::slice::Iter<'a, GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		Self::from(iter.into_iter().collect::<Vec<_>>())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Geometry;

	#[test]
	fn push_and_iterate() {
		let mut collection = GeoCollection::new();
		assert!(collection.is_empty());
		collection.push(GeoFeature::new(Geometry::new_point(1.0, 1.0)));
		collection.push(GeoFeature::new(Geometry::new_point(2.0, 2.0)));
		assert_eq!(collection.len(), 2);

		let xs: Vec<f64> = collection
			.iter()
			.filter_map(|f| f.geometry.as_point().map(crate::PointGeometry::x))
			.collect();
		assert_eq!(xs, vec![1.0, 2.0]);
	}

	#[test]
	fn collect_from_iterator() {
		let collection: GeoCollection = (0..3)
			.map(|i| GeoFeature::new(Geometry::new_point(f64::from(i), 0.0)))
			.collect();
		assert_eq!(collection.len(), 3);
		assert_eq!(collection.into_iter().count(), 3);
	}
}
