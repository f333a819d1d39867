use super::*;

/// A geometry with a property map and an optional identifier.
///
/// Equality compares identifier, geometry and properties by value.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoIdentifier>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		GeoIdentifier: From<T>,
	{
		self.id = Some(GeoIdentifier::from(id));
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key.to_string(), GeoValue::from(value));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_has_no_id_and_empty_properties() {
		let feature = GeoFeature::new(Geometry::new_point(1.0, 2.0));
		assert_eq!(feature.id, None);
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn setters() {
		let mut feature = GeoFeature::new(Geometry::new_point(1.0, 2.0));
		feature.set_id(13u64);
		feature.set_property("name", "Nice");
		feature.set_property("is_nice", true);
		assert_eq!(feature.id, Some(GeoIdentifier::UInt(13)));
		assert_eq!(feature.properties.get("name"), Some(&GeoValue::from("Nice")));
		assert_eq!(feature.properties.len(), 2);

		feature.set_properties(GeoProperties::new());
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn equality_is_structural() {
		let mut a = GeoFeature::new(Geometry::new_point(1.0, 2.0));
		let mut b = GeoFeature::new(Geometry::new_point(1.0, 2.0));
		assert_eq!(a, b);
		a.set_id("x");
		assert_ne!(a, b);
		b.set_id("x");
		assert_eq!(a, b);
		b.set_property("k", 1);
		assert_ne!(a, b);
	}
}
