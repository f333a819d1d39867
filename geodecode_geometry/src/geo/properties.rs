use super::GeoValue;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Mapping from property name to [`GeoValue`]. Keys are unique; iteration is sorted by key.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, GeoValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}
	pub fn remove(&mut self, key: &str) -> Option<GeoValue> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}
	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn keys(&self) -> btree_map::Keys<'_, String, GeoValue> {
		self.properties.keys()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.properties.iter()
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl<'a> IntoIterator for &'a GeoProperties {
	type Item = (&'a String, &'a GeoValue);
	type IntoIter = btree_map::Iter<'a, String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_get_remove() {
		let mut props = GeoProperties::new();
		assert!(props.is_empty());
		props.insert("name".to_string(), GeoValue::from("Nice"));
		props.insert("population".to_string(), GeoValue::from(348085));
		assert_eq!(props.len(), 2);
		assert_eq!(props.get("name"), Some(&GeoValue::from("Nice")));
		assert!(props.contains_key("population"));
		assert_eq!(props.remove("name"), Some(GeoValue::from("Nice")));
		assert_eq!(props.get("name"), None);
	}

	#[test]
	fn equality_ignores_insertion_order() {
		let a = GeoProperties::from(vec![("a", GeoValue::from(1)), ("b", GeoValue::from(2))]);
		let b = GeoProperties::from(vec![("b", GeoValue::from(2)), ("a", GeoValue::from(1))]);
		assert_eq!(a, b);
	}

	#[test]
	fn debug_is_sorted_map() {
		let props = GeoProperties::from(vec![("z", GeoValue::Null), ("a", GeoValue::from(true))]);
		assert_eq!(format!("{props:?}"), "{\"a\": Bool(true), \"z\": Null}");
	}
}
