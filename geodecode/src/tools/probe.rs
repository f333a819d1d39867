use super::input::read_input;
use anyhow::Result;
use clap::Args;
use geodecode::{GeoFeature, GeoJson};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to probe, or "-" for stdin
	#[arg(required = true)]
	filename: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let document = read_input(&arguments.filename)?;
	print!("{}", summarize(&document));
	Ok(())
}

/// Document type, feature count, geometry types and property keys, one item per line.
fn summarize(document: &GeoJson) -> String {
	let mut geometry_types: BTreeMap<&str, usize> = BTreeMap::new();
	let mut property_keys: BTreeSet<&str> = BTreeSet::new();

	let features: Vec<&GeoFeature> = match document {
		GeoJson::Geometry(geometry) => {
			*geometry_types.entry(geometry.type_name()).or_default() += 1;
			Vec::new()
		}
		GeoJson::Feature(feature) => vec![feature],
		GeoJson::FeatureCollection(collection) => collection.iter().collect(),
	};

	for feature in &features {
		*geometry_types.entry(feature.geometry.type_name()).or_default() += 1;
		property_keys.extend(feature.properties.keys().map(String::as_str));
	}

	let mut lines = vec![
		format!("type: {}", document.type_name()),
		format!("features: {}", features.len()),
		"geometries:".to_string(),
	];
	lines.extend(geometry_types.iter().map(|(name, count)| format!("  {name}: {count}")));
	lines.push(format!(
		"property keys: {}",
		property_keys.into_iter().collect::<Vec<_>>().join(", ")
	));
	lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use geodecode::{GeoCollection, Geometry};
	use pretty_assertions::assert_eq;

	#[test]
	fn summarize_geometry() {
		let document = GeoJson::from(Geometry::new_point(1.0, 2.0));
		assert_eq!(
			summarize(&document),
			"type: Point\nfeatures: 0\ngeometries:\n  Point: 1\nproperty keys: \n"
		);
	}

	#[test]
	fn summarize_collection() {
		let mut a = GeoFeature::new(Geometry::new_point(1.0, 2.0));
		a.set_property("name", "a");
		let mut b = GeoFeature::new(Geometry::new_point(3.0, 4.0));
		b.set_property("rank", 2);
		b.set_property("name", "b");
		let document = GeoJson::from(GeoCollection::from(vec![a, b]));
		assert_eq!(
			summarize(&document),
			"type: FeatureCollection\nfeatures: 2\ngeometries:\n  Point: 2\nproperty keys: name, rank\n"
		);
	}

	#[test]
	fn probe_file() {
		run_command(vec!["geodecode", "probe", "-q", "../testdata/feature-collection.json"]).unwrap();
	}
}
