use anyhow::{Context, Result};
use geodecode::{GeoJson, read_geojson};
use log::info;
use std::{fs::File, io::BufReader};

/// Reads and decodes a GeoJSON document from a file, or from stdin if `filename` is `-`.
pub fn read_input(filename: &str) -> Result<GeoJson> {
	if filename == "-" {
		info!("reading GeoJSON from stdin");
		return read_geojson(std::io::stdin().lock()).context("failed to decode stdin");
	}

	info!("reading GeoJSON from {filename:?}");
	let file = File::open(filename).with_context(|| format!("failed to open {filename:?}"))?;
	read_geojson(BufReader::new(file)).with_context(|| format!("failed to decode {filename:?}"))
}
