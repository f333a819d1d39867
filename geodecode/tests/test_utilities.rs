#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
}

/// Helper to create a Command for the geodecode binary.
pub fn geodecode_cmd() -> Command {
	Command::new(cargo::cargo_bin!("geodecode"))
}
