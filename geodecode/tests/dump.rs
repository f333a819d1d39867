#![cfg(feature = "cli")]

mod test_utilities;
use predicates::str::contains;
use test_utilities::*;

#[test]
fn e2e_dump_feature() {
	geodecode_cmd()
		.arg("dump")
		.arg(get_testdata("feature.json"))
		.assert()
		.success()
		.stdout(contains("Feature("))
		.stdout(contains("UInt("))
		.stdout(contains("\"node/42\""));
}

#[test]
fn e2e_dump_missing_file() {
	geodecode_cmd()
		.args(["dump", "does-not-exist.json"])
		.assert()
		.failure()
		.stderr(contains("failed to open \"does-not-exist.json\""));
}
