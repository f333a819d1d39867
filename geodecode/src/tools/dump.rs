use super::input::read_input;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to decode, or "-" for stdin
	#[arg(required = true)]
	filename: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let document = read_input(&arguments.filename)?;
	println!("{document:#?}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn dump_feature() {
		run_command(vec!["geodecode", "dump", "../testdata/feature.json"]).unwrap();
	}

	#[test]
	fn dump_missing_file() {
		let err = run_command(vec!["geodecode", "dump", "../testdata/does-not-exist.json"]).unwrap_err();
		assert!(err.to_string().starts_with("failed to open"));
	}
}
