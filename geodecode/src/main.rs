mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Show a summary of a GeoJSON document
	Probe(tools::probe::Subcommand),

	/// Print the decoded model of a GeoJSON document
	Dump(tools::dump::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Probe(arguments) => tools::probe::run(arguments),
		Commands::Dump(arguments) => tools::dump::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geodecode"]).unwrap_err().to_string();
		assert!(err.starts_with("Decode GeoJSON into a strongly-typed model"));
		assert!(err.contains("\nUsage: geodecode [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geodecode", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geodecode "));
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["geodecode", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("Show a summary of a GeoJSON document"));
	}

	#[test]
	fn dump_subcommand() {
		let output = run_command(vec!["geodecode", "dump"]).unwrap_err().to_string();
		assert!(output.starts_with("Print the decoded model of a GeoJSON document"));
	}
}
