#![cfg_attr(feature = "cargo-clippy", allow(print_with_newline))]

#![warn(
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications,
)]

extern crate smarttable;

use smarttable::Inventory;

use clap::{Arg, ArgAction, Command};

extern crate serde_json;
extern crate separator;
extern crate number_prefix;
extern crate prettytable;

extern crate log;
extern crate env_logger;
use log::LevelFilter;
use env_logger::Builder as LogBuilder;

#[macro_use]
extern crate lazy_static;
mod subcommands;
use crate::subcommands::SUBCOMMANDS;

fn main() {
	let mut log = LogBuilder::new();

	let args = {
		let mut cmd = Command::new("smarttable")
		.about("decodes vendor-specific S.M.A.R.T. attribute tables")
		.version(env!("CARGO_PKG_VERSION"))
		.subcommand_required(true)
		.arg(Arg::new("inventory")
			.short('i')
			.long("inventory")
			.num_args(1)
			.value_name("FILE")
			.default_value("inventory.json")
			.help("JSON snapshot of disks and their raw attribute/threshold tables")
		)
		.arg(Arg::new("debug")
			.short('d')
			.long("debug")
			.action(ArgAction::Count)
			.help("Verbose output: set once to log actions, twice to also show skipped records\ncan also be set though env_logger's RUST_LOG env")
		);
		for subcommand in SUBCOMMANDS.values() {
			cmd = cmd.subcommand(subcommand.subcommand());
		}
		cmd.get_matches()
	};

	if let Ok(var) = std::env::var("RUST_LOG") {
		log.parse_filters(&var);
	}
	// -d takes precedence over RUST_LOG which some might export globally for some reasons
	log.filter(Some("smarttable"), {
		use self::LevelFilter::*;
		match args.get_count("debug") {
			0 => Warn,
			1 => Info,
			_ => Debug,
		}
	});
	log.init();

	let (subcommand, sargs) = match args.subcommand() {
		Some(sub) => sub,
		None => unreachable!("clap requires a subcommand"),
	};
	let subcommand = match SUBCOMMANDS.get(subcommand) {
		Some(sub) => sub,
		None => unreachable!("clap only accepts registered subcommands"),
	};

	let path = match args.get_one::<String>("inventory") {
		Some(path) => path,
		None => unreachable!("--inventory has a default value"),
	};
	let inventory = Inventory::load(path).unwrap_or_else(|err| {
		eprint!("Cannot load disk inventory {}: {}\n", path, err);
		::std::process::exit(1);
	});

	if let Err(err) = subcommand.run(&inventory, sargs) {
		eprint!("{}\n", err);
		::std::process::exit(1);
	}
}
