mod health;
mod attrs;
mod list;

use std::collections::HashMap;
use clap::{self, Arg, ArgAction, ArgGroup, ArgMatches, Command};

use smarttable::{decoder, disk, Catalog, DecodedAttribute};
use smarttable::disk::{Disk, Selector, TableSource};

pub fn arg_json() -> Arg {
	Arg::new("json")
		.long("json")
		.action(ArgAction::SetTrue)
		.help("Export data in JSON")
}

/// `--index`/`--serial` pair, exactly one of them is required
pub fn with_disk_args(cmd: Command) -> Command {
	cmd
		.arg(Arg::new("index")
			.long("index")
			.num_args(1)
			.value_name("N")
			.value_parser(clap::value_parser!(u32))
			.help("Disk index, as reported by `list`")
		)
		.arg(Arg::new("serial")
			.long("serial")
			.num_args(1)
			.value_name("SERIAL")
			.help("Disk serial number (surrounding spaces are ignored)")
		)
		.group(ArgGroup::new("disk")
			.args(["index", "serial"])
			.required(true)
		)
}

pub fn selector(args: &ArgMatches) -> Selector {
	match (args.get_one::<u32>("index"), args.get_one::<String>("serial")) {
		(Some(index), _) => Selector::Index(*index),
		(None, Some(serial)) => Selector::Serial(serial.clone()),
		(None, None) => unreachable!("clap requires either --index or --serial"),
	}
}

/// Resolves selected disk, fetches and decodes its tables.
pub fn decode_selected(
	source: &dyn TableSource,
	args: &ArgMatches,
	catalog: &Catalog,
) -> Result<(Disk, Vec<DecodedAttribute>), disk::Error> {
	let dev = disk::resolve(source, &selector(args))?;
	let tables = disk::fetch(source, &dev)?;
	let attrs = decoder::decode_disk(&dev.context(), &tables.attributes, &tables.thresholds, catalog);
	Ok((dev, attrs))
}

pub trait Subcommand: Sync {
	fn subcommand(&self) -> Command;
	fn run(&self, source: &dyn TableSource, args: &ArgMatches) -> Result<(), disk::Error>;
}

static HEALTH: health::Health = health::Health {};
static LIST: list::List = list::List {};
static ATTRS: attrs::Attrs = attrs::Attrs {};

lazy_static! {
	pub static ref SUBCOMMANDS: HashMap<&'static str, &'static dyn Subcommand> = {
		let mut m: HashMap<&'static str, &'static dyn Subcommand> = HashMap::new();
		m.insert("health", &HEALTH);
		m.insert("list",   &LIST);
		m.insert("attrs",  &ATTRS);
		m
	};
}
