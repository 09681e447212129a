use smarttable::disk::{self, TableSource};

use clap::{
	ArgMatches,
	Command,
};

use serde_json;

use separator::Separatable;
use number_prefix::NumberPrefix;

use super::{Subcommand, arg_json};

fn capacity(bytes: u64) -> String {
	format!("{} bytes ({}, {})",
		bytes.separated_string(),
		match NumberPrefix::decimal(bytes as f64) {
			NumberPrefix::Prefixed(p, x) => format!("{:.1} {}B", x, p),
			NumberPrefix::Standalone(x)  => format!("{} bytes", x),
		},
		match NumberPrefix::binary(bytes as f64) {
			NumberPrefix::Prefixed(p, x) => format!("{:.1} {}B", x, p),
			NumberPrefix::Standalone(x)  => format!("{} bytes", x),
		},
	)
}

pub struct List {}
impl Subcommand for List {
	fn subcommand(&self) -> Command {
		Command::new("list")
			.about("Lists disks")
			.arg(arg_json())
	}

	fn run(
		&self,
		source: &dyn TableSource,
		args: &ArgMatches,
	) -> Result<(), disk::Error> {
		let devs = source.disks()?;

		if args.get_flag("json") {
			print!("{}\n", serde_json::to_string(&devs)?);
		} else {
			for dev in devs {
				print!("{}: {}\n", dev.index, dev.serial.trim());
				if !dev.model.is_empty() {
					print!("   Model:    {}\n", dev.model);
				}
				if let Some(bytes) = dev.capacity {
					print!("   Capacity: {}\n", capacity(bytes));
				}
			}
		}
		Ok(())
	}
}
