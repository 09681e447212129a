use smarttable::{decoder, disk, Status};
use smarttable::disk::TableSource;

use clap::{
	ArgMatches,
	Command,
};

use serde_json::{self, json};

use super::{Subcommand, arg_json, decode_selected, with_disk_args};
use super::attrs::{arg_vendorattribute, catalog};

pub struct Health {}
impl Subcommand for Health {
	fn subcommand(&self) -> Command {
		with_disk_args(Command::new("health"))
			.about("Prints overall health status, based on attribute thresholds")
			.arg(arg_json())
			.arg(arg_vendorattribute())
	}

	fn run(
		&self,
		source: &dyn TableSource,
		args: &ArgMatches,
	) -> Result<(), disk::Error> {
		let catalog = catalog(args);
		let (dev, attrs) = decode_selected(source, args, &catalog)?;
		let status = decoder::overall_status(&attrs);
		let failing: Vec<_> = attrs.iter().filter(|attr| attr.status == Status::FAIL).collect();

		if args.get_flag("json") {
			let info = json!({
				"disk": dev,
				"status": status,
				"failing": failing,
			});
			print!("{}\n", serde_json::to_string(&info)?);
			return Ok(());
		}

		match status {
			Some(Status::OK) => print!("S.M.A.R.T. attribute check: PASSED\n"),
			Some(Status::FAIL) => {
				print!("S.M.A.R.T. attribute check: FAILING\n");
				for attr in failing {
					print!("  {} {} (current {} < threshold {})\n",
						attr.id_hex, attr.name, attr.current, attr.threshold);
				}
			},
			// no records is not the same thing as a healthy drive
			None => print!("S.M.A.R.T. attribute check: UNKNOWN (no attributes reported)\n"),
		}
		Ok(())
	}
}
