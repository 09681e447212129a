use smarttable::{disk, Catalog, DecodedAttribute, Status};
use smarttable::catalog::vendor_attribute;
use smarttable::disk::{Disk, TableSource};

use clap::{
	Arg,
	ArgAction,
	ArgMatches,
	Command,
};

use serde_json;

use prettytable::{format, Cell, Row, Table};

use super::{Subcommand, arg_json, decode_selected, with_disk_args};

pub fn arg_vendorattribute() -> Arg {
	Arg::new("vendorattribute")
		.short('v') // smartctl-like
		.long("vendorattribute") // smartctl-like
		.num_args(1)
		.action(ArgAction::Append)
		.value_name("ID,NAME")
		.value_parser(|s: &str| vendor_attribute::parse(s).map_err(|e| e.to_string()))
		.help("set display name for attribute ID\nthe same ID can only have one name, the last one wins")
}

/// Catalog with user-supplied names applied.
pub fn catalog(args: &ArgMatches) -> Catalog {
	let user_attributes = args.get_many::<vendor_attribute::Attribute>("vendorattribute")
		.map(|vals| vals.cloned().collect::<Vec<_>>())
		.unwrap_or_default();
	Catalog::standard().with_overrides(&user_attributes)
}

fn print_attributes(dev: &Disk, attrs: &[DecodedAttribute]) {
	print!("Disk {}: {}\n", dev.index, dev.serial.trim());
	if !dev.model.is_empty() {
		print!("Model: {}\n", dev.model);
	}
	print!("\n");

	if attrs.is_empty() {
		print!("No S.M.A.R.T. attributes reported\n");
		return;
	}

	let mut table = Table::new();
	table.set_format(*format::consts::FORMAT_CLEAN);
	table.set_titles(Row::new(
		["ID", "Hex", "Name", "Real value", "Current", "Worst", "Threshold", "Status", "Raw"]
			.iter()
			.map(|title| Cell::new(title).style_spec("b"))
			.collect()
	));

	for attr in attrs {
		table.add_row(Row::new(vec![
			Cell::new(&attr.id.to_string()).style_spec("r"),
			Cell::new(&attr.id_hex),
			Cell::new(&attr.name),
			Cell::new(&attr.real_value).style_spec("r"),
			Cell::new(&attr.current.to_string()).style_spec("r"),
			Cell::new(&attr.worst.to_string()).style_spec("r"),
			Cell::new(&attr.threshold.to_string()).style_spec("r"),
			Cell::new(&attr.status.to_string()).style_spec(match attr.status {
				Status::OK => "",
				Status::FAIL => "bFr",
			}),
			Cell::new(&attr.raw),
		]));
	}

	table.printstd();
}

pub struct Attrs {}
impl Subcommand for Attrs {
	fn subcommand(&self) -> Command {
		with_disk_args(Command::new("attrs"))
			.about("Prints decoded S.M.A.R.T. attributes")
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

		if args.get_flag("json") {
			print!("{}\n", serde_json::to_string(&attrs)?);
		} else {
			print_attributes(&dev, &attrs);
		}
		Ok(())
	}
}
