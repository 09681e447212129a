/*!
Module to parse user-supplied attribute names.

Vendors reuse attribute IDs for whatever they like, so the built-in [catalog](../index.html) is only a best guess.
Users can rename attributes from the command line (`smarttable attrs -v 9,Power_On_Minutes …`), and this is where such arguments are parsed.

Format is `ID,NAME`, loosely following `-v`/`--vendorattribute` from smartctl(8), minus the value format part: conversions are fixed per attribute ID.
*/
use nom::bytes::complete::take_till1;
use nom::character::complete::{char, digit1};
use nom::combinator::{eof, map_res};
use nom::IResult;
use nom::Parser;

quick_error! {
	#[derive(Debug)]
	pub enum Error {
		Parse {
			display("Unable to parse vendor attribute")
		}
	}
}

/// Attribute name override
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
	/// id of described attribute
	pub id: u8,
	/// attribute name
	pub name: String,
}

fn parse_standard(input: &str) -> IResult<&str, Attribute> {
	let (input, id) = map_res(digit1, |s: &str| s.parse::<u8>()).parse(input)?;
	let (input, _) = char(',')(input)?;
	let (input, name) = take_till1(|c| c == ',')(input)?;
	let (input, _) = eof(input)?;
	Ok((
		input,
		Attribute {
			id: id,
			name: name.to_string(),
		},
	))
}

/**
Parses single attribute description (`-v` option argument).

The following formats are supported:

* `ID,NAME`
* legacy smartctl `-v` arguments that only rename an attribute, like `200,writeerrorcount`
*/
pub fn parse(s: &str) -> Result<Attribute, Error> {
	let s = match s {
		"192,emergencyretractcyclect" => "192,Emerg_Retract_Cycle_Ct",
		"194,unknown" => "194,Unknown_Attribute",
		"198,offlinescanuncsectorct" => "198,Offline_Scan_UNC_SectCt",
		"200,writeerrorcount" => "200,Write_Error_Count",
		"201,detectedtacount" => "201,Detected_TA_Count",
		s => s,
	};
	match parse_standard(s) {
		Ok((_, attr)) => Ok(attr),
		Err(_) => Err(Error::Parse),
	}
}
