/*!
Disk lookup and raw table retrieval.

Actual querying of the hardware-management interface is left to [`TableSource`](trait.TableSource.html) implementors; this module only defines the contract and the selection rules on top of it.
*/
use std::fmt;
use std::io;

use serde::Serialize;

use crate::decoder::{self, DiskContext};

quick_error! {
	#[derive(Debug)]
	pub enum Error {
		NotFound(selector: Selector) {
			display("No disk matches {}", selector)
		}
		Ambiguous(selector: Selector, count: usize) {
			display("{} disks match {}", count, selector)
		}
		Unsupported(disk: String) {
			display("S.M.A.R.T. data is not available for {} (unsupported or disabled)", disk)
		}
		AccessDenied(err: io::Error) {
			display("Insufficient privilege to query disks: {}", err)
			source(err)
		}
		IO(err: io::Error) {
			display("IO error: {}", err)
			source(err)
		}
		Json(err: serde_json::Error) {
			from()
			display("Malformed disk data: {}", err)
			source(err)
		}
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Self {
		match err.kind() {
			io::ErrorKind::PermissionDenied => Error::AccessDenied(err),
			_ => Error::IO(err),
		}
	}
}

/// How the user points at a disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
	Index(u32),
	Serial(String),
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Selector::Index(i) => write!(f, "index {}", i),
			Selector::Serial(s) => write!(f, "serial number {:?}", s),
		}
	}
}

impl Selector {
	fn matches(&self, disk: &Disk) -> bool {
		match self {
			Selector::Index(i) => disk.index == *i,
			// firmware pads serial numbers with spaces
			Selector::Serial(s) => disk.serial.trim() == s.trim(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disk {
	pub index: u32,
	pub serial: String,
	pub model: String,
	/// bytes
	#[serde(skip_serializing_if = "Option::is_none")]
	pub capacity: Option<u64>,
}

impl Disk {
	pub fn context(&self) -> DiskContext {
		DiskContext {
			index: Some(self.index),
			serial: Some(self.serial.trim().to_string()),
		}
	}
}

impl fmt::Display for Disk {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "disk {} ({})", self.index, self.serial.trim())
	}
}

/// Attribute and threshold tables, as returned by the device.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
	pub attributes: Vec<u8>,
	pub thresholds: Vec<u8>,
}

pub trait TableSource {
	fn disks(&self) -> Result<Vec<Disk>, Error>;
	fn raw_tables(&self, disk: &Disk) -> Result<RawTables, Error>;
}

/// Picks exactly one disk matching the selector.
pub fn resolve(source: &dyn TableSource, selector: &Selector) -> Result<Disk, Error> {
	let mut found: Vec<Disk> = source.disks()?
		.into_iter()
		.filter(|disk| selector.matches(disk))
		.collect();

	match found.len() {
		0 => Err(Error::NotFound(selector.clone())),
		1 => {
			let disk = found.remove(0);
			info!("{} resolved to {}", selector, disk);
			Ok(disk)
		},
		n => Err(Error::Ambiguous(selector.clone(), n)),
	}
}

/// Retrieves raw tables for the disk, failing if there are no attribute records at all.
pub fn fetch(source: &dyn TableSource, disk: &Disk) -> Result<RawTables, Error> {
	let tables = source.raw_tables(disk)?;
	let count = decoder::attribute_record_count(&tables.attributes);
	info!("{}: {} attribute bytes ({} records), {} threshold bytes",
		disk, tables.attributes.len(), count, tables.thresholds.len());

	if count == 0 {
		return Err(Error::Unsupported(disk.to_string()));
	}
	Ok(tables)
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fake(Vec<(Disk, RawTables)>);

	impl TableSource for Fake {
		fn disks(&self) -> Result<Vec<Disk>, Error> {
			Ok(self.0.iter().map(|(disk, _)| disk.clone()).collect())
		}
		fn raw_tables(&self, disk: &Disk) -> Result<RawTables, Error> {
			Ok(self.0.iter().find(|(d, _)| d == disk).map(|(_, t)| t.clone()).unwrap_or_default())
		}
	}

	fn disk(index: u32, serial: &str) -> Disk {
		Disk { index, serial: serial.to_string(), model: "TEST".to_string(), capacity: None }
	}

	fn fake() -> Fake {
		Fake(vec![
			(disk(0, "  S1XYNEAD600001"), RawTables { attributes: vec![0; 362], thresholds: vec![0; 362] }),
			(disk(1, "WD-1"), RawTables::default()),
			(disk(2, "WD-1"), RawTables { attributes: vec![0; 12], thresholds: vec![] }),
		])
	}

	#[test]
	fn by_index() {
		let d = resolve(&fake(), &Selector::Index(1)).unwrap();
		assert_eq!(d.serial, "WD-1");
	}

	#[test]
	fn by_serial_trimmed() {
		let d = resolve(&fake(), &Selector::Serial("S1XYNEAD600001 ".to_string())).unwrap();
		assert_eq!(d.index, 0);
		assert_eq!(d.context().serial.as_deref(), Some("S1XYNEAD600001"));
	}

	#[test]
	fn not_found() {
		assert!(matches!(resolve(&fake(), &Selector::Index(7)), Err(Error::NotFound(_))));
		assert!(matches!(resolve(&fake(), &Selector::Serial("nope".to_string())), Err(Error::NotFound(_))));
	}

	#[test]
	fn ambiguous() {
		match resolve(&fake(), &Selector::Serial("WD-1".to_string())) {
			Err(Error::Ambiguous(_, count)) => assert_eq!(count, 2),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn unsupported() {
		let source = fake();
		let empty = resolve(&source, &Selector::Index(1)).unwrap();
		assert!(matches!(fetch(&source, &empty), Err(Error::Unsupported(_))));
		let short = resolve(&source, &Selector::Index(2)).unwrap();
		assert!(matches!(fetch(&source, &short), Err(Error::Unsupported(_))));

		let full = resolve(&source, &Selector::Index(0)).unwrap();
		assert_eq!(fetch(&source, &full).unwrap().attributes.len(), 362);
	}

	#[test]
	fn io_errors() {
		let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
		assert!(matches!(Error::from(denied), Error::AccessDenied(_)));
		let missing = io::Error::new(io::ErrorKind::NotFound, "nope");
		assert!(matches!(Error::from(missing), Error::IO(_)));
	}
}
