/*!
[`TableSource`](../disk/trait.TableSource.html) backed by a JSON snapshot of the hardware-management query.

```json
{
	"disks": [
		{
			"index": 0,
			"serial": "WD-WCC4E1234567",
			"model": "WDC WD10EZEX-08WN4A0",
			"capacity": 1000204886016,
			"attributes": [16, 0, 1, 47, 0, 200, 200, 0, 0, 0, 0, 0, 0, …],
			"thresholds": [16, 0, 1, 51, 0, 0, 0, 0, 0, 0, 0, 0, 0, …]
		}
	]
}
```

Disks without `attributes` are treated as having S.M.A.R.T. unsupported or disabled.
*/
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::disk::{Disk, Error, RawTables, TableSource};

#[derive(Debug, Deserialize)]
struct Entry {
	index: u32,
	serial: String,
	#[serde(default)]
	model: String,
	#[serde(default)]
	capacity: Option<u64>,
	#[serde(default)]
	attributes: Vec<u8>,
	#[serde(default)]
	thresholds: Vec<u8>,
}

impl Entry {
	fn disk(&self) -> Disk {
		Disk {
			index: self.index,
			serial: self.serial.clone(),
			model: self.model.trim().to_string(),
			capacity: self.capacity,
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct Inventory {
	disks: Vec<Entry>,
}

impl Inventory {
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
		let path = path.as_ref();
		info!("loading disk inventory from {}", path.display());
		let data = fs::read_to_string(path)?;
		data.parse()
	}
}

impl FromStr for Inventory {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let inventory: Inventory = serde_json::from_str(s)?;
		debug!("inventory lists {} disks", inventory.disks.len());
		Ok(inventory)
	}
}

impl TableSource for Inventory {
	fn disks(&self) -> Result<Vec<Disk>, Error> {
		Ok(self.disks.iter().map(Entry::disk).collect())
	}

	fn raw_tables(&self, disk: &Disk) -> Result<RawTables, Error> {
		// snapshots are not checked for unique indices, so the serial has to match too
		let entry = self.disks.iter()
			.find(|entry| entry.index == disk.index && entry.serial == disk.serial)
			.ok_or_else(|| Error::NotFound(crate::disk::Selector::Index(disk.index)))?;
		Ok(RawTables {
			attributes: entry.attributes.clone(),
			thresholds: entry.thresholds.clone(),
		})
	}
}
