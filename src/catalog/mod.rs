/*!
Attribute ID to name mapping, and the set of attributes whose raw counter gets converted into a human-readable value.

The table follows the de facto convention most tools and vendors agree on; it is incomplete on purpose, vendor-specific IDs are expected to miss.

## Example

```
use smarttable::catalog::{self, Catalog, vendor_attribute};

let catalog = Catalog::standard();
assert_eq!(catalog.name_for(194), Some("Temperature"));
assert_eq!(catalog.name_or_unknown(215), catalog::UNKNOWN_NAME);

let user = vec![vendor_attribute::parse("9,Power_On_Minutes").unwrap()];
let catalog = catalog.with_overrides(&user);
assert_eq!(catalog.name_for(9), Some("Power_On_Minutes"));
```
*/

pub mod vendor_attribute;

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Name reported for attributes that are not in the catalog.
pub const UNKNOWN_NAME: &str = "VendorSpecific/Unknown";

static NAMES: [(u8, &str); 85] = [
	(1, "Raw Read Error Rate"),
	(2, "Throughput Performance"),
	(3, "Spin-Up Time"),
	(4, "Start/Stop Count"),
	(5, "Reallocated Sectors Count"),
	(6, "Read Channel Margin"),
	(7, "Seek Error Rate"),
	(8, "Seek Time Performance"),
	(9, "Power-On Hours"),
	(10, "Spin Retry Count"),
	(11, "Recalibration Retries"),
	(12, "Power Cycle Count"),
	(13, "Soft Read Error Rate"),
	(22, "Current Helium Level"),
	(170, "Available Reserved Space"),
	(171, "SSD Program Fail Count"),
	(172, "SSD Erase Fail Count"),
	(173, "SSD Wear Leveling Count"),
	(174, "Unexpected Power Loss Count"),
	(175, "Power Loss Protection Failure"),
	(176, "Erase Fail Count"),
	(177, "Wear Range Delta"),
	(178, "Used Reserved Block Count"),
	(179, "Used Reserved Block Count Total"),
	(180, "Unused Reserved Block Count Total"),
	(181, "Program Fail Count Total"),
	(182, "Erase Fail Count"),
	(183, "SATA Downshift Error Count"),
	(184, "End-to-End Error"),
	(185, "Head Stability"),
	(186, "Induced Op-Vibration Detection"),
	(187, "Reported Uncorrectable Errors"),
	(188, "Command Timeout"),
	(189, "High Fly Writes"),
	(190, "Airflow Temperature"),
	(191, "G-Sense Error Rate"),
	(192, "Power-off Retract Count"),
	(193, "Load Cycle Count"),
	(194, "Temperature"),
	(195, "Hardware ECC Recovered"),
	(196, "Reallocation Event Count"),
	(197, "Current Pending Sector Count"),
	(198, "Uncorrectable Sector Count"),
	(199, "UltraDMA CRC Error Count"),
	(200, "Multi-Zone Error Rate"),
	(201, "Soft Read Error Rate"),
	(202, "Data Address Mark Errors"),
	(203, "Run Out Cancel"),
	(204, "Soft ECC Correction"),
	(205, "Thermal Asperity Rate"),
	(206, "Flying Height"),
	(207, "Spin High Current"),
	(208, "Spin Buzz"),
	(209, "Offline Seek Performance"),
	(210, "Vibration During Write"),
	(211, "Vibration During Write"),
	(212, "Shock During Write"),
	(220, "Disk Shift"),
	(221, "G-Sense Error Rate"),
	(222, "Loaded Hours"),
	(223, "Load/Unload Retry Count"),
	(224, "Load Friction"),
	(225, "Load/Unload Cycle Count"),
	(226, "Load In-time"),
	(227, "Torque Amplification Count"),
	(228, "Power-Off Retract Cycle"),
	(230, "GMR Head Amplitude"),
	(231, "Life Left"),
	(232, "Endurance Remaining"),
	(233, "Media Wearout Indicator"),
	(234, "Average Erase Count"),
	(235, "Good Block Count"),
	(240, "Head Flying Hours"),
	(241, "Total LBAs Written"),
	(242, "Total LBAs Read"),
	(243, "Total LBAs Written Expanded"),
	(244, "Total LBAs Read Expanded"),
	(245, "Remaining Rated Write Endurance"),
	(246, "Cumulative Host Sectors Written"),
	(247, "Host Program Page Count"),
	(248, "Background Program Page Count"),
	(249, "NAND Writes (1GiB)"),
	(250, "Read Error Retry Rate"),
	(251, "Minimum Spares Remaining"),
	(254, "Free Fall Protection"),
];

/// Attributes with a defined raw counter conversion, see [`decoder`](../decoder/index.html) for the rules.
static REAL_VALUE: [u8; 21] = [
	3, 4, 5, 9, 10, 12,
	183, 184, 187, 188, 190, 192, 193, 194, 196, 197, 198, 199,
	240, 241, 242,
];

lazy_static! {
	static ref STANDARD: Catalog = Catalog {
		names: NAMES.iter().map(|&(id, name)| (id, Cow::Borrowed(name))).collect(),
		real_value: REAL_VALUE.iter().cloned().collect(),
	};
}

/// Read-only attribute reference table.
#[derive(Debug, Clone)]
pub struct Catalog {
	names: HashMap<u8, Cow<'static, str>>,
	real_value: HashSet<u8>,
}

impl Catalog {
	/// Built-in table, initialized on first use.
	pub fn standard() -> &'static Catalog {
		&STANDARD
	}

	/// Returns a copy of this catalog with attribute names replaced by the user-supplied ones (last one wins for repeated IDs).
	pub fn with_overrides(&self, attrs: &[vendor_attribute::Attribute]) -> Catalog {
		let mut catalog = self.clone();
		for attr in attrs {
			debug!("attribute {} renamed to {:?}", attr.id, attr.name);
			catalog.names.insert(attr.id, Cow::Owned(attr.name.clone()));
		}
		catalog
	}

	pub fn name_for(&self, id: u8) -> Option<&str> {
		self.names.get(&id).map(|name| name.as_ref())
	}

	/// Same as [`name_for`](#method.name_for), with [`UNKNOWN_NAME`](constant.UNKNOWN_NAME.html) for missing IDs.
	pub fn name_or_unknown(&self, id: u8) -> &str {
		self.name_for(id).unwrap_or(UNKNOWN_NAME)
	}

	pub fn has_real_value_conversion(&self, id: u8) -> bool {
		self.real_value.contains(&id)
	}
}
