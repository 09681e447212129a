//! Raw counter to human-readable value conversions.

use separator::Separatable;

use super::{RAW_BYTE_ORDER, RECORD_SIZE};

const SPIN_UP_TIME: u8 = 3;
const POWER_ON_HOURS: u8 = 9;
const AIRFLOW_TEMPERATURE: u8 = 190;
const TEMPERATURE: u8 = 194;
const HEAD_FLYING_HOURS: u8 = 240;

/// Record offset of the current temperature (least significant raw byte).
const TEMPERATURE_CURRENT: usize = 6;

fn counter(record: &[u8; RECORD_SIZE], order: &[usize]) -> u64 {
	order.iter().fold(0, |acc, &i| (acc << 8) | u64::from(record[i]))
}

// min/max are only shown when the drive fills both of them
fn temperature(record: &[u8; RECORD_SIZE], min: usize, max: usize) -> String {
	let mut s = format!("{}C", record[TEMPERATURE_CURRENT]);
	let (min, max) = (record[min], record[max]);
	if min > 0 && max > 0 {
		s.push_str(&format!(" (Min={},Max={})", min, max));
	}
	s
}

/**
Renders the raw counter of a 12-byte attribute record.

Callers are expected to check the catalog first: attributes without a conversion are reported as `"0"` instead.

* hour counters (9, 240) only use the lower four bytes of the raw value; upper two are reserved for minutes or vendor junk,
* spin-up time (3) is in milliseconds,
* temperatures (190, 194) are rendered from separate raw bytes,
* anything else is a plain number with thousands separators.
*/
pub fn render(id: u8, record: &[u8; RECORD_SIZE]) -> String {
	match id {
		SPIN_UP_TIME => format!("{} ms", counter(record, &RAW_BYTE_ORDER)),
		POWER_ON_HOURS | HEAD_FLYING_HOURS => {
			let hours = counter(record, &RAW_BYTE_ORDER[2..]);
			format!("{}d {}h", hours / 24, hours % 24)
		},
		AIRFLOW_TEMPERATURE => temperature(record, 8, 9),
		TEMPERATURE => temperature(record, 7, 8),
		_ => counter(record, &RAW_BYTE_ORDER).separated_string(),
	}
}
