/*!
Decodes vendor-specific S.M.A.R.T. attribute and threshold tables.

Both tables are flat byte arrays of 12-byte records, but they are not aligned the same way:

* threshold table: 2-byte header, then records of `[id, threshold, …]`;
* attribute table: records start at byte 1, each laid out as `[_, id, flags, flags, current, worst, raw0, …, raw5]`, where `raw0` is the least significant byte of the raw counter.

Trailing bytes that do not make up a whole record are ignored, and so are records with attribute ID 0 (empty slots).
Decoding never fails: short or empty tables just produce fewer records, so an empty result has to be told apart from a healthy drive by the caller.
*/

mod real_value;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;

pub const RECORD_SIZE: usize = 12;

const THRESHOLD_TABLE_START: usize = 2;
const ATTRIBUTE_TABLE_START: usize = 1;

/// Record offsets of the raw counter bytes, most significant first.
/// This is how the vendor table lays them out, not a general byte order rule.
const RAW_BYTE_ORDER: [usize; 6] = [11, 10, 9, 8, 7, 6];

fn records(data: &[u8], start: usize) -> ::std::slice::ChunksExact<'_, u8> {
	data.get(start..).unwrap_or(&[]).chunks_exact(RECORD_SIZE)
}

/// Number of whole records in the attribute table, empty ones included.
pub fn attribute_record_count(data: &[u8]) -> usize {
	records(data, ATTRIBUTE_TABLE_START).len()
}

/// Builds attribute ID → threshold lookup from the threshold table. The first entry wins for repeated IDs.
pub fn thresholds(data: &[u8]) -> HashMap<u8, u8> {
	let mut map = HashMap::new();
	for record in records(data, THRESHOLD_TABLE_START) {
		let (id, threshold) = (record[0], record[1]);
		if id == 0 { continue; }

		match map.entry(id) {
			Entry::Vacant(e) => { e.insert(threshold); },
			Entry::Occupied(e) => debug!(
				"duplicate threshold for attribute {} ({}), keeping {}",
				id, threshold, e.get(),
			),
		}
	}
	map
}

/// Raw counter of an attribute record as a hex string, most significant byte first.
pub fn raw_hex(record: &[u8; RECORD_SIZE]) -> String {
	RAW_BYTE_ORDER.iter()
		.map(|&i| format!("{:02X}", record[i]))
		.collect()
}

/// Attribute status as compared against its threshold.
///
/// Note that this is a plain `current >= threshold` check, not the vendor-defined failure predicate: attributes with threshold 0 (or no threshold at all) are always `OK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status { OK, FAIL }

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			Status::OK => "OK",
			Status::FAIL => "FAIL",
		})
	}
}

/// Which disk the decoded attributes belong to, as known to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiskContext {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub index: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub serial: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedAttribute {
	pub disk: DiskContext,
	pub id: u8,
	/// `0x`-prefixed, e.g. `0xC2`
	pub id_hex: String,
	/// catalog name or [`UNKNOWN_NAME`](../catalog/constant.UNKNOWN_NAME.html)
	pub name: String,
	/// converted raw counter, or `"0"` if there's no conversion for this attribute
	pub real_value: String,
	pub current: u8,
	pub worst: u8,
	/// 0 if the threshold table has no entry for this attribute
	pub threshold: u8,
	pub status: Status,
	/// 6-byte raw counter in hex, see [`raw_hex`](fn.raw_hex.html)
	pub raw: String,
}

fn decode_record(disk: &DiskContext, record: &[u8; RECORD_SIZE], thresholds: &HashMap<u8, u8>, catalog: &Catalog) -> DecodedAttribute {
	let id = record[1];
	let (current, worst) = (record[4], record[5]);
	let threshold = thresholds.get(&id).cloned().unwrap_or(0);

	let real_value = if catalog.has_real_value_conversion(id) {
		real_value::render(id, record)
	} else {
		"0".to_string()
	};

	DecodedAttribute {
		disk: disk.clone(),
		id: id,
		id_hex: format!("0x{:02X}", id),
		name: catalog.name_or_unknown(id).to_string(),
		real_value: real_value,
		current: current,
		worst: worst,
		threshold: threshold,
		status: if current >= threshold { Status::OK } else { Status::FAIL },
		raw: raw_hex(record),
	}
}

/// Decodes attribute records in table order, tagging each one with given disk context.
pub fn decode_disk(disk: &DiskContext, attributes: &[u8], thresholds: &[u8], catalog: &Catalog) -> Vec<DecodedAttribute> {
	let thresholds = self::thresholds(thresholds);

	let attrs: Vec<_> = records(attributes, ATTRIBUTE_TABLE_START)
		// chunks are always RECORD_SIZE long
		.filter_map(|record| <&[u8; RECORD_SIZE]>::try_from(record).ok())
		.filter(|record| {
			if record[1] == 0 {
				debug!("skipping empty attribute slot");
				false
			} else { true }
		})
		.map(|record| decode_record(disk, record, &thresholds, catalog))
		.collect();

	debug!("decoded {} attributes, {} thresholds", attrs.len(), thresholds.len());
	attrs
}

/// Same as [`decode_disk`](fn.decode_disk.html), without any disk context.
pub fn decode(attributes: &[u8], thresholds: &[u8], catalog: &Catalog) -> Vec<DecodedAttribute> {
	decode_disk(&DiskContext::default(), attributes, thresholds, catalog)
}

/**
Sums up attribute statuses.

Returns `None` if there's nothing to judge by: no attributes means no data, not a healthy drive.
*/
pub fn overall_status(attrs: &[DecodedAttribute]) -> Option<Status> {
	if attrs.is_empty() {
		return None;
	}
	if attrs.iter().any(|attr| attr.status == Status::FAIL) {
		Some(Status::FAIL)
	} else {
		Some(Status::OK)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn attr_record(id: u8, current: u8, worst: u8, raw: [u8; 6]) -> [u8; 12] {
		let mut r = [0u8; 12];
		r[1] = id;
		r[2] = 0x0f; // flags
		r[4] = current;
		r[5] = worst;
		r[6..].copy_from_slice(&raw);
		r
	}

	fn attr_table(records: &[[u8; 12]]) -> Vec<u8> {
		let mut table = vec![0x10];
		for r in records {
			table.extend_from_slice(r);
		}
		table
	}

	fn threshold_table(entries: &[(u8, u8)]) -> Vec<u8> {
		let mut table = vec![0x10, 0x00];
		for &(id, threshold) in entries {
			let mut r = [0u8; 12];
			r[0] = id;
			r[1] = threshold;
			table.extend_from_slice(&r);
		}
		table
	}

	#[test]
	fn record_counts() {
		assert_eq!(attribute_record_count(&[]), 0);
		assert_eq!(attribute_record_count(&[0; 12]), 0);
		assert_eq!(attribute_record_count(&[0; 13]), 1);
		assert_eq!(attribute_record_count(&[0; 24]), 1);
		assert_eq!(attribute_record_count(&[0; 512]), 42);
	}

	#[test]
	fn thresholds_skip_header_and_empty() {
		let mut table = threshold_table(&[(1, 51), (0, 99), (5, 10)]);
		table.extend_from_slice(&[7, 7, 7]); // partial record
		let map = thresholds(&table);
		assert_eq!(map.len(), 2);
		assert_eq!(map.get(&1), Some(&51));
		assert_eq!(map.get(&5), Some(&10));
		assert_eq!(map.get(&7), None);
	}

	#[test]
	fn thresholds_first_wins() {
		let map = thresholds(&threshold_table(&[(5, 10), (5, 36)]));
		assert_eq!(map.get(&5), Some(&10));
	}

	#[test]
	fn thresholds_short() {
		assert!(thresholds(&[]).is_empty());
		assert!(thresholds(&[0x10]).is_empty());
		assert!(thresholds(&[0x10, 0, 5, 10]).is_empty());
	}

	#[test]
	fn raw_hex_order() {
		let r = attr_record(1, 0, 0, [0x01, 0x02, 0x03, 0x04, 0x05, 0xab]);
		assert_eq!(raw_hex(&r), "AB0504030201");
	}

	#[test]
	fn raw_hex_is_stable() {
		let table = attr_table(&[
			attr_record(9, 100, 100, [0x64, 0, 0, 0, 0x3b, 0]),
			attr_record(9, 100, 100, [0x64, 0, 0, 0, 0x3b, 0]),
		]);
		let attrs = decode(&table, &[], Catalog::standard());
		assert_eq!(attrs[0].raw, "003B00000064");
		assert_eq!(attrs[0].raw, attrs[1].raw);
		assert_eq!(raw_hex(&[0; RECORD_SIZE]), "000000000000");
	}

	#[test]
	fn status_against_threshold() {
		let thr = threshold_table(&[(5, 10)]);
		let failing = decode(&attr_table(&[attr_record(5, 8, 8, [0; 6])]), &thr, Catalog::standard());
		assert_eq!(failing[0].status, Status::FAIL);
		assert_eq!(failing[0].threshold, 10);
		let fine = decode(&attr_table(&[attr_record(5, 12, 8, [0; 6])]), &thr, Catalog::standard());
		assert_eq!(fine[0].status, Status::OK);
		let equal = decode(&attr_table(&[attr_record(5, 10, 8, [0; 6])]), &thr, Catalog::standard());
		assert_eq!(equal[0].status, Status::OK);
	}

	#[test]
	fn missing_threshold_is_zero() {
		let attrs = decode(&attr_table(&[attr_record(1, 0, 0, [0; 6])]), &[], Catalog::standard());
		assert_eq!(attrs[0].threshold, 0);
		assert_eq!(attrs[0].status, Status::OK);
	}

	#[test]
	fn fields() {
		let table = attr_table(&[attr_record(194, 115, 98, [35, 20, 40, 0, 0, 0])]);
		let attrs = decode(&table, &threshold_table(&[(194, 0)]), Catalog::standard());
		assert_eq!(attrs, vec![DecodedAttribute {
			disk: DiskContext::default(),
			id: 194,
			id_hex: "0xC2".to_string(),
			name: "Temperature".to_string(),
			real_value: "35C (Min=20,Max=40)".to_string(),
			current: 115,
			worst: 98,
			threshold: 0,
			status: Status::OK,
			raw: "000000281423".to_string(),
		}]);
	}

	#[test]
	fn no_conversion_is_literal_zero() {
		let table = attr_table(&[
			attr_record(1, 100, 100, [0x10, 0x27, 0, 0, 0, 0]),
			attr_record(215, 100, 100, [0xff; 6]),
		]);
		let attrs = decode(&table, &[], Catalog::standard());
		assert_eq!(attrs[0].real_value, "0");
		assert_eq!(attrs[1].real_value, "0");
		assert_eq!(attrs[1].name, crate::catalog::UNKNOWN_NAME);
	}

	#[test]
	fn empty_slots_skipped_in_order() {
		let table = attr_table(&[
			attr_record(9, 99, 99, [100, 0, 0, 0, 0, 0]),
			[0; 12],
			attr_record(1, 100, 100, [0; 6]),
			attr_record(5, 100, 100, [0; 6]),
		]);
		let ids: Vec<u8> = decode(&table, &[], Catalog::standard()).iter().map(|a| a.id).collect();
		assert_eq!(ids, vec![9, 1, 5]);
	}

	#[test]
	fn context_is_copied() {
		let disk = DiskContext { index: Some(2), serial: Some("WD-WCC4E1234567".to_string()) };
		let table = attr_table(&[attr_record(1, 100, 100, [0; 6]), attr_record(5, 100, 100, [0; 6])]);
		for attr in decode_disk(&disk, &table, &[], Catalog::standard()) {
			assert_eq!(attr.disk, disk);
		}
	}

	#[test]
	fn short_tables() {
		assert!(decode(&[], &[], Catalog::standard()).is_empty());
		assert!(decode(&[0x10; 12], &[], Catalog::standard()).is_empty());
	}

	#[test]
	fn overall() {
		let table = attr_table(&[attr_record(1, 100, 100, [0; 6]), attr_record(5, 8, 8, [0; 6])]);
		let ok = decode(&table, &[], Catalog::standard());
		assert_eq!(overall_status(&ok), Some(Status::OK));
		let failing = decode(&table, &threshold_table(&[(5, 10)]), Catalog::standard());
		assert_eq!(overall_status(&failing), Some(Status::FAIL));
		assert_eq!(overall_status(&[]), None);
	}

	#[test]
	fn status_display() {
		assert_eq!(Status::OK.to_string(), "OK");
		assert_eq!(Status::FAIL.to_string(), "FAIL");
		assert_eq!(serde_json::to_string(&Status::FAIL).unwrap(), "\"FAIL\"");
	}
}
