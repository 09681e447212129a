/*!
Decoder for the vendor-specific S.M.A.R.T. data that drives hand out as two flat byte tables:
the attribute table and the threshold table.

## Example

```no_run
use smarttable::{decoder, disk, Catalog, Inventory};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let inventory = Inventory::load("inventory.json")?;

let dev = disk::resolve(&inventory, &disk::Selector::Index(0))?;
let tables = disk::fetch(&inventory, &dev)?;

let attrs = decoder::decode_disk(
	&dev.context(),
	&tables.attributes,
	&tables.thresholds,
	Catalog::standard(),
);

for attr in attrs {
	println!("{} {} {} {}", attr.id_hex, attr.name, attr.real_value, attr.status);
}
# Ok(())
# }
```
*/

#![warn(
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications,
)]

#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod catalog;
pub mod decoder;
pub mod disk;
pub mod inventory;

pub use crate::catalog::Catalog;
pub use crate::decoder::{DecodedAttribute, DiskContext, Status};
pub use crate::inventory::Inventory;
