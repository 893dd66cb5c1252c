// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use flatdb_catalog::Catalog;
use flatdb_engine::Row;

use crate::Gateway;

/// Map-backed gateway for tests and demos. Same contract as the file
/// gateway, nothing durable.
#[derive(Clone, Default)]
pub struct Memory(Arc<Mutex<MemoryInner>>);

#[derive(Default)]
struct MemoryInner {
	catalog: Catalog,
	tables: HashMap<String, Vec<Row>>,
}

impl Memory {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Gateway for Memory {
	fn load_catalog(&self) -> Catalog {
		self.0.lock().unwrap().catalog.clone()
	}

	fn save_catalog(&self, catalog: &Catalog) -> crate::Result<()> {
		self.0.lock().unwrap().catalog = catalog.clone();
		Ok(())
	}

	fn load_rows(&self, table: &str) -> Vec<Row> {
		self.0.lock().unwrap().tables.get(table).cloned().unwrap_or_default()
	}

	fn save_rows(&self, table: &str, rows: &[Row]) -> crate::Result<()> {
		self.0.lock().unwrap().tables.insert(table.to_string(), rows.to_vec());
		Ok(())
	}

	fn drop_rows(&self, table: &str) -> crate::Result<()> {
		self.0.lock().unwrap().tables.remove(table);
		Ok(())
	}

	fn modified(&self, _table: &str) -> Option<SystemTime> {
		None
	}
}

#[cfg(test)]
mod tests {
	use flatdb_type::Value;

	use super::*;

	#[test]
	fn test_roundtrip() {
		let memory = Memory::new();

		let catalog = Catalog::new().create_table("people", &["age:int".to_string()]).unwrap();
		memory.save_catalog(&catalog).unwrap();
		assert_eq!(memory.load_catalog(), catalog);

		let row: Row = [("ID".to_string(), Value::Int(1))].into_iter().collect();
		memory.save_rows("people", &[row.clone()]).unwrap();
		assert_eq!(memory.load_rows("people"), vec![row]);
	}

	#[test]
	fn test_absent_loads_empty() {
		let memory = Memory::new();
		assert!(memory.load_catalog().is_empty());
		assert!(memory.load_rows("ghost").is_empty());
	}

	#[test]
	fn test_drop_rows() {
		let memory = Memory::new();
		memory.save_rows("people", &[Row::new()]).unwrap();
		memory.drop_rows("people").unwrap();
		assert!(memory.load_rows("people").is_empty());
	}
}
