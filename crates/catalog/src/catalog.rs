// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::debug;

use flatdb_type::Error;

use crate::column::ColumnDef;
use crate::table::TableDef;

/// The metadata of the store: table name -> schema.
///
/// A value type. Operations return a new catalog and leave the receiver
/// untouched; the caller decides whether the new value gets persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<String, TableDef>);

impl Deref for Catalog {
	type Target = BTreeMap<String, TableDef>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a table and return the catalog containing it.
	///
	/// The schema is `[ID:int]` followed by the parsed column specs in
	/// input order. Fails with `InvalidValue` for an empty name, an empty
	/// spec list or a bad spec, and `TableAlreadyExists` for a name
	/// collision.
	pub fn create_table(&self, name: &str, column_specs: &[String]) -> crate::Result<Catalog> {
		let name = name.trim();

		if name.is_empty() {
			return Err(Error::invalid(name));
		}

		if self.0.contains_key(name) {
			return Err(Error::TableAlreadyExists(name.to_string()));
		}

		if column_specs.is_empty() {
			return Err(Error::invalid("<columns>"));
		}

		let mut columns = vec![ColumnDef::identity()];
		for spec in column_specs {
			let column = ColumnDef::parse_spec(spec)?;
			if columns.iter().any(|prev| prev.name == column.name) {
				return Err(Error::invalid(column.name));
			}
			columns.push(column);
		}

		let def = TableDef {
			name: name.to_string(),
			columns,
		};

		debug!("created table '{}' with {} columns", name, def.columns.len());

		let mut next = self.0.clone();
		next.insert(name.to_string(), def);
		Ok(Catalog(next))
	}

	/// Drop a table and return the catalog without it.
	pub fn drop_table(&self, name: &str) -> crate::Result<Catalog> {
		let name = name.trim();

		if !self.0.contains_key(name) {
			return Err(Error::TableDoesNotExist(name.to_string()));
		}

		debug!("dropped table '{}'", name);

		let mut next = self.0.clone();
		next.remove(name);
		Ok(Catalog(next))
	}

	/// All table names, lexicographically sorted.
	pub fn list_tables(&self) -> Vec<String> {
		self.0.keys().cloned().collect()
	}

	/// Look up a table's schema.
	///
	/// Fails with `TableDoesNotExist` when the name is absent and with
	/// `TableSchema` when the backing record decoded but does not hold a
	/// well-formed column list.
	pub fn schema(&self, name: &str) -> crate::Result<&TableDef> {
		let name = name.trim();

		let Some(def) = self.0.get(name) else {
			return Err(Error::TableDoesNotExist(name.to_string()));
		};

		if !def.is_well_formed() {
			return Err(Error::TableSchema(name.to_string()));
		}

		Ok(def)
	}
}
