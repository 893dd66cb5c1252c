// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use tracing::debug;

use flatdb_catalog::{ID_COLUMN, TableDef};
use flatdb_cmd::Assignments;
use flatdb_type::Error;

use crate::filter::Filter;
use crate::row::Row;

/// Apply a set clause to every row matching the filter.
///
/// The whole set clause is validated against the schema before any row is
/// touched: an identity key, an undeclared column or a type mismatch
/// fails the command and leaves every row unmodified. The returned count
/// is rows updated, not fields.
pub fn update(
	table: &TableDef,
	mut rows: Vec<Row>,
	set: &Assignments,
	filter: &Filter,
) -> crate::Result<(Vec<Row>, usize)> {
	if set.contains_key(ID_COLUMN) {
		return Err(Error::invalid(ID_COLUMN));
	}

	for (key, value) in set.iter() {
		let Some(column) = table.columns.iter().find(|column| &column.name == key) else {
			return Err(Error::invalid(key));
		};
		column.ty.validate(value)?;
	}

	let mut updated = 0;
	for row in rows.iter_mut().filter(|row| filter.matches(row)) {
		for (key, value) in set.iter() {
			row.set(key.clone(), value.clone());
		}
		updated += 1;
	}

	debug!("updated {} rows in '{}'", updated, table.name);

	Ok((rows, updated))
}
