// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use tracing::debug;

use flatdb_catalog::{ID_COLUMN, TableDef};
use flatdb_type::{Error, Value};

use crate::row::Row;

/// Append one record, assigning the next identity value.
///
/// The value count must match the schema minus the identity column. The
/// identity is `max(existing) + 1`, or 1 for an empty table; ids of
/// deleted rows are never reused. Every supplied value is validated in
/// schema order before the row is appended; a failure aborts the whole
/// insert with no partial row.
pub fn insert(table: &TableDef, mut rows: Vec<Row>, values: Vec<Value>) -> crate::Result<(Vec<Row>, i64)> {
	let expected = table.columns.len() - 1;
	if values.len() != expected {
		return Err(Error::invalid(format!("values_count={}", values.len())));
	}

	let new_id = rows.iter().filter_map(Row::id).max().unwrap_or(0) + 1;

	let mut row = Row::new();
	row.set(ID_COLUMN, Value::Int(new_id));
	for (column, value) in table.columns[1..].iter().zip(values) {
		column.ty.validate(&value)?;
		row.set(column.name.clone(), value);
	}

	debug!("insert into '{}' assigned id {}", table.name, new_id);

	rows.push(row);
	Ok((rows, new_id))
}
