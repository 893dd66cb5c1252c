// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use flatdb_catalog::TableDef;

use crate::row::Row;

/// Summary of a table: name, column list and record count. Schema lookup
/// failures (`TableDoesNotExist`, `TableSchema`) surface upstream from
/// the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct TableInfo {
	pub table: String,
	pub columns: String,
	pub count: usize,
}

pub fn describe(table: &TableDef, rows: &[Row]) -> TableInfo {
	TableInfo {
		table: table.name.clone(),
		columns: table.columns_summary(),
		count: rows.len(),
	}
}

#[cfg(test)]
mod tests {
	use flatdb_catalog::Catalog;
	use flatdb_type::Value;

	use super::*;
	use crate::execute::insert;

	#[test]
	fn test_describe() {
		let table = Catalog::new()
			.create_table("people", &["name:string".to_string(), "age:int".to_string()])
			.unwrap()
			.schema("people")
			.unwrap()
			.clone();

		let (rows, _) = insert(&table, Vec::new(), vec![Value::utf8("Ann"), Value::Int(30)]).unwrap();
		let info = describe(&table, &rows);

		assert_eq!(info.table, "people");
		assert_eq!(info.columns, "ID:int, name:string, age:int");
		assert_eq!(info.count, 1);
	}
}
