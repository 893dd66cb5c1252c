// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use serde::{Deserialize, Serialize};

use flatdb_type::Type;

use crate::column::{ColumnDef, ID_COLUMN};

/// An ordered table schema. The first column is always the identity
/// column; the schema is immutable after creation except by dropping the
/// whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
	pub name: String,
	pub columns: Vec<ColumnDef>,
}

impl TableDef {
	/// Whether this definition upholds the schema invariants: a leading
	/// identity column of type int and case-sensitively unique column
	/// names. A decoded definition that fails this check is treated as a
	/// malformed backing record, not as a usable schema.
	pub fn is_well_formed(&self) -> bool {
		let Some(first) = self.columns.first() else {
			return false;
		};
		if first.name != ID_COLUMN || first.ty != Type::Int {
			return false;
		}
		self.columns.iter().enumerate().all(|(i, col)| {
			!col.name.is_empty() && self.columns[..i].iter().all(|prev| prev.name != col.name)
		})
	}

	/// `"<name>:<type>, ..."` summary of all columns, identity included.
	pub fn columns_summary(&self) -> String {
		self.columns
			.iter()
			.map(|col| format!("{}:{}", col.name, col.ty))
			.collect::<Vec<_>>()
			.join(", ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn people() -> TableDef {
		TableDef {
			name: "people".to_string(),
			columns: vec![
				ColumnDef::identity(),
				ColumnDef::new("name", Type::Utf8),
				ColumnDef::new("age", Type::Int),
			],
		}
	}

	#[test]
	fn test_well_formed() {
		assert!(people().is_well_formed());
	}

	#[test]
	fn test_identity_must_lead() {
		let mut def = people();
		def.columns.swap(0, 1);
		assert!(!def.is_well_formed());
	}

	#[test]
	fn test_identity_must_be_int() {
		let mut def = people();
		def.columns[0].ty = Type::Utf8;
		assert!(!def.is_well_formed());
	}

	#[test]
	fn test_empty_columns_is_malformed() {
		let def = TableDef {
			name: "empty".to_string(),
			columns: vec![],
		};
		assert!(!def.is_well_formed());
	}

	#[test]
	fn test_duplicate_column_is_malformed() {
		let mut def = people();
		def.columns.push(ColumnDef::new("age", Type::Int));
		assert!(!def.is_well_formed());
	}

	#[test]
	fn test_columns_summary() {
		assert_eq!(people().columns_summary(), "ID:int, name:string, age:int");
	}
}
