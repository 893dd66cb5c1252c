// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use flatdb_catalog::ID_COLUMN;
use flatdb_type::Value;

/// A stored record: column name -> scalar, persisted as a flat JSON map.
///
/// Rows are untyped containers; they are validated against the schema at
/// write time only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, Value>);

impl Row {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, column: &str) -> Option<&Value> {
		self.0.get(column)
	}

	pub fn set(&mut self, column: impl Into<String>, value: Value) {
		self.0.insert(column.into(), value);
	}

	/// The identity value, when present and an int.
	pub fn id(&self) -> Option<i64> {
		match self.0.get(ID_COLUMN) {
			Some(Value::Int(id)) => Some(*id),
			_ => None,
		}
	}
}

impl FromIterator<(String, Value)> for Row {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_id() {
		let mut row = Row::new();
		assert_eq!(row.id(), None);

		row.set(ID_COLUMN, Value::Int(3));
		assert_eq!(row.id(), Some(3));

		row.set(ID_COLUMN, Value::utf8("3"));
		assert_eq!(row.id(), None);
	}
}
