// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use flatdb_cmd::{Assignments, WhereExpr};
use flatdb_type::{Error, Value};

use crate::row::Row;

/// A single equality predicate: the only filter shape the command
/// language supports. No AND/OR and no ranges; a deliberate boundary of
/// the language, not an omission.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
	pub key: String,
	pub value: Value,
}

impl Filter {
	/// Build a filter from a parsed where expression.
	///
	/// Zero or multiple predicates are rejected as `InvalidValue`
	/// carrying the raw expression; the parser deliberately returns
	/// whatever mapping it saw and the single-key rule lives here.
	pub fn from_assignments(raw: &str, pairs: &Assignments) -> crate::Result<Self> {
		let mut iter = pairs.iter();
		match (iter.next(), iter.next()) {
			(Some((key, value)), None) => Ok(Self {
				key: key.clone(),
				value: value.clone(),
			}),
			_ => Err(Error::invalid(raw)),
		}
	}

	pub fn from_where(expr: &WhereExpr) -> crate::Result<Self> {
		Self::from_assignments(&expr.raw, &expr.pairs)
	}

	/// Exact match on type and value; a row lacking the key never
	/// matches.
	pub fn matches(&self, row: &Row) -> bool {
		row.get(&self.key) == Some(&self.value)
	}
}

#[cfg(test)]
mod tests {
	use flatdb_cmd::parse_assignments;

	use super::*;

	#[test]
	fn test_from_assignments() {
		let pairs = parse_assignments("age = 30").unwrap();
		let filter = Filter::from_assignments("age = 30", &pairs).unwrap();
		assert_eq!(filter.key, "age");
		assert_eq!(filter.value, Value::Int(30));
	}

	#[test]
	fn test_rejects_multiple_keys() {
		let pairs = parse_assignments("age = 30, name = \"Ann\"").unwrap();
		let err = Filter::from_assignments("age = 30, name = \"Ann\"", &pairs).unwrap_err();
		assert_eq!(err, Error::InvalidValue("age = 30, name = \"Ann\"".to_string()));
	}

	#[test]
	fn test_rejects_empty() {
		let err = Filter::from_assignments("", &Assignments::default()).unwrap_err();
		assert_eq!(err, Error::InvalidValue("".to_string()));
	}

	#[test]
	fn test_matches_type_and_value() {
		let row: Row = [("age".to_string(), Value::Int(30))].into_iter().collect();

		let int_filter = Filter {
			key: "age".to_string(),
			value: Value::Int(30),
		};
		assert!(int_filter.matches(&row));

		// Same digits, different type: no match.
		let text_filter = Filter {
			key: "age".to_string(),
			value: Value::utf8("30"),
		};
		assert!(!text_filter.matches(&row));
	}

	#[test]
	fn test_missing_key_never_matches() {
		let row = Row::new();
		let filter = Filter {
			key: "age".to_string(),
			value: Value::Int(30),
		};
		assert!(!filter.matches(&row));
	}
}
