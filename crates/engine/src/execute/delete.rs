// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use tracing::debug;

use crate::filter::Filter;
use crate::row::Row;

/// Remove every row matching the filter, preserving the relative order of
/// survivors. Returns the survivors and the number removed.
pub fn delete(rows: Vec<Row>, filter: &Filter) -> (Vec<Row>, usize) {
	let before = rows.len();
	let survivors: Vec<Row> = rows.into_iter().filter(|row| !filter.matches(row)).collect();
	let deleted = before - survivors.len();

	debug!("deleted {} rows", deleted);

	(survivors, deleted)
}

#[cfg(test)]
mod tests {
	use flatdb_type::Value;

	use super::*;

	fn row(id: i64, age: i64) -> Row {
		[("ID".to_string(), Value::Int(id)), ("age".to_string(), Value::Int(age))]
			.into_iter()
			.collect()
	}

	fn filter(key: &str, value: Value) -> Filter {
		Filter {
			key: key.to_string(),
			value,
		}
	}

	#[test]
	fn test_delete_matching() {
		let rows = vec![row(1, 30), row(2, 31), row(3, 30)];

		let (survivors, deleted) = delete(rows, &filter("age", Value::Int(30)));
		assert_eq!(deleted, 2);
		assert_eq!(survivors.iter().map(|r| r.id().unwrap()).collect::<Vec<_>>(), vec![2]);
	}

	#[test]
	fn test_delete_no_match_leaves_sequence_unchanged() {
		let rows = vec![row(1, 30), row(2, 31)];
		let before = rows.clone();

		let (survivors, deleted) = delete(rows, &filter("age", Value::Int(99)));
		assert_eq!(deleted, 0);
		assert_eq!(survivors, before);
	}

	#[test]
	fn test_delete_preserves_survivor_order() {
		let rows = vec![row(1, 30), row(2, 31), row(3, 30), row(4, 32)];

		let (survivors, _) = delete(rows, &filter("age", Value::Int(30)));
		assert_eq!(survivors.iter().map(|r| r.id().unwrap()).collect::<Vec<_>>(), vec![2, 4]);
	}
}
