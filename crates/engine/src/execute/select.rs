// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use crate::filter::Filter;
use crate::row::Row;

/// Return matching rows in insertion order. No filter returns a copy of
/// everything; the input is never mutated.
pub fn select(rows: &[Row], filter: Option<&Filter>) -> Vec<Row> {
	match filter {
		None => rows.to_vec(),
		Some(filter) => rows.iter().filter(|row| filter.matches(row)).cloned().collect(),
	}
}
