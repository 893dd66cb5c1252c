// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use unicode_width::UnicodeWidthStr;

use flatdb_catalog::ColumnDef;
use flatdb_engine::Row;

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn cell(value: &str, width: usize) -> String {
	let pad = width - value.width();
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", value, "")
}

/// Render rows as an ASCII grid in schema column order.
pub fn render_table(columns: &[ColumnDef], rows: &[Row]) -> String {
	let cells: Vec<Vec<String>> = rows
		.iter()
		.map(|row| {
			columns.iter()
				.map(|col| {
					row.get(&col.name)
						.map(|v| escape_control_chars(&v.to_string()))
						.unwrap_or_default()
				})
				.collect()
		})
		.collect();

	// Column widths: header vs widest cell, plus padding.
	let mut widths: Vec<usize> = columns.iter().map(|col| escape_control_chars(&col.name).width()).collect();
	for row in &cells {
		for (w, value) in widths.iter_mut().zip(row) {
			*w = (*w).max(value.width());
		}
	}
	for w in &mut widths {
		*w += 2;
	}

	let sep: String = if widths.is_empty() {
		"++".to_string()
	} else {
		widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
	};

	let mut out = String::new();
	out.push_str(&sep);
	out.push('\n');

	let header: Vec<String> = columns
		.iter()
		.zip(&widths)
		.map(|(col, w)| cell(&escape_control_chars(&col.name), *w))
		.collect();
	out.push_str(&format!("|{}|\n", header.join("|")));
	out.push_str(&sep);
	out.push('\n');

	for row in &cells {
		let parts: Vec<String> = row.iter().zip(&widths).map(|(value, w)| cell(value, *w)).collect();
		out.push_str(&format!("|{}|\n", parts.join("|")));
	}

	out.push_str(&sep);
	out
}

pub fn help() -> &'static str {
	"\
Commands:
  create_table <table> <column:type> ...   create a table (types: int, bool, string)
  drop_table <table>                       drop a table and its records
  list_tables                              list all tables
  insert into <table> values(...)          append a record
  select from <table> [where a = b]        show records, optionally filtered
  update <table> set a = b where c = d     update matching records
  delete from <table> where a = b          delete matching records
  describe <table>                         show schema and record count
  help                                     this summary
  exit                                     leave"
}

#[cfg(test)]
mod tests {
	use flatdb_type::{Type, Value};

	use super::*;

	#[test]
	fn test_render_table() {
		let columns = vec![ColumnDef::identity(), ColumnDef::new("name", Type::Utf8)];
		let row: Row = [("ID".to_string(), Value::Int(1)), ("name".to_string(), Value::utf8("Ann"))]
			.into_iter()
			.collect();

		let rendered = render_table(&columns, &[row]);
		assert!(rendered.contains("ID"));
		assert!(rendered.contains("name"));
		assert!(rendered.contains("Ann"));
		assert!(rendered.starts_with('+'));
		assert_eq!(rendered.lines().count(), 5);
	}

	#[test]
	fn test_render_empty_rows_still_shows_header() {
		let columns = vec![ColumnDef::identity()];
		let rendered = render_table(&columns, &[]);
		assert_eq!(rendered.lines().count(), 4);
	}
}
