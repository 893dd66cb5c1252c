// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use flatdb_type::Value;

use crate::error::ParseError;
use crate::list::{Assignments, parse_assignments, parse_values};

/// A `where` expression together with the raw text it was parsed from.
///
/// The raw text is carried for error reporting and as part of the CLI's
/// select cache key; the pairs are handed to the engine, which enforces
/// the single-predicate rule.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereExpr {
	pub raw: String,
	pub pairs: Assignments,
}

impl WhereExpr {
	pub fn parse(raw: &str) -> crate::Result<Self> {
		let pairs = parse_assignments(raw)?;
		Ok(Self {
			raw: raw.trim().to_string(),
			pairs,
		})
	}
}

/// A parsed command, one per fixed command shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
	CreateTable {
		table: String,
		columns: Vec<String>,
	},
	DropTable {
		table: String,
	},
	ListTables,
	Insert {
		table: String,
		values: Vec<Value>,
	},
	Select {
		table: String,
		filter: Option<WhereExpr>,
	},
	Update {
		table: String,
		set: Assignments,
		filter: WhereExpr,
	},
	Delete {
		table: String,
		filter: WhereExpr,
	},
	Describe {
		table: String,
	},
	Help,
	Exit,
}

/// Parse one command line. Keywords are case-insensitive.
pub fn parse_command(line: &str) -> crate::Result<Command> {
	let input = line.trim();
	if input.is_empty() {
		return Err(ParseError::EmptyExpression {
			raw: input.to_string(),
		});
	}

	let (head, rest) = next_word(input);

	match head.to_ascii_lowercase().as_str() {
		"help" if rest.is_empty() => Ok(Command::Help),
		"exit" if rest.is_empty() => Ok(Command::Exit),
		"list_tables" if rest.is_empty() => Ok(Command::ListTables),
		"create_table" => parse_create_table(input, rest),
		"drop_table" => parse_single_table(input, rest).map(|table| Command::DropTable {
			table,
		}),
		"describe" => parse_single_table(input, rest).map(|table| Command::Describe {
			table,
		}),
		"insert" => parse_insert(input, rest),
		"select" => parse_select(input, rest),
		"update" => parse_update(input, rest),
		"delete" => parse_delete(input, rest),
		_ => Err(ParseError::UnknownCommand {
			input: input.to_string(),
		}),
	}
}

fn parse_create_table(input: &str, rest: &str) -> crate::Result<Command> {
	let mut words = rest.split_whitespace();

	let Some(table) = words.next() else {
		return Err(malformed(input));
	};
	let columns: Vec<String> = words.map(|w| w.to_string()).collect();
	if columns.is_empty() {
		return Err(malformed(input));
	}

	Ok(Command::CreateTable {
		table: table.to_string(),
		columns,
	})
}

fn parse_single_table(input: &str, rest: &str) -> crate::Result<String> {
	let mut words = rest.split_whitespace();
	match (words.next(), words.next()) {
		(Some(table), None) => Ok(table.to_string()),
		_ => Err(malformed(input)),
	}
}

/// `insert into <table> values(...)`
fn parse_insert(input: &str, rest: &str) -> crate::Result<Command> {
	let (into, rest) = next_word(rest);
	if !into.eq_ignore_ascii_case("into") {
		return Err(malformed(input));
	}

	let (table, rest) = next_word(rest);
	if table.is_empty() {
		return Err(malformed(input));
	}

	let rest = rest.trim();
	let matches_values = rest.get(.."values".len()).is_some_and(|head| head.eq_ignore_ascii_case("values"));
	if !matches_values {
		return Err(malformed(input));
	}

	let list = rest["values".len()..].trim_start();
	if !list.starts_with('(') || !list.ends_with(')') {
		return Err(malformed(input));
	}

	Ok(Command::Insert {
		table: table.to_string(),
		values: parse_values(&list[1..list.len() - 1]),
	})
}

/// `select from <table> [where <expr>]`
fn parse_select(input: &str, rest: &str) -> crate::Result<Command> {
	let (from, rest) = next_word(rest);
	if !from.eq_ignore_ascii_case("from") {
		return Err(malformed(input));
	}

	let (table, rest) = next_word(rest);
	if table.is_empty() {
		return Err(malformed(input));
	}

	let rest = rest.trim();
	let filter = if rest.is_empty() {
		None
	} else {
		let (kw, expr) = next_word(rest);
		if !kw.eq_ignore_ascii_case("where") {
			return Err(malformed(input));
		}
		Some(WhereExpr::parse(expr)?)
	};

	Ok(Command::Select {
		table: table.to_string(),
		filter,
	})
}

/// `update <table> set <assignments> where <expr>`
fn parse_update(input: &str, rest: &str) -> crate::Result<Command> {
	let (table, rest) = next_word(rest);
	if table.is_empty() {
		return Err(malformed(input));
	}

	let (set_kw, rest) = next_word(rest);
	if !set_kw.eq_ignore_ascii_case("set") {
		return Err(malformed(input));
	}

	// First unquoted `where` keyword splits set from filter.
	let Some(pos) = find_keyword(rest, "where") else {
		return Err(malformed(input));
	};

	let set = parse_assignments(&rest[..pos])?;
	let filter = WhereExpr::parse(&rest[pos + "where".len()..])?;

	Ok(Command::Update {
		table: table.to_string(),
		set,
		filter,
	})
}

/// `delete from <table> where <expr>`
fn parse_delete(input: &str, rest: &str) -> crate::Result<Command> {
	let (from, rest) = next_word(rest);
	if !from.eq_ignore_ascii_case("from") {
		return Err(malformed(input));
	}

	let (table, rest) = next_word(rest);
	if table.is_empty() {
		return Err(malformed(input));
	}

	let (kw, expr) = next_word(rest.trim());
	if !kw.eq_ignore_ascii_case("where") {
		return Err(malformed(input));
	}

	Ok(Command::Delete {
		table: table.to_string(),
		filter: WhereExpr::parse(expr)?,
	})
}

fn malformed(input: &str) -> ParseError {
	ParseError::MalformedCommand {
		input: input.to_string(),
	}
}

/// Split off the first whitespace-delimited word.
fn next_word(text: &str) -> (&str, &str) {
	let text = text.trim_start();
	match text.find(char::is_whitespace) {
		Some(pos) => (&text[..pos], &text[pos..]),
		None => (text, ""),
	}
}

/// Byte offset of `keyword` as a standalone word outside double quotes.
fn find_keyword(text: &str, keyword: &str) -> Option<usize> {
	let mut in_quotes = false;

	let mut chars = text.char_indices().peekable();
	while let Some((i, ch)) = chars.next() {
		if in_quotes && ch == '\\' {
			chars.next();
			continue;
		}
		if ch == '"' {
			in_quotes = !in_quotes;
			continue;
		}
		if in_quotes {
			continue;
		}

		let Some(candidate) = text.get(i..i + keyword.len()) else {
			continue;
		};
		if !candidate.eq_ignore_ascii_case(keyword) {
			continue;
		}

		let before_ok = i == 0 || text[..i].ends_with(char::is_whitespace);
		let after = &text[i + keyword.len()..];
		let after_ok = after.is_empty() || after.starts_with(char::is_whitespace);
		if before_ok && after_ok {
			return Some(i);
		}
	}

	None
}
