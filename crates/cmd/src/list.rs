// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use flatdb_type::Value;

use crate::error::ParseError;
use crate::scalar::parse_scalar;

/// An ordered key -> value mapping parsed from a `set` / `where`
/// expression. Later duplicate keys overwrite earlier values in place
/// (left-to-right, last wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignments(Vec<(String, Value)>);

impl Assignments {
	pub fn insert(&mut self, key: String, value: Value) {
		match self.0.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.0.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
		self.0.iter()
	}
}

impl FromIterator<(String, Value)> for Assignments {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		let mut assignments = Assignments::default();
		for (key, value) in iter {
			assignments.insert(key, value);
		}
		assignments
	}
}

/// Split on commas, ignoring commas inside double quotes.
///
/// Inside quotes a backslash escapes the following character and a doubled
/// `""` stands for a literal quote; both are resolved here. The quote
/// characters themselves are kept so [`parse_scalar`] can tell quoted
/// strings apart from bare tokens.
fn split_commas(text: &str) -> Vec<String> {
	let mut parts = Vec::new();
	let mut buf = String::new();
	let mut in_quotes = false;

	let mut chars = text.chars().peekable();
	while let Some(ch) = chars.next() {
		if in_quotes && ch == '\\' {
			if let Some(escaped) = chars.next() {
				buf.push(escaped);
				continue;
			}
		}

		if ch == '"' {
			if in_quotes && chars.peek() == Some(&'"') {
				chars.next();
				buf.push('"');
				continue;
			}
			in_quotes = !in_quotes;
			buf.push(ch);
			continue;
		}

		if ch == ',' && !in_quotes {
			parts.push(std::mem::take(&mut buf));
			continue;
		}

		buf.push(ch);
	}

	parts.push(buf);
	parts
}

/// Split a `key=value` part on exactly one unquoted `=`.
fn split_one_equals(part: &str) -> crate::Result<(&str, &str)> {
	let mut in_quotes = false;
	let mut eq_pos: Option<usize> = None;

	let mut chars = part.char_indices().peekable();
	while let Some((i, ch)) = chars.next() {
		if in_quotes && ch == '\\' {
			chars.next();
			continue;
		}

		if ch == '"' {
			if in_quotes && chars.peek().map(|(_, c)| *c) == Some('"') {
				chars.next();
				continue;
			}
			in_quotes = !in_quotes;
			continue;
		}

		if ch == '=' && !in_quotes {
			if eq_pos.is_some() {
				return Err(ParseError::ExtraEquals {
					part: part.to_string(),
				});
			}
			eq_pos = Some(i);
		}
	}

	let Some(eq_pos) = eq_pos else {
		return Err(ParseError::MissingEquals {
			part: part.to_string(),
		});
	};

	let key = part[..eq_pos].trim();
	let value = part[eq_pos + 1..].trim();

	if key.is_empty() {
		return Err(ParseError::EmptyKey {
			part: part.to_string(),
		});
	}

	Ok((key, value))
}

/// Parse the contents of a `values(...)` list.
///
/// Tokens empty after trimming are dropped silently, so `values()` yields
/// an empty list and a lone trailing comma is not an error.
pub fn parse_values(inner: &str) -> Vec<Value> {
	if inner.trim().is_empty() {
		return Vec::new();
	}

	split_commas(inner)
		.iter()
		.map(|part| part.trim())
		.filter(|token| !token.is_empty())
		.map(parse_scalar)
		.collect()
}

/// Parse a `set` / `where` expression like `age = 29, active = true`.
pub fn parse_assignments(text: &str) -> crate::Result<Assignments> {
	if text.trim().is_empty() {
		return Err(ParseError::EmptyExpression {
			raw: text.to_string(),
		});
	}

	let mut assignments = Assignments::default();
	for part in split_commas(text) {
		let part = part.trim();
		if part.is_empty() {
			return Err(ParseError::EmptyExpression {
				raw: text.to_string(),
			});
		}

		let (key, value) = split_one_equals(part)?;
		assignments.insert(key.to_string(), parse_scalar(value));
	}

	Ok(assignments)
}
