// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Error, Value};

/// A column type. Spelled `int` / `bool` / `string` in the command
/// language and in persisted metadata.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	#[serde(rename = "int")]
	Int,
	#[serde(rename = "bool")]
	Bool,
	#[serde(rename = "string")]
	Utf8,
}

impl Type {
	/// Parse a type token as written in a column spec. Returns `None` for
	/// anything outside the supported set.
	pub fn parse(token: &str) -> Option<Type> {
		match token {
			"int" => Some(Type::Int),
			"bool" => Some(Type::Bool),
			"string" => Some(Type::Utf8),
			_ => None,
		}
	}

	/// Check a value against this declared type.
	///
	/// Pure. A `Bool` is never a valid `Int` even though it could be
	/// read as 0/1; the distinction is structural in [`Value`] and is
	/// enforced here by exact variant match.
	pub fn validate(&self, value: &Value) -> crate::Result<()> {
		match (self, value) {
			(Type::Int, Value::Int(_)) => Ok(()),
			(Type::Bool, Value::Bool(_)) => Ok(()),
			(Type::Utf8, Value::Utf8(_)) => Ok(()),
			_ => Err(Error::InvalidValue(value.to_string())),
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Int => f.write_str("int"),
			Type::Bool => f.write_str("bool"),
			Type::Utf8 => f.write_str("string"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_supported() {
		assert_eq!(Type::parse("int"), Some(Type::Int));
		assert_eq!(Type::parse("bool"), Some(Type::Bool));
		assert_eq!(Type::parse("string"), Some(Type::Utf8));
	}

	#[test]
	fn test_parse_unsupported() {
		assert_eq!(Type::parse("float"), None);
		assert_eq!(Type::parse("INT"), None);
		assert_eq!(Type::parse(""), None);
	}

	#[test]
	fn test_validate_matching() {
		assert!(Type::Int.validate(&Value::Int(-5)).is_ok());
		assert!(Type::Bool.validate(&Value::Bool(false)).is_ok());
		assert!(Type::Utf8.validate(&Value::utf8("Ann")).is_ok());
	}

	#[test]
	fn test_validate_bool_is_not_int() {
		// A boolean is representable as 0/1 but must never pass as int.
		let err = Type::Int.validate(&Value::Bool(true)).unwrap_err();
		assert_eq!(err, Error::InvalidValue("true".to_string()));
	}

	#[test]
	fn test_validate_mismatch() {
		assert!(Type::Int.validate(&Value::utf8("30")).is_err());
		assert!(Type::Bool.validate(&Value::Int(1)).is_err());
		assert!(Type::Utf8.validate(&Value::Int(0)).is_err());
	}
}
