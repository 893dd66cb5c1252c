// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

mod r#type;

pub use r#type::Type;

/// A FlatDB scalar, represented as a native Rust type.
///
/// Serialized untagged so rows persist as flat JSON scalars. Variant order
/// matters for deserialization: `Bool` is tried before `Int`, keeping the
/// two types distinct even where a boolean could be read as 0/1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// A boolean: true or false.
	Bool(bool),
	/// An 8-byte signed integer
	Int(i64),
	/// A UTF-8 encoded text
	Utf8(String),
}

impl Value {
	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Bool(v.into())
	}

	pub fn int(v: impl Into<i64>) -> Self {
		Value::Int(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	/// The declared type this value inhabits.
	pub fn ty(&self) -> Type {
		match self {
			Value::Bool(_) => Type::Bool,
			Value::Int(_) => Type::Int,
			Value::Utf8(_) => Type::Utf8,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Bool(v) => Display::fmt(v, f),
			Value::Int(v) => Display::fmt(v, f),
			Value::Utf8(v) => f.write_str(v),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}
