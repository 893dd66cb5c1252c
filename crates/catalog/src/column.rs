// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use serde::{Deserialize, Serialize};

use flatdb_type::{Error, Type};

/// Name of the synthetic identity column. Prepended to every schema at
/// creation time and never supplied by the caller.
pub const ID_COLUMN: &str = "ID";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: Type,
}

impl ColumnDef {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}

	/// The identity column definition.
	pub fn identity() -> Self {
		Self::new(ID_COLUMN, Type::Int)
	}

	/// Parse a `name:type` column spec token.
	///
	/// Fails with `InvalidValue` when the separator is missing, either
	/// side is empty after trimming, the name is the reserved identity
	/// name, or the type is unsupported.
	pub fn parse_spec(token: &str) -> crate::Result<Self> {
		let Some((name, ty)) = token.split_once(':') else {
			return Err(Error::invalid(token));
		};

		let name = name.trim();
		let ty = ty.trim();

		if name.is_empty() || ty.is_empty() {
			return Err(Error::invalid(token));
		}

		if name == ID_COLUMN {
			return Err(Error::invalid(name));
		}

		let Some(ty) = Type::parse(ty) else {
			return Err(Error::invalid(ty));
		};

		Ok(Self::new(name, ty))
	}
}
