// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use thiserror::Error;

/// Error type shared across the workspace.
///
/// Every core operation fails synchronously with one of these kinds; the
/// dispatcher owns user-facing rendering. The payload is the offending
/// token or table name, never a formatted message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	#[error("invalid value: {0}")]
	InvalidValue(String),

	#[error("table '{0}' already exists")]
	TableAlreadyExists(String),

	#[error("table '{0}' does not exist")]
	TableDoesNotExist(String),

	#[error("table '{0}' has a malformed schema")]
	TableSchema(String),

	#[error("storage: {0}")]
	Storage(String),
}

impl Error {
	/// Shorthand for the most common kind.
	pub fn invalid(token: impl Into<String>) -> Self {
		Error::InvalidValue(token.into())
	}
}
