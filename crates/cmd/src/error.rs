// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use thiserror::Error;

use flatdb_type::Error as CoreError;

/// Parse error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
	#[error("empty expression")]
	EmptyExpression {
		raw: String,
	},

	#[error("assignment '{part}' has no '='")]
	MissingEquals {
		part: String,
	},

	#[error("assignment '{part}' has more than one '='")]
	ExtraEquals {
		part: String,
	},

	#[error("assignment '{part}' has an empty key")]
	EmptyKey {
		part: String,
	},

	#[error("malformed command '{input}'")]
	MalformedCommand {
		input: String,
	},

	#[error("unknown command '{input}'")]
	UnknownCommand {
		input: String,
	},
}

impl ParseError {
	/// The offending fragment of input.
	pub fn token(&self) -> &str {
		match self {
			ParseError::EmptyExpression {
				raw,
			} => raw,
			ParseError::MissingEquals {
				part,
			}
			| ParseError::ExtraEquals {
				part,
			}
			| ParseError::EmptyKey {
				part,
			} => part,
			ParseError::MalformedCommand {
				input,
			}
			| ParseError::UnknownCommand {
				input,
			} => input,
		}
	}
}

impl From<ParseError> for CoreError {
	fn from(err: ParseError) -> Self {
		CoreError::InvalidValue(err.token().to_string())
	}
}
