// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

//! Parser for the FlatDB command language.
//!
//! The language is a fixed set of command shapes over three token forms:
//!
//! ```text
//! create_table people name:string age:int
//! insert into people values("Ann", 30)
//! select from people where age = 30
//! update people set age = 31 where name = "Ann"
//! delete from people where age = 31
//! ```
//!
//! Value lists and assignment lists are comma-split respecting double
//! quotes; scalar literals resolve to int / bool / string.

mod error;
mod list;
mod parse;
mod scalar;

pub use error::ParseError;
pub use list::{Assignments, parse_assignments, parse_values};
pub use parse::{Command, WhereExpr, parse_command};
pub use scalar::parse_scalar;

pub type Result<T> = std::result::Result<T, ParseError>;
