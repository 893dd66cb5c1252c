// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

//! The row engine: each operation is a single atomic transformation of
//! `(schema, rows)` into `(schema, rows')`. No state is retained across
//! calls; the caller owns loading and persisting.

pub mod execute;
mod filter;
mod row;

pub use execute::{TableInfo, delete, describe, insert, select, update};
pub use filter::Filter;
pub use row::Row;

pub type Result<T> = flatdb_type::Result<T>;
