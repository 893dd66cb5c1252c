// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

//! Schema management: column and table definitions plus the copy-on-write
//! catalog mapping table names to schemas.

mod catalog;
mod column;
mod table;

pub use catalog::Catalog;
pub use column::{ColumnDef, ID_COLUMN};
pub use table::TableDef;

pub type Result<T> = flatdb_type::Result<T>;
