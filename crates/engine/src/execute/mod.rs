// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

mod delete;
mod describe;
mod insert;
mod select;
mod update;

pub use delete::delete;
pub use describe::{TableInfo, describe};
pub use insert::insert;
pub use select::select;
pub use update::update;
