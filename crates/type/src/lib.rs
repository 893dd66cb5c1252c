// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

//! Scalar types and values shared across the FlatDB workspace.

pub mod error;
pub mod value;

pub use error::Error;
pub use value::{Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
