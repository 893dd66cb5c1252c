// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::warn;

use flatdb_catalog::Catalog;
use flatdb_engine::Row;
use flatdb_type::Error;

use crate::Gateway;

const CATALOG_FILE: &str = "catalog.json";

/// JSON flat-file gateway: `catalog.json` plus one `<table>.json` per
/// table under a single data directory.
#[derive(Debug, Clone)]
pub struct FileGateway {
	root: PathBuf,
}

impl FileGateway {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn catalog_path(&self) -> PathBuf {
		self.root.join(CATALOG_FILE)
	}

	fn table_path(&self, table: &str) -> PathBuf {
		self.root.join(format!("{table}.json"))
	}

	fn write(&self, path: &Path, json: String) -> crate::Result<()> {
		fs::create_dir_all(&self.root).map_err(|err| Error::Storage(err.to_string()))?;
		fs::write(path, json).map_err(|err| Error::Storage(err.to_string()))
	}
}

impl Gateway for FileGateway {
	fn load_catalog(&self) -> Catalog {
		let path = self.catalog_path();
		let Ok(text) = fs::read_to_string(&path) else {
			return Catalog::new();
		};
		match serde_json::from_str(&text) {
			Ok(catalog) => catalog,
			Err(err) => {
				warn!("unparseable catalog record at {}, loading empty: {}", path.display(), err);
				Catalog::new()
			}
		}
	}

	fn save_catalog(&self, catalog: &Catalog) -> crate::Result<()> {
		let json = serde_json::to_string_pretty(catalog).map_err(|err| Error::Storage(err.to_string()))?;
		self.write(&self.catalog_path(), json)
	}

	fn load_rows(&self, table: &str) -> Vec<Row> {
		let path = self.table_path(table);
		let Ok(text) = fs::read_to_string(&path) else {
			return Vec::new();
		};
		match serde_json::from_str(&text) {
			Ok(rows) => rows,
			Err(err) => {
				warn!("unparseable table record at {}, loading empty: {}", path.display(), err);
				Vec::new()
			}
		}
	}

	fn save_rows(&self, table: &str, rows: &[Row]) -> crate::Result<()> {
		let json = serde_json::to_string_pretty(rows).map_err(|err| Error::Storage(err.to_string()))?;
		self.write(&self.table_path(table), json)
	}

	fn drop_rows(&self, table: &str) -> crate::Result<()> {
		match fs::remove_file(self.table_path(table)) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(Error::Storage(err.to_string())),
		}
	}

	fn modified(&self, table: &str) -> Option<SystemTime> {
		fs::metadata(self.table_path(table)).and_then(|meta| meta.modified()).ok()
	}
}
