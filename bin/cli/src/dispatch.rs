// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

use std::time::Instant;

use tracing::debug;

use flatdb_cmd::Command;
use flatdb_engine::{Filter, delete, describe, insert, select, update};
use flatdb_storage::Gateway;
use flatdb_type::Result;

use crate::cache::SelectCache;
use crate::render;

/// Executes parsed commands against the store.
///
/// State is loaded fresh through the gateway before every command and
/// written back only when the command mutated it; nothing is retained
/// across commands apart from the select cache.
pub struct Session<G: Gateway> {
	gateway: G,
	cache: SelectCache,
}

impl<G: Gateway> Session<G> {
	pub fn new(gateway: G) -> Self {
		Self {
			gateway,
			cache: SelectCache::default(),
		}
	}

	/// Run one command and return the text to show. Failures abort the
	/// current command only.
	pub fn execute(&mut self, command: &Command) -> Result<String> {
		let start = Instant::now();
		let reply = self.dispatch(command)?;
		debug!("command executed in {:?}", start.elapsed());
		Ok(reply)
	}

	fn dispatch(&mut self, command: &Command) -> Result<String> {
		match command {
			Command::CreateTable {
				table,
				columns,
			} => {
				let catalog = self.gateway.load_catalog();
				let next = catalog.create_table(table, columns)?;
				self.gateway.save_catalog(&next)?;

				let def = next.schema(table.trim())?;
				Ok(format!("Table \"{}\" created with columns: {}", def.name, def.columns_summary()))
			}

			Command::DropTable {
				table,
			} => {
				let catalog = self.gateway.load_catalog();
				let next = catalog.drop_table(table)?;
				self.gateway.save_catalog(&next)?;
				self.gateway.drop_rows(table.trim())?;

				Ok(format!("Table \"{}\" dropped.", table.trim()))
			}

			Command::ListTables => {
				let catalog = self.gateway.load_catalog();
				let tables = catalog.list_tables();
				if tables.is_empty() {
					Ok("(no tables)".to_string())
				} else {
					Ok(tables.iter().map(|t| format!("- {t}")).collect::<Vec<_>>().join("\n"))
				}
			}

			Command::Insert {
				table,
				values,
			} => {
				let catalog = self.gateway.load_catalog();
				let def = catalog.schema(table)?;
				let rows = self.gateway.load_rows(&def.name);

				let (rows, id) = insert(def, rows, values.clone())?;
				self.gateway.save_rows(&def.name, &rows)?;

				Ok(format!("Row with ID={} inserted into table \"{}\".", id, def.name))
			}

			Command::Select {
				table,
				filter,
			} => {
				let catalog = self.gateway.load_catalog();
				let def = catalog.schema(table)?;

				let raw = filter.as_ref().map(|f| f.raw.as_str()).unwrap_or("");
				let modified = self.gateway.modified(&def.name);

				if let Some(rows) = self.cache.lookup(&def.name, raw, modified) {
					return Ok(render::render_table(&def.columns, rows));
				}

				let predicate = match filter {
					Some(expr) => Some(Filter::from_where(expr)?),
					None => None,
				};
				let rows = self.gateway.load_rows(&def.name);
				let found = select(&rows, predicate.as_ref());

				let rendered = render::render_table(&def.columns, &found);
				self.cache.store(&def.name, raw, modified, found);
				Ok(rendered)
			}

			Command::Update {
				table,
				set,
				filter,
			} => {
				let catalog = self.gateway.load_catalog();
				let def = catalog.schema(table)?;
				let rows = self.gateway.load_rows(&def.name);

				let predicate = Filter::from_where(filter)?;
				let (rows, updated) = update(def, rows, set, &predicate)?;
				self.gateway.save_rows(&def.name, &rows)?;

				if updated == 0 {
					Ok("Nothing updated (no matching rows).".to_string())
				} else {
					Ok(format!("Updated {updated} row(s) in table \"{}\".", def.name))
				}
			}

			Command::Delete {
				table,
				filter,
			} => {
				let catalog = self.gateway.load_catalog();
				let def = catalog.schema(table)?;
				let rows = self.gateway.load_rows(&def.name);

				let predicate = Filter::from_where(filter)?;
				let (rows, deleted) = delete(rows, &predicate);
				self.gateway.save_rows(&def.name, &rows)?;

				Ok(format!("Deleted {deleted} row(s)."))
			}

			Command::Describe {
				table,
			} => {
				let catalog = self.gateway.load_catalog();
				let def = catalog.schema(table)?;
				let rows = self.gateway.load_rows(&def.name);

				let info = describe(def, &rows);
				Ok(format!("Table: {}\nColumns: {}\nRows: {}", info.table, info.columns, info.count))
			}

			Command::Help => Ok(render::help().to_string()),

			// Handled by the REPL loop before dispatch.
			Command::Exit => Ok(String::new()),
		}
	}
}

#[cfg(test)]
mod tests {
	use flatdb_cmd::parse_command;
	use flatdb_storage::Memory;
	use flatdb_type::Error;

	use super::*;

	fn run(session: &mut Session<Memory>, line: &str) -> Result<String> {
		session.execute(&parse_command(line).unwrap())
	}

	#[test]
	fn test_full_command_surface() {
		let mut session = Session::new(Memory::new());

		let reply = run(&mut session, "create_table people name:string age:int").unwrap();
		assert_eq!(reply, "Table \"people\" created with columns: ID:int, name:string, age:int");

		let reply = run(&mut session, r#"insert into people values("Ann", 30)"#).unwrap();
		assert_eq!(reply, "Row with ID=1 inserted into table \"people\".");
		run(&mut session, r#"insert into people values("Bo", -5)"#).unwrap();

		let reply = run(&mut session, "select from people where age = 30").unwrap();
		assert!(reply.contains("Ann"));
		assert!(!reply.contains("Bo"));

		let reply = run(&mut session, r#"update people set age = 31 where name = "Ann""#).unwrap();
		assert_eq!(reply, "Updated 1 row(s) in table \"people\".");

		let reply = run(&mut session, "delete from people where age = 31").unwrap();
		assert_eq!(reply, "Deleted 1 row(s).");

		let reply = run(&mut session, "describe people").unwrap();
		assert_eq!(reply, "Table: people\nColumns: ID:int, name:string, age:int\nRows: 1");

		let reply = run(&mut session, "list_tables").unwrap();
		assert_eq!(reply, "- people");

		let reply = run(&mut session, "drop_table people").unwrap();
		assert_eq!(reply, "Table \"people\" dropped.");
		assert_eq!(run(&mut session, "list_tables").unwrap(), "(no tables)");
	}

	#[test]
	fn test_errors_abort_command_only() {
		let mut session = Session::new(Memory::new());

		let err = run(&mut session, "select from ghost").unwrap_err();
		assert_eq!(err, Error::TableDoesNotExist("ghost".to_string()));

		// The session keeps working.
		run(&mut session, "create_table people age:int").unwrap();
		run(&mut session, "insert into people values(30)").unwrap();
		let reply = run(&mut session, "select from people").unwrap();
		assert!(reply.contains("30"));
	}

	#[test]
	fn test_update_nothing_matched() {
		let mut session = Session::new(Memory::new());
		run(&mut session, "create_table people age:int").unwrap();

		let reply = run(&mut session, "update people set age = 1 where age = 99").unwrap();
		assert_eq!(reply, "Nothing updated (no matching rows).");
	}

	#[test]
	fn test_multi_key_where_is_rejected() {
		let mut session = Session::new(Memory::new());
		run(&mut session, "create_table people age:int flag:bool").unwrap();

		let err = run(&mut session, "delete from people where age = 1, flag = true").unwrap_err();
		assert!(matches!(err, Error::InvalidValue(_)));
	}
}
