// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 FlatDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flatdb_cmd::{Command, parse_command};
use flatdb_storage::FileGateway;

mod cache;
mod dispatch;
mod render;

use dispatch::Session;

#[derive(Parser, Debug)]
#[command(name = "flatdb", version, about = "Minimal flat-file record store")]
struct Args {
	/// Data directory holding the catalog and table records
	#[arg(long, default_value = "data")]
	data: PathBuf,

	/// Log filter, e.g. `info` or `flatdb=debug`. `RUST_LOG` overrides.
	#[arg(long, default_value = "warn")]
	log: String,

	/// Skip confirmation prompts for destructive commands
	#[arg(long)]
	yes: bool,
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)))
		.with_writer(io::stderr)
		.init();

	let mut session = Session::new(FileGateway::new(&args.data));

	println!("flatdb (data: {})", args.data.display());
	println!("{}", render::help());

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		print!("db> ");
		let _ = io::stdout().flush();

		let Some(Ok(line)) = lines.next() else {
			break;
		};
		if line.trim().is_empty() {
			continue;
		}

		let command = match parse_command(&line) {
			Ok(command) => command,
			Err(err) => {
				println!("Invalid command: {err}. Try `help`.");
				continue;
			}
		};

		if let Command::Exit = command {
			break;
		}

		if !args.yes {
			if let Some(action) = destructive_action(&command) {
				if !confirm(&mut lines, action) {
					println!("Operation cancelled.");
					continue;
				}
			}
		}

		match session.execute(&command) {
			Ok(reply) => println!("{reply}"),
			Err(err) => println!("Error: {err}."),
		}
	}
}

/// Name of the action to confirm, for commands that destroy data.
fn destructive_action(command: &Command) -> Option<&'static str> {
	match command {
		Command::DropTable {
			..
		} => Some("drop_table"),
		Command::Delete {
			..
		} => Some("delete"),
		_ => None,
	}
}

fn confirm(lines: &mut impl Iterator<Item = io::Result<String>>, action: &str) -> bool {
	print!("Are you sure you want to run \"{action}\"? [y/n]: ");
	let _ = io::stdout().flush();

	match lines.next() {
		Some(Ok(answer)) => answer.trim().eq_ignore_ascii_case("y"),
		_ => false,
	}
}
