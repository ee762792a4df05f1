// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! ### Commands
//!
//! - `cargo xtask ci` — Clippy, format check, build, test, and schema check
//! - `cargo xtask verify-schema` — Applies the embedded migrations to an
//!   in-memory `SQLite` database and checks the `storage_slots` layout
//! - `cargo xtask dump-ledger --database <path>` — Prints the booking ledger
//!   held in a server database file
//!
//! Standard `cargo test` stays fast and infrastructure-free. The server
//! database tooling lives here rather than in the server binary.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use diesel::sql_types::{Integer, Text};
use diesel::{QueryableByName, RunQueryDsl, SqliteConnection};
use duct::cmd;
use royal_gold_domain::BookingRecord;
use royal_gold_persistence::{
    BookingLedger, LedgerConfig, SqliteSlotStore, DEFAULT_STORAGE_KEY,
};
use std::collections::BTreeMap;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (clippy, format, build, test, schema)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Format the workspace
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run every test in the workspace
    #[command(visible_alias = "t")]
    Test,

    /// Verify the migrated `SQLite` schema matches what the slot store expects
    #[command(visible_alias = "vs")]
    VerifySchema,

    /// Print the booking ledger stored in a server database
    #[command(visible_alias = "dl")]
    DumpLedger {
        /// Path to the server's `SQLite` database file
        #[arg(short, long)]
        database: String,

        /// Storage slot holding the ledger
        #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
        storage_key: String,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::LintClippy => lint_clippy(),
            Self::LintFormatting => lint_format(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::VerifySchema => verify_schema(),
            Self::DumpLedger {
                database,
                storage_key,
            } => dump_ledger(&database, storage_key),
        }
    }
}

/// Run CI checks (clippy, format, build, test, schema)
fn ci() -> Result<()> {
    lint_clippy()?;
    lint_format()?;
    build()?;
    test()?;
    verify_schema()?;
    Ok(())
}

/// Build every workspace member, the server binary included
fn build() -> Result<()> {
    run_cargo(vec!["build", "--workspace", "--all-targets"])
}

fn check() -> Result<()> {
    run_cargo(vec!["check", "--workspace", "--all-targets"])
}

/// Run clippy; each crate's `#![deny(...)]` block sets the lint level
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ])
}

fn lint_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all", "--check"])
}

fn fix_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all"])
}

/// Run the unit tests of every crate, including the server's router tests
fn test() -> Result<()> {
    run_cargo(vec!["test", "--workspace", "--all-targets"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// A column as `SQLite` reports it, with the type normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    normalized_type: String,
    nullable: bool,
    primary_key: bool,
}

/// The `storage_slots` layout the slot store reads and writes.
fn expected_storage_slots() -> BTreeMap<String, Column> {
    let column = |normalized_type: &str, nullable: bool, primary_key: bool| Column {
        normalized_type: normalized_type.to_string(),
        nullable,
        primary_key,
    };

    BTreeMap::from([
        ("slot_key".to_string(), column("text", false, true)),
        ("slot_value".to_string(), column("text", false, false)),
        ("updated_at".to_string(), column("text", true, false)),
    ])
}

/// Verify the migrated schema
///
/// Applies the persistence crate's embedded migrations to an in-memory
/// `SQLite` database, then compares `storage_slots` column by column against
/// the layout `diesel_schema.rs` declares.
///
/// ## Failures
///
/// The command fails if:
/// - Migrations fail to apply
/// - `storage_slots` is missing
/// - A column is missing, unexpected, or has the wrong type or nullability
fn verify_schema() -> Result<()> {
    use diesel::Connection;
    use diesel_migrations::{embed_migrations, MigrationHarness};

    const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
        embed_migrations!("../crates/persistence/migrations");

    tracing::info!("Applying SQLite migrations");
    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to apply SQLite migrations: {}", e))?;

    tracing::info!("Introspecting storage_slots");
    let actual = introspect_table(&mut conn, "storage_slots")?;
    if actual.is_empty() {
        return Err(color_eyre::eyre::eyre!(
            "Table storage_slots does not exist after migrations"
        ));
    }

    let expected = expected_storage_slots();
    let mut errors = Vec::new();

    for (name, expected_column) in &expected {
        match actual.get(name) {
            None => errors.push(format!("Column {name} is missing")),
            Some(actual_column) if actual_column != expected_column => errors.push(format!(
                "Column {name} mismatch: expected {expected_column:?}, found {actual_column:?}"
            )),
            Some(_) => {}
        }
    }

    for name in actual.keys() {
        if !expected.contains_key(name) {
            errors.push(format!("Column {name} is not declared in diesel_schema.rs"));
        }
    }

    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("{error}");
        }
        return Err(color_eyre::eyre::eyre!(
            "Schema verification failed with {} error(s)",
            errors.len()
        ));
    }

    tracing::info!("✓ Schema verification passed");
    Ok(())
}

/// Introspect one `SQLite` table's columns
fn introspect_table(conn: &mut SqliteConnection, table: &str) -> Result<BTreeMap<String, Column>> {
    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Integer)]
        #[allow(dead_code)]
        cid: i32,
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    let columns: Vec<ColumnInfo> = diesel::sql_query(format!("PRAGMA table_info({table})"))
        .load(conn)
        .wrap_err(format!("Failed to get columns for table {table}"))?;

    Ok(columns
        .into_iter()
        .map(|col| {
            (
                col.name,
                Column {
                    normalized_type: normalize_sqlite_type(&col.r#type),
                    nullable: col.notnull == 0,
                    primary_key: col.pk > 0,
                },
            )
        })
        .collect())
}

/// Normalize `SQLite` type to common representation
fn normalize_sqlite_type(sqlite_type: &str) -> String {
    let normalized = sqlite_type.to_uppercase();
    if normalized.contains("INT") {
        "integer".to_string()
    } else if normalized.contains("REAL")
        || normalized.contains("FLOA")
        || normalized.contains("DOUB")
    {
        "real".to_string()
    } else if normalized.contains("BLOB") {
        "blob".to_string()
    } else {
        "text".to_string() // Default for SQLite
    }
}

/// Print the booking ledger stored in a server database
///
/// Opens the file read-and-write through the slot store, so the schema is
/// migrated first if the file is new. Nothing is purged.
fn dump_ledger(database: &str, storage_key: String) -> Result<()> {
    let mut store = SqliteSlotStore::new_with_file(database)
        .wrap_err(format!("Failed to open database {database}"))?;

    for (key, size) in store.list_slots()? {
        tracing::info!("slot {key}: {size} bytes");
    }

    let mut ledger = BookingLedger::new(store, LedgerConfig { storage_key });
    let records: Vec<BookingRecord> = ledger
        .list_all()
        .wrap_err("Failed to read the booking ledger")?;

    tracing::info!(
        "{} booking(s) in slot {}",
        records.len(),
        ledger.config().storage_key
    );
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
