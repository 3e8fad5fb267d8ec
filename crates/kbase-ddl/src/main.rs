//! kbase-ddl CLI
//!
//! Prints Kbase DDL, probe queries and connection URLs for a connection profile.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use kbase_dialect::prelude::*;

/// Generate Kbase SQL from column descriptions.
#[derive(Parser)]
#[command(name = "kbase-ddl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Connection profile (JSON). Defaults to a native localhost profile.
    #[arg(short, long, env = "KBASE_PROFILE")]
    profile: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Column description shared by the column subcommands.
#[derive(Args)]
struct ColumnArgs {
    /// Column name.
    #[arg(short, long)]
    name: String,

    /// Logical type (DATE, TIMESTAMP, BOOLEAN, NUMBER, INTEGER, BIGNUMBER, STRING, BINARY).
    #[arg(short = 't', long = "type")]
    logical_type: String,

    /// Length in characters or digits (0 = unspecified).
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    length: i32,

    /// Digits after the decimal point.
    #[arg(short = 'P', long, default_value_t = 0, allow_hyphen_values = true)]
    precision: i32,

    /// Technical key field of the table.
    #[arg(long)]
    technical_key: Option<String>,

    /// Primary key field of the table.
    #[arg(long)]
    primary_key: Option<String>,

    /// Request auto increment for the column.
    #[arg(long)]
    autoinc: bool,
}

impl ColumnArgs {
    fn descriptor(&self) -> ColumnDescriptor {
        ColumnDescriptor::new(&self.name, LogicalType::from(self.logical_type.as_str()))
            .length(self.length)
            .precision(self.precision)
    }

    fn keys(&self) -> KeyFields<'_> {
        KeyFields {
            technical_key: self.technical_key.as_deref(),
            primary_key: self.primary_key.as_deref(),
            use_autoinc: self.autoinc,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the connection URL of the profile.
    Url,

    /// Print the Kbase type of a column.
    Type {
        #[command(flatten)]
        column: ColumnArgs,
    },

    /// Print ALTER TABLE ... ADD for a column.
    AddColumn {
        /// Target table.
        #[arg(long)]
        table: String,

        #[command(flatten)]
        column: ColumnArgs,

        /// Terminate the statement with a semicolon.
        #[arg(long)]
        semicolon: bool,
    },

    /// Print ALTER TABLE ... ALTER for a column.
    ModifyColumn {
        /// Target table.
        #[arg(long)]
        table: String,

        #[command(flatten)]
        column: ColumnArgs,

        /// Terminate the statement with a semicolon.
        #[arg(long)]
        semicolon: bool,
    },

    /// Print ALTER TABLE ... DROP COLUMN.
    DropColumn {
        /// Target table.
        #[arg(long)]
        table: String,

        /// Column to drop.
        #[arg(short, long)]
        name: String,
    },

    /// Print DROP TABLE IF EXISTS.
    DropTable {
        /// Table to drop.
        table: String,
    },

    /// Print exclusive lock statements for tables.
    Lock {
        /// Tables to lock, in order.
        tables: Vec<String>,
    },

    /// Quote a value as a string literal.
    Quote {
        /// Raw value.
        value: String,
    },

    /// Print the capability table as JSON.
    Capabilities,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let profile = match &cli.profile {
        Some(path) => ConnectionProfile::load(path)?,
        None => {
            debug!("No profile given, using native localhost defaults");
            ConnectionProfile::default()
        }
    };
    let dialect = profile.dialect();
    let statements = dialect.statements();

    match cli.command {
        Commands::Url => {
            println!("{}", profile.url()?);
        }

        Commands::Type { column } => {
            let keys = column.keys();
            let token = dialect.type_mapper().map_type(
                &column.descriptor(),
                keys.technical_key,
                keys.primary_key,
            );
            if token == UNKNOWN_TYPE {
                info!("Type '{}' has no Kbase mapping", column.logical_type);
            }
            println!("{token}");
        }

        Commands::AddColumn {
            table,
            column,
            semicolon,
        } => {
            println!(
                "{}",
                statements.add_column(&table, &column.descriptor(), &column.keys(), semicolon)
            );
        }

        Commands::ModifyColumn {
            table,
            column,
            semicolon,
        } => {
            println!(
                "{}",
                statements.modify_column(&table, &column.descriptor(), &column.keys(), semicolon)
            );
        }

        Commands::DropColumn { table, name } => {
            let column = ColumnDescriptor::new(name, LogicalType::Unknown);
            print!("{}", statements.drop_column(&table, &column));
        }

        Commands::DropTable { table } => {
            println!("{}", statements.drop_table_if_exists(&table));
        }

        Commands::Lock { tables } => {
            if tables.is_empty() {
                info!("No tables given, nothing to lock.");
            }
            print!("{}", statements.lock_tables(&tables));
        }

        Commands::Quote { value } => {
            println!("{}", quote_literal(&value));
        }

        Commands::Capabilities => {
            println!("{}", serde_json::to_string_pretty(dialect.capabilities())?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_column_args() {
        let cli = Cli::try_parse_from([
            "kbase-ddl",
            "add-column",
            "--table",
            "orders",
            "--name",
            "amount",
            "--type",
            "number",
            "--length",
            "10",
            "--precision",
            "2",
            "--semicolon",
        ])
        .unwrap();

        match cli.command {
            Commands::AddColumn {
                table,
                column,
                semicolon,
            } => {
                assert_eq!(table, "orders");
                assert!(semicolon);
                assert_eq!(column.descriptor(), number("amount", 10, 2));
                assert_eq!(column.keys(), KeyFields::none());
            }
            _ => panic!("Expected add-column"),
        }
    }

    #[test]
    fn test_negative_sizes_accepted() {
        let cli = Cli::try_parse_from([
            "kbase-ddl",
            "type",
            "-n",
            "x",
            "-t",
            "NUMBER",
            "-l",
            "8",
            "-P",
            "-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Type { column } => assert_eq!(column.descriptor().precision, -1),
            _ => panic!("Expected type"),
        }
    }
}
