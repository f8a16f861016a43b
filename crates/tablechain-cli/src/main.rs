//! # Tablechain CLI Entry Point
//!
//! Connects to a MySQL table, hashes its rows into a chain, and prints
//! the column layout, the plain data, and the hashed view.

use anyhow::Context;
use clap::Parser;

use tablechain::source::{MySqlConfig, MySqlTable};
use tablechain::TableHasher;

const RULE: &str = "==========================";

/// Scan a MySQL table and print chained, content-addressed row hashes.
///
/// Each row's identifier depends on every row before it, so any edit,
/// insertion, deletion, or reorder changes that row's identifier and
/// every identifier after it.
#[derive(Parser, Debug)]
#[command(name = "tablechain", version, about)]
struct Cli {
    /// Database username.
    db_username: String,
    /// Database password.
    db_password: String,
    /// Database (schema) name.
    db_name: String,
    /// Table to scan.
    table_name: String,

    /// Database host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Database port.
    #[arg(long, default_value_t = 3306)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = MySqlConfig {
        username: cli.db_username,
        password: cli.db_password,
        database: cli.db_name,
        host: cli.host,
        port: cli.port,
    };

    let source = MySqlTable::connect(&config, &cli.table_name)
        .await
        .with_context(|| format!("connecting to table {:?}", cli.table_name))?;

    let report = TableHasher::new(source)
        .run()
        .await
        .with_context(|| format!("hashing table {:?}", cli.table_name))?;

    println!("Table: {}", report.table_name);
    for column in &report.columns {
        println!("{} {}", column.name, column.ty);
    }

    println!("{RULE}");
    println!("{}", serde_json::to_string_pretty(&report.plain_json())?);
    println!("{RULE}");
    println!("{}", serde_json::to_string_pretty(&report.hashed_json())?);

    Ok(())
}
