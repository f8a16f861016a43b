//! MySQL implementation of the TableSource trait.
//!
//! Column order comes from `information_schema` ordinal positions and is
//! captured once per scan. Every cell is cast to `CHAR` server-side so
//! values arrive as text regardless of their declared type; NULL becomes
//! the empty string.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::Row as _;
use tablechain_core::Row;

use crate::error::Result;
use crate::traits::{ColumnInfo, TableSource};

/// Connection parameters for a MySQL source.
#[derive(Debug, Clone)]
pub struct MySqlConfig {
    pub username: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl MySqlConfig {
    /// Config for a local server on the default port.
    pub fn local(username: impl Into<String>, password: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            database: database.into(),
            host: "127.0.0.1".to_string(),
            port: 3306,
        }
    }

    /// The connection URL. Not logged: it carries the password.
    fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }
}

/// MySQL-backed table source.
pub struct MySqlTable {
    pool: MySqlPool,
    table: String,
}

impl MySqlTable {
    /// Connect to the database and bind to one table.
    pub async fn connect(config: &MySqlConfig, table: impl Into<String>) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(4)
            .acquire_timeout(std::time::Duration::from_secs(5))
            .connect(&config.url())
            .await?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "connected to MySQL"
        );

        Ok(Self::new(pool, table))
    }

    /// Wrap an existing pool.
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }
}

#[async_trait]
impl TableSource for MySqlTable {
    fn table_name(&self) -> &str {
        &self.table
    }

    async fn columns(&self) -> Result<Vec<ColumnInfo>> {
        let rows = sqlx::query(
            "SELECT column_name, column_type \
             FROM information_schema.columns \
             WHERE table_schema = DATABASE() AND table_name = ? \
             ORDER BY ordinal_position",
        )
        .bind(&self.table)
        .fetch_all(&self.pool)
        .await?;

        let columns = rows
            .iter()
            .map(|row| {
                Ok(ColumnInfo {
                    name: row.try_get::<String, _>(0)?,
                    ty: row.try_get::<String, _>(1)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        ensure_columns(&self.table, &columns)?;

        tracing::debug!(table = %self.table, columns = columns.len(), "discovered columns");
        Ok(columns)
    }

    async fn fetch_rows(&self) -> Result<Vec<Row>> {
        let columns = self.columns().await?;

        // CAST every column to CHAR so each cell scans as text.
        let select_list = columns
            .iter()
            .map(|c| {
                let ident = quote_ident(&c.name);
                format!("CAST({ident} AS CHAR) AS {ident}")
            })
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "SELECT {} FROM {}",
            select_list,
            quote_ident(&self.table)
        );

        let db_rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        let mut rows = Vec::with_capacity(db_rows.len());
        for db_row in &db_rows {
            let mut cells = Vec::with_capacity(columns.len());
            for i in 0..columns.len() {
                // NULL scans as None; the chain sees the empty string.
                let cell: Option<String> = db_row.try_get(i)?;
                cells.push(cell.unwrap_or_default());
            }
            rows.push(Row::new(cells));
        }

        tracing::debug!(table = %self.table, rows = rows.len(), "scanned table");
        Ok(rows)
    }
}

/// Backtick-quote a MySQL identifier.
fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// A table with no columns in `information_schema` does not exist in the
/// current schema; surface that instead of scanning nothing.
fn ensure_columns(table: &str, columns: &[ColumnInfo]) -> Result<()> {
    if columns.is_empty() {
        return Err(crate::error::SourceError::InvalidColumns(format!(
            "table `{table}` has no columns; does it exist in this schema?"
        )));
    }
    Ok(())
}
