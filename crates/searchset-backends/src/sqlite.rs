//! SQLite search backend using `rusqlite`.
//!
//! [`SqliteBackend`] answers the collaborator contract over one table of a
//! SQLite database: the schema's column names become the raw field-name
//! list, and distinct values are fetched with a case-insensitive `LIKE`
//! per source column.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use searchset_core::{SearchError, SearchResult};
use searchset_mapping::SearchBackend;

/// A SQLite-backed search collaborator.
///
/// Uses `rusqlite` with a `Mutex`-guarded connection. In-memory databases
/// via the `:memory:` path work as expected (useful for testing).
pub struct SqliteBackend {
    /// The path to the database file (or ":memory:").
    path: PathBuf,
    /// The table whose columns and values are searched.
    table: String,
    conn: Mutex<rusqlite::Connection>,
}

impl SqliteBackend {
    /// Opens the database at `path` and searches over `table`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BackendUnavailable`] if the database cannot be
    /// opened.
    pub fn open(path: impl Into<PathBuf>, table: impl Into<String>) -> SearchResult<Self> {
        let path = path.into();
        let conn = if path.to_str() == Some(":memory:") {
            rusqlite::Connection::open_in_memory()
        } else {
            rusqlite::Connection::open(&path)
        }
        .map_err(|e| SearchError::BackendUnavailable(format!("SQLite open failed: {e}")))?;

        Ok(Self {
            path,
            table: table.into(),
            conn: Mutex::new(conn),
        })
    }

    /// Opens an in-memory database (convenience constructor).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BackendUnavailable`] if the database cannot be
    /// created.
    pub fn memory(table: impl Into<String>) -> SearchResult<Self> {
        Self::open(":memory:", table)
    }

    /// The database file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Runs arbitrary setup SQL (schema creation, fixtures).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::BackendUnavailable`] if execution fails.
    pub fn execute_batch(&self, sql: &str) -> SearchResult<()> {
        self.conn
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .execute_batch(sql)
            .map_err(db_err)
    }
}

impl SearchBackend for SqliteBackend {
    fn fetch_raw_field_names(&self) -> SearchResult<Vec<String>> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let mut stmt = conn
            .prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
            .map_err(db_err)?;
        let rows = stmt
            .query_map([&self.table], |row| row.get::<_, String>(0))
            .map_err(db_err)?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row.map_err(db_err)?);
        }
        Ok(names)
    }

    fn fetch_distinct_values(
        &self,
        sources: &[String],
        prefix: &str,
        limit: usize,
    ) -> SearchResult<HashSet<String>> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let pattern = format!("%{}%", escape_like(prefix));
        let mut out = HashSet::new();

        for source in sources {
            let sql = format!(
                "SELECT DISTINCT CAST({column} AS TEXT) FROM {table} \
                 WHERE {column} IS NOT NULL \
                 AND LOWER(CAST({column} AS TEXT)) LIKE LOWER(?1) ESCAPE '\\' \
                 LIMIT ?2",
                column = quote_ident(source),
                table = quote_ident(&self.table),
            );
            let mut stmt = conn.prepare(&sql).map_err(db_err)?;
            #[allow(clippy::cast_possible_wrap)]
            let rows = stmt
                .query_map(rusqlite::params![pattern, limit as i64], |row| {
                    row.get::<_, String>(0)
                })
                .map_err(db_err)?;

            for row in rows {
                out.insert(row.map_err(db_err)?);
                if out.len() == limit {
                    return Ok(out);
                }
            }
        }
        Ok(out)
    }
}

fn db_err(err: rusqlite::Error) -> SearchError {
    SearchError::BackendUnavailable(format!("SQLite error: {err}"))
}

/// Quotes a SQL identifier, doubling embedded quotes.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Escapes LIKE metacharacters in a user-supplied prefix.
fn escape_like(prefix: &str) -> String {
    prefix
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
