use std::collections::HashSet;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

use super::{CounterStore, ProcessedStore};

/// Both state stores in one database. Clones share the connection.
#[derive(Clone)]
pub struct SqliteState {
    conn: Rc<Connection>,
}

impl SqliteState {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(SqliteState {
            conn: Rc::new(conn),
        })
    }

    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let db = SqliteState {
            conn: Rc::new(Connection::open_in_memory()?),
        };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS processed_sources (
                url          TEXT PRIMARY KEY,
                processed_at TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE TABLE IF NOT EXISTS allocator (
                id      INTEGER PRIMARY KEY CHECK (id = 1),
                last_id INTEGER NOT NULL
            );
            ",
        )?;
        Ok(())
    }
}

impl CounterStore for SqliteState {
    fn load(&self) -> Result<u64> {
        let last: Option<i64> = self
            .conn
            .query_row("SELECT last_id FROM allocator WHERE id = 1", [], |r| r.get(0))
            .optional()?;
        Ok(last.map(|v| v.max(0) as u64).unwrap_or(0))
    }

    fn save(&self, value: u64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO allocator (id, last_id) VALUES (1, ?1)
             ON CONFLICT(id) DO UPDATE SET last_id = excluded.last_id",
            rusqlite::params![value as i64],
        )?;
        Ok(())
    }
}

impl ProcessedStore for SqliteState {
    fn load(&self) -> Result<HashSet<String>> {
        let mut stmt = self.conn.prepare("SELECT url FROM processed_sources")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<HashSet<String>, _>>()?;
        Ok(rows)
    }

    fn append(&self, url: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO processed_sources (url) VALUES (?1)",
            rusqlite::params![url],
        )?;
        Ok(())
    }
}
