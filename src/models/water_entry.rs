use rusqlite::{params, Connection, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single logged drink, in ounces.
#[derive(Debug, Clone)]
pub struct WaterEntry {
    pub id: Option<i64>,
    pub amount: i64,
    pub timestamp: i64,
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System clock is before Unix epoch - this should never happen on properly configured systems")
        .as_secs() as i64
}

impl WaterEntry {
    /// Create an entry stamped with the current time (not yet saved).
    pub fn new(amount: i64) -> Self {
        Self {
            id: None,
            amount,
            timestamp: current_timestamp(),
        }
    }

    /// Create an entry with an explicit timestamp (not yet saved).
    pub fn with_timestamp(amount: i64, timestamp: i64) -> Self {
        Self {
            id: None,
            amount,
            timestamp,
        }
    }

    pub fn save(&mut self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO water_entries (amount, timestamp) VALUES (?1, ?2)",
            params![self.amount, self.timestamp],
        )?;
        self.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Find all entries, newest first.
    pub fn find_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, amount, timestamp FROM water_entries ORDER BY timestamp DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Self {
                id: Some(row.get(0)?),
                amount: row.get(1)?,
                timestamp: row.get(2)?,
            })
        })?;

        rows.collect()
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, amount, timestamp FROM water_entries WHERE id = ?1")?;

        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(Self {
                id: Some(row.get(0)?),
                amount: row.get(1)?,
                timestamp: row.get(2)?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Change the recorded amount. The timestamp is immutable.
    /// Returns an error if the entry has not been saved yet (id is None).
    pub fn update_amount(&mut self, conn: &Connection, amount: i64) -> Result<()> {
        let id = self.id.ok_or_else(|| {
            rusqlite::Error::InvalidParameterName(
                "Cannot update unsaved entry - call save() first".to_string(),
            )
        })?;

        self.amount = amount;

        conn.execute(
            "UPDATE water_entries SET amount = ?1 WHERE id = ?2",
            params![amount, id],
        )?;

        Ok(())
    }

    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let rows_affected =
            conn.execute("DELETE FROM water_entries WHERE id = ?1", params![id])?;
        Ok(rows_affected > 0)
    }
}
