use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::task;

const RECORD_COLUMNS: &str =
    "id, model_name, display, battery, camera, ram, storage, price, colors, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoneRecord {
    pub id: i64,
    pub model_name: String,
    pub display: Option<String>,
    pub battery: Option<String>,
    pub camera: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub price: Option<String>,
    pub colors: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insert shape for [`Catalog::seed`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPhone {
    pub model_name: String,
    pub display: Option<String>,
    pub battery: Option<String>,
    pub camera: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub price: Option<String>,
    pub colors: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoneSummary {
    pub model: String,
    pub price: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

impl PhoneRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(PhoneRecord {
            id: row.get(0)?,
            model_name: row.get(1)?,
            display: row.get(2)?,
            battery: row.get(3)?,
            camera: row.get(4)?,
            ram: row.get(5)?,
            storage: row.get(6)?,
            price: row.get(7)?,
            colors: row.get(8)?,
            created_at: row.get(9)?,
        })
    }
}

/// SQLite-backed phone catalog. Every operation opens its own connection on the
/// blocking pool and drops it before returning.
pub struct Catalog {
    db_path: PathBuf,
}

impl Catalog {
    /// Opens (creating if needed) the catalog database. Failing here means the
    /// store is unusable and callers should abort.
    pub async fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db_path = db_path.to_path_buf();
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || -> Result<()> {
            let conn = Connection::open(&db_path_clone)?;
            create_table(&conn)?;
            Ok(())
        })
        .await??;

        tracing::debug!(path = %db_path.display(), "catalog opened");
        Ok(Self { db_path })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Connection test: opens the database and runs a trivial query.
    pub async fn ping(&self) -> Result<()> {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)?;
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok::<(), anyhow::Error>(())
        })
        .await?
    }

    /// Case-insensitive substring lookup. When several models match, the earliest
    /// inserted one wins. Store failures are logged and reported as not found.
    pub async fn get_by_model(&self, query: &str) -> Option<PhoneRecord> {
        match self.try_get_by_model(query).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(query, error = %e, "catalog lookup failed");
                None
            }
        }
    }

    pub async fn try_get_by_model(&self, query: &str) -> Result<Option<PhoneRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let db_path = self.db_path.clone();
        let pattern = format!("%{}%", escape_like(query));

        task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS}
                 FROM smartphones
                 WHERE model_name LIKE ?1 ESCAPE '\\'
                 ORDER BY id
                 LIMIT 1"
            ))?;

            let result = stmt.query_row(params![pattern], PhoneRecord::from_row);

            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await?
    }

    /// `(model, price)` pairs ordered by model name; empty on store failure.
    pub async fn list_phones(&self) -> Vec<PhoneSummary> {
        let db_path = self.db_path.clone();
        let result = task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)?;
            let mut stmt =
                conn.prepare("SELECT model_name, price FROM smartphones ORDER BY model_name")?;

            let rows = stmt.query_map([], |row| {
                Ok(PhoneSummary {
                    model: row.get(0)?,
                    price: row.get(1)?,
                })
            })?;

            let mut phones = Vec::new();
            for row in rows {
                phones.push(row?);
            }

            Ok::<Vec<PhoneSummary>, anyhow::Error>(phones)
        })
        .await;

        flatten_or_empty(result, "list_phones")
    }

    /// Full records in insertion order; empty on store failure.
    pub async fn list_all(&self) -> Vec<PhoneRecord> {
        let db_path = self.db_path.clone();
        let result = task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)?;
            let mut stmt =
                conn.prepare(&format!("SELECT {RECORD_COLUMNS} FROM smartphones ORDER BY id"))?;

            let rows = stmt.query_map([], PhoneRecord::from_row)?;

            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }

            Ok::<Vec<PhoneRecord>, anyhow::Error>(records)
        })
        .await;

        flatten_or_empty(result, "list_all")
    }

    /// Create-if-absent insert. Existing model names are skipped, never overwritten.
    pub async fn seed(&self, phones: &[NewPhone]) -> Result<SeedReport> {
        if let Some(bad) = phones.iter().find(|p| p.model_name.trim().is_empty()) {
            anyhow::bail!("refusing to seed a phone with an empty model name: {:?}", bad);
        }

        let db_path = self.db_path.clone();
        let phones = phones.to_vec();

        let report = task::spawn_blocking(move || {
            let mut conn = Connection::open(&db_path)?;
            let tx = conn.transaction()?;
            let mut report = SeedReport::default();

            {
                let mut stmt = tx.prepare(
                    "INSERT INTO smartphones
                     (model_name, display, battery, camera, ram, storage, price, colors)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                     ON CONFLICT(model_name) DO NOTHING",
                )?;

                for phone in &phones {
                    let changed = stmt.execute(params![
                        phone.model_name,
                        phone.display,
                        phone.battery,
                        phone.camera,
                        phone.ram,
                        phone.storage,
                        phone.price,
                        phone.colors,
                    ])?;

                    if changed == 0 {
                        tracing::debug!(model = %phone.model_name, "already in catalog, skipped");
                        report.skipped += 1;
                    } else {
                        report.inserted += 1;
                    }
                }
            }

            tx.commit()?;
            Ok::<SeedReport, anyhow::Error>(report)
        })
        .await??;

        tracing::info!(
            inserted = report.inserted,
            skipped = report.skipped,
            "catalog seeded"
        );
        Ok(report)
    }

    pub async fn count(&self) -> Result<usize> {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)?;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM smartphones", [], |row| {
                row.get(0)
            })?;
            Ok::<usize, anyhow::Error>(count as usize)
        })
        .await?
    }

    /// Drops and recreates the table. Used before a full reseed.
    pub async fn reset(&self) -> Result<()> {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)?;
            conn.execute("DROP TABLE IF EXISTS smartphones", [])?;
            create_table(&conn)?;
            Ok::<(), anyhow::Error>(())
        })
        .await??;

        tracing::info!(path = %self.db_path.display(), "catalog reset");
        Ok(())
    }
}

fn create_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS smartphones (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            model_name TEXT NOT NULL UNIQUE CHECK (length(trim(model_name)) > 0),
            display TEXT,
            battery TEXT,
            camera TEXT,
            ram TEXT,
            storage TEXT,
            price TEXT,
            colors TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

/// Escapes LIKE wildcards so user text only ever matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn flatten_or_empty<T>(
    result: std::result::Result<Result<Vec<T>>, task::JoinError>,
    operation: &str,
) -> Vec<T> {
    match result {
        Ok(Ok(items)) => items,
        Ok(Err(e)) => {
            tracing::warn!(operation, error = %e, "catalog read failed");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(operation, error = %e, "catalog task panicked");
            Vec::new()
        }
    }
}
