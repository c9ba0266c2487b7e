use crate::{errors::PipelineError, serializer::TableSpec};
use serde_json::Value;
use std::fmt::{self, Debug};
use tracing::{debug, info};
use turso::{params, Connection, Database, Value as TursoValue};

pub mod sql;

/// A provider for interacting with a local SQLite database using Turso.
///
/// This provider holds a `Database` instance, which manages a connection
/// pool. When cloned, it shares the same underlying database, allowing for
/// concurrent and shared access to the same database file or in-memory
/// instance. Each operation opens and releases its own short-lived
/// connection; the pipeline needs no multi-statement atomicity.
#[derive(Clone)]
pub struct SqliteProvider {
    /// The Turso database instance. It's cloneable and thread-safe.
    pub db: Database,
}

impl SqliteProvider {
    /// Creates a new `SqliteProvider` from a file path or in-memory.
    ///
    /// # Arguments
    ///
    /// * `db_path`: The path to the SQLite database file. Use ":memory:" for
    ///   a unique, isolated in-memory database. To share an in-memory
    ///   database across multiple `SqliteProvider` instances (e.g., in
    ///   tests), create one provider and then `.clone()` it.
    pub async fn new(db_path: &str) -> Result<Self, PipelineError> {
        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| PipelineError::StorageConnection(e.to_string()))?;

        // WAL mode improves concurrency for file-based databases and is a
        // no-op for in-memory ones.
        let conn = db
            .connect()
            .map_err(|e| PipelineError::StorageConnection(e.to_string()))?;
        // Use `query` for PRAGMA statements that return a value to avoid
        // "unexpected row" errors.
        conn.query("PRAGMA journal_mode=WAL;", ())
            .await
            .map_err(|e| PipelineError::StorageConnection(e.to_string()))?;

        Ok(Self { db })
    }

    fn connect(&self) -> Result<Connection, PipelineError> {
        self.db
            .connect()
            .map_err(|e| PipelineError::StorageConnection(e.to_string()))
    }

    /// Ensures that all required application tables exist.
    /// This function is idempotent and safe to call on every startup.
    pub async fn initialize_schema(&self) -> Result<(), PipelineError> {
        let conn = self.connect()?;

        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ())
                .await
                .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;
        }
        Ok(())
    }

    /// Loads the reference dataset, keyed by primary key.
    ///
    /// Idempotent: rows already present are left untouched, so uploaded
    /// sample images survive a restart.
    pub async fn seed_reference_data(&self) -> Result<(), PipelineError> {
        let conn = self.connect()?;

        for statement in sql::REFERENCE_DATA_SQL {
            conn.execute(statement, ())
                .await
                .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;
        }
        info!("Reference dataset loaded");
        Ok(())
    }

    /// Executes a read query and returns each row as a JSON object keyed by
    /// column name.
    pub async fn execute_query(&self, query: &str) -> Result<Vec<Value>, PipelineError> {
        debug!(query = %query, "--> Executing SQLite query");

        let conn = self.connect()?;

        let mut stmt = conn
            .prepare(query)
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        let column_names: Vec<String> = stmt
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let mut rows = stmt
            .query(())
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        let mut json_results: Vec<Value> = Vec::new();

        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?
        {
            json_results.push(row_to_json(&column_names, &row)?);
        }

        Ok(json_results)
    }

    /// Reads a full table in its natural retrieval order for prompt context.
    pub async fn read_table(&self, spec: &TableSpec) -> Result<Vec<Value>, PipelineError> {
        self.execute_query(&format!(
            "SELECT * FROM {} ORDER BY {} ASC",
            spec.table, spec.primary_key
        ))
        .await
    }

    /// Looks up a single Sample row by id.
    pub async fn fetch_sample(&self, sample_id: i64) -> Result<Option<Value>, PipelineError> {
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare("SELECT * FROM Sample WHERE sample_id = ?")
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        let column_names: Vec<String> = stmt
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let mut rows = stmt
            .query(params![sample_id])
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        match rows
            .next()
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?
        {
            Some(row) => Ok(Some(row_to_json(&column_names, &row)?)),
            None => Ok(None),
        }
    }

    /// Stores raw image bytes against a Sample row.
    ///
    /// Returns `false` when no row with the given id exists.
    pub async fn store_sample_image(
        &self,
        sample_id: i64,
        bytes: Vec<u8>,
    ) -> Result<bool, PipelineError> {
        if self.fetch_sample(sample_id).await?.is_none() {
            return Ok(false);
        }

        let conn = self.connect()?;
        conn.execute(
            "UPDATE Sample SET image = ? WHERE sample_id = ?",
            params![bytes, sample_id],
        )
        .await
        .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        Ok(true)
    }

    /// Loads the stored image bytes for a Sample, if any.
    ///
    /// A missing row and a NULL blob are both `None`: retrieval must never
    /// report an empty success.
    pub async fn load_sample_image(
        &self,
        sample_id: i64,
    ) -> Result<Option<Vec<u8>>, PipelineError> {
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare("SELECT image FROM Sample WHERE sample_id = ?")
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        let mut rows = stmt
            .query(params![sample_id])
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        let row = match rows
            .next()
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?
        {
            Some(row) => row,
            None => return Ok(None),
        };

        let value = row
            .get_value(0)
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        match value {
            TursoValue::Blob(bytes) if !bytes.is_empty() => Ok(Some(bytes)),
            _ => Ok(None),
        }
    }
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider").finish_non_exhaustive()
    }
}

/// Converts one result row to a JSON object keyed by column name.
fn row_to_json(column_names: &[String], row: &turso::Row) -> Result<Value, PipelineError> {
    let mut row_map = serde_json::Map::new();
    for (i, name) in column_names.iter().enumerate() {
        let value = row
            .get_value(i)
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;
        row_map.insert(name.clone(), turso_value_to_json(value));
    }
    Ok(Value::Object(row_map))
}

/// Converts a Turso value to a serde_json::Value.
fn turso_value_to_json(v: TursoValue) -> Value {
    match v {
        TursoValue::Null => Value::Null,
        TursoValue::Integer(i) => Value::Number(i.into()),
        TursoValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        TursoValue::Text(s) => Value::String(s),
        TursoValue::Blob(_) => Value::String("<blob>".to_string()),
    }
}
