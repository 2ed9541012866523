use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{sqlite::{SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};

use crate::domain::{
    department::{Department, DepartmentId},
    error::PersistenceError,
    repository::{DepartmentRepository, Result},
};

#[derive(Clone)]
pub struct SqliteDepartmentRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteDepartmentRepository {
    /// Pooled `sqlite::memory:` connections share one database, which is dropped
    /// once its last connection closes. Such pools keep one connection open for
    /// their whole lifetime.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let mut options = SqlitePoolOptions::new().max_connections(max_connections);
        if database_url.starts_with("sqlite::memory:") {
            options = options.min_connections(1).idle_timeout(None).max_lifetime(None);
        }
        let pool = options.connect(database_url).await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    pub async fn init(&self) -> Result<()> {
        // AUTOINCREMENT keeps deleted ids from being handed out again.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS departments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl DepartmentRepository for SqliteDepartmentRepository {
    async fn save(&self, department: Department) -> Result<Department> {
        let Some(id) = department.id_department else {
            let result = sqlx::query("INSERT INTO departments (name) VALUES (?1)")
                .bind(&department.name)
                .execute(&*self.pool)
                .await?;
            let id = to_department_id(result.last_insert_rowid())?;
            tracing::debug!(%id, name = %department.name, "department inserted");
            return Ok(Department::with_id(id, department.name));
        };

        let Ok(key) = i64::try_from(id.0) else { return Err(PersistenceError::UnknownIdentity(id)) };
        let result = sqlx::query("UPDATE departments SET name = ?2 WHERE id = ?1")
            .bind(key)
            .bind(&department.name)
            .execute(&*self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(PersistenceError::UnknownIdentity(id));
        }
        tracing::debug!(%id, name = %department.name, "department updated");
        Ok(department)
    }

    async fn find_all(&self) -> Result<Vec<Department>> {
        let rows = sqlx::query("SELECT id, name FROM departments ORDER BY id")
            .fetch_all(&*self.pool)
            .await?;
        rows.into_iter().map(row_to_department).collect()
    }

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>> {
        // Ids past i64::MAX can never have been stored.
        let Ok(key) = i64::try_from(id.0) else { return Ok(None) };
        let row = sqlx::query("SELECT id, name FROM departments WHERE id = ?1")
            .bind(key)
            .fetch_optional(&*self.pool)
            .await?;
        row.map(row_to_department).transpose()
    }

    async fn delete_by_id(&self, id: DepartmentId) -> Result<()> {
        let Ok(key) = i64::try_from(id.0) else { return Ok(()) };
        let result = sqlx::query("DELETE FROM departments WHERE id = ?1")
            .bind(key)
            .execute(&*self.pool)
            .await?;
        tracing::debug!(%id, removed = result.rows_affected(), "department delete");
        Ok(())
    }
}

fn to_department_id(raw: i64) -> Result<DepartmentId> {
    u64::try_from(raw)
        .map(DepartmentId)
        .map_err(|_| PersistenceError::Corrupt(format!("negative department id {raw}")))
}

fn row_to_department(row: SqliteRow) -> Result<Department> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    Ok(Department::with_id(to_department_id(id)?, name))
}
