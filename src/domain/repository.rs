use async_trait::async_trait;

use super::department::{Department, DepartmentId};
use super::error::PersistenceError;

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Storage for departments keyed by [`DepartmentId`].
///
/// `save` upserts: a department without identity is inserted and receives one,
/// a department carrying an identity replaces the stored name. `delete_by_id`
/// succeeds whether or not the identity exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync + 'static {
    async fn save(&self, department: Department) -> Result<Department>;
    async fn find_all(&self) -> Result<Vec<Department>>;
    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>>;
    async fn delete_by_id(&self, id: DepartmentId) -> Result<()>;
}
