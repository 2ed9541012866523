use crate::domain::department::{Department, DepartmentId};
use crate::domain::repository::{DepartmentRepository, Result};
use async_trait::async_trait;

/// CRUD surface over departments. Every call forwards to exactly one
/// repository operation; failures come back untouched.
#[async_trait]
pub trait DepartmentService: Send + Sync + 'static {
    async fn save_department(&self, department: Department) -> Result<Department>;
    async fn get_all_departments(&self) -> Result<Vec<Department>>;
    async fn get_department_by_id(&self, id: DepartmentId) -> Result<Option<Department>>;
    async fn delete_department(&self, id: DepartmentId) -> Result<()>;
}

#[derive(Clone)]
pub struct DepartmentServiceImpl<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: DepartmentRepository> DepartmentService for DepartmentServiceImpl<R> {
    async fn save_department(&self, department: Department) -> Result<Department> { self.repo.save(department).await }
    async fn get_all_departments(&self) -> Result<Vec<Department>> { self.repo.find_all().await }
    async fn get_department_by_id(&self, id: DepartmentId) -> Result<Option<Department>> { self.repo.find_by_id(id).await }
    async fn delete_department(&self, id: DepartmentId) -> Result<()> { self.repo.delete_by_id(id).await }
}
