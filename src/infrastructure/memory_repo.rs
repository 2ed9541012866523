use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    department::{Department, DepartmentId},
    error::PersistenceError,
    repository::{DepartmentRepository, Result},
};

#[derive(Default)]
struct Store {
    items: BTreeMap<DepartmentId, Department>,
    last_id: u64,
}

/// Process-local store. Identities start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryDepartmentRepository {
    store: Arc<Mutex<Store>>,
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn save(&self, department: Department) -> Result<Department> {
        let mut store = self.store.lock().await;
        match department.id_department {
            Some(id) => {
                let Some(slot) = store.items.get_mut(&id) else { return Err(PersistenceError::UnknownIdentity(id)) };
                slot.name = department.name;
                tracing::debug!(%id, "department updated");
                Ok(slot.clone())
            }
            None => {
                let next = store
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| PersistenceError::Constraint("department identities exhausted".into()))?;
                store.last_id = next;
                let id = DepartmentId(next);
                let stored = Department::with_id(id, department.name);
                store.items.insert(id, stored.clone());
                tracing::debug!(%id, "department inserted");
                Ok(stored)
            }
        }
    }

    async fn find_all(&self) -> Result<Vec<Department>> {
        Ok(self.store.lock().await.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>> {
        Ok(self.store.lock().await.items.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: DepartmentId) -> Result<()> {
        self.store.lock().await.items.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryDepartmentRepository::default();
        let first = repo.save(Department::new("IT")).await.unwrap();
        assert_eq!(first.id_department, Some(DepartmentId(1)));
        repo.delete_by_id(DepartmentId(1)).await.unwrap();

        let second = repo.save(Department::new("HR")).await.unwrap();
        assert_eq!(second.id_department, Some(DepartmentId(2)));
    }

    #[tokio::test]
    async fn saving_an_unknown_identity_is_rejected() {
        let repo = InMemoryDepartmentRepository::default();
        let err = repo.save(Department::with_id(DepartmentId(5), "Ghost")).await.unwrap_err();
        assert!(matches!(err, PersistenceError::UnknownIdentity(DepartmentId(5))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_the_store() {
        let repo = InMemoryDepartmentRepository::default();
        let other = repo.clone();
        let saved = repo.save(Department::new("IT")).await.unwrap();
        assert_eq!(other.find_by_id(saved.id_department.unwrap()).await.unwrap(), Some(saved));
    }
}
