use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use store::{StudentId, StudentPayload, StudentRecord};

use crate::client::StudentApi;
use crate::error::ApiError;

/// In-memory [`StudentApi`] for tests and demos.
///
/// Behaves like the REST resource: ids are assigned on create, unknown ids
/// answer 404. Clones share the same collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryStudentApi {
    students: Arc<Mutex<Vec<StudentRecord>>>,
    next_id: Arc<AtomicI64>,
    requests: Arc<AtomicUsize>,
    offline: Arc<AtomicBool>,
}

impl MemoryStudentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection. New ids continue after the largest numeric id.
    pub fn with_students(students: Vec<StudentRecord>) -> Self {
        let max_id = students
            .iter()
            .filter_map(|s| match s.id {
                StudentId::Number(n) => Some(n),
                StudentId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        let api = Self::default();
        api.next_id.store(max_id, Ordering::SeqCst);
        *api.students.lock().unwrap() = students;
        api
    }

    /// Number of calls received, failed ones included.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// While offline every call fails with [`ApiError::Network`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Current server-side contents.
    pub fn students(&self) -> Vec<StudentRecord> {
        self.students.lock().unwrap().clone()
    }

    fn begin(&self) -> Result<(), ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

impl StudentApi for MemoryStudentApi {
    async fn list(&self) -> Result<Vec<StudentRecord>, ApiError> {
        self.begin()?;
        Ok(self.students())
    }

    async fn create(&self, payload: &StudentPayload) -> Result<StudentRecord, ApiError> {
        self.begin()?;
        let id = StudentId::Number(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let record = StudentRecord::from_payload(id, payload.clone());
        self.students.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> Result<StudentRecord, ApiError> {
        self.begin()?;
        let mut students = self.students.lock().unwrap();
        let slot = students
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(ApiError::Status(404))?;
        *slot = StudentRecord::from_payload(id.clone(), payload.clone());
        Ok(slot.clone())
    }

    async fn remove(&self, id: &StudentId) -> Result<(), ApiError> {
        self.begin()?;
        let mut students = self.students.lock().unwrap();
        let before = students.len();
        students.retain(|s| &s.id != id);
        if students.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> StudentPayload {
        StudentPayload {
            name: name.to_string(),
            age: Some(11),
            address: "X".to_string(),
            guardian_name: "G".to_string(),
            guardian_contact: "C".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids() {
        let api = MemoryStudentApi::new();
        let a = api.create(&payload("A")).await.unwrap();
        let b = api.create(&payload("B")).await.unwrap();
        assert_eq!(a.id, StudentId::Number(1));
        assert_eq!(b.id, StudentId::Number(2));
        assert_eq!(api.list().await.unwrap().len(), 2);
        assert_eq!(api.requests(), 3);
    }

    #[tokio::test]
    async fn test_seeded_ids_continue() {
        let api = MemoryStudentApi::new();
        let seeded = api.create(&payload("A")).await.unwrap();
        let api = MemoryStudentApi::with_students(vec![StudentRecord {
            id: 41.into(),
            ..seeded
        }]);
        let created = api.create(&payload("B")).await.unwrap();
        assert_eq!(created.id, StudentId::Number(42));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let api = MemoryStudentApi::new();
        assert_eq!(
            api.update(&5.into(), &payload("A")).await,
            Err(ApiError::Status(404))
        );
        assert_eq!(api.remove(&5.into()).await, Err(ApiError::Status(404)));
    }

    #[tokio::test]
    async fn test_offline() {
        let api = MemoryStudentApi::new();
        api.set_offline(true);
        let err = api.list().await.unwrap_err();
        assert!(err.is_network());
        api.set_offline(false);
        assert!(api.list().await.is_ok());
    }
}
