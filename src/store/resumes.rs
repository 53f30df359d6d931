//! Repository for the résumé collection.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::{JsonStore, StoreError};
use crate::constants::storage;
use crate::models::Resume;

/// Résumé collection held in memory and mirrored to disk on every
/// mutation. Reads never touch the file after the initial load.
#[derive(Clone)]
pub struct ResumeRepository {
    store: JsonStore,
    resumes: Arc<RwLock<Vec<Resume>>>,
}

impl ResumeRepository {
    #[must_use]
    pub fn new(store: JsonStore) -> Self {
        let resumes = store.load_or(storage::RESUMES, Vec::new);
        Self {
            store,
            resumes: Arc::new(RwLock::new(resumes)),
        }
    }

    pub async fn list(&self) -> Vec<Resume> {
        self.resumes.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Resume> {
        self.resumes.read().await.iter().find(|r| r.id == id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.resumes.read().await.len()
    }

    pub async fn add(&self, resume: Resume) -> Result<(), StoreError> {
        let mut resumes = self.resumes.write().await;
        info!("Saving new resume '{}' ({})", resume.title, resume.id);
        resumes.push(resume);
        self.store.save(storage::RESUMES, &resumes)
    }

    /// Replace the résumé matching `resume.id`, leaving others untouched.
    pub async fn update(&self, resume: Resume) -> Result<(), StoreError> {
        let mut resumes = self.resumes.write().await;
        let Some(existing) = resumes.iter_mut().find(|r| r.id == resume.id) else {
            return Err(StoreError::NotFound("Resume", resume.id));
        };
        *existing = resume;
        self.store.save(storage::RESUMES, &resumes)
    }

    /// Delete by id. Removing an absent id is a no-op.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut resumes = self.resumes.write().await;
        let before = resumes.len();
        resumes.retain(|r| r.id != id);
        if resumes.len() < before {
            info!("Deleted resume {id}");
        }
        self.store.save(storage::RESUMES, &resumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(dir: &std::path::Path) -> ResumeRepository {
        ResumeRepository::new(JsonStore::new(dir))
    }

    fn resume(title: &str) -> Resume {
        let mut r = Resume::new();
        r.title = title.to_string();
        r
    }

    #[tokio::test]
    async fn add_update_remove_reflect_in_list() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(dir.path());

        let first = resume("First");
        let mut second = resume("Second");
        repo.add(first.clone()).await.unwrap();
        repo.add(second.clone()).await.unwrap();

        second.title = "Second (edited)".to_string();
        repo.update(second.clone()).await.unwrap();
        repo.remove(&first.id).await.unwrap();

        let survivors = repo.list().await;
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].id, second.id);
        assert_eq!(survivors[0].title, "Second (edited)");
    }

    #[tokio::test]
    async fn reload_yields_identical_collection() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(dir.path());
        repo.add(resume("Frontend Engineer Resume")).await.unwrap();
        repo.add(resume("Backend Engineer Resume")).await.unwrap();
        let original = repo.list().await;

        // Fresh repository over the same directory simulates a restart.
        let reloaded = ResumeRepository::new(JsonStore::new(dir.path()));
        assert_eq!(reloaded.list().await, original);
    }

    #[tokio::test]
    async fn remove_absent_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(dir.path());
        repo.add(resume("Only")).await.unwrap();

        repo.remove("does-not-exist").await.unwrap();
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn update_unknown_resume_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(dir.path());

        let err = repo.update(resume("Ghost")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(..)));
    }
}
