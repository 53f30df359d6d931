//! Repository for the common-code reference table.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::{JsonStore, StoreError};
use crate::constants::storage;
use crate::models::{CodeCategory, CommonCode, default_codes};

/// Common codes held in memory and mirrored to disk on every mutation.
/// A missing or corrupt collection is replaced by the built-in default
/// set rather than starting empty.
#[derive(Clone)]
pub struct CodeRepository {
    store: JsonStore,
    codes: Arc<RwLock<Vec<CommonCode>>>,
}

impl CodeRepository {
    pub fn new(store: JsonStore) -> Result<Self, StoreError> {
        let mut seeded = false;
        let codes = store.load_or(storage::COMMON_CODES, || {
            seeded = true;
            default_codes()
        });
        if seeded {
            store.save(storage::COMMON_CODES, &codes)?;
            info!("Seeded {} default common codes", codes.len());
        }
        Ok(Self {
            store,
            codes: Arc::new(RwLock::new(codes)),
        })
    }

    pub async fn all(&self) -> Vec<CommonCode> {
        self.codes.read().await.clone()
    }

    /// All codes of a category, active or not, ordered by `order`.
    pub async fn by_category(&self, category: CodeCategory) -> Vec<CommonCode> {
        let codes = self.codes.read().await;
        let mut selected: Vec<CommonCode> = codes
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect();
        selected.sort_by_key(|c| c.order);
        selected
    }

    /// Active codes of a category, ordered by `order`. This is the view
    /// the form dropdowns consume.
    pub async fn active_by_category(&self, category: CodeCategory) -> Vec<CommonCode> {
        let mut selected = self.by_category(category).await;
        selected.retain(|c| c.is_active);
        selected
    }

    /// Append a new code at the end of its category's display order.
    pub async fn add(&self, category: CodeCategory, value: String) -> Result<CommonCode, StoreError> {
        let mut codes = self.codes.write().await;
        let next_order = codes
            .iter()
            .filter(|c| c.category == category)
            .map(|c| c.order)
            .max()
            .unwrap_or(0)
            + 1;

        let code = CommonCode::new(category, value, next_order);
        codes.push(code.clone());
        self.store.save(storage::COMMON_CODES, &codes)?;
        Ok(code)
    }

    pub async fn update_value(&self, id: &str, value: String) -> Result<CommonCode, StoreError> {
        let mut codes = self.codes.write().await;
        let Some(code) = codes.iter_mut().find(|c| c.id == id) else {
            return Err(StoreError::NotFound("Common code", id.to_string()));
        };
        code.value = value;
        code.updated_at = Utc::now().to_rfc3339();
        let updated = code.clone();
        self.store.save(storage::COMMON_CODES, &codes)?;
        Ok(updated)
    }

    pub async fn set_active(&self, id: &str, is_active: bool) -> Result<CommonCode, StoreError> {
        let mut codes = self.codes.write().await;
        let Some(code) = codes.iter_mut().find(|c| c.id == id) else {
            return Err(StoreError::NotFound("Common code", id.to_string()));
        };
        code.is_active = is_active;
        code.updated_at = Utc::now().to_rfc3339();
        let updated = code.clone();
        self.store.save(storage::COMMON_CODES, &codes)?;
        Ok(updated)
    }

    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut codes = self.codes.write().await;
        codes.retain(|c| c.id != id);
        self.store.save(storage::COMMON_CODES, &codes)
    }

    /// Drop everything and restore the built-in default set.
    pub async fn reseed(&self) -> Result<usize, StoreError> {
        let mut codes = self.codes.write().await;
        *codes = default_codes();
        self.store.save(storage::COMMON_CODES, &codes)?;
        Ok(codes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(dir: &std::path::Path) -> CodeRepository {
        CodeRepository::new(JsonStore::new(dir)).unwrap()
    }

    #[tokio::test]
    async fn seeds_defaults_on_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(dir.path());
        assert_eq!(repo.all().await.len(), 25);

        let degrees = repo.by_category(CodeCategory::Degree).await;
        assert_eq!(degrees.len(), 5);
        assert_eq!(degrees[0].value, "고등학교 졸업");
    }

    #[tokio::test]
    async fn seeds_defaults_over_corrupt_collection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("commonCodes.json"), "[{broken").unwrap();

        let repo = repo(dir.path());
        assert_eq!(repo.all().await.len(), 25);
    }

    #[tokio::test]
    async fn deactivated_code_stays_in_admin_view() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(dir.path());

        let positions = repo.by_category(CodeCategory::Position).await;
        assert_eq!(positions.len(), 15);
        let junior = positions.iter().find(|c| c.value == "사원").unwrap().clone();

        repo.set_active(&junior.id, false).await.unwrap();

        let active = repo.active_by_category(CodeCategory::Position).await;
        assert!(active.iter().all(|c| c.value != "사원"));
        assert_eq!(active.len(), 14);

        let all = repo.by_category(CodeCategory::Position).await;
        let kept = all.iter().find(|c| c.id == junior.id).unwrap();
        assert_eq!(kept.order, junior.order);
        assert!(!kept.is_active);
    }

    #[tokio::test]
    async fn add_appends_after_highest_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(dir.path());

        let added = repo
            .add(CodeCategory::Degree, "명예박사".to_string())
            .await
            .unwrap();
        assert_eq!(added.order, 6);

        let degrees = repo.by_category(CodeCategory::Degree).await;
        assert_eq!(degrees.last().unwrap().value, "명예박사");
    }

    #[tokio::test]
    async fn survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(dir.path());
        repo.add(CodeCategory::Position, "인턴".to_string())
            .await
            .unwrap();

        let reloaded = CodeRepository::new(JsonStore::new(dir.path())).unwrap();
        assert_eq!(reloaded.all().await.len(), 26);
    }
}
