use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::repository::CheckoutRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

/// In-memory checkout table keyed by `checkout_id`.
#[derive(Debug, Default, Clone)]
pub struct MemoryCheckoutRepository {
    checkouts: Arc<RwLock<HashMap<String, CheckoutEntity>>>,
}

impl MemoryCheckoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filter<P>(&self, predicate: P) -> Vec<CheckoutEntity>
        where P: Fn(&CheckoutEntity) -> bool {
        let checkouts = self.checkouts.read().await;
        let mut records: Vec<CheckoutEntity> = checkouts.values().filter(|c| predicate(c)).cloned().collect();
        records.sort_by(|a, b| a.checkout_at.cmp(&b.checkout_at));
        records
    }
}

#[async_trait]
impl Repository<CheckoutEntity> for MemoryCheckoutRepository {
    async fn create(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let mut checkouts = self.checkouts.write().await;
        if checkouts.contains_key(&entity.checkout_id) {
            return Err(LibraryError::duplicate_key(
                format!("checkout {} already exists", entity.checkout_id).as_str()));
        }
        // at most one active borrow per patron and book
        if entity.is_active() && checkouts.values().any(|c| c.is_active()
            && c.patron_id == entity.patron_id && c.book_id == entity.book_id) {
            return Err(LibraryError::duplicate_key(
                format!("patron {} already borrowed book {}", entity.patron_id, entity.book_id).as_str()));
        }
        checkouts.insert(entity.checkout_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let mut checkouts = self.checkouts.write().await;
        let existing = checkouts.get_mut(&entity.checkout_id).ok_or_else(|| LibraryError::not_found(
            format!("checkout not found for {}", entity.checkout_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::conflict(
                format!("checkout {} version {} is stale", entity.checkout_id, entity.version).as_str()));
        }
        *existing = entity.clone();
        existing.version = entity.version + 1;
        existing.updated_at = Utc::now().naive_utc();
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<CheckoutEntity> {
        let checkouts = self.checkouts.read().await;
        checkouts.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("checkout not found for {}", id).as_str()))
    }
}

#[async_trait]
impl CheckoutRepository for MemoryCheckoutRepository {
    async fn find_active(&self, patron_id: &str, book_id: &str) -> LibraryResult<Option<CheckoutEntity>> {
        let records = self.filter(|c| c.is_active() && c.patron_id == patron_id && c.book_id == book_id).await;
        Ok(records.into_iter().next())
    }

    async fn list_active(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutEntity>> {
        Ok(self.filter(|c| c.is_active() && c.patron_id == patron_id).await)
    }

    async fn list_by_patron(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutEntity>> {
        Ok(self.filter(|c| c.patron_id == patron_id).await)
    }
}
