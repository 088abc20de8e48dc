//! # In-Memory Review Store
//!
//! [`ReviewStore`] adapter keeping rows in insertion order.

use crate::ports::outbound::{ReviewStore, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use shared_types::{NewReview, Review};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    rows: RwLock<Vec<Review>>,
    offline: AtomicBool,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fully formed row as-is, replacing any row with the same id.
    pub fn put(&self, review: Review) {
        let mut rows = self.rows.write();
        match rows.iter_mut().find(|row| row.id == review.id) {
            Some(existing) => *existing = review,
            None => rows.push(review),
        }
    }

    /// Make every subsequent insert fail with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn insert(&self, review: NewReview) -> Result<Review, StoreError> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("store is offline".into()));
        }

        let NewReview { draft, signed } = review;
        let (wallet_address, signature, message_hash) = signed.into_columns();

        let row = Review {
            id: Uuid::new_v4().to_string(),
            user_id: draft.user_id,
            hotel_id: draft.hotel_id,
            rating: draft.rating,
            comment: draft.comment,
            created_at: Utc::now(),
            wallet_address,
            signature,
            message_hash,
        };

        debug!(review_id = %row.id, hotel_id = %row.hotel_id, "Review stored");
        self.rows.write().push(row.clone());
        Ok(row)
    }

    async fn get(&self, id: &str) -> Result<Option<Review>, StoreError> {
        Ok(self.rows.read().iter().find(|row| row.id == id).cloned())
    }

    async fn list_by_hotel(&self, hotel_id: &str) -> Result<Vec<Review>, StoreError> {
        Ok(self
            .rows
            .read()
            .iter()
            .rev()
            .filter(|row| row.hotel_id == hotel_id)
            .cloned()
            .collect())
    }
}
