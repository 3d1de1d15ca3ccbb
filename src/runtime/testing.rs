//! Mock implementations for testing
//!
//! These mocks enable integration testing without real I/O.

use super::traits::ReviewStore;
use crate::db::Review;
use crate::state_machine::NewReview;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

// ============================================================================
// In-Memory Review Store
// ============================================================================

/// Review store that keeps reviews in a `Vec`, with injectable failures
pub struct InMemoryReviewStore {
    reviews: Mutex<Vec<Review>>,
    next_id: Mutex<i64>,
    /// Number of upcoming `create_review` calls that should fail
    failures: Mutex<usize>,
}

#[allow(dead_code)]
impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self {
            reviews: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            failures: Mutex::new(0),
        }
    }

    /// Make the next `count` writes fail
    pub fn fail_next(&self, count: usize) {
        *self.failures.lock().unwrap() = count;
    }

    /// All stored reviews in insertion order
    pub fn all_reviews(&self) -> Vec<Review> {
        self.reviews.lock().unwrap().clone()
    }
}

impl Default for InMemoryReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn create_review(&self, review: &NewReview) -> Result<Review, String> {
        {
            let mut failures = self.failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err("storage unavailable".to_string());
            }
        }

        let mut id_guard = self.next_id.lock().unwrap();
        let id = *id_guard;
        *id_guard += 1;
        drop(id_guard);

        let stored = Review {
            id,
            contact_number: review.contact_number.clone(),
            user_name: review.user_name.clone(),
            product_name: review.product_name.clone(),
            review_text: review.review_text.clone(),
            created_at: Utc::now(),
        };
        self.reviews.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_reviews(&self, skip: u32, limit: u32) -> Result<Vec<Review>, String> {
        let reviews = self.reviews.lock().unwrap();
        Ok(reviews
            .iter()
            .rev()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_review(product: &str) -> NewReview {
        NewReview {
            contact_number: "+1555".to_string(),
            user_name: "Ana".to_string(),
            product_name: product.to_string(),
            review_text: "ok".to_string(),
        }
    }

    #[tokio::test]
    async fn test_in_memory_review_store() {
        let store = InMemoryReviewStore::new();
        store.create_review(&new_review("a")).await.unwrap();
        store.create_review(&new_review("b")).await.unwrap();

        let listed = store.list_reviews(0, 10).await.unwrap();
        assert_eq!(listed[0].product_name, "b");
        assert_eq!(listed[1].product_name, "a");
        assert_eq!(listed[1].id, 1);
    }

    #[tokio::test]
    async fn test_fail_next_is_consumed() {
        let store = InMemoryReviewStore::new();
        store.fail_next(1);

        assert!(store.create_review(&new_review("a")).await.is_err());
        assert!(store.create_review(&new_review("a")).await.is_ok());
        assert_eq!(store.all_reviews().len(), 1);
    }
}
