//! In-memory order repository.
//!
//! Orders are kept in an append-only `Vec` behind a mutex. Ids are assigned
//! as `len + 1` while the lock is held, which keeps them unique, contiguous,
//! and strictly increasing even under concurrent creation.

use crate::models::Order;
use std::sync::{Mutex, PoisonError};

/// Append-only in-memory order store.
#[derive(Debug, Default)]
pub struct OrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl OrderRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new order and append it to the store.
    ///
    /// The id is `count_at_insertion + 1` and the timestamp is the current
    /// wall-clock time in fractional epoch seconds.
    pub fn create(&self, product: String, quantity: u32, price: f64) -> Order {
        // A poisoned lock only means another thread panicked mid-push; the
        // Vec itself is still usable, so recover the guard.
        let mut orders = self.orders.lock().unwrap_or_else(PoisonError::into_inner);

        let order = Order {
            id: orders.len() as u64 + 1,
            product,
            quantity,
            price,
            timestamp: chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0,
        };

        orders.push(order.clone());
        order
    }

    /// Snapshot of all orders in creation order.
    pub fn list(&self) -> Vec<Order> {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Look up a single order by id.
    pub fn get(&self, id: u64) -> Option<Order> {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    /// Number of orders created so far.
    pub fn count(&self) -> usize {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_create_assigns_contiguous_ids_from_one() {
        let repo = OrderRepository::new();

        for expected_id in 1..=5 {
            let order = repo.create("Widget".to_string(), 1, 9.99);
            assert_eq!(order.id, expected_id);
        }

        assert_eq!(repo.count(), 5);
    }

    #[test]
    fn test_get_returns_created_order() {
        let repo = OrderRepository::new();
        let created = repo.create("Gadget".to_string(), 4, 1.25);

        let fetched = repo.get(created.id).expect("order should exist");
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_missing_order_returns_none() {
        let repo = OrderRepository::new();
        assert!(repo.get(999_999).is_none());

        repo.create("Widget".to_string(), 1, 0.0);
        assert!(repo.get(999_999).is_none());
    }

    #[test]
    fn test_list_preserves_creation_order() {
        let repo = OrderRepository::new();
        repo.create("a".to_string(), 1, 1.0);
        repo.create("b".to_string(), 2, 2.0);
        repo.create("c".to_string(), 3, 3.0);

        let orders = repo.list();
        let ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_concurrent_creation_keeps_ids_unique() {
        let repo = Arc::new(OrderRepository::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    repo.create("Widget".to_string(), 1, 1.0);
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread should not panic");
        }

        let mut ids: Vec<u64> = repo.list().iter().map(|o| o.id).collect();
        ids.sort_unstable();
        let expected: Vec<u64> = (1..=400).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_timestamp_is_recent_epoch_seconds() {
        let repo = OrderRepository::new();
        let before = chrono::Utc::now().timestamp() as f64;
        let order = repo.create("Widget".to_string(), 1, 1.0);
        let after = chrono::Utc::now().timestamp() as f64 + 1.0;

        assert!(order.timestamp >= before);
        assert!(order.timestamp <= after);
    }
}
