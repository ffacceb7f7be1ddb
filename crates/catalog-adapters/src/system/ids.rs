//! Product id generators.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use catalog_core::{application::ports::IdGenerator, domain::ProductId};

/// Random v4 UUIDs. Collision-free for any practical create rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ProductId {
        ProductId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter ids ("4", "5", ...).
///
/// Deterministic, which makes it handy in tests and scripted demos. The
/// caller picks a start past any id already in the store.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ProductId {
        ProductId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn uuids_are_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| UuidGenerator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn sequential_counts_up() {
        let ids = SequentialIdGenerator::starting_at(4);
        assert_eq!(ids.next_id().as_str(), "4");
        assert_eq!(ids.next_id().as_str(), "5");
    }
}
