//! Per-car transaction locks.
//!
//! Writes to the same car are serialized; writes to different cars proceed in
//! parallel. An entry lives in the table only while someone holds or awaits it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

type Slot = Arc<Mutex<()>>;

#[derive(Clone, Default)]
pub(crate) struct CarLocks {
    table: Arc<StdMutex<HashMap<Uuid, Slot>>>,
}

impl CarLocks {
    /// Waits until no other holder of `id` remains, then holds it until the guard drops.
    pub(crate) async fn lock(&self, id: Uuid) -> CarLockGuard {
        let slot = self
            .table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_default()
            .clone();

        let guard = slot.clone().lock_owned().await;
        CarLockGuard {
            id,
            slot,
            table: self.table.clone(),
            _guard: guard,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

pub(crate) struct CarLockGuard {
    id: Uuid,
    slot: Slot,
    table: Arc<StdMutex<HashMap<Uuid, Slot>>>,
    _guard: OwnedMutexGuard<()>,
}

impl Drop for CarLockGuard {
    fn drop(&mut self) {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        // Table, this guard's slot and the owned guard: nobody else is waiting
        if Arc::strong_count(&self.slot) == 3 {
            table.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_id_waits_for_the_holder() {
        let locks = CarLocks::default();
        let id = Uuid::new_v4();

        let held = locks.lock(id).await;
        let waiting = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.lock(id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiting.is_finished());

        drop(held);
        waiting.await.unwrap();
        assert_eq!(locks.len(), 0);
    }

    #[tokio::test]
    async fn different_ids_do_not_block() {
        let locks = CarLocks::default();

        let _first = locks.lock(Uuid::new_v4()).await;
        let second = tokio::time::timeout(Duration::from_millis(100), locks.lock(Uuid::new_v4())).await;

        assert!(second.is_ok());
        assert_eq!(locks.len(), 2);
    }
}
