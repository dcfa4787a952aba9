pub mod mock;

use std::rc::Rc;

use garage_portal::client::{storage::MemoryStorage, store::SessionStore};
use garage_test_utils::{StorageSeed, TestError};

/// Session store over fresh in-memory storage seeded with `seed`
pub fn seeded_store(seed: StorageSeed) -> Result<(SessionStore, MemoryStorage), TestError> {
    let storage: MemoryStorage = seed.build()?.into_iter().collect();
    let store = SessionStore::new(Rc::new(storage.clone()));

    Ok((store, storage))
}
