mod query_tests;

use crate::service::RosterService;
use crate::store::in_memory::InMemoryStore;

pub fn create_test_service() -> RosterService<InMemoryStore> {
    RosterService::new(InMemoryStore::new())
}

pub fn create_seeded_service() -> RosterService<InMemoryStore> {
    RosterService::new(InMemoryStore::seeded())
}
