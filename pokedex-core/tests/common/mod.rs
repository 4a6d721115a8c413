//! Shared helpers for pokedex-core integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use pokedex_core::catalog::Creature;
use pokedex_core::storage::{KeyValueStore, MemoryStore, StorageError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// The three Kanto starters, in catalog order
pub fn starters() -> Vec<Creature> {
    vec![
        Creature::new(1, "Bulbizarre")
            .with_english_name("Bulbasaur")
            .with_types(&["Plante", "Poison"])
            .with_generation(1),
        Creature::new(4, "Salamèche")
            .with_english_name("Charmander")
            .with_types(&["Feu"])
            .with_generation(1),
        Creature::new(7, "Carapuce")
            .with_english_name("Squirtle")
            .with_types(&["Eau"])
            .with_generation(1),
    ]
}

/// Starters plus a few later-generation entries
pub fn small_catalog() -> Vec<Creature> {
    let mut creatures = starters();
    creatures.extend([
        Creature::new(25, "Pikachu")
            .with_english_name("Pikachu")
            .with_types(&["Électrik"])
            .with_generation(1),
        Creature::new(152, "Germignon")
            .with_english_name("Chikorita")
            .with_types(&["Plante"])
            .with_generation(2),
        Creature::new(155, "Héricendre")
            .with_english_name("Cyndaquil")
            .with_types(&["Feu"])
            .with_generation(2),
        Creature::new(258, "Gobou")
            .with_english_name("Mudkip")
            .with_types(&["Eau"])
            .with_generation(3),
    ]);
    creatures
}

/// Memory store whose reads and writes can be switched to fail
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn unavailable(&self) -> StorageError {
        StorageError::Unavailable("disk full".into())
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(self.unavailable());
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(self.unavailable());
        }
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(self.unavailable());
        }
        self.inner.delete(key).await
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
