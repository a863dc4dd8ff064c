//! Storage layer for the expense tracker
//!
//! `Storage` owns the in-memory tracker state together with the key-value
//! store it is persisted to and the audit logger. The store is injected, so
//! the same code runs against files on disk or an in-memory map.

pub mod file_io;
pub mod kv;
pub mod state;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use state::{LoadWarning, CATEGORIES_KEY, EXPENSES_KEY, MONTH_KEY};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Month, TrackerState};

/// Coordinator for state, persistence and auditing
pub struct Storage {
    store: Box<dyn KeyValueStore>,
    audit: Option<AuditLogger>,
    audit_failures: Vec<TrackerError>,
    state: TrackerState,
}

impl Storage {
    /// Create storage over an arbitrary store, starting from default state
    ///
    /// Call [`Storage::load`] to read persisted values.
    pub fn new(store: Box<dyn KeyValueStore>, audit: Option<AuditLogger>) -> Self {
        Self {
            store,
            audit,
            audit_failures: Vec::new(),
            state: TrackerState::defaults(Month::current()),
        }
    }

    /// File-backed storage under the configured data directory, with auditing
    pub fn open(paths: &TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self::new(
            Box::new(FileStore::new(paths.data_dir())),
            Some(AuditLogger::new(paths.audit_log())),
        ))
    }

    /// Storage backed by an in-memory map, without auditing
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), None)
    }

    /// Load persisted state, defaulting the month to the current one
    pub fn load(&mut self) -> TrackerResult<Vec<LoadWarning>> {
        self.load_as_of(Month::current())
    }

    /// Load persisted state, using `default_month` when none is stored
    pub fn load_as_of(&mut self, default_month: Month) -> TrackerResult<Vec<LoadWarning>> {
        let (state, warnings) = state::load_state(self.store.as_ref(), default_month)?;
        self.state = state;
        Ok(warnings)
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TrackerState {
        &mut self.state
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    pub fn save_expenses(&mut self) -> TrackerResult<()> {
        let value = state::encode_expenses(&self.state.expenses)?;
        self.store.set(EXPENSES_KEY, &value)
    }

    pub fn save_categories(&mut self) -> TrackerResult<()> {
        let value = state::encode_categories(&self.state.categories)?;
        self.store.set(CATEGORIES_KEY, &value)
    }

    pub fn save_month(&mut self) -> TrackerResult<()> {
        let value = state::encode_month(self.state.month);
        self.store.set(MONTH_KEY, &value)
    }

    /// Persist all three values
    ///
    /// Each key is written on its own; a failure part way leaves earlier keys
    /// updated.
    pub fn save_all(&mut self) -> TrackerResult<()> {
        self.save_expenses()?;
        self.save_categories()?;
        self.save_month()
    }

    // Audit helpers. Entries are appended after the change is saved, so a
    // failed append does not fail the operation; it is kept for
    // `take_audit_failures`. Without a logger these do nothing.

    pub fn log_create<T: Serialize>(
        &mut self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(|| AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &mut self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) {
        self.log(|| {
            AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff_summary)
        })
    }

    pub fn log_delete<T: Serialize>(
        &mut self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_entry(&mut self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                self.audit_failures.push(e);
            }
        }
    }

    /// Audit appends that failed since the last call
    pub fn take_audit_failures(&mut self) -> Vec<TrackerError> {
        std::mem::take(&mut self.audit_failures)
    }

    fn log(&mut self, build: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&build()) {
                self.audit_failures.push(e);
            }
        }
    }
}
