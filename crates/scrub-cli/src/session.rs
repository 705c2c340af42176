//! In-memory session store for the command boundary.
//!
//! A session is the unit through which stage outputs flow: the original
//! table, its inferred type map, and later the cleaned table and cleaning
//! report. The store is an explicit interface injected into the command
//! layer; the pipeline crates never see it, so they stay testable with
//! plain tables.

use std::collections::BTreeMap;

use scrub_model::{FieldTypeMap, Table};
use scrub_transform::PipelineReport;

pub type SessionId = u64;

#[derive(Debug, Clone)]
pub struct Session {
    pub file_name: String,
    pub original: Table,
    pub types: FieldTypeMap,
    pub cleaned: Option<Table>,
    pub report: Option<PipelineReport>,
}

impl Session {
    pub fn new(file_name: String, original: Table, types: FieldTypeMap) -> Self {
        Self {
            file_name,
            original,
            types,
            cleaned: None,
            report: None,
        }
    }
}

pub trait SessionStore {
    fn create(&mut self, session: Session) -> SessionId;
    fn get(&self, id: SessionId) -> Option<&Session>;
    /// Replace an existing session. Returns false when the id is unknown.
    fn update(&mut self, id: SessionId, session: Session) -> bool;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: SessionId,
    sessions: BTreeMap<SessionId, Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn create(&mut self, session: Session) -> SessionId {
        self.next_id += 1;
        self.sessions.insert(self.next_id, session);
        self.next_id
    }

    fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    fn update(&mut self, id: SessionId, session: Session) -> bool {
        if self.sessions.contains_key(&id) {
            self.sessions.insert(id, session);
            true
        } else {
            false
        }
    }
}
