//! Entry and identity types

use chrono::{DateTime, Local, Utc};
use std::fmt;

/// Identity of an entry, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One accepted name
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    /// Trimmed, never empty
    pub value: String,
    pub created_at: DateTime<Local>,
}

impl Entry {
    pub fn formatted_time(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}

/// Issues entry ids from the wall clock (milliseconds since the epoch).
///
/// Ids are strictly increasing: when the clock has not advanced past the last
/// issued id, the next id is `last + 1`. Two additions within the same
/// millisecond therefore still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Issue an id for the current instant
    pub fn next_id(&mut self) -> EntryId {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(millis)
    }

    /// Issue an id for a given clock reading
    pub fn next_at(&mut self, millis: u64) -> EntryId {
        let id = match self.last {
            Some(last) if millis <= last => last.saturating_add(1),
            _ => millis,
        };
        self.last = Some(id);
        EntryId(id)
    }
}
