use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::model::config::DEFAULT_TIMESTAMP_FORMAT;
use crate::model::todo::{TodoId, TodoRecord};
use crate::ops::clock::{Clock, SystemClock};

/// Error type for to-do operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("to-do content is empty")]
    EmptyContent,
}

/// Ordered to-do records, newest first, plus the id counter.
#[derive(Debug)]
pub struct TodoCollection {
    records: Vec<TodoRecord>,
    last_id: u64,
    clock: Box<dyn Clock>,
    timestamp_format: String,
}

impl Default for TodoCollection {
    fn default() -> Self {
        TodoCollection::new()
    }
}

impl TodoCollection {
    /// Empty collection stamping records from the system clock
    pub fn new() -> Self {
        TodoCollection::with_clock(Box::new(SystemClock), DEFAULT_TIMESTAMP_FORMAT)
    }

    pub fn with_clock(clock: Box<dyn Clock>, timestamp_format: &str) -> Self {
        TodoCollection {
            records: Vec::new(),
            last_id: 0,
            clock,
            timestamp_format: timestamp_format.to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a record at the front. Whitespace-only content is rejected without
    /// minting an id.
    pub fn add(&mut self, content: &str) -> Result<TodoRecord, TodoError> {
        let content = normalize_content(content)?;
        self.last_id += 1;
        let id = TodoId(self.last_id);
        let created_at = format_timestamp(self.clock.now(), &self.timestamp_format);
        let record = TodoRecord::new(id, content, created_at);
        self.records.insert(0, record.clone());
        Ok(record)
    }

    /// Remove the record with `id`. Returns false (and does nothing) if absent.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// Replace the content of the record with `id`. Absent ids are a no-op;
    /// empty content is rejected the same way `add` rejects it.
    pub fn modify(&mut self, id: TodoId, content: &str) -> Result<(), TodoError> {
        let content = normalize_content(content)?;
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.content = content;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Records in display order (newest first)
    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoRecord> {
        self.records.iter()
    }
}

/// Trim surrounding whitespace; empty after trimming is an error.
fn normalize_content(content: &str) -> Result<String, TodoError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(TodoError::EmptyContent);
    }
    Ok(trimmed.to_string())
}

/// Format with `fmt`, falling back to the default format if `fmt` is not a
/// valid strftime string.
pub fn format_timestamp(at: NaiveDateTime, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(fmt)).is_ok() {
        return out;
    }
    at.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
}
