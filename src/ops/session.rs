//! One in-memory session: the to-do collection and the options drawer,
//! driven by UI events.

use crate::model::todo::{TodoId, TodoRecord};
use crate::ops::clock::Clock;
use crate::ops::drawer::DrawerVisibility;
use crate::ops::todo_ops::{TodoCollection, TodoError};

/// Items the demo session starts with (oldest first)
pub const DEMO_TODOS: [&str; 3] = ["Squats", "Bench press", "Deadlift\nLunge"];

/// Events emitted by the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SubmitNewTodo(String),
    RequestRemove(TodoId),
    RequestModify(TodoId, String),
    OpenOptionsFor(TodoId),
    CloseOptions,
}

/// Read-only view of session state for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Newest first
    pub todos: &'a [TodoRecord],
    pub count: usize,
    pub drawer_target: Option<TodoId>,
}

#[derive(Debug, Default)]
pub struct Session {
    todos: TodoCollection,
    drawer: DrawerVisibility,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn with_clock(clock: Box<dyn Clock>, timestamp_format: &str) -> Self {
        Session {
            todos: TodoCollection::with_clock(clock, timestamp_format),
            drawer: DrawerVisibility::new(),
        }
    }

    /// Add each entry in order. Blank entries are skipped.
    pub fn seed<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            if let Err(e) = self.todos.add(item.as_ref()) {
                tracing::debug!(error = %e, "skipped seed entry");
            }
        }
    }

    /// Apply one UI event. The only failure is empty content on submit/modify,
    /// in which case nothing changes.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), TodoError> {
        match event {
            UiEvent::SubmitNewTodo(content) => {
                self.submit(&content)?;
            }
            UiEvent::RequestRemove(id) => self.remove(id),
            UiEvent::RequestModify(id, content) => self.modify(id, &content)?,
            UiEvent::OpenOptionsFor(id) => {
                tracing::debug!(%id, "options drawer opened");
                self.drawer.open(id);
            }
            UiEvent::CloseOptions => {
                if self.drawer.is_open() {
                    tracing::debug!("options drawer closed");
                }
                self.drawer.close();
            }
        }
        Ok(())
    }

    pub fn submit(&mut self, content: &str) -> Result<TodoRecord, TodoError> {
        match self.todos.add(content) {
            Ok(record) => {
                tracing::info!(id = %record.id, "to-do added");
                Ok(record)
            }
            Err(e) => {
                tracing::info!(error = %e, "submit rejected");
                Err(e)
            }
        }
    }

    /// Remove `id`. Closes the drawer if it was open for that record.
    pub fn remove(&mut self, id: TodoId) {
        if self.todos.remove(id) {
            tracing::info!(%id, "to-do removed");
        }
        if self.drawer.target() == Some(id) {
            self.drawer.close();
        }
    }

    pub fn modify(&mut self, id: TodoId, content: &str) -> Result<(), TodoError> {
        self.todos.modify(id, content).inspect_err(|e| {
            tracing::info!(%id, error = %e, "modify rejected");
        })?;
        if self.todos.contains(id) {
            tracing::info!(%id, "to-do modified");
        }
        Ok(())
    }

    pub fn todos(&self) -> &TodoCollection {
        &self.todos
    }

    pub fn drawer(&self) -> &DrawerVisibility {
        &self.drawer
    }

    /// Record the drawer is open for, if it still exists
    pub fn drawer_record(&self) -> Option<&TodoRecord> {
        self.drawer.target().and_then(|id| self.todos.get(id))
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            todos: self.todos.records(),
            count: self.todos.count(),
            drawer_target: self.drawer.target(),
        }
    }

    /// Tear down view-scoped state. The drawer never outlives its view.
    pub fn unmount(&mut self) {
        self.drawer.close();
    }
}
