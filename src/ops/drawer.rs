use crate::model::todo::TodoId;

/// Which to-do's options drawer is open, if any. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerVisibility {
    target: Option<TodoId>,
}

impl DrawerVisibility {
    pub fn new() -> Self {
        DrawerVisibility::default()
    }

    /// Open for `id`, replacing any current target. The id is not checked.
    pub fn open(&mut self, id: TodoId) {
        self.target = Some(id);
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<TodoId> {
        self.target
    }
}
