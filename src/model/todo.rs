use std::fmt;

/// Identifier assigned by a `TodoCollection`. Starts at 1 and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(pub u64);

impl TodoId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId(n)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: TodoId,
    /// Trimmed, non-empty text. May contain newlines.
    pub content: String,
    /// Formatted creation timestamp, fixed once the record exists
    pub created_at: String,
}

impl TodoRecord {
    pub fn new(id: TodoId, content: String, created_at: String) -> Self {
        TodoRecord {
            id,
            content,
            created_at,
        }
    }

    /// Content split into display lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId(7).to_string(), "7");
        assert_eq!(TodoId::from(3).get(), 3);
    }

    #[test]
    fn record_lines_split_on_newline() {
        let record = TodoRecord::new(TodoId(1), "Deadlift\nLunge".into(), "2025-05-14 09:30:00".into());
        let lines: Vec<&str> = record.lines().collect();
        assert_eq!(lines, vec!["Deadlift", "Lunge"]);
    }

    #[test]
    fn todo_id_orders_numerically() {
        assert!(TodoId(2) < TodoId(10));
    }
}
