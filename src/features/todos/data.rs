use chrono::{DateTime, Local};
use uuid::Uuid;

/// Todo item status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoStatus {
    Open,
    Done,
}

impl std::fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoStatus::Open => write!(f, "Open"),
            TodoStatus::Done => write!(f, "Done"),
        }
    }
}

/// Individual todo item
#[derive(Debug, Clone)]
pub struct TodoItem {
    pub id: Uuid,
    pub text: String,
    pub status: TodoStatus,
    pub created_at: DateTime<Local>,
}

impl TodoItem {
    /// Create a new open todo with a fresh id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            status: TodoStatus::Open,
            created_at: Local::now(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TodoStatus::Done
    }
}

/// Aggregate statistics for the progress display
#[derive(Debug, Clone, Copy)]
pub struct TodoStats {
    pub total: usize,
    pub done: usize,
    pub open: usize,
    pub completion_percentage: f64,
}

/// Ordered in-memory todo collection
///
/// Items keep their insertion order; nothing here sorts or persists. The
/// process owns the list for its lifetime.
#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a new open todo at the end of the list
    pub fn add(&mut self, text: impl Into<String>) {
        self.items.push(TodoItem::new(text));
    }

    /// Flip the status of the todo at `index`, returning the new status
    pub fn toggle(&mut self, index: usize) -> Option<TodoStatus> {
        let item = self.items.get_mut(index)?;
        item.status = match item.status {
            TodoStatus::Open => TodoStatus::Done,
            TodoStatus::Done => TodoStatus::Open,
        };
        Some(item.status)
    }

    /// Remove and return the todo at `index`
    pub fn remove(&mut self, index: usize) -> Option<TodoItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Calculate aggregate statistics over the whole list
    pub fn stats(&self) -> TodoStats {
        let total = self.items.len();
        let done = self.items.iter().filter(|t| t.is_done()).count();
        let open = total - done;

        let completion_percentage = if total > 0 {
            (done as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        TodoStats {
            total,
            done,
            open,
            completion_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_status_display() {
        assert_eq!(TodoStatus::Open.to_string(), "Open");
        assert_eq!(TodoStatus::Done.to_string(), "Done");
    }

    #[test]
    fn test_new_item_is_open() {
        let item = TodoItem::new("write release notes");
        assert_eq!(item.status, TodoStatus::Open);
        assert_eq!(item.text, "write release notes");
        assert!(!item.is_done());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut list = TodoList::new();
        list.add("first");
        list.add("second");
        list.add("third");

        let texts: Vec<&str> = list.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        assert_ne!(list.items()[0].id, list.items()[1].id);
    }

    #[test]
    fn test_toggle_flips_status_both_ways() {
        let mut list = TodoList::new();
        list.add("task");

        assert_eq!(list.toggle(0), Some(TodoStatus::Done));
        assert!(list.items()[0].is_done());

        assert_eq!(list.toggle(0), Some(TodoStatus::Open));
        assert!(!list.items()[0].is_done());
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut list = TodoList::new();
        assert_eq!(list.toggle(0), None);
    }

    #[test]
    fn test_remove_returns_item_and_keeps_order() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.text, "b");

        let texts: Vec<&str> = list.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);

        assert!(list.remove(5).is_none());
    }

    #[test]
    fn test_stats_counts() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        list.add("c");
        list.add("d");
        list.toggle(0);
        list.toggle(2);

        let stats = list.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.done, 2);
        assert_eq!(stats.open, 2);
        assert!((stats.completion_percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_empty_list() {
        let list = TodoList::new();
        let stats = list.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.done, 0);
        assert_eq!(stats.open, 0);
        assert_eq!(stats.completion_percentage, 0.0);
    }
}
