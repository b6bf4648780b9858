//! Validated todo inputs
//!
//! `NewTodo` carries everything the create path needs; `TodoChanges` is a
//! partial update where `None` means "leave the column alone".

use super::TodoTitle;

/// Input for creating a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: TodoTitle,
    pub description: Option<String>,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: TodoTitle) -> Self {
        Self {
            title,
            description: None,
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Partial update for a todo.
///
/// `description` is doubly optional: `Some(None)` clears the column,
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: Option<TodoTitle>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl TodoChanges {
    /// True when no field is set; such an update must not touch the row.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_defaults() {
        let todo = NewTodo::new(TodoTitle::new("Buy milk").unwrap());
        assert_eq!(todo.description, None);
        assert!(!todo.completed);
    }

    #[test]
    fn new_todo_builders() {
        let todo = NewTodo::new(TodoTitle::new("Buy milk").unwrap())
            .with_description("two litres")
            .with_completed(true);
        assert_eq!(todo.description.as_deref(), Some("two litres"));
        assert!(todo.completed);
    }

    #[test]
    fn default_changes_are_empty() {
        assert!(TodoChanges::default().is_empty());
    }

    #[test]
    fn clearing_description_is_a_change() {
        let changes = TodoChanges {
            description: Some(None),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn completed_false_is_a_change() {
        let changes = TodoChanges {
            completed: Some(false),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
