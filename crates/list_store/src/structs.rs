//! To-do list domain structures

use crate::error::{Result, StoreError, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bounds on list names and todo text, counted in characters.
pub const NAME_MIN_CHARS: usize = 1;
pub const NAME_MAX_CHARS: usize = 100;

/// A single actionable item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,

    pub name: String,

    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            completed: false,
        }
    }
}

/// A named, ordered collection of todos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    pub id: Uuid,

    pub name: String,

    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// A list counts as complete only when it has todos and all of them
    /// are done. A list with zero todos is never complete.
    pub fn is_complete(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|t| t.completed)
    }

    pub fn todos_total(&self) -> usize {
        self.todos.len()
    }

    pub fn todos_remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Get a todo by id
    pub fn todo(&self, todo_id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == todo_id)
    }

    fn todo_mut(&mut self, todo_id: Uuid) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == todo_id)
    }
}

/// One-shot message surfaced by the next rendered view, then cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Per-browser session state - the full list collection held between
/// requests, plus the pending flash message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// All lists in this session, in creation order.
    pub lists: Vec<TodoList>,

    /// Pending one-shot flash message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,

    /// Last time the session was updated
    pub last_updated: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            flash: None,
            last_updated: Utc::now(),
        }
    }
}

impl SessionState {
    /// Create a new empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Return an error if the name cannot be used for a new or renamed list.
    /// Names are compared exactly, case-sensitive.
    pub fn validate_list_name(&self, name: &str) -> std::result::Result<(), ValidationError> {
        let chars = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
            return Err(ValidationError::InvalidLength("list name"));
        }
        if self.lists.iter().any(|list| list.name == name) {
            return Err(ValidationError::DuplicateName);
        }
        Ok(())
    }

    /// Return an error if the text cannot be used as a todo.
    pub fn validate_todo_text(text: &str) -> std::result::Result<(), ValidationError> {
        let chars = text.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
            return Err(ValidationError::InvalidLength("todo"));
        }
        Ok(())
    }

    /// Get a list by id
    pub fn find_list(&self, list_id: Uuid) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    fn list_index(&self, list_id: Uuid) -> Result<usize> {
        self.lists
            .iter()
            .position(|l| l.id == list_id)
            .ok_or(StoreError::ListNotFound)
    }

    /// Append a new empty list once validation passes. Returns the new id.
    pub fn create_list(&mut self, name: &str) -> Result<Uuid> {
        self.validate_list_name(name)?;
        let list = TodoList::new(name);
        let id = list.id;
        self.lists.push(list);
        Ok(id)
    }

    /// Overwrite the name of an existing list once validation passes.
    /// Renaming a list to its current name counts as a duplicate.
    pub fn rename_list(&mut self, list_id: Uuid, new_name: &str) -> Result<()> {
        let index = self.list_index(list_id)?;
        self.validate_list_name(new_name)?;
        self.lists[index].name = new_name.to_string();
        Ok(())
    }

    /// Remove a list. Later lists keep their relative order.
    pub fn delete_list(&mut self, list_id: Uuid) -> Result<TodoList> {
        let index = self.list_index(list_id)?;
        Ok(self.lists.remove(index))
    }

    /// Append a new incomplete todo to a list. Returns the new todo's id.
    pub fn add_todo(&mut self, list_id: Uuid, text: &str) -> Result<Uuid> {
        let index = self.list_index(list_id)?;
        Self::validate_todo_text(text)?;
        let todo = Todo::new(text);
        let id = todo.id;
        self.lists[index].todos.push(todo);
        Ok(id)
    }

    /// Overwrite the completion flag of a todo.
    pub fn set_todo_completion(
        &mut self,
        list_id: Uuid,
        todo_id: Uuid,
        completed: bool,
    ) -> Result<()> {
        let index = self.list_index(list_id)?;
        let todo = self.lists[index]
            .todo_mut(todo_id)
            .ok_or(StoreError::TodoNotFound)?;
        todo.completed = completed;
        Ok(())
    }

    /// Remove a todo from its list. Later todos keep their relative order.
    pub fn delete_todo(&mut self, list_id: Uuid, todo_id: Uuid) -> Result<Todo> {
        let index = self.list_index(list_id)?;
        let todos = &mut self.lists[index].todos;
        let position = todos
            .iter()
            .position(|t| t.id == todo_id)
            .ok_or(StoreError::TodoNotFound)?;
        Ok(todos.remove(position))
    }

    /// Mark every todo in a list as completed.
    pub fn complete_all(&mut self, list_id: Uuid) -> Result<()> {
        let index = self.list_index(list_id)?;
        for todo in &mut self.lists[index].todos {
            todo.completed = true;
        }
        Ok(())
    }

    /// Store a one-shot flash message, replacing any unread one.
    pub fn set_flash(&mut self, flash: Flash) {
        self.flash = Some(flash);
    }

    /// Consume the pending flash message. Reading clears it.
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }
}
