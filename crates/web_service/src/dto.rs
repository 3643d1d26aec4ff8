//! View DTO layer - what each route renders to the browser client.
//!
//! Display ordering (incomplete entries first) is applied here, during
//! conversion from the domain structs; stored order is never changed.

use list_store::{ordered_lists, ordered_todos, Flash, FlashKind, SessionState, Todo, TodoList};
use serde::{Deserialize, Serialize};

/// One-shot flash message carried by the view that consumed it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FlashView {
    pub kind: String,
    pub message: String,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        FlashView {
            kind: match flash.kind {
                FlashKind::Success => "success",
                FlashKind::Error => "error",
            }
            .to_string(),
            message: flash.message,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TodoView {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        TodoView {
            id: todo.id.to_string(),
            name: todo.name.clone(),
            completed: todo.completed,
        }
    }
}

/// One row on the lists overview.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListSummaryView {
    pub id: String,
    pub name: String,
    pub completed: bool,
    pub todos_total: usize,
    pub todos_remaining: usize,
}

impl From<&TodoList> for ListSummaryView {
    fn from(list: &TodoList) -> Self {
        ListSummaryView {
            id: list.id.to_string(),
            name: list.name.clone(),
            completed: list.is_complete(),
            todos_total: list.todos_total(),
            todos_remaining: list.todos_remaining(),
        }
    }
}

/// A list with its todos in display order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListDetailView {
    pub id: String,
    pub name: String,
    pub completed: bool,
    pub todos: Vec<TodoView>,
}

impl From<&TodoList> for ListDetailView {
    fn from(list: &TodoList) -> Self {
        ListDetailView {
            id: list.id.to_string(),
            name: list.name.clone(),
            completed: list.is_complete(),
            todos: ordered_todos(&list.todos)
                .into_iter()
                .map(TodoView::from)
                .collect(),
        }
    }
}

/// Form state. On a failed validation the submitted value is preserved and
/// the error message attached; otherwise both fields are absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FormView {
    pub value: Option<String>,
    pub error: Option<String>,
}

impl FormView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rejected(value: impl Into<String>, error: impl ToString) -> Self {
        FormView {
            value: Some(value.into()),
            error: Some(error.to_string()),
        }
    }
}

/// GET /lists
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListsPageView {
    pub flash: Option<FlashView>,
    pub lists: Vec<ListSummaryView>,
}

impl ListsPageView {
    pub fn new(state: &SessionState, flash: Option<Flash>) -> Self {
        ListsPageView {
            flash: flash.map(FlashView::from),
            lists: ordered_lists(&state.lists)
                .into_iter()
                .map(ListSummaryView::from)
                .collect(),
        }
    }
}

/// GET /lists/{list_id} - the list detail plus the add-todo form state.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListPageView {
    pub flash: Option<FlashView>,
    pub list: ListDetailView,
    pub todo_form: FormView,
}

/// GET /lists/new and GET /lists/{list_id}/edit. `list` is the list being
/// renamed; absent on the creation form.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListFormView {
    pub flash: Option<FlashView>,
    pub list: Option<ListSummaryView>,
    pub form: FormView,
}
