//! Display ordering for lists and todos.
//!
//! Views show incomplete entries before completed ones. The order is a
//! stable partition: relative order within each group matches insertion
//! order, and applying it twice changes nothing.

use crate::structs::{Todo, TodoList};

fn partition_stable<T, F>(items: &[T], is_complete: F) -> Vec<&T>
where
    F: Fn(&T) -> bool,
{
    let mut ordered = Vec::with_capacity(items.len());
    ordered.extend(items.iter().filter(|&item| !is_complete(item)));
    ordered.extend(items.iter().filter(|&item| is_complete(item)));
    ordered
}

/// Lists in display order: incomplete first, completed last.
pub fn ordered_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    partition_stable(lists, TodoList::is_complete)
}

/// Todos in display order: unfinished first, completed last.
pub fn ordered_todos(todos: &[Todo]) -> Vec<&Todo> {
    partition_stable(todos, |todo| todo.completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::SessionState;

    fn names(todos: &[&Todo]) -> Vec<String> {
        todos.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_completed_todos_sink_below_incomplete() {
        let mut state = SessionState::new();
        let list_id = state.create_list("Groceries").unwrap();
        let milk = state.add_todo(list_id, "Milk").unwrap();
        state.add_todo(list_id, "Eggs").unwrap();
        state.set_todo_completion(list_id, milk, true).unwrap();

        let list = state.find_list(list_id).unwrap();
        assert_eq!(names(&ordered_todos(&list.todos)), vec!["Eggs", "Milk"]);
    }

    #[test]
    fn test_relative_order_preserved_within_each_group() {
        let mut state = SessionState::new();
        let list_id = state.create_list("Chores").unwrap();
        for name in ["a", "b", "c", "d"] {
            state.add_todo(list_id, name).unwrap();
        }
        let ids: Vec<_> = state
            .find_list(list_id)
            .unwrap()
            .todos
            .iter()
            .map(|t| t.id)
            .collect();
        state.set_todo_completion(list_id, ids[0], true).unwrap();
        state.set_todo_completion(list_id, ids[2], true).unwrap();

        let list = state.find_list(list_id).unwrap();
        assert_eq!(names(&ordered_todos(&list.todos)), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_ordering_is_idempotent() {
        let mut state = SessionState::new();
        let list_id = state.create_list("Chores").unwrap();
        for name in ["a", "b", "c"] {
            state.add_todo(list_id, name).unwrap();
        }
        let ids: Vec<_> = state
            .find_list(list_id)
            .unwrap()
            .todos
            .iter()
            .map(|t| t.id)
            .collect();
        state.set_todo_completion(list_id, ids[1], true).unwrap();

        let list = state.find_list(list_id).unwrap();
        let once: Vec<Todo> = ordered_todos(&list.todos).into_iter().cloned().collect();
        let twice: Vec<Todo> = ordered_todos(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_complete_lists_sink_but_empty_lists_do_not() {
        let mut state = SessionState::new();
        let done = state.create_list("Done").unwrap();
        state.create_list("Empty").unwrap();
        let open = state.create_list("Open").unwrap();

        let todo = state.add_todo(done, "x").unwrap();
        state.set_todo_completion(done, todo, true).unwrap();
        state.add_todo(open, "y").unwrap();

        let ordered: Vec<&str> = ordered_lists(&state.lists)
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        // "Empty" has no todos, so it is not complete and stays up top.
        assert_eq!(ordered, vec!["Empty", "Open", "Done"]);
    }
}
