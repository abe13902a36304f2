//! UI Components
//!
//! Leptos components for the todo list.

mod new_todo_form;
mod stats_footer;
mod todo_item;
mod todo_list_view;

pub use new_todo_form::NewTodoForm;
pub use stats_footer::StatsFooter;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
