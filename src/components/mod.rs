//! UI Components
//!
//! Leptos components for the todo editor.

mod todo_form;
mod todo_list;
mod todo_row;

pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
