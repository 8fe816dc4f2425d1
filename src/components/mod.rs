//! UI Components
//!
//! Leptos components for the form and the list.

mod todo_form;
mod type_selector;
mod todo_table;
mod todo_row;
mod notice_banner;

pub use todo_form::TodoForm;
pub use type_selector::TypeSelector;
pub use todo_table::TodoTable;
pub use todo_row::TodoRow;
pub use notice_banner::NoticeBanner;
