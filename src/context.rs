//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use log::debug;

use crate::domain::{DraftField, TodoId};
use crate::repository::LocalStorageStore;
use crate::state::TodoList;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list, its draft and form mode
    pub state: RwSignal<TodoList<LocalStorageStore>>,
    /// Currency label for prices
    pub currency: StoredValue<String>,
}

impl AppContext {
    pub fn new(list: TodoList<LocalStorageStore>, currency: String) -> Self {
        Self {
            state: RwSignal::new(list),
            currency: StoredValue::new(currency),
        }
    }

    /// Update one draft field
    pub fn set_field(&self, field: DraftField) {
        self.state.update(|list| list.set_field(field));
    }

    /// Submit the form (add or update depending on mode)
    pub fn commit(&self) {
        self.state.update(|list| {
            if let Err(e) = list.commit() {
                debug!("Submit ignored: {}", e);
            }
        });
    }

    pub fn begin_edit(&self, id: &TodoId) {
        self.state.update(|list| {
            if let Err(e) = list.begin_edit(id) {
                debug!("Edit ignored: {}", e);
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.state.update(|list| list.cancel_edit());
    }

    pub fn remove(&self, id: &TodoId) {
        self.state.update(|list| {
            if let Err(e) = list.remove(id) {
                debug!("Delete ignored: {}", e);
            }
        });
    }

    pub fn toggle_complete(&self, id: &TodoId) {
        self.state.update(|list| {
            if let Err(e) = list.toggle_complete(id) {
                debug!("Toggle ignored: {}", e);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.state.update(|list| list.dismiss_notice());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
