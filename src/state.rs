//! To-Do List State
//!
//! The single writable copy of the collection plus the pending form draft.
//! Loads from its store once at construction and writes the whole collection
//! back after every change.

use log::{debug, error, info, warn};

use crate::domain::{DomainError, DomainResult, DraftField, Entity, Todo, TodoDraft, TodoId};
use crate::repository::TodoStore;

/// What a submit does
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submit appends a new item
    #[default]
    Creating,
    /// Submit replaces the fields of `target`
    Editing { target: TodoId },
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing { .. })
    }
}

/// Collection + draft + form mode, bound to a store
#[derive(Debug)]
pub struct TodoList<S: TodoStore> {
    store: S,
    todos: Vec<Todo>,
    draft: TodoDraft,
    mode: FormMode,
    /// Storage problem to show the user, if any
    notice: Option<String>,
}

fn position_of<T: Entity>(items: &[T], id: &T::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

impl<S: TodoStore> TodoList<S> {
    /// Read the store once. Absent data is an empty list; unreadable data is
    /// an empty list plus a notice. Never writes.
    pub fn load(store: S) -> Self {
        let (todos, notice) = match store.load() {
            Ok(Some(todos)) => {
                info!("Loaded {} todos", todos.len());
                (todos, None)
            }
            Ok(None) => {
                debug!("No stored todos, starting empty");
                (Vec::new(), None)
            }
            Err(e) => {
                warn!("{}; starting with an empty list", e);
                (Vec::new(), Some(format!("Saved todos could not be loaded ({}). Starting with an empty list.", e)))
            }
        };
        Self {
            store,
            todos,
            draft: TodoDraft::default(),
            mode: FormMode::Creating,
            notice,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn find(&self, id: &TodoId) -> Option<&Todo> {
        position_of(&self.todos, id).map(|i| &self.todos[i])
    }

    pub fn draft(&self) -> &TodoDraft {
        &self.draft
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ========================
    // Draft / Form Mode
    // ========================

    pub fn set_field(&mut self, field: DraftField) {
        self.draft.set(field);
    }

    /// Target `id` and seed the draft from it. Unknown ids change nothing.
    pub fn begin_edit(&mut self, id: &TodoId) -> DomainResult<()> {
        let todo = self
            .find(id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        self.draft = todo.to_draft();
        self.mode = FormMode::Editing { target: id.clone() };
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Creating;
        self.draft = TodoDraft::default();
    }

    /// Submit the draft according to the current mode.
    ///
    /// Returns the id of the added or updated item. On rejection nothing
    /// changes: not the collection, the draft, nor the mode.
    pub fn commit(&mut self) -> DomainResult<TodoId> {
        if !self.draft.is_submittable() {
            return Err(DomainError::InvalidInput("activity is empty".to_string()));
        }
        let id = match &self.mode {
            FormMode::Creating => {
                let id = TodoId::generate();
                let draft = std::mem::take(&mut self.draft);
                self.todos.push(Todo::from_draft(id.clone(), draft));
                debug!("Added todo {}", id);
                id
            }
            FormMode::Editing { target } => {
                let index = position_of(&self.todos, target)
                    .ok_or_else(|| DomainError::NotFound(target.to_string()))?;
                let draft = std::mem::take(&mut self.draft);
                self.todos[index].apply_draft(draft);
                debug!("Updated todo {}", target);
                target.clone()
            }
        };
        self.mode = FormMode::Creating;
        self.persist();
        Ok(id)
    }

    // ========================
    // List Mutations
    // ========================

    /// Drop `id`. Removing the item being edited also leaves editing mode.
    pub fn remove(&mut self, id: &TodoId) -> DomainResult<()> {
        let index = position_of(&self.todos, id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        self.todos.remove(index);
        debug!("Removed todo {}", id);
        if matches!(&self.mode, FormMode::Editing { target } if target == id) {
            self.cancel_edit();
        }
        self.persist();
        Ok(())
    }

    /// Flip completion, returning the new flag
    pub fn toggle_complete(&mut self, id: &TodoId) -> DomainResult<bool> {
        let index = position_of(&self.todos, id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        let todo = &mut self.todos[index];
        todo.completed = !todo.completed;
        let completed = todo.completed;
        self.persist();
        Ok(completed)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.todos) {
            error!("{}", e);
            self.notice = Some(format!("Changes could not be saved ({}).", e));
        }
    }
}
