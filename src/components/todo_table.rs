//! Todo Table Component
//!
//! Lists saved todos keyed by id, or an empty-state message.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::domain::TodoId;

/// Table of all todos
#[component]
pub fn TodoTable() -> impl IntoView {
    let ctx = use_app_context();

    // Row identity only; each row reads its own fields
    let ids = Memo::new(move |_| {
        ctx.state.with(|s| s.todos().iter().map(|t| t.id.clone()).collect::<Vec<TodoId>>())
    });

    let has_todos = Memo::new(move |_| ctx.state.with(|s| !s.is_empty()));

    view! {
        <div class="table-wrapper">
            <Show
                when=move || has_todos.get()
                fallback=|| view! { <EmptyState /> }
            >
                <table class="todo-table">
                    <thead>
                        <tr>
                            <th>"Status"</th>
                            <th>"Activity"</th>
                            <th>"Type"</th>
                            <th>"Details"</th>
                            <th class="actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || ids.get()
                            key=|id| id.clone()
                            children=move |id| view! { <TodoRow id=id /> }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"📋"</div>
            <p class="empty-title">"Your todo list is empty"</p>
            <p class="empty-hint">"Add some tasks to get started!"</p>
        </div>
    }
}
