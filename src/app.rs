//! Activity To-Do App
//!
//! Main application component: header with item count, form, and table.

use leptos::prelude::*;

use crate::components::{NoticeBanner, TodoForm, TodoTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::presentation::count_label;
use crate::repository::LocalStorageStore;
use crate::state::TodoList;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Load once; every later change writes back through the store
    let list = TodoList::load(LocalStorageStore::new(config.storage_key));
    let ctx = AppContext::new(list, config.currency_label);
    provide_context(ctx);

    let count = Memo::new(move |_| ctx.state.with(|s| s.len()));

    view! {
        <div class="container">
            <div class="card">
                <header class="card-header">
                    <div class="title-row">
                        <span class="title-icon">"📋"</span>
                        <h1>"To-Do List"</h1>
                    </div>
                    <p class="card-description">
                        <span class="count-badge">{move || count_label(count.get())}</span>
                        " in your list"
                    </p>
                </header>

                <NoticeBanner />

                <section class="card-content">
                    <TodoForm />
                </section>

                <footer class="card-footer">
                    <TodoTable />
                </footer>
            </div>
        </div>
    }
}
