//! Notice Banner Component
//!
//! Shows storage problems (unreadable saved data, failed writes).

use leptos::prelude::*;

use crate::context::use_app_context;

/// Dismissible warning banner, hidden when there is nothing to report
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();
    let notice = Memo::new(move |_| ctx.state.with(|s| s.notice().map(str::to_string)));

    move || {
        notice.get().map(|text| view! {
            <div class="notice" role="alert">
                <span>{text}</span>
                <button class="notice-dismiss" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })
    }
}
