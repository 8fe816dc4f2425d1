//! Todo Row Component
//!
//! One table row with toggle, details and edit/delete actions.

use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};
use crate::domain::{Todo, TodoId};
use crate::presentation::{activity_class, booking_badge, format_price, row_class};

/// A single todo row, looked up by id
#[component]
pub fn TodoRow(id: TodoId) -> impl IntoView {
    let ctx = use_app_context();
    let todo = Memo::new(move |_| ctx.state.with(|s| s.find(&id).cloned()));

    move || todo.get().map(|todo| render_row(ctx, todo))
}

fn render_row(ctx: AppContext, todo: Todo) -> impl IntoView {
    let currency = ctx.currency.get_value();
    let (badge_text, badge_class) = booking_badge(todo.booking_required);
    let band_class = todo.accessibility.band().css_class();
    let toggle_id = todo.id.clone();
    let edit_id = todo.id.clone();
    let delete_id = todo.id.clone();

    view! {
        <tr class=row_class(todo.completed)>
            <td>
                <input
                    type="checkbox"
                    prop:checked=todo.completed
                    on:change=move |_| ctx.toggle_complete(&toggle_id)
                />
            </td>
            <td class="activity-cell">
                <span class=activity_class(todo.completed)>{todo.activity.clone()}</span>
            </td>
            <td>
                <span class="type-cell">
                    <span class="type-icon">{todo.activity_type.icon()}</span>
                    <span>{todo.activity_type.as_str().to_string()}</span>
                </span>
            </td>
            <td class="details-cell">
                <p>"💲 " {format_price(&currency, todo.price)}</p>
                <p>"📅 " <span class=badge_class>{badge_text}</span></p>
                <p>"🎚 " <span class=band_class>{todo.accessibility.display()}</span></p>
            </td>
            <td class="actions">
                <button class="edit-btn" title="Edit" on:click=move |_| ctx.begin_edit(&edit_id)>
                    "✏️"
                    <span class="sr-only">"Edit"</span>
                </button>
                <button class="delete-btn" title="Delete" on:click=move |_| ctx.remove(&delete_id)>
                    "🗑"
                    <span class="sr-only">"Delete"</span>
                </button>
            </td>
        </tr>
    }
}
