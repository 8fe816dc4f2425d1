//! Type Selector Component
//!
//! Category `<select>` over the fixed activity types.

use leptos::prelude::*;

use crate::domain::ActivityType;
use crate::presentation::category_options;

/// Category dropdown
#[component]
pub fn TypeSelector(
    current_type: Memo<ActivityType>,
    on_change: impl Fn(ActivityType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id="type"
            class="type-select"
            on:change=move |ev| on_change(ActivityType::from_str(&event_target_value(&ev)))
        >
            {move || category_options(&current_type.get()).into_iter().map(|(kind, selected)| {
                let value = kind.as_str().to_string();
                let text = format!("{} {}", kind.icon(), kind.label());
                view! {
                    <option value=value prop:selected=selected>
                        {text}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
