//! Todo Form Component
//!
//! Edits the pending draft; submits as add or update depending on mode.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TypeSelector;
use crate::context::use_app_context;
use crate::domain::{coerce_price, price_text_for, AccessibilityBand, DraftField};
use crate::presentation::submit_label;

/// Form for creating and editing todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let currency = ctx.currency.get_value();

    // One memo per field so typing in one input doesn't reset the others
    let activity = Memo::new(move |_| ctx.state.with(|s| s.draft().activity.clone()));
    let price = Memo::new(move |_| ctx.state.with(|s| s.draft().price));
    let activity_type = Memo::new(move |_| ctx.state.with(|s| s.draft().activity_type.clone()));
    let booking = Memo::new(move |_| ctx.state.with(|s| s.draft().booking_required));
    let accessibility = Memo::new(move |_| ctx.state.with(|s| s.draft().accessibility));
    let submittable = Memo::new(move |_| ctx.state.with(|s| s.draft().is_submittable()));
    let editing = Memo::new(move |_| ctx.state.with(|s| s.mode().is_editing()));

    // Raw price text; only replaced when the draft price changes from outside
    // the input (edit seeding, reset after submit or cancel)
    let price_text = RwSignal::new(String::new());
    Effect::new(move |_| {
        let price = price.get();
        if let Some(text) = price_text_for(&price_text.get_untracked(), price) {
            price_text.set(text);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.commit();
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <div class="form-column">
                <div class="field">
                    <label for="activity">"📋 Activity"</label>
                    <input
                        id="activity"
                        type="text"
                        placeholder="Enter activity"
                        prop:value=move || activity.get()
                        on:input=move |ev| ctx.set_field(DraftField::Activity(event_target_value(&ev)))
                    />
                </div>

                <div class="field">
                    <label for="price">"💲 Price (" {currency} ")"</label>
                    <input
                        id="price"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0"
                        prop:value=move || price_text.get()
                        on:input=move |ev| {
                            let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                            if let Some(input) = input {
                                let raw = input.value();
                                ctx.set_field(DraftField::Price(coerce_price(&raw)));
                                price_text.set(raw);
                            }
                        }
                    />
                </div>

                <div class="field">
                    <label for="type">"📋 Type"</label>
                    <TypeSelector
                        current_type=activity_type
                        on_change=move |kind| ctx.set_field(DraftField::Type(kind))
                    />
                </div>
            </div>

            <div class="form-column">
                <div class="field checkbox-field">
                    <input
                        id="booking"
                        type="checkbox"
                        prop:checked=move || booking.get()
                        on:change=move |ev| ctx.set_field(DraftField::BookingRequired(event_target_checked(&ev)))
                    />
                    <label for="booking">"📅 Booking Required"</label>
                </div>

                <div class="field">
                    <div class="slider-header">
                        <label for="accessibility">"🎚 Accessibility"</label>
                        <span class=move || format!("badge {}", accessibility.get().band().css_class())>
                            {move || accessibility.get().display()}
                        </span>
                    </div>
                    <input
                        id="accessibility"
                        type="range"
                        min="0"
                        max="1"
                        step="0.1"
                        prop:value=move || accessibility.get().value().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                ctx.set_field(DraftField::Accessibility(value));
                            }
                        }
                    />
                    <div class="slider-legend">
                        <span>{AccessibilityBand::Easy.label()}</span>
                        <span>{AccessibilityBand::Moderate.label()}</span>
                        <span>{AccessibilityBand::Difficult.label()}</span>
                    </div>
                </div>

                <button type="submit" class="submit-btn" disabled=move || !submittable.get()>
                    {move || if editing.get() { "✓ " } else { "+ " }}
                    {move || ctx.state.with(|s| submit_label(s.mode()))}
                </button>
                <Show when=move || editing.get()>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                        "✕ Cancel Edit"
                    </button>
                </Show>
            </div>
        </form>
    }
}
