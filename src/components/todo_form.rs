//! Todo Form Component
//!
//! Single form surface for creating and updating todos, overloaded by
//! the draft's mode.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::SyncContext;
use crate::sync::{DraftField, FormMode};

/// Form for creating a todo, or updating one after an Edit click
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<SyncContext>().expect("SyncContext should be provided");

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ctx.draft();
        if draft.title.is_empty() || draft.description.is_empty() {
            return;
        }
        ctx.submit();
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <div class="form-group">
                <label>"Title:"</label>
                <input
                    type="text"
                    name="title"
                    class="input-field"
                    prop:value=move || ctx.draft().title
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        ctx.set_field(DraftField::Title, input.value());
                    }
                    required
                />
            </div>
            <div class="form-group">
                <label>"Description:"</label>
                <input
                    type="text"
                    name="description"
                    class="input-field"
                    prop:value=move || ctx.draft().description
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        ctx.set_field(DraftField::Description, input.value());
                    }
                    required
                />
            </div>
            <button
                type="submit"
                class="submit-btn"
                disabled=move || ctx.is_loading()
            >
                {move || match ctx.draft().mode {
                    FormMode::Update(_) => "Update Todo",
                    FormMode::Create => "Create Todo",
                }}
            </button>
        </form>
    }
}
