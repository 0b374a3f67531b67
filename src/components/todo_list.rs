//! Todo List Component
//!
//! Renders the current snapshot with per-record edit/delete actions.

use leptos::prelude::*;

use crate::context::SyncContext;
use crate::models::Todo;
use crate::sync::SyncStatus;

/// List of todos, shown once the last fetch has settled cleanly
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<SyncContext>().expect("SyncContext should be provided");

    view! {
        <Show when=move || matches!(ctx.status(), SyncStatus::Ready)>
            <div class="todo-list">
                <For
                    each=move || ctx.todos()
                    // Key on every displayed field so an in-place update
                    // re-renders the row (the id alone would not).
                    key=|todo| (todo.id.clone(), todo.title.clone(), todo.description.clone())
                    children=move |todo: Todo| {
                        let edit_record = todo.clone();
                        let delete_id = todo.id.clone();
                        view! {
                            <div class="todo-item">
                                <strong>"Title: "</strong>
                                {todo.title.clone()}
                                <br/>
                                <strong>"Description: "</strong>
                                {todo.description.clone()}
                                <div class="todo-buttons">
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| ctx.begin_edit(&edit_record)
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="delete-btn"
                                        disabled=move || ctx.is_loading()
                                        on:click=move |_| ctx.submit_delete(delete_id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
