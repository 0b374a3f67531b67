//! Todo Frontend App
//!
//! Root component: create/edit form above the list view, with the
//! loading/error/empty status lines between them.

use leptos::prelude::*;

use crate::api::FetchStore;
use crate::components::{TodoForm, TodoList};
use crate::context::SyncContext;
use crate::sync::SyncStatus;

#[component]
pub fn App() -> impl IntoView {
    let ctx = SyncContext::new(FetchStore::default());
    provide_context(ctx);

    // One-shot initial load; later refreshes follow each confirmed write.
    Effect::new(move |_| {
        ctx.refresh();
    });

    view! {
        <div class="App">
            <h1 class="app-header">"Todo App"</h1>

            <TodoForm />

            {move || matches!(ctx.status(), SyncStatus::Loading).then(|| view! {
                <p class="loading-text">"Loading..."</p>
            })}
            {move || match ctx.status() {
                SyncStatus::Failed(message) => Some(view! {
                    <p class="error-text">{format!("Error: {}", message)}</p>
                }),
                _ => None,
            }}
            {move || (matches!(ctx.status(), SyncStatus::Ready) && ctx.todos().is_empty())
                .then(|| view! { <p>"No data available."</p> })}

            <TodoList />
        </div>
    }
}
