//! Sync Context
//!
//! Bridges the synchronization state machine into the Leptos reactive
//! graph: one machine instance per session, invalidated through a
//! revision signal whenever a transition starts or settles.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FetchStore;
use crate::models::Todo;
use crate::sync::{Draft, DraftField, SyncStatus, TodoSync};

/// App-wide handle provided via context
///
/// Views read machine state through the accessors below; each one
/// registers the revision signal, so any transition re-renders them.
#[derive(Clone, Copy)]
pub struct SyncContext {
    machine: StoredValue<TodoSync<FetchStore>, LocalStorage>,
    revision: ReadSignal<u32>,
    set_revision: WriteSignal<u32>,
}

impl SyncContext {
    pub fn new(store: FetchStore) -> Self {
        let (revision, set_revision) = signal(0u32);
        Self {
            machine: StoredValue::new_local(TodoSync::new(store)),
            revision,
            set_revision,
        }
    }

    /// Invalidate every view reading through this context.
    ///
    /// `try_update` so a call settling after teardown is discarded
    /// instead of writing to a disposed signal.
    fn touch(&self) {
        let _ = self.set_revision.try_update(|v| *v += 1);
    }

    // ========================
    // Transition Operations
    // ========================

    /// Re-fetch the collection (one-shot; also run once on mount).
    pub fn refresh(&self) {
        let this = *self;
        let machine = self.machine.get_value();
        spawn_local(async move {
            this.touch();
            machine.refresh().await;
            log_outcome("refresh", &machine);
            this.touch();
        });
    }

    /// Submit the form; create or update is picked by the draft's mode.
    pub fn submit(&self) {
        let this = *self;
        let machine = self.machine.get_value();
        spawn_local(async move {
            this.touch();
            machine.submit().await;
            log_outcome("submit", &machine);
            this.touch();
        });
    }

    /// Delete one record and re-fetch.
    pub fn submit_delete(&self, id: String) {
        let this = *self;
        let machine = self.machine.get_value();
        spawn_local(async move {
            this.touch();
            machine.submit_delete(&id).await;
            log_outcome("delete", &machine);
            this.touch();
        });
    }

    /// Switch the form into update mode for `record`. Local only.
    pub fn begin_edit(&self, record: &Todo) {
        self.machine.with_value(|machine| machine.begin_edit(record));
        self.touch();
    }

    /// Route one input's value into the draft.
    pub fn set_field(&self, field: DraftField, value: String) {
        self.machine
            .with_value(|machine| machine.set_field(field, value));
        self.touch();
    }

    // ========================
    // Reactive Reads
    // ========================

    pub fn todos(&self) -> Vec<Todo> {
        self.revision.get();
        self.machine.with_value(|machine| machine.todos())
    }

    pub fn status(&self) -> SyncStatus {
        self.revision.get();
        self.machine.with_value(|machine| machine.status())
    }

    pub fn draft(&self) -> Draft {
        self.revision.get();
        self.machine.with_value(|machine| machine.draft())
    }

    /// Controls are disabled while a list fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.status(), SyncStatus::Loading)
    }
}

fn log_outcome(op: &str, machine: &TodoSync<FetchStore>) {
    match machine.status() {
        SyncStatus::Failed(message) => {
            web_sys::console::error_1(&format!("[SYNC] {} failed: {}", op, message).into());
        }
        _ => {
            web_sys::console::log_1(
                &format!("[SYNC] {}: {} todos", op, machine.todos().len()).into(),
            );
        }
    }
}
