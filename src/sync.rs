//! Synchronization State Machine
//!
//! Keeps the local todo collection consistent with the remote store:
//! every write is confirmed by a full re-fetch, never by patching the
//! snapshot locally.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::TodoStore;
use crate::models::{Todo, TodoPayload};

/// What the last remote call left behind
///
/// `Loading` and `Failed` are mutually exclusive; `Ready` means the last
/// call (if any) succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Which semantics the single form surface dispatches to
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    #[default]
    Create,
    /// Editing the record with this identifier.
    Update(String),
}

/// Draft field addressed by the form's input handlers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DraftField {
    Title,
    Description,
}

/// The title/description pair being composed in the form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub mode: FormMode,
}

impl Draft {
    /// Request body for whichever endpoint the mode selects.
    pub fn payload(&self) -> TodoPayload {
        TodoPayload {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    fn clear(&mut self) {
        *self = Draft::default();
    }
}

/// Client-side synchronization state machine
///
/// Owns the collection snapshot, the operation status, and the draft.
/// Cloning shares the same state; methods take `&self` and never hold a
/// borrow across an await point, so views may read mid-flight.
#[derive(Debug, Clone)]
pub struct TodoSync<S> {
    store: S,
    todos: Rc<RefCell<Vec<Todo>>>,
    status: Rc<RefCell<SyncStatus>>,
    draft: Rc<RefCell<Draft>>,
}

impl<S: TodoStore> TodoSync<S> {
    /// Starts in `Loading` with an empty snapshot; callers trigger the
    /// first `refresh` on activation.
    pub fn new(store: S) -> Self {
        Self {
            store,
            todos: Rc::new(RefCell::new(Vec::new())),
            status: Rc::new(RefCell::new(SyncStatus::Loading)),
            draft: Rc::new(RefCell::new(Draft::default())),
        }
    }

    /// Current collection snapshot
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    /// Current operation status
    pub fn status(&self) -> SyncStatus {
        self.status.borrow().clone()
    }

    /// Current form draft
    pub fn draft(&self) -> Draft {
        self.draft.borrow().clone()
    }

    fn set_status(&self, status: SyncStatus) {
        *self.status.borrow_mut() = status;
    }

    /// Re-fetch the whole collection and replace the snapshot.
    ///
    /// A response the store delivered but that does not carry a record
    /// array becomes the empty snapshot (fail-soft); only transport and
    /// HTTP-status failures surface as `Failed`, leaving the previous
    /// snapshot in place.
    pub async fn refresh(&self) {
        self.set_status(SyncStatus::Loading);
        match self.store.fetch_all().await {
            Ok(response) => {
                *self.todos.borrow_mut() = response.into_records();
                self.set_status(SyncStatus::Ready);
            }
            Err(error) => self.set_status(SyncStatus::Failed(error.to_string())),
        }
    }

    /// Create a record from the draft, then re-fetch.
    ///
    /// On failure the draft is kept so the user's input is not lost.
    pub async fn submit_create(&self) {
        let payload = self.draft.borrow().payload();
        match self.store.create(&payload).await {
            Ok(()) => {
                self.draft.borrow_mut().clear();
                self.refresh().await;
            }
            Err(error) => self.set_status(SyncStatus::Failed(error.to_string())),
        }
    }

    /// Switch the form into update mode, pre-filled from `record`.
    ///
    /// Purely local; no remote call.
    pub fn begin_edit(&self, record: &Todo) {
        let mut draft = self.draft.borrow_mut();
        draft.title = record.title.clone();
        draft.description = record.description.clone();
        draft.mode = FormMode::Update(record.id.clone());
    }

    /// Update the record the form is editing, then re-fetch.
    ///
    /// Without an edit target this is a silent no-op. On failure both the
    /// draft and the edit target are kept.
    pub async fn submit_update(&self) {
        let target = match &self.draft.borrow().mode {
            FormMode::Update(id) => id.clone(),
            FormMode::Create => return,
        };
        let payload = self.draft.borrow().payload();
        match self.store.update(&target, &payload).await {
            Ok(()) => {
                self.draft.borrow_mut().clear();
                self.refresh().await;
            }
            Err(error) => self.set_status(SyncStatus::Failed(error.to_string())),
        }
    }

    /// Delete one record by identifier, then re-fetch.
    pub async fn submit_delete(&self, id: &str) {
        match self.store.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(error) => self.set_status(SyncStatus::Failed(error.to_string())),
        }
    }

    /// Form submission: the single surface dispatches by mode.
    pub async fn submit(&self) {
        let mode = self.draft.borrow().mode.clone();
        match mode {
            FormMode::Create => self.submit_create().await,
            FormMode::Update(_) => self.submit_update().await,
        }
    }

    /// Field-level draft mutator used by the controlled inputs.
    pub fn set_field(&self, field: DraftField, value: String) {
        let mut draft = self.draft.borrow_mut();
        match field {
            DraftField::Title => draft.title = value,
            DraftField::Description => draft.description = value,
        }
    }
}
