//! State machine behind every entity management screen.
//!
//! DESIGN
//! ======
//! Transitions are synchronous and return the request to send or the notice to
//! show; the page layer performs the I/O in between. That keeps the whole
//! list/edit/delete lifecycle testable without a browser:
//!
//! - list:  `Idle -> Loading -> (Loaded | Errored)`
//! - modal: `Closed -> Editing -> Submitting -> Closed`, with a failed submit
//!   returning to `Editing` and cancel going straight back to `Closed`.
//!
//! A failed delete or update never touches the rows already shown. Preview
//! URLs of picked files are queued when their draft goes away and drained by
//! the page through `take_released_previews`.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use super::toast::Notice;
use crate::net::api;
use crate::net::transport::{ApiError, ApiRequest, PendingUpload};
use crate::resource::{AfterDelete, Draft, EditMode, Resource};
use crate::util::format::capitalize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Editing { mode: EditMode, draft: Draft },
    Submitting { mode: EditMode, draft: Draft },
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    #[must_use]
    pub fn mode(&self) -> Option<&EditMode> {
        match self {
            Self::Closed => None,
            Self::Editing { mode, .. } | Self::Submitting { mode, .. } => Some(mode),
        }
    }

    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Closed => None,
            Self::Editing { draft, .. } | Self::Submitting { draft, .. } => Some(draft),
        }
    }
}

/// List, modal, and delete state for one `Resource` screen.
#[derive(Clone, Debug)]
pub struct ScreenState<R> {
    pub status: ListStatus,
    pub items: Vec<R>,
    pub modal: ModalState,
    /// Id of the row whose delete is in flight.
    pub deleting: Option<String>,
    released_previews: Vec<String>,
}

impl<R> Default for ScreenState<R> {
    fn default() -> Self {
        Self {
            status: ListStatus::Idle,
            items: Vec::new(),
            modal: ModalState::Closed,
            deleting: None,
            released_previews: Vec::new(),
        }
    }
}

impl<R: Resource> ScreenState<R> {
    // =============================================================
    // List
    // =============================================================

    pub fn begin_load(&mut self) {
        self.status = ListStatus::Loading;
    }

    /// Apply a list result. Failures clear the rows and produce an error
    /// notice; an empty singleton produces an info notice.
    pub fn finish_load(&mut self, result: Result<Vec<R>, ApiError>) -> Option<Notice> {
        match result {
            Ok(mut items) => {
                if R::SINGLETON {
                    items.truncate(1);
                }
                self.items = items;
                self.status = ListStatus::Loaded;
                (R::SINGLETON && self.items.is_empty()).then(|| Notice::info(format!("No {} found.", R::LABEL)))
            }
            Err(err) => {
                log::error!("failed to fetch {}: {err}", R::TITLE);
                self.items.clear();
                self.status = ListStatus::Errored;
                Some(Notice::error(format!("Failed to fetch {}", R::TITLE.to_lowercase())))
            }
        }
    }

    // =============================================================
    // Modal
    // =============================================================

    /// Open the edit modal prefilled from the row with `id`.
    pub fn open_edit(&mut self, id: &str) -> bool {
        if !R::CAPABILITIES.edit || self.modal.is_submitting() {
            return false;
        }
        let Some(record) = self.items.iter().find(|r| r.id() == id) else {
            return false;
        };
        self.modal = ModalState::Editing { mode: EditMode::Update { id: id.to_owned() }, draft: record.to_draft() };
        true
    }

    /// Open the modal with a blank draft for a new record.
    pub fn open_create(&mut self) -> bool {
        if !R::CAPABILITIES.create || self.modal.is_submitting() {
            return false;
        }
        let mode = EditMode::Create;
        let draft = Draft::blank(R::SCHEMA, &mode);
        self.modal = ModalState::Editing { mode, draft };
        true
    }

    /// Draft open for editing; `None` while closed or submitting.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.modal {
            ModalState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Attach a picked file to the open draft. A preview that is displaced,
    /// or arrives after the modal closed, is queued for release.
    pub fn attach_upload(&mut self, key: &'static str, upload: PendingUpload, preview_url: Option<String>) {
        let released = match self.draft_mut() {
            Some(draft) => draft.attach_upload(key, upload, preview_url),
            None => preview_url,
        };
        self.released_previews.extend(released);
    }

    /// Drain preview URLs that no draft shows anymore.
    pub fn take_released_previews(&mut self) -> Vec<String> {
        std::mem::take(&mut self.released_previews)
    }

    /// Cancel editing. Ignored while a submit is in flight.
    pub fn close_modal(&mut self) {
        let Some(urls) = self.draft_mut().map(|d| d.preview_urls()) else {
            return;
        };
        self.released_previews.extend(urls);
        self.modal = ModalState::Closed;
    }

    #[must_use]
    pub fn modal_title(&self) -> String {
        match self.modal.mode() {
            Some(EditMode::Create) => format!("New {}", capitalize(R::LABEL)),
            _ => format!("Edit {}", capitalize(R::LABEL)),
        }
    }

    /// Move `Editing -> Submitting` and build the create/update request.
    ///
    /// Returns `None` when no modal is being edited. An encoding failure
    /// leaves the modal in `Editing` and returns the error notice.
    pub fn begin_submit(&mut self, token: Option<&str>) -> Option<Result<ApiRequest, Notice>> {
        if !matches!(self.modal, ModalState::Editing { .. }) {
            return None;
        }
        let ModalState::Editing { mode, draft } = std::mem::take(&mut self.modal) else {
            return None;
        };
        match api::submit_request::<R>(&mode, &draft, token) {
            Ok(request) => {
                self.modal = ModalState::Submitting { mode, draft };
                Some(Ok(request))
            }
            Err(err) => {
                log::error!("failed to encode {}: {err}", R::LABEL);
                let notice = submit_failure::<R>(&mode);
                self.modal = ModalState::Editing { mode, draft };
                Some(Err(notice))
            }
        }
    }

    /// Apply a submit result. Success closes the modal; failure returns to
    /// editing with the draft intact. The caller refetches on success.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<Notice> {
        if !self.modal.is_submitting() {
            return None;
        }
        let ModalState::Submitting { mode, draft } = std::mem::take(&mut self.modal) else {
            return None;
        };
        match result {
            Ok(()) => {
                self.released_previews.extend(draft.preview_urls());
                let verb = if mode.is_create() { "created" } else { "updated" };
                Some(Notice::success(format!("{} {verb} successfully!", capitalize(R::LABEL))))
            }
            Err(err) => {
                log::error!("failed to save {}: {err}", R::LABEL);
                let notice = submit_failure::<R>(&mode);
                self.modal = ModalState::Editing { mode, draft };
                Some(notice)
            }
        }
    }

    // =============================================================
    // Delete
    // =============================================================

    #[must_use]
    pub fn confirm_delete_message() -> String {
        format!("Are you sure you want to delete this {}?", R::LABEL)
    }

    /// Mark `id` as being deleted and build the request.
    pub fn begin_delete(&mut self, id: &str, token: Option<&str>) -> Option<ApiRequest> {
        if !R::CAPABILITIES.delete || self.deleting.is_some() || !self.items.iter().any(|r| r.id() == id) {
            return None;
        }
        self.deleting = Some(id.to_owned());
        Some(api::delete_request::<R>(id, token))
    }

    /// Apply a delete result. Prune-strategy screens drop the row here;
    /// refetch-strategy screens reload when the notice is a success.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Option<Notice> {
        let id = self.deleting.take()?;
        match result {
            Ok(()) => {
                if R::AFTER_DELETE == AfterDelete::Prune {
                    self.items.retain(|r| r.id() != id);
                }
                Some(Notice::success(format!("{} deleted successfully!", capitalize(R::LABEL))))
            }
            Err(err) => {
                log::error!("failed to delete {} {id}: {err}", R::LABEL);
                Some(Notice::error(format!("Failed to delete {}", R::LABEL)))
            }
        }
    }

    /// Whether a successful delete should be followed by a reload.
    #[must_use]
    pub fn refetch_after_delete() -> bool {
        R::AFTER_DELETE == AfterDelete::Refetch
    }
}

fn submit_failure<R: Resource>(mode: &EditMode) -> Notice {
    let verb = if mode.is_create() { "create" } else { "update" };
    Notice::error(format!("Failed to {verb} {}", R::LABEL))
}
