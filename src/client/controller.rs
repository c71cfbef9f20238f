//! Translation page controller
//!
//! Owns everything the translation page shows: the selected file, the
//! direction, the lifecycle of the current attempt and the download it
//! produced. Transitions:
//!
//! ```text
//! Idle ──begin_submit──▶ Uploading ──▶ Translating ──finish_submit──▶ Success | Error
//!   ▲                                                                      │
//!   └──────────────── reset (new file, try again, next submit) ────────────┘
//! ```

use crate::client::download::{DownloadHandle, DownloadStore};
use crate::client::file::SelectedFile;
use crate::client::http::{ClientError, PendingRequest, TranslateClient};
use crate::client::upload::{DropOutcome, SelectionChange, UploadWidget, WidgetView};
use crate::mt::Direction;
use tracing::{debug, info, warn};

/// Where the current translation attempt stands
#[derive(Debug, Default, PartialEq)]
pub enum TranslationState {
    #[default]
    Idle,
    Uploading,
    Translating,
    Success(DownloadHandle),
    Error(String),
}

impl TranslationState {
    /// A request is in flight
    pub fn is_processing(&self) -> bool {
        matches!(self, TranslationState::Uploading | TranslationState::Translating)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TranslationState::Idle => "idle",
            TranslationState::Uploading => "uploading",
            TranslationState::Translating => "translating",
            TranslationState::Success(_) => "success",
            TranslationState::Error(_) => "error",
        }
    }

    pub fn status_message(&self) -> &'static str {
        match self {
            TranslationState::Idle => "",
            TranslationState::Uploading => "Uploading file...",
            TranslationState::Translating => "Translating document...",
            TranslationState::Success(_) => "Translation complete!",
            TranslationState::Error(_) => "An error occurred.",
        }
    }
}

/// Transient notification for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error { title: String, description: String },
}

#[derive(Debug, Default)]
pub struct PageController {
    file: Option<SelectedFile>,
    direction: Direction,
    state: TranslationState,
    widget: UploadWidget,
    downloads: DownloadStore,
    notices: Vec<Notice>,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller whose download handles live in `store`
    pub fn with_store(store: DownloadStore) -> Self {
        Self {
            downloads: store,
            ..Self::default()
        }
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> &TranslationState {
        &self.state
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing()
    }

    pub fn downloads(&self) -> &DownloadStore {
        &self.downloads
    }

    pub fn download_handle(&self) -> Option<&DownloadHandle> {
        match &self.state {
            TranslationState::Success(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            TranslationState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn status_message(&self) -> &'static str {
        self.state.status_message()
    }

    /// `(url, filename)` of the download link, shown only after a success
    pub fn download_link(&self) -> Option<(&str, &str)> {
        match (&self.state, &self.file) {
            (TranslationState::Success(handle), Some(_)) => Some((handle.url(), handle.filename())),
            _ => None,
        }
    }

    /// Drain queued notifications
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ========== Upload widget ==========

    pub fn widget(&self) -> &UploadWidget {
        &self.widget
    }

    pub fn widget_view(&self) -> WidgetView {
        self.widget.view(self.file.as_ref())
    }

    fn sync_widget(&mut self) {
        let processing = self.is_processing();
        self.widget.set_disabled(processing);
    }

    pub fn drag_enter(&mut self) {
        self.sync_widget();
        self.widget.drag_enter();
    }

    pub fn drag_leave(&mut self) {
        self.widget.drag_leave();
    }

    pub fn drop_files(&mut self, files: Vec<SelectedFile>) -> DropOutcome {
        self.sync_widget();
        let outcome = self.widget.drop_files(files);
        if let DropOutcome::Changed(change) = &outcome {
            self.apply(change.clone());
        }
        outcome
    }

    pub fn pick_files(&mut self, files: Vec<SelectedFile>) -> DropOutcome {
        self.sync_widget();
        let outcome = self.widget.pick_files(files);
        if let DropOutcome::Changed(change) = &outcome {
            self.apply(change.clone());
        }
        outcome
    }

    /// The widget's remove control
    pub fn remove_file(&mut self) -> bool {
        self.sync_widget();
        match self.widget.remove() {
            Some(change) => self.apply(change),
            None => false,
        }
    }

    // ========== Selection & direction ==========

    pub fn apply(&mut self, change: SelectionChange) -> bool {
        match change {
            SelectionChange::Selected(file) => self.select_file(Some(file)),
            SelectionChange::Removed => self.select_file(None),
        }
    }

    /// Replace the selection. A finished attempt is reset first; while a
    /// request is in flight the selection is frozen.
    pub fn select_file(&mut self, file: Option<SelectedFile>) -> bool {
        if self.is_processing() {
            debug!("selection ignored while a translation is in flight");
            return false;
        }
        if !matches!(self.state, TranslationState::Idle) {
            self.reset_state();
        }
        self.file = file;
        true
    }

    pub fn toggle_direction(&mut self) -> bool {
        let toggled = self.direction.toggled();
        self.set_direction(toggled)
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_processing() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// The "Try Again" action: forget the file and go back to idle
    pub fn try_again(&mut self) -> bool {
        if self.is_processing() {
            return false;
        }
        self.file = None;
        self.reset_state();
        true
    }

    fn reset_state(&mut self) {
        // Dropping a Success state releases its download handle
        self.state = TranslationState::Idle;
    }

    fn transition(&mut self, next: TranslationState) {
        debug!(from = self.state.label(), to = next.label(), "translation state");
        self.state = next;
    }

    // ========== Submission ==========

    /// Start an attempt: releases the previous download, then moves through
    /// `Uploading` to `Translating` and returns the request to send.
    ///
    /// Returns `None`, changing nothing, when no file is selected or a
    /// request is already in flight.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if self.is_processing() {
            return None;
        }
        let file = self.file.clone()?;

        self.reset_state();
        self.transition(TranslationState::Uploading);
        let request = PendingRequest {
            file,
            direction: self.direction,
        };
        self.transition(TranslationState::Translating);
        self.sync_widget();
        Some(request)
    }

    /// Settle the in-flight attempt with the server's answer
    pub fn finish_submit(&mut self, result: Result<Vec<u8>, ClientError>) {
        if !matches!(self.state, TranslationState::Translating) {
            warn!(state = self.state.label(), "no translation in flight, result dropped");
            return;
        }

        match result {
            Ok(bytes) => {
                let filename = self
                    .file
                    .as_ref()
                    .map(SelectedFile::translated_name)
                    .unwrap_or_else(|| "translated_document.txt".to_string());
                let handle = self.downloads.create(bytes, filename);
                info!(url = handle.url(), file = handle.filename(), "Translation successful");
                self.transition(TranslationState::Success(handle));
                self.notices
                    .push(Notice::Success("Translation successful!".to_string()));
            }
            Err(err) => {
                warn!(error = %err, "Translation failed");
                let message = err.user_message();
                self.notices.push(Notice::Error {
                    title: "Translation Failed".to_string(),
                    description: message.clone(),
                });
                self.transition(TranslationState::Error(message));
            }
        }
        self.sync_widget();
    }

    /// Run a whole attempt against `client`. Returns `false` without sending
    /// anything when the attempt could not start.
    pub async fn submit<C>(&mut self, client: &C) -> bool
    where
        C: TranslateClient + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let result = client.send(&request).await;
        self.finish_submit(result);
        true
    }
}
