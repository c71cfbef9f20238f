//! Single-file upload widget
//!
//! The widget accepts one `.doc`, `.docx` or `.txt` file at a time, by click
//! or by drop. It does not own the selection: it reports changes as
//! [`SelectionChange`] values and renders whatever selection it is given.

use crate::client::file::SelectedFile;
use tracing::warn;

/// MIME type → extension allowlist
pub const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("application/msword", ".doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".docx",
    ),
    ("text/plain", ".txt"),
];

/// A file refused by the allowlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRejection {
    pub file_name: String,
    pub reason: String,
}

/// Change the widget asks its owner to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(SelectedFile),
    Removed,
}

/// Result of a drop or a file-picker selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Changed(SelectionChange),
    /// Nothing was acceptable; the previous selection stays
    Rejected(Vec<FileRejection>),
    /// Disabled widget or empty drop
    Ignored,
}

/// What the widget shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    Empty,
    DragHover,
    FileSelected { name: String, size_label: String },
}

/// Check a file against [`ACCEPTED_TYPES`]: an allowlisted extension or an
/// allowlisted MIME type is enough.
pub fn check_accepted(file: &SelectedFile) -> Result<(), FileRejection> {
    let extension = file.extension();
    let accepted = ACCEPTED_TYPES.iter().any(|(mime, ext)| {
        extension.as_deref() == Some(*ext)
            || file
                .mime_type()
                .is_some_and(|m| m.eq_ignore_ascii_case(mime))
    });

    if accepted {
        Ok(())
    } else {
        let allowed: Vec<&str> = ACCEPTED_TYPES.iter().map(|(_, ext)| *ext).collect();
        Err(FileRejection {
            file_name: file.name().to_string(),
            reason: format!("File type must be one of {}", allowed.join(", ")),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadWidget {
    drag_hover: bool,
    disabled: bool,
}

impl UploadWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_drag_hover(&self) -> bool {
        self.drag_hover
    }

    /// Disabling also drops any pending hover
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.drag_hover = false;
        }
    }

    pub fn drag_enter(&mut self) {
        if !self.disabled {
            self.drag_hover = true;
        }
    }

    pub fn drag_leave(&mut self) {
        self.drag_hover = false;
    }

    /// Handle dropped files. Only the first acceptable file is surfaced;
    /// further files are ignored.
    pub fn drop_files(&mut self, files: Vec<SelectedFile>) -> DropOutcome {
        self.drag_hover = false;
        self.pick_files(files)
    }

    /// Handle files chosen through the file picker
    pub fn pick_files(&mut self, files: Vec<SelectedFile>) -> DropOutcome {
        if self.disabled || files.is_empty() {
            return DropOutcome::Ignored;
        }

        let mut rejections = Vec::new();
        for file in files {
            match check_accepted(&file) {
                Ok(()) => {
                    for rejection in &rejections {
                        log_rejection(rejection);
                    }
                    return DropOutcome::Changed(SelectionChange::Selected(file));
                }
                Err(rejection) => rejections.push(rejection),
            }
        }

        for rejection in &rejections {
            log_rejection(rejection);
        }
        DropOutcome::Rejected(rejections)
    }

    /// The dedicated remove control. Inert while disabled.
    pub fn remove(&self) -> Option<SelectionChange> {
        if self.disabled {
            None
        } else {
            Some(SelectionChange::Removed)
        }
    }

    pub fn view(&self, current: Option<&SelectedFile>) -> WidgetView {
        match current {
            Some(file) => WidgetView::FileSelected {
                name: file.name().to_string(),
                size_label: file.size_label(),
            },
            None if self.drag_hover => WidgetView::DragHover,
            None => WidgetView::Empty,
        }
    }
}

fn log_rejection(rejection: &FileRejection) {
    warn!(
        file = %rejection.file_name,
        reason = %rejection.reason,
        "File rejected"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txt(name: &str) -> SelectedFile {
        SelectedFile::new(name, "Hello world")
    }

    #[test]
    fn test_accepts_allowlisted_extensions() {
        for name in ["a.doc", "b.docx", "c.txt", "D.TXT"] {
            assert!(check_accepted(&txt(name)).is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_accepts_allowlisted_mime_without_extension() {
        let file = SelectedFile::new("notes", "x").with_mime_type("text/plain");
        assert!(check_accepted(&file).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let file = SelectedFile::new("photo.png", "x").with_mime_type("image/png");
        let rejection = check_accepted(&file).unwrap_err();
        assert_eq!(rejection.file_name, "photo.png");
        assert!(rejection.reason.contains(".docx"));
    }

    #[test]
    fn test_drop_surfaces_only_first_file() {
        let mut widget = UploadWidget::new();
        let outcome = widget.drop_files(vec![txt("first.txt"), txt("second.txt")]);
        assert_eq!(
            outcome,
            DropOutcome::Changed(SelectionChange::Selected(txt("first.txt")))
        );
    }

    #[test]
    fn test_drop_skips_rejected_to_first_accepted() {
        let mut widget = UploadWidget::new();
        let outcome = widget.drop_files(vec![txt("image.png"), txt("doc.docx")]);
        assert_eq!(
            outcome,
            DropOutcome::Changed(SelectionChange::Selected(txt("doc.docx")))
        );
    }

    #[test]
    fn test_drop_of_only_rejected_files() {
        let mut widget = UploadWidget::new();
        match widget.drop_files(vec![txt("a.pdf"), txt("b.exe")]) {
            DropOutcome::Rejected(rejections) => assert_eq!(rejections.len(), 2),
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_drop_is_ignored() {
        let mut widget = UploadWidget::new();
        assert_eq!(widget.drop_files(Vec::new()), DropOutcome::Ignored);
    }

    #[test]
    fn test_disabled_widget_ignores_everything() {
        let mut widget = UploadWidget::new();
        widget.set_disabled(true);
        widget.drag_enter();
        assert!(!widget.is_drag_hover());
        assert_eq!(widget.drop_files(vec![txt("a.txt")]), DropOutcome::Ignored);
        assert_eq!(widget.pick_files(vec![txt("a.txt")]), DropOutcome::Ignored);
        assert_eq!(widget.remove(), None);
    }

    #[test]
    fn test_remove_reports_removal() {
        let widget = UploadWidget::new();
        assert_eq!(widget.remove(), Some(SelectionChange::Removed));
    }

    #[test]
    fn test_three_views() {
        let mut widget = UploadWidget::new();
        assert_eq!(widget.view(None), WidgetView::Empty);

        widget.drag_enter();
        assert_eq!(widget.view(None), WidgetView::DragHover);

        let file = SelectedFile::new("report.txt", vec![0u8; 2048]);
        assert_eq!(
            widget.view(Some(&file)),
            WidgetView::FileSelected {
                name: "report.txt".to_string(),
                size_label: "2.00 KB".to_string(),
            }
        );

        widget.drag_leave();
        assert_eq!(widget.view(None), WidgetView::Empty);
    }

    #[test]
    fn test_drop_clears_hover() {
        let mut widget = UploadWidget::new();
        widget.drag_enter();
        let _ = widget.drop_files(vec![txt("a.txt")]);
        assert!(!widget.is_drag_hover());
    }
}
