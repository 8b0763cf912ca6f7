use eframe::egui::{
    self,
    RichText,
};
use egui_extras::{
    Column,
    TableBuilder,
};
use rfd::FileDialog;

use crate::{
    core::{
        http::AnalysisRequest,
        selection::{
            self,
            content_type_for,
        },
        tasks::AnalysisOutcome,
        AnalysisResult,
        FileSelection,
        RankerError,
        SelectedFile,
    },
    gui::theme::Theme,
};

/// State of the upload screen. Lives for the whole session so a failed or
/// finished analysis leaves the form as the user left it.
#[derive(Default)]
pub struct UploadForm {
    pub selection: FileSelection,
    pub description: String,
    pub in_flight: bool,
    pub error: Option<String>,
}

pub enum UploadAction {
    Submit(AnalysisRequest),
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a freshly chosen batch, or reports why it was turned away.
    pub fn add_batch(&mut self, batch: Result<Vec<SelectedFile>, RankerError>) {
        self.error = None;

        match batch.and_then(|files| self.selection.add_batch(files)) {
            Ok(added) => tracing::debug!(added, total = self.selection.len(), "files selected"),
            Err(e) => {
                tracing::warn!(error = %e, "file batch rejected");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn remove_file(&mut self, index: usize) {
        if let Some(removed) = self.selection.remove(index) {
            tracing::debug!(file = %removed.name, "file removed");
        }
    }

    pub fn validate(&self) -> Result<AnalysisRequest, RankerError> {
        if self.selection.is_empty() {
            return Err(RankerError::EmptySelection);
        }

        if self.description.trim().is_empty() {
            return Err(RankerError::EmptyDescription);
        }

        Ok(AnalysisRequest {
            files: self.selection.files().to_vec(),
            description: self.description.clone(),
        })
    }

    /// Builds the request and marks it outstanding. Returns `None`, with the
    /// reason shown inline, when nothing may be sent.
    pub fn begin_submission(&mut self) -> Option<AnalysisRequest> {
        if self.in_flight {
            return None;
        }

        match self.validate() {
            Ok(request) => {
                self.in_flight = true;
                self.error = None;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Clears the loading flag. A successful result is handed back for navigation.
    pub fn finish(&mut self, outcome: AnalysisOutcome) -> Option<AnalysisResult> {
        self.in_flight = false;

        match outcome {
            Ok(result) => Some(result),
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.selection.is_empty()
    }

    fn pick_files(&mut self) {
        if let Some(paths) = FileDialog::new()
            .set_title("Select resumes")
            .add_filter("PDF documents", &["pdf"])
            .add_filter("All files", &["*"])
            .pick_files()
        {
            let batch = selection::load_batch(paths.iter().map(|path| (path.as_path(), None)));
            self.add_batch(batch);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let batch = dropped.iter().map(dropped_to_selected).collect();
        self.add_batch(batch);
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<UploadAction> {
        self.handle_dropped_files(ctx);

        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(theme.heading(ctx, "Multi-Resume Analysis"));
            ui.add_space(12.0);

            self.show_error(ui, theme);

            ui.label(RichText::new("Job Description *").strong());
            ui.add(
                egui::TextEdit::multiline(&mut self.description)
                    .hint_text("Paste the job description here")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("📄 Add PDF Files").clicked() {
                    self.pick_files();
                }
                let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
                let hint = if hovering { "Release to add files" } else { "or drop files here" };
                ui.label(RichText::new(hint).color(theme.comment(ctx)));
            });

            if !self.selection.is_empty() {
                ui.add_space(8.0);
                ui.label(format!(
                    "Selected Files ({}, {}):",
                    self.selection.len(),
                    self.selection.total_size_label()
                ));
                if let Some(index) = self.file_table(ui) {
                    self.remove_file(index);
                }
            }

            ui.add_space(16.0);

            let button = if self.in_flight {
                egui::Button::new("Analyzing...")
            } else {
                egui::Button::new(RichText::new("Analyze Resumes").strong())
            };

            ui.horizontal(|ui| {
                let width = ui.available_width();
                let response =
                    ui.add_enabled(self.can_submit(), button.min_size(egui::vec2(width - 24.0, 36.0)));
                if self.in_flight {
                    ui.add(egui::Spinner::new());
                }
                if response.clicked() {
                    action = self.begin_submission().map(UploadAction::Submit);
                }
            });
        });

        action
    }

    fn show_error(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let Some(message) = &self.error else {
            return;
        };

        let red = theme.red(ui.ctx());
        let mut dismissed = false;

        egui::Frame::new()
            .fill(red.gamma_multiply(0.15))
            .stroke(egui::Stroke::new(1.0, red))
            .corner_radius(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").color(red));
                    ui.label(message.as_str());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismissed = ui.small_button("✖").on_hover_text("Dismiss").clicked();
                    });
                });
            });

        ui.add_space(8.0);

        if dismissed {
            self.error = None;
        }
    }

    /// Selected files with a remove button per row. Returns the row to remove.
    fn file_table(&self, ui: &mut egui::Ui) -> Option<usize> {
        let files = self.selection.files();
        let row_height = egui::TextStyle::Body
            .resolve(ui.style())
            .size
            .max(ui.spacing().interact_size.y);
        let mut remove = None;

        TableBuilder::new(ui)
            .id_salt("selected_files")
            .striped(true)
            .max_scroll_height(200.0)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder())
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(30.0))
            .body(|body| {
                body.rows(row_height, files.len(), |mut row| {
                    let index = row.index();
                    let file = &files[index];
                    row.col(|ui| {
                        ui.label(&file.name);
                    });
                    row.col(|ui| {
                        ui.weak(file.size_label());
                    });
                    row.col(|ui| {
                        if ui.small_button("🗑").on_hover_text("Remove").clicked() {
                            remove = Some(index);
                        }
                    });
                });
            });

        remove
    }
}

/// Dropped files carry either a path (native) or their bytes (web).
fn dropped_to_selected(file: &egui::DroppedFile) -> Result<SelectedFile, RankerError> {
    let declared = (!file.mime.is_empty()).then_some(file.mime.as_str());

    if let Some(path) = &file.path {
        return SelectedFile::from_path_with_mime(path, declared);
    }

    match &file.bytes {
        Some(bytes) => {
            let content_type = declared
                .unwrap_or_else(|| content_type_for(std::path::Path::new(&file.name)));
            Ok(SelectedFile::new(file.name.clone(), content_type, bytes.to_vec()))
        }
        None => Err(RankerError::Custom(format!("Could not read {}", file.name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::PDF_MIME;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, PDF_MIME, b"%PDF-1.7".to_vec())
    }

    fn ready_form() -> UploadForm {
        let mut form = UploadForm::new();
        form.add_batch(Ok(vec![pdf("a.pdf"), pdf("b.pdf")]));
        form.description = "Rust developer, 5 years".to_string();
        form
    }

    #[test]
    fn test_rejected_batch_shows_error_and_keeps_selection() {
        let mut form = ready_form();
        form.add_batch(Ok(vec![pdf("c.pdf"), SelectedFile::new("cv.docx", "application/msword", vec![])]));

        assert_eq!(form.error.as_deref(), Some("Invalid file(s): cv.docx"));
        assert_eq!(form.selection.len(), 2);

        form.add_batch(Ok(vec![pdf("c.pdf")]));
        assert!(form.error.is_none());
        assert_eq!(form.selection.len(), 3);
    }

    #[test]
    fn test_submission_blocked_without_files() {
        let mut form = UploadForm::new();
        form.description = "Anything".to_string();

        assert!(form.begin_submission().is_none());
        assert!(!form.in_flight);
        assert_eq!(form.error.as_deref(), Some("Please select at least one resume."));
    }

    #[test]
    fn test_submission_blocked_with_blank_description() {
        let mut form = ready_form();
        form.description = "  \n\t ".to_string();

        assert!(form.begin_submission().is_none());
        assert!(!form.in_flight);
        assert_eq!(form.error.as_deref(), Some("Please enter a job description."));
    }

    #[test]
    fn test_submission_builds_request_once() {
        let mut form = ready_form();

        let request = form.begin_submission().unwrap();
        assert!(form.in_flight);
        assert!(!form.can_submit());
        assert_eq!(request.files.len(), 2);
        assert_eq!(request.description, "Rust developer, 5 years");

        assert!(form.begin_submission().is_none());
    }

    #[test]
    fn test_failed_outcome_keeps_form() {
        let mut form = ready_form();
        form.begin_submission().unwrap();

        assert!(form.finish(Err("Analysis failed".to_string())).is_none());
        assert!(!form.in_flight);
        assert_eq!(form.error.as_deref(), Some("Analysis failed"));
        assert_eq!(form.selection.len(), 2);
        assert_eq!(form.description, "Rust developer, 5 years");
        assert!(form.can_submit());
    }

    #[test]
    fn test_successful_outcome_is_handed_back() {
        let mut form = ready_form();
        form.begin_submission().unwrap();

        let result: AnalysisResult =
            serde_json::from_str(r#"{"success": true, "candidates": []}"#).unwrap();
        assert_eq!(form.finish(Ok(result.clone())), Some(result));
        assert!(!form.in_flight);
        assert!(form.error.is_none());
    }

    #[test]
    fn test_dropped_bytes_use_declared_type() {
        let dropped = egui::DroppedFile {
            name: "resume.pdf".to_string(),
            mime: "text/plain".to_string(),
            bytes: Some(std::sync::Arc::from(b"hello".to_vec())),
            ..Default::default()
        };
        let file = dropped_to_selected(&dropped).unwrap();
        assert!(!file.is_pdf());

        let untyped = egui::DroppedFile {
            name: "resume.pdf".to_string(),
            bytes: Some(std::sync::Arc::from(b"%PDF".to_vec())),
            ..Default::default()
        };
        assert!(dropped_to_selected(&untyped).unwrap().is_pdf());
    }
}
