mod card;
pub mod view;

use eframe::egui::{
    self,
    RichText,
};
pub use view::ResultsView;

use crate::{
    core::{
        AnalysisResult,
        Settings,
    },
    gui::theme::Theme,
};

const CARD_MIN_WIDTH: f32 = 380.0;

pub enum ResultsAction {
    BackToUpload,
}

/// Owns the result handed over on navigation. It is never fetched again.
///
/// The view is derived once per payload and rebuilt only when the settings
/// behind the download links change.
pub struct ResultsScreen {
    result: Option<AnalysisResult>,
    view: ResultsView,
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self { result: None, view: ResultsView::NoData }
    }
}

impl ResultsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, payload: Option<AnalysisResult>, settings: &Settings) {
        match &payload {
            Some(result) => tracing::info!(
                request_id = %result.request_id,
                candidates = result.candidates.len(),
                "showing analysis results"
            ),
            None => tracing::info!("results opened without analysis data"),
        }
        self.result = payload;
        self.refresh(settings);
    }

    pub fn refresh(&mut self, settings: &Settings) {
        self.view = ResultsView::build(self.result.as_ref(), settings);
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) -> Option<ResultsAction> {
        let view = &self.view;
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| match view {
            ResultsView::NoData => {
                if no_data_panel(ui, theme) {
                    action = Some(ResultsAction::BackToUpload);
                }
            }
            ResultsView::Report(report) => {
                ui.horizontal(|ui| {
                    ui.heading(theme.heading(ctx, "Analysis Results"));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("New Analysis").clicked() {
                            action = Some(ResultsAction::BackToUpload);
                        }
                    });
                });
                ui.add_space(12.0);

                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    if let Some(summary) = &report.summary {
                        egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new("Overall Summary").heading());
                            ui.add_space(4.0);
                            ui.label(&summary.text);
                            ui.add_space(4.0);
                            ui.label(RichText::new(&summary.footer).small().color(theme.comment(ctx)));
                        });
                        ui.add_space(12.0);
                    }

                    if let Some(analysis) = &report.raw_analysis {
                        ui.collapsing("Raw analysis", |ui| {
                            ui.label(analysis);
                        });
                        ui.add_space(12.0);
                    }

                    if report.cards.is_empty() {
                        info_panel(ui, theme, "No candidates found in the analysis.");
                        return;
                    }

                    let columns =
                        ((ui.available_width() / CARD_MIN_WIDTH).floor() as usize).clamp(1, 3);
                    for row in report.cards.chunks(columns) {
                        ui.columns(columns, |cols| {
                            for (col, card) in cols.iter_mut().zip(row) {
                                card::candidate_card(col, card, theme);
                            }
                        });
                        ui.add_space(12.0);
                    }
                });
            }
        });

        action
    }
}

/// Shown when the screen was reached without an analysis. Returns true when
/// the user asks to go back.
fn no_data_panel(ui: &mut egui::Ui, theme: &Theme) -> bool {
    let red = theme.red(ui.ctx());

    egui::Frame::new()
        .fill(red.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, red))
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("No Analysis Data Found").strong().color(red));
            ui.label("Please upload resumes and analyze them first.");
        });

    ui.add_space(12.0);
    ui.button("Go Back to Upload").clicked()
}

fn info_panel(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    let cyan = theme.cyan(ui.ctx());

    egui::Frame::new()
        .fill(cyan.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, cyan))
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("ℹ").color(cyan));
            ui.label(message);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_replaces_payload() {
        let settings = Settings::default();
        let mut screen = ResultsScreen::new();
        assert_eq!(screen.view(), &ResultsView::NoData);

        let result: AnalysisResult = serde_json::from_str(r#"{"success": true}"#).unwrap();
        screen.enter(Some(result), &settings);
        assert!(matches!(screen.view(), ResultsView::Report(_)));

        screen.enter(None, &settings);
        assert_eq!(screen.view(), &ResultsView::NoData);
    }

    #[test]
    fn test_refresh_rebuilds_download_links() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"success": true, "candidates": [
                {"filename": "a.pdf", "ranking": 1, "suitability_score": 90}
            ]}"#,
        )
        .unwrap();
        let mut screen = ResultsScreen::new();
        screen.enter(Some(result), &Settings::default());

        let moved = Settings { service_url: "https://ranker.example".into(), ..Settings::default() };
        screen.refresh(&moved);

        let ResultsView::Report(report) = screen.view() else {
            panic!("Expected a report");
        };
        assert_eq!(
            report.cards[0].download_url.as_deref(),
            Some("https://ranker.example/api/download/a.pdf")
        );
    }
}
