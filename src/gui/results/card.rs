use eframe::egui::{
    self,
    RichText,
    Stroke,
};

use super::view::CandidateCardView;
use crate::gui::theme::Theme;

pub fn candidate_card(ui: &mut egui::Ui, card: &CandidateCardView, theme: &Theme) {
    let ctx = ui.ctx().clone();
    let rank_color = theme.rank_color(card.rank_tier);
    let stroke = match rank_color {
        Some(color) => Stroke::new(2.0, color),
        None => ui.visuals().widgets.noninteractive.bg_stroke,
    };

    egui::Frame::group(ui.style()).stroke(stroke).inner_margin(12.0).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(&card.title).heading().size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                theme.chip(ui, &card.score_label, theme.score_color(&ctx, card.score_tier));
                if let (Some(badge), Some(color)) = (card.badge, rank_color) {
                    theme.chip(ui, badge, color);
                }
            });
        });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Recommendation:").color(theme.comment(&ctx)));
            ui.strong(&card.recommendation);
        });

        ui.separator();

        ui.label(&card.summary);
        ui.add_space(8.0);

        ui.label(RichText::new("Strengths:").strong());
        chip_list(ui, theme, &card.strengths, theme.green(&ctx));

        ui.label(RichText::new("Weaknesses:").strong());
        chip_list(ui, theme, &card.weaknesses, theme.red(&ctx));

        if let Some(suggestions) = &card.improvement_suggestions {
            ui.label(RichText::new("Improvement Suggestions:").strong());
            for (i, suggestion) in suggestions.iter().enumerate() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(format!("{}.", i + 1)).color(theme.comment(&ctx)));
                    ui.label(suggestion);
                });
            }
            ui.add_space(8.0);
        }

        let size = egui::vec2(ui.available_width(), 28.0);
        match &card.download_url {
            Some(url) => {
                let button = ui.add_sized(size, egui::Button::new("⬇ Download Resume"));
                if button.on_hover_text(url).clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                }
            }
            None => {
                ui.add_enabled_ui(false, |ui| {
                    ui.add_sized(size, egui::Button::new("⬇ Download Resume"))
                        .on_disabled_hover_text("The service URL in settings is not valid");
                });
            }
        }
    });
}

fn chip_list(ui: &mut egui::Ui, theme: &Theme, labels: &[String], color: egui::Color32) {
    ui.horizontal_wrapped(|ui| {
        for label in labels {
            theme.chip(ui, label, color);
        }
    });
    ui.add_space(6.0);
}
