use eframe::egui::{
    self,
    containers,
};

use crate::{
    core::Settings,
    gui::app::Screen,
};

pub enum TopBarAction {
    Navigate(Screen),
    OpenSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        current: Screen,
        settings: &Settings,
        analyzing: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.add_enabled(current != Screen::Upload, egui::Button::new("Upload")).clicked() {
                        action = Some(TopBarAction::Navigate(Screen::Upload));
                    }
                    if ui.add_enabled(current != Screen::Results, egui::Button::new("Results")).clicked() {
                        action = Some(TopBarAction::Navigate(Screen::Results));
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Service Settings").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status(ui, settings, analyzing);
                });
            });
        });

        action
    }

    fn show_status(ui: &mut egui::Ui, settings: &Settings, analyzing: bool) {
        let (color, tooltip) = if analyzing {
            (egui::Color32::from_rgb(230, 180, 40), "Waiting for the analysis service")
        } else {
            (egui::Color32::from_rgb(0, 200, 0), "Idle")
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
            ui.small(&settings.service_url).on_hover_text("Analysis service");
        });
    }
}
