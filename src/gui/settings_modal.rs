use eframe::egui;

use super::modal::{
    action_buttons,
    Modal,
    ModalConfig,
    ModalResult,
};
use crate::core::{
    http,
    RankerError,
    Settings,
};

pub struct SettingsModal {
    modal: Modal<Settings>,
    save_error: Option<String>,
}

impl SettingsModal {
    pub fn new() -> Self {
        let config = ModalConfig {
            min_size: Some(egui::Vec2::new(420.0, 220.0)),
            close_on_outside_click: false,
            ..Default::default()
        };

        Self { modal: Modal::new("Service Settings").with_config(config), save_error: None }
    }

    pub fn open_settings(&mut self, current: Settings) {
        self.save_error = None;
        self.modal.open_with(current);
    }

    /// Reopens the dialog on the settings that could not be written to disk.
    pub fn save_failed(&mut self, attempted: Settings, error: &RankerError) {
        self.save_error =
            Some(format!("Settings apply to this session but could not be saved: {error}"));
        self.modal.open_with(attempted);
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    /// Returns the edited settings once the user saves them.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Settings> {
        let save_error = self.save_error.as_deref();
        let result = self.modal.show(ctx, |ui, data| {
            if let Some(error) = save_error {
                ui.colored_label(ui.visuals().error_fg_color, error);
                ui.add_space(8.0);
            }

            egui::Grid::new("service_settings_grid").num_columns(2).spacing([12.0, 8.0]).show(
                ui,
                |ui| {
                    ui.label("Service URL");
                    ui.text_edit_singleline(&mut data.service_url);
                    ui.end_row();

                    ui.label("Analyze path");
                    ui.text_edit_singleline(&mut data.analyze_path);
                    ui.end_row();

                    ui.label("Download prefix");
                    ui.text_edit_singleline(&mut data.download_prefix);
                    ui.end_row();

                    ui.label("Request timeout");
                    ui.add(
                        egui::DragValue::new(&mut data.request_timeout_secs)
                            .range(1..=3600)
                            .suffix(" s"),
                    );
                    ui.end_row();
                },
            );

            ui.add_space(8.0);

            let validation = http::analyze_url(data);
            match &validation {
                Ok(url) => {
                    ui.small(format!("Resumes will be posted to {url}"));
                }
                Err(e) => {
                    ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                }
            }

            ui.add_space(8.0);

            if ui.small_button("Reset to defaults").clicked() {
                *data = Settings::default();
            }

            ui.add_space(8.0);
            action_buttons(ui, data, "Save", "Cancel", validation.is_ok())
        });

        match result {
            Some(ModalResult::Confirmed(settings)) => {
                self.save_error = None;
                Some(settings)
            }
            Some(ModalResult::Cancelled) => {
                self.save_error = None;
                None
            }
            None => None,
        }
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
