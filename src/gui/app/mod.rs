mod navigation;

use eframe::egui;
pub use navigation::{
    Navigator,
    Screen,
};

use super::{
    results::{
        ResultsAction,
        ResultsScreen,
    },
    settings_modal::SettingsModal,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    upload::{
        UploadAction,
        UploadForm,
    },
};
use crate::{
    core::{
        settings::SETTINGS_FILE,
        tasks::{
            TaskManager,
            TaskResult,
        },
        RankerError,
        Settings,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct ResumeRankerApp {
    // Configuration
    pub settings: Settings,

    // Screens
    pub navigator: Navigator,
    pub upload: UploadForm,
    pub results: ResultsScreen,

    // UI State
    pub theme: Theme,
    pub settings_modal: SettingsModal,

    task_manager: TaskManager,
}

impl ResumeRankerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, RankerError> {
        let settings = load_json_or_default::<Settings>(SETTINGS_FILE);
        tracing::info!(service_url = %settings.service_url, "starting resume ranker");

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);

        Ok(Self {
            settings,
            navigator: Navigator::new(),
            upload: UploadForm::new(),
            results: ResultsScreen::new(),
            theme,
            settings_modal: SettingsModal::new(),
            task_manager: TaskManager::new()?,
        })
    }

    fn handle_task_results(&mut self) {
        for result in self.task_manager.poll_results() {
            tracing::debug!(task = result.task_type(), "task finished");
            match result {
                TaskResult::Analysis(outcome) => {
                    if let Some(analysis) = self.upload.finish(outcome) {
                        self.navigator.navigate(Screen::Results, Some(analysis));
                    }
                }
            }
        }
    }

    fn submit(&mut self, ctx: &egui::Context, action: UploadAction) {
        match action {
            UploadAction::Submit(request) => {
                let ctx = ctx.clone();
                self.task_manager
                    .submit_analysis(&self.settings, request, move || ctx.request_repaint());
            }
        }
    }

    fn apply_settings(&mut self, settings: Settings) {
        if let Err(e) = save_json(&settings, SETTINGS_FILE) {
            tracing::error!(error = %e, "failed to save settings");
            self.settings_modal.save_failed(settings.clone(), &e);
        }
        self.settings = settings;
        self.results.refresh(&self.settings);
    }
}

impl eframe::App for ResumeRankerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_task_results();

        match TopBar::show(ctx, self.navigator.current(), &self.settings, self.upload.in_flight) {
            Some(TopBarAction::Navigate(screen)) => self.navigator.navigate(screen, None),
            Some(TopBarAction::OpenSettings) if !self.settings_modal.is_open() => {
                self.settings_modal.open_settings(self.settings.clone());
            }
            Some(TopBarAction::OpenSettings) => {}
            None => {}
        }

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.apply_settings(settings);
        }

        if let Some(payload) = self.navigator.take_arrival() {
            if self.navigator.current() == Screen::Results {
                self.results.enter(payload, &self.settings);
            }
        }

        match self.navigator.current() {
            Screen::Upload => {
                if let Some(action) = self.upload.show(ctx, &self.theme) {
                    self.submit(ctx, action);
                }
            }
            Screen::Results => {
                if let Some(ResultsAction::BackToUpload) = self.results.show(ctx, &self.theme) {
                    self.navigator.navigate(Screen::Upload, None);
                }
            }
        }
    }
}
