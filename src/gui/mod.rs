pub mod app;
pub mod modal;
pub mod results;
pub mod settings_modal;
pub mod theme;
pub mod top_bar;
pub mod upload;

pub use app::ResumeRankerApp;
