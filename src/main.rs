use eframe::egui;
use resume_ranker::{
    gui::ResumeRankerApp,
    logging,
};

fn main() -> eframe::Result<()> {
    logging::init_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Resume Ranker")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Ranker",
        options,
        Box::new(|cc| Ok(Box::new(ResumeRankerApp::new(cc)?))),
    )
}
