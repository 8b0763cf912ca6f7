pub mod errors;
pub mod http;
pub mod models;
pub mod selection;
pub mod settings;
pub mod tasks;

pub use errors::RankerError;
pub use models::{
    AnalysisResult,
    Candidate,
    RankTier,
    ScoreTier,
};
pub use selection::{
    FileSelection,
    SelectedFile,
};
pub use settings::Settings;
