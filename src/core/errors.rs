use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not reach the analysis service: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Invalid file(s): {}", .0.join(", "))]
    InvalidFiles(Vec<String>),

    #[error("Could not read {name}: {source}")]
    UnreadableFile { name: String, source: Box<std::io::Error> },

    #[error("Please select at least one resume.")]
    EmptySelection,

    #[error("Please enter a job description.")]
    EmptyDescription,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    AnalysisFailed(String),

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Custom(String),
}

impl From<std::io::Error> for RankerError {
    fn from(error: std::io::Error) -> Self {
        RankerError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for RankerError {
    fn from(error: reqwest::Error) -> Self {
        RankerError::Reqwest(Box::new(error))
    }
}
