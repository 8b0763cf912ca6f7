use crate::core::AnalysisResult;

pub type AnalysisOutcome = Result<AnalysisResult, String>;

#[derive(Debug, Clone)]
pub enum TaskResult {
    Analysis(AnalysisOutcome),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Analysis(_) => "analysis",
        }
    }
}
