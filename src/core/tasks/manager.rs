use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::{
    http::{
        self,
        AnalysisRequest,
    },
    AnalysisResult,
    RankerError,
    Settings,
};

/// Runs network work off the UI thread and hands results back through a channel.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, RankerError> {
        let runtime = Arc::new(Runtime::new()?);
        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Posts `request` to the configured service. `notify` runs once the
    /// outcome is queued so the caller can wake its event loop.
    pub fn submit_analysis<F>(&self, settings: &Settings, request: AnalysisRequest, notify: F)
    where
        F: Fn() + Send + 'static,
    {
        let (sender, runtime) = self.task_context();
        let settings = settings.clone();

        thread::spawn(move || {
            let result: Result<AnalysisResult, RankerError> = runtime.block_on(async {
                let client = http::http_client(&settings)?;
                let url = http::analyze_url(&settings)?;
                http::submit_analysis(&client, url, request).await
            });

            if let Err(e) = &result {
                tracing::error!(error = %e, "resume analysis failed");
            }

            let _ = sender.send(TaskResult::Analysis(result.map_err(|e| e.to_string())));
            notify();
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;
    use crate::core::selection::{
        SelectedFile,
        PDF_MIME,
    };

    #[test]
    fn test_failed_submission_is_reported_through_channel() {
        let mut manager = TaskManager::new().unwrap();
        let settings = Settings { service_url: "not a url".to_string(), ..Settings::default() };
        let request = AnalysisRequest {
            files: vec![SelectedFile::new("a.pdf", PDF_MIME, b"%PDF".to_vec())],
            description: "Backend engineer".to_string(),
        };

        let (woke_tx, woke_rx) = mpsc::channel();
        manager.submit_analysis(&settings, request, move || {
            let _ = woke_tx.send(());
        });
        woke_rx.recv_timeout(Duration::from_secs(10)).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut results = Vec::new();
        while results.is_empty() && Instant::now() < deadline {
            results = manager.poll_results();
        }

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].task_type(), "analysis");
        match &results[0] {
            TaskResult::Analysis(Err(message)) => assert!(message.starts_with("Invalid service URL")),
            other => panic!("Expected failed analysis, got {:?}", other),
        }
    }
}
