use std::time::Duration;

use reqwest::{
    multipart::{
        Form,
        Part,
    },
    Client,
    StatusCode,
    Url,
};

use crate::core::{
    models::ErrorBody,
    selection::SelectedFile,
    AnalysisResult,
    RankerError,
    Settings,
};

pub const FILES_FIELD: &str = "files";
pub const DESCRIPTION_FIELD: &str = "description";

pub fn http_client(settings: &Settings) -> Result<Client, RankerError> {
    Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs.max(1)))
        .build()
        .map_err(|e| RankerError::Custom(format!("HTTP client build failed: {e}")))
}

/// Parses the configured service URL. Only http(s) URLs that can carry a path are accepted.
pub fn service_base(settings: &Settings) -> Result<Url, RankerError> {
    let url = Url::parse(settings.service_url.trim())
        .map_err(|e| RankerError::InvalidUrl(format!("{}: {e}", settings.service_url)))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(RankerError::InvalidUrl(settings.service_url.clone()));
    }

    Ok(url)
}

fn endpoint<'a>(
    settings: &Settings,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, RankerError> {
    let mut url = service_base(settings)?;
    url.path_segments_mut()
        .map_err(|_| RankerError::InvalidUrl(settings.service_url.clone()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

pub fn analyze_url(settings: &Settings) -> Result<Url, RankerError> {
    endpoint(settings, path_segments(&settings.analyze_path))
}

/// Link under which the service serves an uploaded résumé back. The filename
/// is percent-encoded as a single path segment.
pub fn download_url(settings: &Settings, filename: &str) -> Result<Url, RankerError> {
    endpoint(settings, path_segments(&settings.download_prefix).chain(std::iter::once(filename)))
}

/// Everything one submission sends.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub files: Vec<SelectedFile>,
    pub description: String,
}

impl AnalysisRequest {
    pub fn into_form(self) -> Result<Form, RankerError> {
        let mut form = Form::new();

        for file in self.files {
            let part = Part::bytes(file.bytes.to_vec())
                .file_name(file.name)
                .mime_str(&file.content_type)?;
            form = form.part(FILES_FIELD, part);
        }

        Ok(form.text(DESCRIPTION_FIELD, self.description))
    }
}

pub async fn submit_analysis(
    client: &Client,
    url: Url,
    request: AnalysisRequest,
) -> Result<AnalysisResult, RankerError> {
    let file_count = request.files.len();
    tracing::info!(%url, file_count, "submitting resumes for analysis");

    let form = request.into_form()?;
    let response = client.post(url).multipart(form).send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    interpret_response(status, &body)
}

/// Turns a complete response into the analysis result or a user-facing error.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<AnalysisResult, RankerError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|error| error.message())
            .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));

        tracing::warn!(status = status.as_u16(), %message, "analysis request rejected");
        return Err(RankerError::Server { status: status.as_u16(), message });
    }

    let result: AnalysisResult = serde_json::from_slice(body)
        .map_err(|e| RankerError::InvalidResponse(e.to_string()))?;

    if !result.success {
        let message = result
            .message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Analysis failed".to_string());
        tracing::warn!(request_id = %result.request_id, %message, "service reported failure");
        return Err(RankerError::AnalysisFailed(message));
    }

    tracing::info!(
        request_id = %result.request_id,
        candidates = result.candidates.len(),
        processed_files = result.processed_files,
        "analysis received"
    );
    Ok(result)
}
