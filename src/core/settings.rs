use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scheme, host and port of the analysis service.
    pub service_url: String,
    pub analyze_path: String,
    pub download_prefix: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:8000".to_string(),
            analyze_path: "/analyze-resumes".to_string(),
            download_prefix: "/api/download".to_string(),
            request_timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"service_url": "http://10.0.0.5:9000"}"#).unwrap();
        assert_eq!(settings.service_url, "http://10.0.0.5:9000");
        assert_eq!(settings.analyze_path, "/analyze-resumes");
        assert_eq!(settings.request_timeout_secs, 120);
    }
}
