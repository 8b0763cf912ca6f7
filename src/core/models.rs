use chrono::{
    DateTime,
    NaiveDateTime,
};
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// Report returned by the analysis service for one submission.
///
/// Everything except `success` falls back to a default so that a bare
/// `{"success": false}` still decodes and can be reported as a failed analysis.
/// Lists and strings also accept an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub processed_files: u32,
    #[serde(default)]
    pub overall_summary: Option<String>,
    /// Free-text analysis, sent by service versions that do not structure
    /// their output into candidates.
    #[serde(default)]
    pub analysis: Option<String>,
    /// Some services put a reason next to `success: false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub filename: String,
    pub ranking: u32,
    pub suitability_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendation: String,
    #[serde(default)]
    pub improvement_suggestions: Option<Vec<String>>,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Candidate {
    pub fn rank_tier(&self) -> RankTier {
        RankTier::from_ranking(self.ranking)
    }

    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.suitability_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Unranked,
}

impl RankTier {
    pub fn from_ranking(ranking: u32) -> Self {
        match ranking {
            1 => RankTier::Gold,
            2 => RankTier::Silver,
            3 => RankTier::Bronze,
            _ => RankTier::Unranked,
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        match self {
            RankTier::Gold => Some("Top Resume"),
            RankTier::Silver => Some("2nd Best"),
            RankTier::Bronze => Some("3rd Best"),
            RankTier::Unranked => None,
        }
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Favorable,
    Warning,
    Unfavorable,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Favorable
        } else if score >= 50.0 {
            ScoreTier::Warning
        } else {
            ScoreTier::Unfavorable
        }
    }
}

/// Error payload the service may send with a non-success status.
///
/// `detail` is a plain string for handled errors and a list of
/// `{"msg": ...}` objects for request validation failures.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// First non-empty human readable message, `detail` taking precedence.
    pub fn message(&self) -> Option<String> {
        let present = |m: &String| !m.trim().is_empty();

        self.detail
            .as_ref()
            .and_then(detail_text)
            .filter(present)
            .or_else(|| self.message.clone().filter(present))
            .or_else(|| self.error.clone().filter(present))
    }
}

fn detail_text(detail: &serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Renders an ISO timestamp for display, keeping the raw text if it does not parse.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }

    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format(DISPLAY).to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_tiers() {
        assert_eq!(RankTier::from_ranking(1).badge(), Some("Top Resume"));
        assert_eq!(RankTier::from_ranking(2).badge(), Some("2nd Best"));
        assert_eq!(RankTier::from_ranking(3).badge(), Some("3rd Best"));
        assert_eq!(RankTier::from_ranking(4), RankTier::Unranked);
        assert_eq!(RankTier::from_ranking(0), RankTier::Unranked);
        assert!(RankTier::Unranked.badge().is_none());
    }

    #[test]
    fn test_score_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(100.0), ScoreTier::Favorable);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::Favorable);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Warning);
        assert_eq!(ScoreTier::from_score(50.0), ScoreTier::Warning);
        assert_eq!(ScoreTier::from_score(49.99), ScoreTier::Unfavorable);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Unfavorable);
    }

    #[test]
    fn test_failed_result_decodes_without_candidates() {
        let result: AnalysisResult = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!result.success);
        assert!(result.candidates.is_empty());
        assert!(result.overall_summary.is_none());
    }

    #[test]
    fn test_candidate_optional_fields() {
        let json = r#"{
            "filename": "a.pdf",
            "ranking": 1,
            "suitability_score": 91.5,
            "summary": "Strong fit",
            "recommendation": "Interview"
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert!(candidate.strengths.is_empty());
        assert!(candidate.weaknesses.is_empty());
        assert!(candidate.improvement_suggestions.is_none());
        assert_eq!(candidate.score_tier(), ScoreTier::Favorable);
        assert_eq!(candidate.rank_tier(), RankTier::Gold);
    }

    #[test]
    fn test_error_body_precedence() {
        let both: ErrorBody =
            serde_json::from_str(r#"{"detail": "No files uploaded", "message": "other"}"#)
                .unwrap();
        assert_eq!(both.message().as_deref(), Some("No files uploaded"));

        let message_only: ErrorBody = serde_json::from_str(r#"{"message": "Bad input"}"#).unwrap();
        assert_eq!(message_only.message().as_deref(), Some("Bad input"));

        let validation: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "description"], "msg": "field required"}]}"#,
        )
        .unwrap();
        assert_eq!(validation.message().as_deref(), Some("field required"));

        let empty: ErrorBody = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert!(empty.message().is_none());
    }

    #[test]
    fn test_blank_detail_falls_through() {
        let blank_detail: ErrorBody =
            serde_json::from_str(r#"{"detail": "", "message": "Real reason"}"#).unwrap();
        assert_eq!(blank_detail.message().as_deref(), Some("Real reason"));

        let blank_message: ErrorBody =
            serde_json::from_str(r#"{"detail": "  ", "message": " ", "error": "Quota exceeded"}"#)
                .unwrap();
        assert_eq!(blank_message.message().as_deref(), Some("Quota exceeded"));

        let unknown_items: ErrorBody =
            serde_json::from_str(r#"{"detail": [{"loc": []}], "message": "Bad upload"}"#).unwrap();
        assert_eq!(unknown_items.message().as_deref(), Some("Bad upload"));
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let json = r#"{
            "filename": "a.pdf",
            "ranking": 2,
            "suitability_score": 55,
            "strengths": null,
            "weaknesses": null,
            "summary": null,
            "recommendation": "Consider",
            "improvement_suggestions": null
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert!(candidate.strengths.is_empty());
        assert!(candidate.weaknesses.is_empty());
        assert_eq!(candidate.summary, "");
        assert!(candidate.improvement_suggestions.is_none());

        let result: AnalysisResult =
            serde_json::from_str(r#"{"success": true, "candidates": null, "request_id": null}"#)
                .unwrap();
        assert!(result.candidates.is_empty());
        assert_eq!(result.request_id, "");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-05T14:07:09.123456"), "2024-03-05 14:07:09");
        assert_eq!(format_timestamp("2024-03-05T14:07:09+02:00"), "2024-03-05 14:07:09");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
