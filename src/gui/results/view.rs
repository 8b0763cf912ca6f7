use crate::core::{
    http,
    models::format_timestamp,
    AnalysisResult,
    Candidate,
    RankTier,
    ScoreTier,
    Settings,
};

/// What the results screen draws, derived from the navigation payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    NoData,
    Report(ReportView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub summary: Option<SummaryPanel>,
    pub raw_analysis: Option<String>,
    pub cards: Vec<CandidateCardView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPanel {
    pub text: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateCardView {
    pub title: String,
    pub rank_tier: RankTier,
    pub badge: Option<&'static str>,
    pub score_label: String,
    pub score_tier: ScoreTier,
    pub recommendation: String,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvement_suggestions: Option<Vec<String>>,
    pub download_url: Option<String>,
}

impl ResultsView {
    pub fn build(result: Option<&AnalysisResult>, settings: &Settings) -> Self {
        let Some(result) = result else {
            return ResultsView::NoData;
        };

        let summary = result.overall_summary.as_ref().map(|text| SummaryPanel {
            text: text.clone(),
            footer: format!(
                "Processed {} resumes on {}",
                result.processed_files,
                format_timestamp(&result.timestamp)
            ),
        });

        let raw_analysis =
            result.analysis.as_ref().filter(|text| !text.trim().is_empty()).cloned();

        let cards = result
            .candidates
            .iter()
            .map(|candidate| CandidateCardView::build(candidate, settings))
            .collect();

        ResultsView::Report(ReportView { summary, raw_analysis, cards })
    }
}

impl CandidateCardView {
    pub fn build(candidate: &Candidate, settings: &Settings) -> Self {
        let rank_tier = candidate.rank_tier();

        Self {
            title: format!("#{} - {}", candidate.ranking, candidate.filename),
            rank_tier,
            badge: rank_tier.badge(),
            score_label: format!("Score: {}", candidate.suitability_score),
            score_tier: candidate.score_tier(),
            recommendation: candidate.recommendation.clone(),
            summary: candidate.summary.clone(),
            strengths: candidate.strengths.clone(),
            weaknesses: candidate.weaknesses.clone(),
            improvement_suggestions: candidate.improvement_suggestions.clone(),
            download_url: http::download_url(settings, &candidate.filename)
                .map(|url| url.to_string())
                .ok(),
        }
    }
}
