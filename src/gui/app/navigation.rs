use crate::core::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Upload,
    Results,
}

/// Current screen plus the state carried into it.
///
/// A navigation payload is delivered exactly once: `take_arrival` yields it on
/// the first frame after `navigate` and nothing afterwards. Navigating without
/// a payload delivers `None`, which the results screen treats as "no data".
#[derive(Debug)]
pub struct Navigator {
    current: Screen,
    arrival: Option<Option<AnalysisResult>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { current: Screen::Upload, arrival: None }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn navigate(&mut self, screen: Screen, payload: Option<AnalysisResult>) {
        tracing::debug!(?screen, with_payload = payload.is_some(), "navigate");
        self.current = screen;
        self.arrival = Some(payload);
    }

    pub fn take_arrival(&mut self) -> Option<Option<AnalysisResult>> {
        self.arrival.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> AnalysisResult {
        serde_json::from_str(r#"{"success": true, "request_id": "r1"}"#).unwrap()
    }

    #[test]
    fn test_starts_on_upload_without_arrival() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.current(), Screen::Upload);
        assert!(navigator.take_arrival().is_none());
    }

    #[test]
    fn test_payload_is_delivered_once() {
        let mut navigator = Navigator::new();
        navigator.navigate(Screen::Results, Some(result()));

        assert_eq!(navigator.current(), Screen::Results);
        let payload = navigator.take_arrival().unwrap().unwrap();
        assert_eq!(payload.request_id, "r1");
        assert!(navigator.take_arrival().is_none());
        assert_eq!(navigator.current(), Screen::Results);
    }

    #[test]
    fn test_direct_navigation_carries_no_payload() {
        let mut navigator = Navigator::new();
        navigator.navigate(Screen::Results, Some(result()));
        navigator.navigate(Screen::Results, None);

        assert_eq!(navigator.take_arrival(), Some(None));
    }
}
