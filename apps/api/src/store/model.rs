use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{ScoreMap, Stream, UserProfile};
use crate::quiz::scoring::QuizResult;
use crate::store::page::Page;

/// Everything the app remembers between reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user: UserProfile,
    pub quiz_results: QuizResult,
    pub current_page: Page,
}

/// Shallow patch for the stored [`QuizResult`].
///
/// A missing key leaves the field alone; an explicit `null` clears a nullable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizResultsUpdate {
    pub scores: Option<ScoreMap>,
    #[serde(deserialize_with = "present")]
    pub recommended_stream: Option<Option<Stream>>,
    #[serde(deserialize_with = "present")]
    pub tied_streams: Option<Option<BTreeSet<Stream>>>,
    pub completed: Option<bool>,
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl QuizResultsUpdate {
    /// Back to the not-taken shape; used on retake.
    pub fn cleared() -> Self {
        QuizResult::zeroed().into()
    }

    pub fn apply_to(self, result: &mut QuizResult) {
        if let Some(scores) = self.scores {
            result.scores = scores;
        }
        if let Some(stream) = self.recommended_stream {
            result.recommended_stream = stream;
        }
        if let Some(tied) = self.tied_streams {
            result.tied_streams = tied;
        }
        if let Some(completed) = self.completed {
            result.completed = completed;
        }
    }
}

impl From<QuizResult> for QuizResultsUpdate {
    fn from(result: QuizResult) -> Self {
        Self {
            scores: Some(result.scores),
            recommended_stream: Some(result.recommended_stream),
            tied_streams: Some(result.tied_streams),
            completed: Some(result.completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_science() -> QuizResult {
        QuizResult {
            scores: ScoreMap {
                science: 5,
                commerce: 5,
                arts: 1,
            },
            recommended_stream: Some(Stream::Science),
            tied_streams: Some([Stream::Science, Stream::Commerce].into_iter().collect()),
            completed: true,
        }
    }

    #[test]
    fn test_default_state_json_shape() {
        let json = serde_json::to_value(AppState::default()).unwrap();
        assert_eq!(json["currentPage"], "welcome");
        assert_eq!(json["user"]["isLoggedIn"], false);
        assert_eq!(json["user"]["loginMethod"], "email");
        assert_eq!(json["quizResults"]["completed"], false);
        assert!(json["quizResults"]["recommendedStream"].is_null());
    }

    #[test]
    fn test_state_round_trip() {
        let state = AppState {
            user: UserProfile {
                name: "Meera".into(),
                interests: vec!["music".into(), "biology".into()],
                is_logged_in: true,
                ..UserProfile::default()
            },
            quiz_results: completed_science(),
            current_page: crate::store::page::Page::CollegeRecommendations,
        };
        let text = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&text).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_missing_keys_keep_values() {
        let mut result = completed_science();
        let update: QuizResultsUpdate =
            serde_json::from_value(serde_json::json!({ "completed": false })).unwrap();
        update.apply_to(&mut result);
        assert!(!result.completed);
        assert_eq!(result.recommended_stream, Some(Stream::Science));
        assert!(result.tied_streams.is_some());
    }

    #[test]
    fn test_explicit_null_clears() {
        let mut result = completed_science();
        let update: QuizResultsUpdate = serde_json::from_value(serde_json::json!({
            "recommendedStream": null,
            "tiedStreams": null
        }))
        .unwrap();
        update.apply_to(&mut result);
        assert_eq!(result.recommended_stream, None);
        assert_eq!(result.tied_streams, None);
        assert!(result.completed);
    }

    #[test]
    fn test_cleared_resets_everything() {
        let mut result = completed_science();
        QuizResultsUpdate::cleared().apply_to(&mut result);
        assert_eq!(result, QuizResult::zeroed());
    }
}
