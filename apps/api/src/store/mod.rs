//! Application state store.
//!
//! Holds the single [`AppState`], applies the four transitions, writes the whole
//! state to durable storage after each one and keeps the navigation history in
//! step with `current_page`. Storage failures never propagate: the in-memory
//! state stays authoritative and persistence is best effort.

pub mod handlers;
pub mod model;
pub mod navigation;
pub mod page;
pub mod storage;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::ProfileUpdate;
pub use model::{AppState, QuizResultsUpdate};
pub use navigation::{HistoryEntry, NavigationPort, SessionHistory};
pub use page::Page;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

/// Durable storage key holding the serialized [`AppState`].
pub const STORAGE_KEY: &str = "careerAdvisor.appState";

const REQUIRED_FIELDS: [&str; 3] = ["user", "quizResults", "currentPage"];

#[derive(Debug, Error)]
enum RehydrateError {
    #[error("not valid JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unexpected shape: {0}")]
    Shape(serde_json::Error),
}

fn decode_state(raw: &str) -> Result<AppState, RehydrateError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(RehydrateError::Malformed)?;
    let object = value.as_object().ok_or(RehydrateError::NotAnObject)?;
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !object.contains_key(**f)) {
        return Err(RehydrateError::MissingField(*missing));
    }
    serde_json::from_value(value).map_err(RehydrateError::Shape)
}

pub struct StateStore<S, N> {
    state: AppState,
    storage: S,
    navigation: N,
}

impl<S: KeyValueStorage, N: NavigationPort> StateStore<S, N> {
    /// Start the store: restore persisted state if it is intact, then let a
    /// recognized URL path override the restored page.
    pub fn open(storage: S, navigation: N) -> Self {
        let mut store = Self {
            state: AppState::default(),
            storage,
            navigation,
        };

        if let Some(restored) = store.rehydrate() {
            info!(page = restored.current_page.id(), "restored persisted state");
            store.state = restored;
        }

        let path = store.navigation.current_path();
        if let Some(page) = Page::from_path(&path) {
            if page != store.state.current_page {
                info!(
                    path = %path,
                    restored = store.state.current_page.id(),
                    "URL path overrides restored page"
                );
                store.state.current_page = page;
                store.persist();
            }
        }

        store
            .navigation
            .replace(HistoryEntry::for_page(store.state.current_page));
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.navigation
    }

    /// Merge profile fields and mark the user signed in.
    pub fn set_user_info(&mut self, update: ProfileUpdate) {
        update.apply_to(&mut self.state.user);
        debug!("user profile updated");
        self.persist();
    }

    pub fn set_quiz_results(&mut self, update: impl Into<QuizResultsUpdate>) {
        update.into().apply_to(&mut self.state.quiz_results);
        debug!(
            completed = self.state.quiz_results.completed,
            "quiz results updated"
        );
        self.persist();
    }

    /// Show `page`, pushing a history entry only when the location actually changes.
    pub fn set_current_page(&mut self, page: Page) {
        self.state.current_page = page;
        let entry = HistoryEntry::for_page(page);
        if self.navigation.current_path() != entry.path {
            self.navigation.push(entry);
            debug!(page = page.id(), "navigated");
        }
        self.persist();
    }

    /// Like [`set_current_page`](Self::set_current_page) for an untrusted page id.
    /// Unknown ids land on the welcome page.
    pub fn navigate_to(&mut self, id: &str) -> Page {
        let page = Page::from_id(id).unwrap_or_else(|| {
            warn!(id, "unknown page requested, falling back to welcome");
            Page::default()
        });
        self.set_current_page(page);
        page
    }

    /// Follow a back/forward move that already happened in the history.
    pub fn apply_pop_event(&mut self, entry: HistoryEntry) {
        self.state.current_page = entry.page;
        debug!(page = entry.page.id(), "history pop");
        self.persist();
    }

    /// Forget everything: default state, no persisted record, fresh history.
    pub fn reset_state(&mut self) {
        self.state = AppState::default();
        if let Err(e) = self.storage.remove(STORAGE_KEY) {
            warn!(error = %e, "failed to clear persisted state");
        }
        self.navigation
            .reset(HistoryEntry::for_page(self.state.current_page));
        info!("application state reset");
    }

    fn rehydrate(&mut self) -> Option<AppState> {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "could not read persisted state, starting fresh");
                self.discard_persisted();
                return None;
            }
        };

        match decode_state(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(error = %e, "discarding persisted state");
                self.discard_persisted();
                None
            }
        }
    }

    fn discard_persisted(&mut self) {
        if let Err(e) = self.storage.remove(STORAGE_KEY) {
            warn!(error = %e, "failed to remove persisted state");
        }
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.state) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "could not serialize state");
                return;
            }
        };
        if let Err(e) = self.storage.set(STORAGE_KEY, &serialized) {
            warn!(error = %e, "state not persisted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScoreMap, Stream, UserProfile};
    use crate::quiz::scoring::{score, Answer, QuizResult, Response};
    use crate::store::storage::StorageError;

    type TestStore = StateStore<MemoryStorage, SessionHistory>;

    fn fresh() -> TestStore {
        StateStore::open(MemoryStorage::new(), SessionHistory::new("/"))
    }

    fn seeded(raw: &str, path: &str) -> TestStore {
        let mut storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, raw).unwrap();
        StateStore::open(storage, SessionHistory::new(path))
    }

    fn persisted(store: &TestStore) -> Option<AppState> {
        store
            .storage()
            .get(STORAGE_KEY)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    fn sample_state() -> AppState {
        AppState {
            user: UserProfile {
                name: "Kiran".into(),
                class_level: "10th".into(),
                email: "kiran@example.com".into(),
                interests: vec!["chemistry".into()],
                is_logged_in: true,
                ..UserProfile::default()
            },
            quiz_results: score(&[Answer {
                question_id: 1,
                response: Response::Yes,
                category: Stream::Science,
                weight: 2,
            }]),
            current_page: Page::Dashboard,
        }
    }

    /// Storage that accepts nothing, like a browser with storage disabled.
    struct BrokenStorage;

    fn refused(what: &str) -> StorageError {
        StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, what.to_string()))
    }

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(refused("disabled"))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(refused("quota exceeded"))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(refused("disabled"))
        }
    }

    #[test]
    fn test_cold_start_defaults() {
        let store = fresh();
        assert_eq!(store.state(), &AppState::default());
        assert_eq!(store.navigation().entries().len(), 1);
        assert_eq!(store.navigation().current_path(), "/");
        assert!(!store.storage().contains(STORAGE_KEY));
    }

    #[test]
    fn test_every_transition_persists() {
        let mut store = fresh();
        store.set_user_info(ProfileUpdate {
            name: Some("Kiran".into()),
            ..ProfileUpdate::default()
        });
        assert_eq!(persisted(&store).as_ref(), Some(store.state()));

        store.set_quiz_results(QuizResult {
            completed: true,
            ..QuizResult::zeroed()
        });
        assert_eq!(persisted(&store).as_ref(), Some(store.state()));

        store.set_current_page(Page::Results);
        assert_eq!(persisted(&store).unwrap().current_page, Page::Results);
    }

    #[test]
    fn test_round_trip_through_storage() {
        let original = sample_state();
        let raw = serde_json::to_string(&original).unwrap();
        let store = seeded(&raw, "/unknown-path");
        assert_eq!(store.state(), &original);
    }

    #[test]
    fn test_restart_restores_previous_session() {
        let mut store = fresh();
        store.set_user_info(ProfileUpdate {
            name: Some("Kiran".into()),
            ..ProfileUpdate::default()
        });
        store.set_current_page(Page::Quiz);
        let before = store.state().clone();

        let reopened = StateStore::open(store.storage().clone(), SessionHistory::new("/quiz"));
        assert_eq!(reopened.state(), &before);
    }

    #[test]
    fn test_invalid_json_discarded() {
        let store = seeded("{not json", "/");
        assert_eq!(store.state(), &AppState::default());
        assert!(!store.storage().contains(STORAGE_KEY));
    }

    #[test]
    fn test_missing_required_field_discarded() {
        for field in REQUIRED_FIELDS {
            let mut value = serde_json::to_value(sample_state()).unwrap();
            value.as_object_mut().unwrap().remove(field);
            let store = seeded(&value.to_string(), "/");
            assert_eq!(store.state(), &AppState::default(), "field {field}");
            assert!(!store.storage().contains(STORAGE_KEY), "field {field}");
        }
    }

    #[test]
    fn test_wrong_shapes_discarded() {
        let cases = [
            serde_json::json!([1, 2, 3]),
            serde_json::json!({ "user": {}, "quizResults": {}, "currentPage": "welcome" }),
            {
                let mut v = serde_json::to_value(sample_state()).unwrap();
                v["currentPage"] = serde_json::json!("settings");
                v
            },
            {
                let mut v = serde_json::to_value(sample_state()).unwrap();
                v["quizResults"]["scores"]["science"] = serde_json::json!(-1);
                v
            },
        ];
        for case in cases {
            let store = seeded(&case.to_string(), "/");
            assert_eq!(store.state(), &AppState::default(), "case {case}");
            assert!(!store.storage().contains(STORAGE_KEY));
        }
    }

    #[test]
    fn test_recognized_path_overrides_restored_page() {
        let raw = serde_json::to_string(&sample_state()).unwrap();
        let store = seeded(&raw, "/quiz");
        assert_eq!(store.state().current_page, Page::Quiz);
        assert_eq!(persisted(&store).unwrap().current_page, Page::Quiz);
        assert_eq!(store.state().user, sample_state().user);
    }

    #[test]
    fn test_unrecognized_path_keeps_restored_page() {
        let raw = serde_json::to_string(&sample_state()).unwrap();
        let store = seeded(&raw, "/old/bookmark");
        assert_eq!(store.state().current_page, Page::Dashboard);
        assert_eq!(store.navigation().current_path(), "/dashboard");
        assert_eq!(store.navigation().entries().len(), 1);
    }

    #[test]
    fn test_same_page_twice_pushes_once() {
        let mut store = fresh();
        store.set_current_page(Page::Quiz);
        store.set_current_page(Page::Quiz);
        let pages: Vec<Page> = store
            .navigation()
            .entries()
            .iter()
            .map(|e| e.page)
            .collect();
        assert_eq!(pages, vec![Page::Welcome, Page::Quiz]);
    }

    #[test]
    fn test_current_page_no_push() {
        let mut store = fresh();
        store.set_current_page(Page::Welcome);
        assert_eq!(store.navigation().entries().len(), 1);
    }

    #[test]
    fn test_unknown_page_id_falls_back_to_welcome() {
        let mut store = fresh();
        store.set_current_page(Page::Dashboard);
        assert_eq!(store.navigate_to("settings"), Page::Welcome);
        assert_eq!(store.state().current_page, Page::Welcome);
        assert_eq!(store.navigate_to("profileEdit"), Page::ProfileEdit);
    }

    #[test]
    fn test_pop_event_updates_page_without_push() {
        let mut store = fresh();
        store.set_current_page(Page::Auth);
        store.set_current_page(Page::Profile);
        assert_eq!(store.navigation().entries().len(), 3);

        let entry = store.navigation_mut().back().unwrap();
        store.apply_pop_event(entry);

        assert_eq!(store.state().current_page, Page::Auth);
        assert_eq!(store.navigation().entries().len(), 3);
        assert!(store.navigation().can_go_forward());
        assert_eq!(persisted(&store).unwrap().current_page, Page::Auth);

        // Re-selecting the page the history already shows adds nothing.
        store.set_current_page(Page::Auth);
        assert_eq!(store.navigation().entries().len(), 3);
        assert!(store.navigation().can_go_forward());
    }

    #[test]
    fn test_set_user_info_merges_and_signs_in() {
        let mut store = fresh();
        store.set_user_info(ProfileUpdate {
            name: Some("Kiran".into()),
            location: Some("Chennai".into()),
            ..ProfileUpdate::default()
        });
        store.set_user_info(ProfileUpdate {
            email: Some("k@example.com".into()),
            ..ProfileUpdate::default()
        });
        let user = &store.state().user;
        assert_eq!(user.name, "Kiran");
        assert_eq!(user.location, "Chennai");
        assert_eq!(user.email, "k@example.com");
        assert!(user.is_logged_in);
    }

    #[test]
    fn test_retake_clears_previous_result() {
        let mut store = fresh();
        store.set_quiz_results(sample_state().quiz_results);
        assert!(store.state().quiz_results.completed);

        store.set_quiz_results(QuizResultsUpdate::cleared());
        assert_eq!(store.state().quiz_results, QuizResult::zeroed());
        assert_eq!(store.state().quiz_results.scores, ScoreMap::default());
    }

    #[test]
    fn test_reset_restores_default_and_clears_storage() {
        let mut store = fresh();
        store.set_user_info(ProfileUpdate {
            name: Some("Kiran".into()),
            ..ProfileUpdate::default()
        });
        store.set_quiz_results(sample_state().quiz_results);
        store.set_current_page(Page::Dashboard);

        store.reset_state();

        assert_eq!(store.state(), &AppState::default());
        assert!(!store.storage().contains(STORAGE_KEY));
        assert_eq!(
            store.navigation().entries(),
            &[HistoryEntry::for_page(Page::Welcome)]
        );
        assert_eq!(store.navigation().current_path(), "/");
    }

    #[test]
    fn test_broken_storage_is_not_fatal() {
        let mut store = StateStore::open(BrokenStorage, SessionHistory::new("/results"));
        assert_eq!(store.state().current_page, Page::Results);

        store.set_user_info(ProfileUpdate {
            name: Some("Kiran".into()),
            ..ProfileUpdate::default()
        });
        store.set_current_page(Page::Dashboard);
        store.reset_state();
        assert_eq!(store.state(), &AppState::default());
    }
}
