use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;

use crate::config::Config;
use crate::errors::AppError;
use crate::quiz::session::QuizRun;
use crate::store::{KeyValueStorage, SessionHistory, StateStore};

pub type Storage = Box<dyn KeyValueStorage + Send>;
pub type AdvisorStore = StateStore<Storage, SessionHistory>;

/// The one browsing session this process hosts: the state store plus the quiz
/// run in progress, if any. Both sit behind one lock so transitions never interleave.
pub struct Session {
    pub store: AdvisorStore,
    pub quiz: Option<QuizRun>,
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct ServerState {
    session: Arc<Mutex<Session>>,
    pub config: Config,
}

impl ServerState {
    pub fn new(store: AdvisorStore, config: Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session { store, quiz: None })),
            config,
        }
    }

    pub fn session(&self) -> Result<MutexGuard<'_, Session>, AppError> {
        self.session
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("session lock poisoned")))
    }
}
