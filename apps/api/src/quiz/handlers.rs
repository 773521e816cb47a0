use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::UserProfile;
use crate::quiz::insights::{badge_for, profile_progress, Badge};
use crate::quiz::questions::{question_bank, Question};
use crate::quiz::scoring::{QuizResult, Response};
use crate::quiz::session::{QuizRun, RunState};
use crate::state::{ServerState, Session};
use crate::store::{Page, QuizResultsUpdate};

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub response: Response,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub complete: bool,
    pub question_index: usize,
    pub answered: usize,
    pub total: usize,
    pub progress: u32,
    pub question: Option<Question>,
    pub result: Option<QuizResult>,
    pub page: Page,
}

impl QuizView {
    fn of(run: &QuizRun, page: Page) -> Self {
        let question_index = match run.state() {
            RunState::InProgress { index } => *index,
            RunState::Complete(_) => run.total(),
        };
        Self {
            complete: run.result().is_some(),
            question_index,
            answered: run.answers().len(),
            total: run.total(),
            progress: run.progress(),
            question: run.current_question().cloned(),
            result: run.result().cloned(),
            page,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub user: UserProfile,
    pub quiz_results: QuizResult,
    pub progress: u32,
    pub badge: Badge,
}

fn active_run(session: &Session) -> Result<&QuizRun, AppError> {
    session
        .quiz
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))
}

/// Starts a fresh run. Only a signed-in user with a profile may take the quiz.
fn begin_run(session: &mut Session) -> Result<QuizView, AppError> {
    if !session.store.state().user.is_logged_in {
        session.store.set_current_page(Page::Profile);
        return Err(AppError::Conflict(
            "Please complete your profile first".to_string(),
        ));
    }
    let run = QuizRun::new(question_bank());
    session.store.set_current_page(Page::Quiz);
    let view = QuizView::of(&run, session.store.state().current_page);
    session.quiz = Some(run);
    Ok(view)
}

/// GET /api/v1/quiz/questions
pub async fn handle_questions() -> Json<Vec<Question>> {
    Json(question_bank().to_vec())
}

/// POST /api/v1/quiz/start
pub async fn handle_start(State(state): State<ServerState>) -> Result<Json<QuizView>, AppError> {
    let mut session = state.session()?;
    Ok(Json(begin_run(&mut session)?))
}

/// GET /api/v1/quiz
pub async fn handle_get_run(State(state): State<ServerState>) -> Result<Json<QuizView>, AppError> {
    let session = state.session()?;
    let run = active_run(&session)?;
    Ok(Json(QuizView::of(run, session.store.state().current_page)))
}

/// POST /api/v1/quiz/answer
/// Completing the last question stores the result and moves on to results,
/// or to sign-in when the user has not signed in yet.
pub async fn handle_answer(
    State(state): State<ServerState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<QuizView>, AppError> {
    let mut guard = state.session()?;
    let session = &mut *guard;
    let run = session
        .quiz
        .as_mut()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;

    if let Some(result) = run.advance(req.response)? {
        info!(
            recommended = ?result.recommended_stream,
            tied = result.tied_streams.is_some(),
            "quiz completed"
        );
        session.store.set_quiz_results(result);
        let next = if session.store.state().user.is_logged_in {
            Page::Results
        } else {
            Page::Auth
        };
        session.store.set_current_page(next);
    }

    let run = active_run(session)?;
    Ok(Json(QuizView::of(run, session.store.state().current_page)))
}

/// POST /api/v1/quiz/back
pub async fn handle_back(State(state): State<ServerState>) -> Result<Json<QuizView>, AppError> {
    let mut guard = state.session()?;
    let session = &mut *guard;
    let run = session
        .quiz
        .as_mut()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;
    run.retreat()?;
    Ok(Json(QuizView::of(run, session.store.state().current_page)))
}

/// POST /api/v1/quiz/retake
pub async fn handle_retake(State(state): State<ServerState>) -> Result<Json<QuizView>, AppError> {
    let mut session = state.session()?;
    session.quiz = None;
    session.store.set_quiz_results(QuizResultsUpdate::cleared());
    Ok(Json(begin_run(&mut session)?))
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<ServerState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let session = state.session()?;
    let app = session.store.state();
    let progress = profile_progress(&app.user, &app.quiz_results);
    Ok(Json(DashboardResponse {
        user: app.user.clone(),
        quiz_results: app.quiz_results.clone(),
        progress,
        badge: badge_for(progress),
    }))
}
