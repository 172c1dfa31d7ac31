use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::{error::ApiError, AppState},
    content,
    diagram::{self, svg},
    domain::{
        ComponentId, Difficulty, LessonCategory, LessonStep, LessonSummary, ViewMode,
    },
    power_flow::{self, PowerFlow},
    tutor::Quiz,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/lessons", get(list_lessons))
        .route("/lessons/:id/select", post(select_lesson))
        .route("/step", get(current_step))
        .route("/step/next", post(next_step))
        .route("/step/prev", post(prev_step))
        .route("/diagram.svg", get(diagram_svg))
        .route("/components/:id", get(component_info))
        .route("/selection", post(set_selection))
        .route("/tutor/ask", post(tutor_ask))
        .route("/tutor/quiz", post(tutor_quiz))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// The active teaching frame plus everything derived from it.
#[derive(Debug, Serialize)]
pub struct StepView {
    pub lesson_id: String,
    pub lesson_title: String,
    pub category: LessonCategory,
    pub difficulty: Difficulty,
    pub view_mode: ViewMode,
    pub step_index: usize,
    pub step_count: usize,
    pub step: LessonStep,
    pub flow: PowerFlow,
    pub selection: Option<ComponentId>,
}

async fn step_view(state: &AppState) -> StepView {
    let seq = state.sequencer.read().await;
    let lesson = seq.current_lesson();
    let step = seq.current_step().clone();
    let flow = power_flow::evaluate(&step.system_state);
    StepView {
        lesson_id: lesson.id.clone(),
        lesson_title: lesson.title.clone(),
        category: lesson.category,
        difficulty: lesson.difficulty,
        view_mode: lesson.view_mode,
        step_index: seq.step_index(),
        step_count: lesson.step_count(),
        step,
        flow,
        selection: seq.selection(),
    }
}

async fn list_lessons(State(state): State<AppState>) -> Json<Vec<LessonSummary>> {
    let seq = state.sequencer.read().await;
    Json(seq.lessons().iter().map(LessonSummary::from).collect())
}

/// Unknown lesson ids fall back silently to the default lesson, so this
/// endpoint never 404s.
async fn select_lesson(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<StepView> {
    state.sequencer.write().await.select_lesson(&id);
    Json(step_view(&state).await)
}

async fn current_step(State(state): State<AppState>) -> Json<StepView> {
    Json(step_view(&state).await)
}

async fn next_step(State(state): State<AppState>) -> Json<StepView> {
    state.sequencer.write().await.next_step();
    Json(step_view(&state).await)
}

async fn prev_step(State(state): State<AppState>) -> Json<StepView> {
    state.sequencer.write().await.prev_step();
    Json(step_view(&state).await)
}

async fn diagram_svg(State(state): State<AppState>) -> impl IntoResponse {
    let scene = {
        let seq = state.sequencer.read().await;
        diagram::project_state(&seq.current_step().system_state)
    };
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        svg::render(&scene),
    )
}

#[derive(Debug, Serialize)]
struct ComponentInfo {
    id: String,
    description: &'static str,
}

/// Knowledge-base lookup. Unknown identifiers get the generic placeholder,
/// not an error.
async fn component_info(Path(id): Path<String>) -> Json<ComponentInfo> {
    Json(ComponentInfo {
        description: content::describe(&id),
        id,
    })
}

#[derive(Debug, Deserialize)]
struct SelectionRequest {
    /// Component identifier string, or null to clear the selection.
    component: Option<String>,
}

#[derive(Debug, Serialize)]
struct SelectionResponse {
    selection: Option<ComponentId>,
}

async fn set_selection(
    State(state): State<AppState>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let selection = match req.component.as_deref() {
        None => None,
        Some(raw) => Some(ComponentId::from_str(raw).map_err(|_| {
            ApiError::BadRequest(format!("unknown component identifier '{raw}'"))
        })?),
    };
    state.sequencer.write().await.select_component(selection);
    Ok(Json(SelectionResponse { selection }))
}

#[derive(Debug, Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Debug, Serialize)]
struct AskResponse {
    answer: String,
}

/// Free-text Q&A. The tutor converts its own failures into sentinel answers,
/// so this handler is infallible.
async fn tutor_ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Json<AskResponse> {
    let context = state.sequencer.read().await.tutor_context();
    let answer = state.tutor.ask(&req.question, &context).await;
    Json(AskResponse { answer })
}

#[derive(Debug, Serialize)]
struct QuizResponse {
    /// `null` means "no quiz available right now".
    quiz: Option<Quiz>,
}

async fn tutor_quiz(State(state): State<AppState>) -> Json<QuizResponse> {
    let context = state.sequencer.read().await.tutor_context();
    let quiz = state.tutor.generate_quiz(&context).await;
    Json(QuizResponse { quiz })
}
