pub mod error;
pub mod v1;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::warn;

use crate::{
    config::Config,
    content,
    sequencer::LessonSequencer,
    tutor::{GeminiTutor, Tutor},
};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub sequencer: Arc<RwLock<LessonSequencer>>,
    pub tutor: Arc<dyn Tutor>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let lessons = content::lessons();
        let mismatches = content::validate(lessons);
        if mismatches > 0 {
            warn!(mismatches, "lesson content disagrees with the evaluator");
        }

        let tutor: Arc<dyn Tutor> = Arc::new(GeminiTutor::new(&cfg.tutor));
        Self {
            cfg,
            sequencer: Arc::new(RwLock::new(LessonSequencer::new(lessons))),
            tutor,
        }
    }
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new().nest("/api/v1", v1::router(state));

    if cfg.server.enable_cors {
        use axum::http::HeaderValue;
        use tower_http::cors::{AllowOrigin, CorsLayer};
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                "http://localhost:3000",
            )))
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
