pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;

use std::path::PathBuf;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::questions::{QuestionRepository, QuestionService};

#[derive(Clone)]
pub struct AppState<R: QuestionRepository = db::Db> {
    pub questions: QuestionService<R>,
    /// JSON fixture read by `/load-sample-data`.
    pub sample_data: PathBuf,
}

pub fn router<R>(state: AppState<R>) -> Router
where
    R: QuestionRepository + Clone + 'static,
{
    Router::new()
        .merge(handlers::homepage::routes::<R>())
        .merge(handlers::questions::routes::<R>())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
