use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::{names, rejections::AppError, services::questions::QuestionRepository, AppState};

pub fn routes<R>() -> Router<AppState<R>>
where
    R: QuestionRepository + Clone + 'static,
{
    Router::new()
        .route(names::HOMEPAGE_URL, get(homepage))
        .route(names::LOAD_SAMPLE_DATA_URL, get(load_sample_data::<R>))
}

async fn homepage() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Question Catalog API",
        "info": "Browse questions at /questions and filter values at /question-distinct-fields",
    }))
}

async fn load_sample_data<R: QuestionRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Value>, AppError> {
    let inserted = state
        .questions
        .load_sample_data(&state.sample_data)
        .await
        .map_err(|e| {
            tracing::error!("failed to load sample data: {e:?}");
            AppError::SampleData(format!("{e:#}"))
        })?;

    Ok(Json(json!({ "message": format!("Inserted {inserted} documents") })))
}
