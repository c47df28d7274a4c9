use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{
    extractors::{ValidJson, ValidQuery},
    models::{DistinctFields, ListQuestionsQuery, Question, StoredQuestion},
    names,
    rejections::{AppError, ResultExt},
    services::questions::QuestionRepository,
    AppState,
};

pub fn routes<R>() -> Router<AppState<R>>
where
    R: QuestionRepository + Clone + 'static,
{
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions::<R>).post(create_question::<R>),
        )
        .route(names::QUESTION_URL, get(get_question::<R>))
        .route(names::DISTINCT_FIELDS_URL, get(distinct_fields::<R>))
}

async fn list_questions<R: QuestionRepository>(
    State(state): State<AppState<R>>,
    ValidQuery(query): ValidQuery<ListQuestionsQuery>,
) -> Result<Json<Vec<StoredQuestion>>, AppError> {
    let (filter, page) = query.into_parts();

    let questions = state
        .questions
        .list(&filter, page)
        .await
        .reject("could not list questions")?;

    Ok(Json(questions))
}

async fn get_question<R: QuestionRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<StoredQuestion>, AppError> {
    state
        .questions
        .get(&id)
        .await
        .reject("could not get question")?
        .map(Json)
        .ok_or(AppError::NotFound(names::QUESTION_NOT_FOUND))
}

async fn create_question<R: QuestionRepository>(
    State(state): State<AppState<R>>,
    ValidJson(question): ValidJson<Question>,
) -> Result<Json<StoredQuestion>, AppError> {
    let created = state
        .questions
        .create(question)
        .await
        .reject("could not create question")?;

    Ok(Json(created))
}

async fn distinct_fields<R: QuestionRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<DistinctFields>, AppError> {
    let fields = state
        .questions
        .distinct_fields()
        .await
        .reject("could not get distinct fields")?;

    Ok(Json(fields))
}
