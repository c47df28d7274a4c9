#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use color_eyre::Result;
use question_catalog::{
    models::{DistinctFields, Question, QuestionFilter, Questions, StoredQuestion},
    router,
    services::questions::{QuestionRepository, QuestionService},
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Store double keeping documents in insertion order, keyed like ObjectIds.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    questions: Arc<Mutex<Vec<StoredQuestion>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryRepository {
    fn store(&self, question: Question) -> StoredQuestion {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = StoredQuestion {
            id: format!("{:024x}", id + 1),
            question,
        };
        self.questions.lock().unwrap().push(stored.clone());
        stored
    }

    pub fn len(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

impl QuestionRepository for MemoryRepository {
    async fn find_questions(
        &self,
        filter: &QuestionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<StoredQuestion>> {
        let questions = self.questions.lock().unwrap();
        let iter = questions
            .iter()
            .filter(|q| filter.matches(&q.question))
            .skip(skip as usize)
            .cloned();
        // A zero limit means "no limit", as in MongoDB.
        Ok(if limit == 0 {
            iter.collect()
        } else {
            iter.take(limit as usize).collect()
        })
    }

    async fn find_question(&self, id: &str) -> Result<Option<StoredQuestion>> {
        let questions = self.questions.lock().unwrap();
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: Question) -> Result<StoredQuestion> {
        Ok(self.store(question))
    }

    async fn insert_questions(&self, questions: Questions) -> Result<usize> {
        let count = questions.len();
        for question in questions {
            self.store(question);
        }
        Ok(count)
    }

    async fn distinct_fields(&self) -> Result<DistinctFields> {
        let questions = self.questions.lock().unwrap();
        let mut fields = DistinctFields::default();
        for q in questions.iter() {
            let q = &q.question;
            if !fields.categories.contains(&q.category) {
                fields.categories.push(q.category.clone());
            }
            if !fields.sub_categories.contains(&q.sub_category) {
                fields.sub_categories.push(q.sub_category.clone());
            }
            if !fields.difficulty_levels.contains(&q.difficulty_level) {
                fields.difficulty_levels.push(q.difficulty_level.clone());
            }
        }
        Ok(fields)
    }
}

pub fn question(question_id: &str, category: &str, sub_category: &str, level: &str) -> Question {
    Question {
        question_id: question_id.to_string(),
        question_text: format!("Question text for {question_id}"),
        difficulty_level: level.to_string(),
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        tags: vec![category.to_lowercase()],
        short_answer: "Short answer".to_string(),
        detailed_answer: "Detailed answer".to_string(),
    }
}

pub fn app(repo: MemoryRepository) -> axum::Router {
    app_with_sample_data(repo, PathBuf::from("data/sample_data.json"))
}

pub fn app_with_sample_data(repo: MemoryRepository, sample_data: PathBuf) -> axum::Router {
    router(AppState {
        questions: QuestionService::new(repo),
        sample_data,
    })
}

pub fn temp_fixture(name: &str, contents: &str) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "question_catalog_{}_{}_{name}.json",
        std::process::id(),
        id
    ));
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

/// Send a request through the router and decode the JSON body.
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed");
    send(app, req).await
}

pub async fn post_json(app: &axum::Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed");
    send(app, req).await
}
