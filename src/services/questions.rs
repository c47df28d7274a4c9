use std::path::Path;

use color_eyre::{eyre::WrapErr, Result};

use crate::db::Db;
use crate::models::{DistinctFields, Page, Question, QuestionFilter, Questions, StoredQuestion};
use crate::names;

// ---------------------------------------------------------------------------
// QuestionRepository trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuestionRepository: Send + Sync {
    fn find_questions(
        &self,
        filter: &QuestionFilter,
        skip: u64,
        limit: u64,
    ) -> impl std::future::Future<Output = Result<Vec<StoredQuestion>>> + Send;

    fn find_question(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<StoredQuestion>>> + Send;

    fn insert_question(
        &self,
        question: Question,
    ) -> impl std::future::Future<Output = Result<StoredQuestion>> + Send;

    fn insert_questions(
        &self,
        questions: Questions,
    ) -> impl std::future::Future<Output = Result<usize>> + Send;

    fn distinct_fields(&self) -> impl std::future::Future<Output = Result<DistinctFields>> + Send;
}

impl QuestionRepository for Db {
    async fn find_questions(
        &self,
        filter: &QuestionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<StoredQuestion>> {
        Db::find_questions(self, filter, skip, limit).await
    }

    async fn find_question(&self, id: &str) -> Result<Option<StoredQuestion>> {
        Db::find_question(self, id).await
    }

    async fn insert_question(&self, question: Question) -> Result<StoredQuestion> {
        Db::insert_question(self, question).await
    }

    async fn insert_questions(&self, questions: Questions) -> Result<usize> {
        Db::insert_questions(self, questions).await
    }

    async fn distinct_fields(&self) -> Result<DistinctFields> {
        Db::distinct_fields(self).await
    }
}

// ---------------------------------------------------------------------------
// QuestionService
// ---------------------------------------------------------------------------

pub struct QuestionService<R: QuestionRepository = Db> {
    repo: R,
    max_page_count: u64,
}

impl<R: QuestionRepository + Clone> Clone for QuestionService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            max_page_count: self.max_page_count,
        }
    }
}

impl<R: QuestionRepository> QuestionService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            max_page_count: names::MAX_PAGE_COUNT,
        }
    }

    /// Questions matching every present filter key, `page.start` records in.
    /// `page.count` is capped at `MAX_PAGE_COUNT`.
    pub async fn list(&self, filter: &QuestionFilter, page: Page) -> Result<Vec<StoredQuestion>> {
        let limit = page.count.min(self.max_page_count);

        // The store treats a zero limit as unbounded.
        if limit == 0 {
            return Ok(Vec::new());
        }

        self.repo.find_questions(filter, page.start, limit).await
    }

    /// Lookup by record key; `None` when nothing matches.
    pub async fn get(&self, id: &str) -> Result<Option<StoredQuestion>> {
        self.repo.find_question(id).await
    }

    pub async fn create(&self, question: Question) -> Result<StoredQuestion> {
        self.repo.insert_question(question).await
    }

    /// Distinct values of each filterable field, sorted for display.
    pub async fn distinct_fields(&self) -> Result<DistinctFields> {
        let mut fields = self.repo.distinct_fields().await?;
        for values in [
            &mut fields.categories,
            &mut fields.sub_categories,
            &mut fields.difficulty_levels,
        ] {
            values.sort();
            values.dedup();
        }
        Ok(fields)
    }

    /// Import every question from a JSON array fixture.
    pub async fn load_sample_data(&self, path: &Path) -> Result<usize> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let questions: Questions = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("failed to decode {}", path.display()))?;

        let inserted = self.repo.insert_questions(questions).await?;
        tracing::info!(inserted, path = %path.display(), "sample data loaded");
        Ok(inserted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
