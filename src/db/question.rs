use color_eyre::Result;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};

use super::models::QuestionRecord;
use super::Db;
use crate::models::{DistinctFields, Question, QuestionFilter, Questions, StoredQuestion};
use crate::names;

/// Equality match on every present filter key; empty document when none are.
pub(crate) fn filter_document(filter: &QuestionFilter) -> Document {
    filter
        .constraints()
        .into_iter()
        .map(|(field, value)| (field.to_string(), Bson::from(value)))
        .collect()
}

impl Db {
    /// Matching questions in ascending key order. A `limit` of 0 is passed
    /// straight through, which MongoDB reads as "no limit".
    pub async fn find_questions(
        &self,
        filter: &QuestionFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<StoredQuestion>> {
        let records: Vec<QuestionRecord> = self
            .questions
            .find(filter_document(filter))
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?
            .try_collect()
            .await?;

        Ok(records.into_iter().map(StoredQuestion::from).collect())
    }

    /// Look a question up by its record key. Strings that are not valid
    /// ObjectIds cannot match anything and yield `None`.
    pub async fn find_question(&self, id: &str) -> Result<Option<StoredQuestion>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let record = self.questions.find_one(doc! { "_id": oid }).await?;
        Ok(record.map(StoredQuestion::from))
    }

    pub async fn insert_question(&self, question: Question) -> Result<StoredQuestion> {
        let record = QuestionRecord::new(question);
        self.questions.insert_one(&record).await?;

        tracing::info!(
            id = %record.id,
            question_id = %record.question_id,
            "new question inserted"
        );
        Ok(record.into())
    }

    /// Insert all questions in one batch and return how many were stored.
    pub async fn insert_questions(&self, questions: Questions) -> Result<usize> {
        if questions.is_empty() {
            return Ok(0);
        }

        let records: Vec<QuestionRecord> = questions.into_iter().map(QuestionRecord::new).collect();
        let result = self.questions.insert_many(&records).await?;
        Ok(result.inserted_ids.len())
    }

    pub async fn distinct_fields(&self) -> Result<DistinctFields> {
        Ok(DistinctFields {
            categories: self.distinct_strings(names::CATEGORY_FIELD).await?,
            sub_categories: self.distinct_strings(names::SUB_CATEGORY_FIELD).await?,
            difficulty_levels: self.distinct_strings(names::DIFFICULTY_LEVEL_FIELD).await?,
        })
    }

    async fn distinct_strings(&self, field: &str) -> Result<Vec<String>> {
        let values = self.questions.distinct(field, doc! {}).await?;
        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(s) => Some(s),
                _ => None,
            })
            .collect())
    }
}
