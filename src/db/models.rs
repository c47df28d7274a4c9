// Stored document shapes

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{Question, StoredQuestion};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "questionID")]
    pub question_id: String,
    pub question_text: String,
    pub difficulty_level: String,
    pub category: String,
    pub sub_category: String,
    pub tags: Vec<String>,
    pub short_answer: String,
    pub detailed_answer: String,
}

impl QuestionRecord {
    /// Wrap a question in a new document with a freshly generated key.
    pub fn new(question: Question) -> Self {
        Self {
            id: ObjectId::new(),
            question_id: question.question_id,
            question_text: question.question_text,
            difficulty_level: question.difficulty_level,
            category: question.category,
            sub_category: question.sub_category,
            tags: question.tags,
            short_answer: question.short_answer,
            detailed_answer: question.detailed_answer,
        }
    }
}

impl From<QuestionRecord> for StoredQuestion {
    fn from(record: QuestionRecord) -> Self {
        StoredQuestion {
            id: record.id.to_hex(),
            question: Question {
                question_id: record.question_id,
                question_text: record.question_text,
                difficulty_level: record.difficulty_level,
                category: record.category,
                sub_category: record.sub_category,
                tags: record.tags,
                short_answer: record.short_answer,
                detailed_answer: record.detailed_answer,
            },
        }
    }
}
