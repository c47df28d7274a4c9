use serde::{Deserialize, Serialize};

use crate::names;

pub type Questions = Vec<Question>;

/// A question as submitted by clients and as imported from fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Question {
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

/// A question together with the key the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredQuestion {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub question: Question,
}

/// Equality constraints for listing. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub difficulty_level: Option<String>,
}

impl QuestionFilter {
    /// Present constraints as `(document field, value)` pairs. Empty strings
    /// are dropped, so a blank select box in a client behaves like "any".
    pub fn constraints(&self) -> Vec<(&'static str, &str)> {
        [
            (names::CATEGORY_FIELD, &self.category),
            (names::SUB_CATEGORY_FIELD, &self.sub_category),
            (names::DIFFICULTY_LEVEL_FIELD, &self.difficulty_level),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (field, v))
        })
        .collect()
    }

    pub fn matches(&self, question: &Question) -> bool {
        self.constraints().into_iter().all(|(field, value)| {
            let actual = match field {
                names::CATEGORY_FIELD => &question.category,
                names::SUB_CATEGORY_FIELD => &question.sub_category,
                _ => &question.difficulty_level,
            };
            actual == value
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of matching records to skip.
    pub start: u64,
    /// Maximum number of records to return.
    pub count: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            start: names::DEFAULT_PAGE_START,
            count: names::DEFAULT_PAGE_COUNT,
        }
    }
}

/// Query string of `GET /questions`. Kept flat because url-encoded numbers
/// do not survive `#[serde(flatten)]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuestionsQuery {
    pub start: Option<u64>,
    pub count: Option<u64>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub difficulty_level: Option<String>,
}

impl ListQuestionsQuery {
    pub fn into_parts(self) -> (QuestionFilter, Page) {
        let defaults = Page::default();
        let page = Page {
            start: self.start.unwrap_or(defaults.start),
            count: self.count.unwrap_or(defaults.count),
        };
        let filter = QuestionFilter {
            category: self.category,
            sub_category: self.sub_category,
            difficulty_level: self.difficulty_level,
        };
        (filter, page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinctFields {
    pub categories: Vec<String>,
    pub sub_categories: Vec<String>,
    pub difficulty_levels: Vec<String>,
}
