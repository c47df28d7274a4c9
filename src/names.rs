pub const HOMEPAGE_URL: &str = "/";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const DISTINCT_FIELDS_URL: &str = "/question-distinct-fields";
pub const LOAD_SAMPLE_DATA_URL: &str = "/load-sample-data";

pub fn question_url(id: &str) -> String {
    format!("/questions/{id}")
}

// Store defaults
pub const DEFAULT_DB_NAME: &str = "tech-job-market-insights";
pub const DEFAULT_COLLECTION_NAME: &str = "InterviewPrepHub";
pub const DEFAULT_SAMPLE_DATA_PATH: &str = "data/sample_data.json";

// Document field names
pub const CATEGORY_FIELD: &str = "category";
pub const SUB_CATEGORY_FIELD: &str = "subCategory";
pub const DIFFICULTY_LEVEL_FIELD: &str = "difficultyLevel";

// Pagination
pub const DEFAULT_PAGE_START: u64 = 0;
pub const DEFAULT_PAGE_COUNT: u64 = 10;
pub const MAX_PAGE_COUNT: u64 = 100;

pub const QUESTION_NOT_FOUND: &str = "Question not found";
