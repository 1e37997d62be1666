//! Grader AI Common Library
//!
//! Web(WASM)アプリと共有される採点ドメインの型とユーティリティ

pub mod types;
pub mod error;
pub mod prompts;
pub mod schema;
pub mod parser;
pub mod history;

pub use types::{
    DimensionScores, EvaluationPreset, EvaluationResult, HandwritingAnalysis, HistoryEntry,
    ScoreBand, ScoreMetric,
};
pub use error::{Error, Result};
pub use prompts::build_evaluation_prompt;
pub use schema::response_schema;
pub use parser::{extract_json, parse_evaluation_response};
pub use history::HistoryLog;
