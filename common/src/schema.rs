//! レスポンススキーマ宣言
//!
//! Gemini APIのresponseSchemaとして渡す構造定義。フィールド名・型・
//! 必須指定を宣言し、上流の出力をEvaluationResultの形に制約する。

use serde_json::{json, Value};

/// 1〜10点の観点スコア（score + justification）のスキーマ
fn score_metric_schema(description: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "NUMBER", "description": description },
            "justification": { "type": "STRING" }
        },
        "required": ["score", "justification"]
    })
}

/// EvaluationResult全体のレスポンススキーマ
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": {
                "type": "NUMBER",
                "description": "Overall score from 0 to 100."
            },
            "overallFeedback": {
                "type": "STRING",
                "description": "A summary paragraph of the student's performance."
            },
            "scores": {
                "type": "OBJECT",
                "properties": {
                    "creativity": score_metric_schema("Score from 1 to 10."),
                    "handwriting": {
                        "type": "OBJECT",
                        "properties": {
                            "overallScore": {
                                "type": "NUMBER",
                                "description": "Overall handwriting score from 1 to 10."
                            },
                            "legibility": score_metric_schema("Legibility score from 1 to 10."),
                            "neatness": score_metric_schema("Neatness score from 1 to 10."),
                            "justification": {
                                "type": "STRING",
                                "description": "Overall justification for the handwriting score."
                            }
                        },
                        "required": ["overallScore", "legibility", "neatness", "justification"]
                    },
                    "relevance": score_metric_schema("Score from 1 to 10."),
                    "presentation": score_metric_schema("Score from 1 to 10.")
                },
                "required": ["creativity", "handwriting", "relevance", "presentation"]
            },
            "mistakes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of identified mistakes or weak areas."
            },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of actionable improvement recommendations."
            }
        },
        "required": ["overallScore", "overallFeedback", "scores", "mistakes", "recommendations"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_top_level_required() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("requiredが配列でない")
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec![
                "overallScore",
                "overallFeedback",
                "scores",
                "mistakes",
                "recommendations"
            ]
        );
    }

    #[test]
    fn test_schema_declares_four_dimensions() {
        let schema = response_schema();
        let scores = &schema["properties"]["scores"]["properties"];
        for dim in ["creativity", "handwriting", "relevance", "presentation"] {
            assert!(scores.get(dim).is_some(), "{}がスキーマにない", dim);
        }
    }

    #[test]
    fn test_schema_handwriting_sub_scores() {
        let schema = response_schema();
        let handwriting = &schema["properties"]["scores"]["properties"]["handwriting"];
        let required: Vec<&str> = handwriting["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"overallScore"));
        assert!(required.contains(&"legibility"));
        assert!(required.contains(&"neatness"));
        assert!(required.contains(&"justification"));
    }

    #[test]
    fn test_schema_metric_required_fields() {
        let schema = response_schema();
        let creativity = &schema["properties"]["scores"]["properties"]["creativity"];
        assert_eq!(creativity["type"], "OBJECT");
        assert_eq!(creativity["required"][0], "score");
        assert_eq!(creativity["required"][1], "justification");
    }

    #[test]
    fn test_schema_lists_are_string_arrays() {
        let schema = response_schema();
        for key in ["mistakes", "recommendations"] {
            let prop = &schema["properties"][key];
            assert_eq!(prop["type"], "ARRAY");
            assert_eq!(prop["items"]["type"], "STRING");
        }
    }
}
