//! APIレスポンスパーサー
//!
//! 上流レスポンスのテキストからJSONオブジェクトを抽出し、
//! EvaluationResultとして厳密にパースする。部分的な結果は返さない。

use crate::error::{Error, Result};
use crate::types::EvaluationResult;

/// APIレスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use grader_ai_common::extract_json;
///
/// let response = "{\"overallScore\": 72}";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("overallScore"));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 採点レスポンスをパース
///
/// 宣言スキーマの形にデシリアライズできない場合はError::Parseを返す。
/// 欠損フィールドの補完は行わない（all-or-nothing）。
pub fn parse_evaluation_response(response: &str) -> Result<EvaluationResult> {
    let json_str = extract_json(response)?;
    let result: EvaluationResult = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("採点結果のJSONパースエラー: {}", e)))?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RESPONSE: &str = r#"{
        "overallScore": 72,
        "overallFeedback": "Good understanding overall.",
        "scores": {
            "creativity": { "score": 7, "justification": "Original framing." },
            "handwriting": {
                "overallScore": 6,
                "legibility": { "score": 6, "justification": "Mostly readable." },
                "neatness": { "score": 5, "justification": "Some crossed-out words." },
                "justification": "Average handwriting."
            },
            "relevance": { "score": 8, "justification": "On topic." },
            "presentation": { "score": 6, "justification": "Could use paragraphs." }
        },
        "mistakes": ["Confused chlorophyll with chloroplast."],
        "recommendations": ["Review organelle functions."]
    }"#;

    // =============================================
    // extract_json テスト
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = format!("Here is the evaluation:\n```json\n{}\n```\nDone.", VALID_RESPONSE);
        let json = extract_json(&response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("overallScore"));
    }

    #[test]
    fn test_extract_json_raw_object() {
        let response = r#"{"overallScore": 72}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"overallScore": 72}"#);
    }

    #[test]
    fn test_extract_json_with_surrounding_text() {
        let response = r#"Sure! {"overallScore": 72} Hope this helps."#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"overallScore": 72}"#);
    }

    #[test]
    fn test_extract_json_not_found() {
        let response = "The answer sheet looks incomplete.";
        assert!(matches!(extract_json(response), Err(Error::Parse(_))));
    }

    #[test]
    fn test_extract_json_empty() {
        assert!(extract_json("").is_err());
    }

    // =============================================
    // parse_evaluation_response テスト
    // =============================================

    #[test]
    fn test_parse_valid_response() {
        let result = parse_evaluation_response(VALID_RESPONSE).unwrap();
        assert_eq!(result.overall_score, 72.0);
        assert_eq!(result.scores.creativity.score, 7.0);
        assert_eq!(result.scores.handwriting.overall_score, 6.0);
        assert_eq!(result.scores.handwriting.neatness.score, 5.0);
        assert_eq!(result.mistakes.len(), 1);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_parse_fenced_response() {
        let response = format!("```json\n{}\n```", VALID_RESPONSE);
        let result = parse_evaluation_response(&response).unwrap();
        assert_eq!(result.overall_score, 72.0);
    }

    #[test]
    fn test_parse_malformed_json_is_error() {
        let response = r#"{"overallScore": 72, "overallFeedback": "#;
        assert!(matches!(
            parse_evaluation_response(response),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_missing_required_field_is_error() {
        // scoresを欠いたオブジェクトは形不一致としてエラー
        let response = r#"{"overallScore": 72, "overallFeedback": "ok", "mistakes": [], "recommendations": []}"#;
        assert!(matches!(
            parse_evaluation_response(response),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_non_json_text_is_error() {
        let response = "I could not read the handwriting.";
        assert!(parse_evaluation_response(response).is_err());
    }

    #[test]
    fn test_parse_wrong_type_is_error() {
        let response = r#"{"overallScore": "seventy-two"}"#;
        assert!(parse_evaluation_response(response).is_err());
    }
}
