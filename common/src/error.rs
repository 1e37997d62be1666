//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// - `Api`: 上流サービスとの通信失敗（非2xx応答を含む）
/// - `Parse`: 応答テキストが宣言スキーマにパースできない
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("API error: {0}")]
    Api(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse("JSONが見つかりません".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Parse error: JSONが見つかりません");
    }

    #[test]
    fn test_error_display_api() {
        let error = Error::Api("status 429".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "API error: status 429");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
