//! Gemini API連携
//!
//! 答案画像＋採点プロンプト＋レスポンススキーマを1リクエストで送信し、
//! 応答テキストをEvaluationResultとしてパースする。リトライなし、
//! キャッシュなし、1呼び出し1リクエスト。

use grader_ai_common::{
    build_evaluation_prompt, parse_evaluation_response, response_schema, Error, EvaluationPreset,
    EvaluationResult, Result,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    /// 出力をEvaluationResultの形に制約する宣言スキーマ
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/png;base64,iVBOR..." 形式のData URL
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// 抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

fn js_err(e: JsValue) -> Error {
    Error::Api(format!("{:?}", e))
}

/// Gemini API呼び出し（fetch + 応答テキスト取り出し）
///
/// 通信失敗・非2xx・空応答はError::Apiになる。
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;

    if !resp.ok() {
        return Err(Error::Api(format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Api(format!("Unexpected response envelope: {}", e)))?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| Error::Api("Empty response".to_string()))
}

/// 答案画像を採点する
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `data_url` - 答案画像のData URL（Base64）
/// * `rubric` - ルーブリック／模範解答
/// * `preset` - 評価プリセット
///
/// # Returns
/// 成功時はEvaluationResult。通信失敗はError::Api、
/// 応答が宣言スキーマにパースできない場合はError::Parse。
pub async fn evaluate_sheet(
    api_key: &str,
    data_url: &str,
    rubric: &str,
    preset: EvaluationPreset,
) -> Result<EvaluationResult> {
    let base64_data = extract_base64_from_data_url(data_url)
        .ok_or_else(|| Error::Api("Invalid data URL".to_string()))?;
    let mime_type = extract_mime_type_from_data_url(data_url);

    let prompt = build_evaluation_prompt(rubric, preset);

    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text { text: prompt },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: 0.3,
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    parse_evaluation_response(&response_text).map_err(|e| {
        // 生の応答テキストは診断用にコンソールへ残し、UIには出さない
        gloo::console::error!(format!(
            "採点レスポンスのパースに失敗: {} / raw: {}",
            e, response_text
        ));
        e
    })
}
