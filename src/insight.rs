//! Client for the external text-generation service.
//!
//! Nothing here returns an error. Every failure is logged and turned into a
//! fixed message, and nothing here touches stored sheets.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::models::DailyRecord;

pub const MISSING_KEY: &str = "API Key missing for insights.";
pub const EMPTY_INSIGHT: &str = "No insight generated.";
pub const INSIGHT_UNAVAILABLE: &str = "Unable to generate insights at this time.";

pub const RECEIPT_MISSING_KEY: &str = "API key missing.";
pub const RECEIPT_UNREADABLE: &str = "Could not read receipt.";
pub const RECEIPT_FAILED: &str = "Error scanning receipt.";

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for InsightConfig {
    fn default() -> Self {
        InsightConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl InsightConfig {
    /// `API_KEY` (or `GEMINI_API_KEY`), `INSIGHT_MODEL`, `INSIGHT_ENDPOINT`,
    /// `INSIGHT_TIMEOUT_SECS`. Unset or blank values keep the defaults.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        let defaults = InsightConfig::default();

        InsightConfig {
            api_key: var("API_KEY").or_else(|| var("GEMINI_API_KEY")),
            model: var("INSIGHT_MODEL").unwrap_or(defaults.model),
            endpoint: var("INSIGHT_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout: var("INSIGHT_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

fn daily_prompt(record: &DailyRecord) -> String {
    let payload = serde_json::to_string(record).unwrap_or_default();
    format!(
        "Analyze this daily badminton center sales report (JSON):\n{payload}\n\n\
         Write a brief, encouraging summary for the owner covering:\n\
         1. Total revenue performance.\n\
         2. Any inventory discrepancies (sold vs calculated, cash shortage).\n\
         3. The most popular drink.\n\
         4. Suggestions for improvement.\n\n\
         Keep it under 100 words."
    )
}

/// Concatenated text parts of the first candidate, if any.
fn extract_text(body: &Value) -> Option<String> {
    let parts = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

async fn generate(config: &InsightConfig, api_key: &str, parts: Value) -> Result<Option<String>, reqwest::Error> {
    let client = Client::builder().timeout(config.timeout).build()?;
    let body: Value = client
        .post(config.url())
        .header("x-goog-api-key", api_key)
        .json(&json!({ "contents": [{ "parts": parts }] }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(extract_text(&body))
}

pub async fn generate_daily_insight(config: &InsightConfig, record: &DailyRecord) -> String {
    let Some(api_key) = config.api_key.as_deref() else {
        return MISSING_KEY.to_string();
    };

    let parts = json!([{ "text": daily_prompt(record) }]);
    match generate(config, api_key, parts).await {
        Ok(Some(text)) => {
            info!(id = %record.id, "insight generated");
            text
        }
        Ok(None) => EMPTY_INSIGHT.to_string(),
        Err(e) => {
            warn!(id = %record.id, error = %e, timeout = e.is_timeout(), "insight request failed");
            INSIGHT_UNAVAILABLE.to_string()
        }
    }
}

/// Run the insight request on its own task. Aborting the handle discards the
/// result and nothing else.
pub fn spawn_daily_insight(config: InsightConfig, record: DailyRecord) -> JoinHandle<String> {
    tokio::spawn(async move { generate_daily_insight(&config, &record).await })
}

/// Ask the service to read totals and drink items off a photographed receipt.
pub async fn scan_receipt(config: &InsightConfig, base64_jpeg: &str) -> String {
    let Some(api_key) = config.api_key.as_deref() else {
        return RECEIPT_MISSING_KEY.to_string();
    };

    let parts = json!([
        { "inlineData": { "mimeType": "image/jpeg", "data": base64_jpeg } },
        { "text": "Extract the total amount and any visible drink items from this receipt. Return as a short text summary." }
    ]);
    match generate(config, api_key, parts).await {
        Ok(Some(text)) => text,
        Ok(None) => RECEIPT_UNREADABLE.to_string(),
        Err(e) => {
            warn!(error = %e, "receipt scan failed");
            RECEIPT_FAILED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Good day. " }, { "text": "Milo sold best." }] } }]
        });
        assert_eq!(extract_text(&body).as_deref(), Some("Good day. Milo sold best."));
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        assert_eq!(extract_text(&json!({})), None);
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let config = InsightConfig {
            endpoint: "http://localhost:9000/v1beta/".to_string(),
            ..InsightConfig::default()
        };
        assert_eq!(
            config.url(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
