use async_trait::async_trait;
use nook_core::{NookError, Result, TextRewriter};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

const NO_PARAPHRASE_OUTPUT: &str = "No output";

#[derive(Debug, Clone)]
pub struct RewriterSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub grammar_model: String,
    pub paraphrase_model: String,
    pub timeout: Duration,
}

impl Default for RewriterSettings {
    fn default() -> Self {
        Self {
            api_url: HuggingFaceRewriter::DEFAULT_API_BASE.to_string(),
            api_key: None,
            grammar_model: HuggingFaceRewriter::DEFAULT_GRAMMAR_MODEL.to_string(),
            paraphrase_model: HuggingFaceRewriter::DEFAULT_PARAPHRASE_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Serialize)]
struct InferenceInput {
    inputs: String,
}

/// Relays rewriting requests to the Hugging Face hosted inference API.
pub struct HuggingFaceRewriter {
    client: Client,
    settings: RewriterSettings,
}

impl HuggingFaceRewriter {
    pub const DEFAULT_API_BASE: &'static str = "https://api-inference.huggingface.co/models";
    pub const DEFAULT_GRAMMAR_MODEL: &'static str = "vennify/t5-base-grammar-correction";
    pub const DEFAULT_PARAPHRASE_MODEL: &'static str = "Vamsi/T5_Paraphrase_Paws";

    pub fn new(settings: RewriterSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| NookError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, settings })
    }

    pub fn build_url(api_base: &str, model: &str) -> String {
        format!("{}/{}", api_base.trim_end_matches('/'), model)
    }

    pub fn grammar_prompt(text: &str) -> String {
        format!("grammar: {}", text)
    }

    pub fn paraphrase_prompt(text: &str) -> String {
        format!("paraphrase: {} </s>", text)
    }

    async fn infer(&self, model: &str, inputs: String) -> Result<Value> {
        let url = Self::build_url(&self.settings.api_url, model);

        debug!(model = %model, api_url = %url, "Relaying request to inference API");

        let mut request = self.client.post(&url).json(&InferenceInput { inputs });
        if let Some(key) = &self.settings.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NookError::from_response_body(status, &body));
        }

        let reply: Value = response.json().await?;
        info!(model = %model, "Inference request completed");
        Ok(reply)
    }
}

/// Pulls `generated_text` out of the first generation. An `error` member in
/// the reply is a model failure even on a 2xx status.
pub fn extract_generated_text(reply: &Value) -> Result<Option<String>> {
    if let Some(err) = reply.get("error") {
        let message = err
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(NookError::Model(message));
    }

    Ok(reply
        .get(0)
        .and_then(|generation| generation.get("generated_text"))
        .and_then(Value::as_str)
        .map(str::to_string))
}

#[async_trait]
impl TextRewriter for HuggingFaceRewriter {
    async fn correct_grammar(&self, text: &str) -> Result<String> {
        let reply = self
            .infer(&self.settings.grammar_model, Self::grammar_prompt(text))
            .await?;
        Ok(extract_generated_text(&reply)?.unwrap_or_default())
    }

    async fn paraphrase(&self, text: &str) -> Result<String> {
        let reply = self
            .infer(&self.settings.paraphrase_model, Self::paraphrase_prompt(text))
            .await?;
        Ok(extract_generated_text(&reply)?
            .unwrap_or_else(|| NO_PARAPHRASE_OUTPUT.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_first_generation() {
        let reply = json!([{"generated_text": "She goes home."}, {"generated_text": "ignored"}]);
        assert_eq!(
            extract_generated_text(&reply).unwrap(),
            Some("She goes home.".to_string())
        );
    }

    #[test]
    fn test_extract_empty_list() {
        assert_eq!(extract_generated_text(&json!([])).unwrap(), None);
    }

    #[test]
    fn test_extract_error_string() {
        let err = extract_generated_text(&json!({"error": "Model is loading"})).unwrap_err();
        match err {
            NookError::Model(msg) => assert_eq!(msg, "Model is loading"),
            other => panic!("Expected Model error, got: {:?}", other),
        }
    }

    #[test]
    fn test_extract_error_list() {
        let err = extract_generated_text(&json!({"error": ["a", "b"]})).unwrap_err();
        assert!(matches!(err, NookError::Model(msg) if msg.contains("\"a\"")));
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        assert_eq!(
            HuggingFaceRewriter::build_url("https://example.com/models/", "org/model"),
            "https://example.com/models/org/model"
        );
    }

    #[test]
    fn test_prompts() {
        assert_eq!(
            HuggingFaceRewriter::grammar_prompt("he go"),
            "grammar: he go"
        );
        assert_eq!(
            HuggingFaceRewriter::paraphrase_prompt("a cat"),
            "paraphrase: a cat </s>"
        );
    }
}
