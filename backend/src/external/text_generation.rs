//! Text Generation Client
//!
//! Client for the third-party generate-content API used by the schedule
//! generator. The server is the only holder of the API key.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::{AppError, AppResult};

/// Client for the text-generation endpoint
#[derive(Clone)]
pub struct TextGenerationClient {
    endpoint: String,
    api_key: String,
    parameters: GenerationParameters,
    http_client: Client,
}

/// Request body of a generate-content call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub generation_config: GenerationParameters,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

/// Response body of a generate-content call
///
/// Every level is optional so that a well-formed JSON body with the wrong
/// shape still parses and is reported as "no text".
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    pub fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

impl GenerateContentRequest {
    pub fn new(prompt: &str, parameters: GenerationParameters) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: parameters,
        }
    }
}

impl From<&GenerationConfig> for GenerationParameters {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_k: config.top_k,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

impl TextGenerationClient {
    /// Create a new text generation client
    pub fn new(config: &GenerationConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            parameters: GenerationParameters::from(config),
            http_client,
        })
    }

    /// Send one prompt and return the generated text verbatim
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "generation.api_key is not set".to_string(),
            ));
        }

        let request = GenerateContentRequest::new(prompt, self.parameters.clone());

        let response = self
            .http_client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::GenerationFailed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::GenerationFailed(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::GenerationFailed(format!("Failed to parse response: {}", e)))?;

        result.into_text().ok_or_else(|| {
            AppError::GenerationFailed("Response did not contain generated text".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters() -> GenerationParameters {
        GenerationParameters::from(&GenerationConfig::default())
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest::new("hello", parameters());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
        assert!(json["generationConfig"]["temperature"].is_number());
        assert!(json["generationConfig"]["topP"].is_number());
    }

    #[test]
    fn test_text_extraction() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Water at 6 AM"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("Water at 6 AM"));
    }

    #[test]
    fn test_missing_text_is_none() {
        let bodies = [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#,
        ];
        for body in bodies {
            let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
            assert!(response.into_text().is_none(), "{}", body);
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        let client = TextGenerationClient::new(&GenerationConfig::default()).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
