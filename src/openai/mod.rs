pub mod image_client;

use crate::{
    config::OpenAIConfig,
    error::{OpenAIError, Result},
};

pub use image_client::{ImageClient, DEFAULT_IMAGE_MODEL};

/// Default endpoint root for the OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct OpenAIClient {
    image_client: ImageClient,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| OpenAIError::ConfigError("OpenAI API key is required".into()))?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = reqwest::Client::new();

        Ok(Self {
            image_client: ImageClient::new(client, api_key, base_url),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = OpenAIClient::new(OpenAIConfig::new());
        assert!(matches!(result, Err(OpenAIError::ConfigError(_))));
    }

    #[test]
    fn test_new_with_api_key() {
        let client = OpenAIClient::new(OpenAIConfig::new().with_api_key("sk-test"));
        assert!(client.is_ok());
    }
}
