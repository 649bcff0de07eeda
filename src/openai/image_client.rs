use crate::{
    error::{OpenAIError, Result},
    models::{ImageGenerationRequest, ImageGenerationResponse},
};
use reqwest::multipart::{Form, Part};
use serde_json::json;

/// Model identifier sent with every request.
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";

#[derive(Clone)]
pub struct ImageClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ImageClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![("gpt-image-1", "GPT Image 1", "OpenAI")]
    }

    /// Run one image request and return the base64 payload of the first
    /// result. A successful response without a nonempty `b64_json` is not
    /// an error: it is logged and surfaced as `Ok(None)`.
    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<Option<String>> {
        let size = request.resolution().to_string();

        log::info!("Generating image with model: {}", DEFAULT_IMAGE_MODEL);
        log::debug!("Image request size: {}", size);

        let response = match self.execute(&request, &size).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Unexpected error during image generation: {}", e);
                return Err(e);
            }
        };

        match response.first_b64_json() {
            Some(b64) => Ok(Some(b64.to_string())),
            None => {
                log::error!(
                    "Unexpected image response: {}",
                    serde_json::to_string(&response).unwrap_or_default()
                );
                Ok(None)
            }
        }
    }

    async fn execute(
        &self,
        request: &ImageGenerationRequest,
        size: &str,
    ) -> Result<ImageGenerationResponse> {
        let response = match request {
            ImageGenerationRequest::Generate { prompt, .. } => {
                let payload = json!({
                    "model": DEFAULT_IMAGE_MODEL,
                    "prompt": prompt,
                    "n": 1,
                    "size": size
                });

                self.client
                    .post(&format!("{}/images/generations", self.base_url))
                    .bearer_auth(&self.api_key)
                    .json(&payload)
                    .send()
                    .await
            }
            ImageGenerationRequest::Edit { prompt, image, .. } => {
                let part = Part::bytes(image.clone())
                    .file_name("image.png")
                    .mime_str("image/png")
                    .map_err(|e| {
                        OpenAIError::RequestError(format!("Invalid reference image part: {}", e))
                    })?;

                let form = Form::new()
                    .text("model", DEFAULT_IMAGE_MODEL)
                    .text("prompt", prompt.clone())
                    .text("size", size.to_string())
                    .text("n", "1")
                    .part("image[]", part);

                self.client
                    .post(&format!("{}/images/edits", self.base_url))
                    .bearer_auth(&self.api_key)
                    .multipart(form)
                    .send()
                    .await
            }
        }
        .map_err(|e| OpenAIError::RequestError(format!("OpenAI request failed: {}", e)))?;

        let status = response.status();

        // Drain the body before deciding: error messages embed it whole.
        let body = response
            .text()
            .await
            .map_err(|e| OpenAIError::ResponseError(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(OpenAIError::ApiError(format!("Non 200 response: {}", body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            OpenAIError::ResponseError(format!("Failed to parse image response: {}", e))
        })
    }
}
