use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested output dimensions. Rendered as `"<width>x<height>"` on the
/// wire, e.g. `512x512`. Both dimensions must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A single image request. The variant picks the endpoint: `Generate`
/// produces an image from text alone, `Edit` modifies the supplied
/// reference image.
#[derive(Debug, Clone)]
pub enum ImageGenerationRequest {
    Generate {
        prompt: String,
        resolution: Resolution,
    },
    Edit {
        prompt: String,
        resolution: Resolution,
        image: Vec<u8>,
    },
}

impl ImageGenerationRequest {
    pub fn generate(prompt: impl Into<String>, resolution: Resolution) -> Self {
        ImageGenerationRequest::Generate {
            prompt: prompt.into(),
            resolution,
        }
    }

    pub fn edit(prompt: impl Into<String>, resolution: Resolution, image: Vec<u8>) -> Self {
        ImageGenerationRequest::Edit {
            prompt: prompt.into(),
            resolution,
            image,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            ImageGenerationRequest::Generate { prompt, .. } => prompt,
            ImageGenerationRequest::Edit { prompt, .. } => prompt,
        }
    }

    pub fn resolution(&self) -> Resolution {
        match self {
            ImageGenerationRequest::Generate { resolution, .. } => *resolution,
            ImageGenerationRequest::Edit { resolution, .. } => *resolution,
        }
    }
}

/// Response body of the images endpoints. Every field is optional on the
/// wire; only `data[0].b64_json` is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub b64_json: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

impl ImageGenerationResponse {
    /// The first returned image as a nonempty base64 string, if any.
    pub fn first_b64_json(&self) -> Option<&str> {
        self.data
            .first()
            .and_then(|image| image.b64_json.as_deref())
            .filter(|b64| !b64.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::new(512, 512).to_string(), "512x512");
        assert_eq!(Resolution::new(1024, 1536).to_string(), "1024x1536");
    }

    #[test]
    fn test_request_accessors() {
        let generate =
            ImageGenerationRequest::generate("a red balloon", Resolution::new(512, 512));
        assert_eq!(generate.prompt(), "a red balloon");
        assert_eq!(generate.resolution(), Resolution::new(512, 512));

        let edit = ImageGenerationRequest::edit(
            "add a hat",
            Resolution::new(256, 256),
            vec![0x89, 0x50, 0x4e, 0x47],
        );
        assert_eq!(edit.prompt(), "add a hat");
        assert!(matches!(edit, ImageGenerationRequest::Edit { .. }));
    }

    #[test]
    fn test_first_b64_json_present() {
        let response: ImageGenerationResponse =
            serde_json::from_str(r#"{"data":[{"b64_json":"ABC123"}]}"#).unwrap();
        assert_eq!(response.first_b64_json(), Some("ABC123"));
    }

    #[test]
    fn test_first_b64_json_missing_field() {
        let response: ImageGenerationResponse =
            serde_json::from_str(r#"{"data":[{}]}"#).unwrap();
        assert_eq!(response.first_b64_json(), None);
    }

    #[test]
    fn test_first_b64_json_empty_cases() {
        let empty_data: ImageGenerationResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(empty_data.first_b64_json(), None);

        let no_data: ImageGenerationResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(no_data.first_b64_json(), None);

        let empty_string: ImageGenerationResponse =
            serde_json::from_str(r#"{"data":[{"b64_json":""}]}"#).unwrap();
        assert_eq!(empty_string.first_b64_json(), None);
    }

    #[test]
    fn test_response_keeps_url_only_results() {
        let response: ImageGenerationResponse =
            serde_json::from_str(r#"{"created":1712345678,"data":[{"url":"https://example.com/img.png"}]}"#)
                .unwrap();
        assert_eq!(response.first_b64_json(), None);
        assert_eq!(
            response.data[0].url.as_deref(),
            Some("https://example.com/img.png")
        );
    }
}
