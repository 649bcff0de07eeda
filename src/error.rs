use std::fmt;

#[derive(Debug)]
pub enum OpenAIError {
    ConfigError(String),
    RequestError(String),
    ApiError(String),
    ResponseError(String),
}

impl fmt::Display for OpenAIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenAIError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            OpenAIError::RequestError(msg) => write!(f, "Request error: {}", msg),
            OpenAIError::ApiError(msg) => write!(f, "OpenAI API error: {}", msg),
            OpenAIError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl std::error::Error for OpenAIError {}

pub type Result<T> = std::result::Result<T, OpenAIError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OpenAIError::ApiError("Non 200 response: bad request".to_string());
        assert!(err.to_string().contains("Non 200 response: bad request"));

        let err = OpenAIError::ConfigError("OpenAI API key is required".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: OpenAI API key is required"
        );
    }
}
