pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod openai;

pub use config::OpenAIConfig;
pub use error::{OpenAIError, Result};
pub use models::*;
pub use openai::{ImageClient, OpenAIClient};
