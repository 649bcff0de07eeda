use rimagen::{ImageClient, ImageGenerationRequest, OpenAIClient, OpenAIConfig, Resolution};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    rimagen::logger::init_with_config(rimagen::logger::LoggerConfig::development())?;

    log::info!("🔍 Checking OpenAI environment...");

    match env::var("OPENAI_API_KEY") {
        Ok(api_key) => {
            log::info!("✅ OpenAI API key found in environment");
            log::debug!(
                "API key starts with: {}...",
                &api_key[..5.min(api_key.len())]
            );
        }
        Err(_) => {
            log::error!("❌ OPENAI_API_KEY is not set, requests will fail");
        }
    }

    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        log::info!("OPENAI_BASE_URL: {}", base_url);
    }

    log::info!("🔄 Creating OpenAI client...");
    let client = match OpenAIClient::new(OpenAIConfig::from_env()) {
        Ok(client) => {
            log::info!("✅ OpenAI client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize OpenAI client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🖼️  Available image generation models:");
    for (id, name, provider) in ImageClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    let resolution = Resolution::new(512, 512);

    // An optional CLI argument names a reference image to edit; without
    // one the demo runs in generate mode.
    let request = match env::args().nth(1) {
        Some(reference_path) => {
            log::info!("🎨 Editing reference image: {}", reference_path);
            let image = fs::read(&reference_path)?;
            ImageGenerationRequest::edit(
                "Add a hot air balloon floating above the scene",
                resolution,
                image,
            )
        }
        None => {
            log::info!("🎨 Generating image from text...");
            ImageGenerationRequest::generate(
                "A serene landscape with mountains and a lake at sunset, digital art style",
                resolution,
            )
        }
    };

    match client.image().generate(request).await {
        Ok(Some(image_b64)) => {
            log::info!("✅ Image generation successful!");
            log::info!("📏 Image data length: {} characters", image_b64.len());

            let filename = format!("generated_image_{}.png", chrono::Utc::now().timestamp());

            match base64::decode(&image_b64) {
                Ok(image_bytes) => match fs::write(&filename, image_bytes) {
                    Ok(_) => {
                        log::info!("💾 Image saved to: {}", filename);
                    }
                    Err(e) => {
                        log::error!("❌ Failed to save image: {}", e);
                    }
                },
                Err(e) => {
                    log::error!("❌ Failed to decode base64 image: {}", e);
                }
            }
        }
        Ok(None) => {
            log::warn!("⚠️  The API responded without an image payload");
        }
        Err(e) => {
            log::error!("❌ Image generation failed: {}", e);
            log::warn!("💡 Check your API key and account access to the model");
        }
    }

    log::info!("🎉 Done!");

    Ok(())
}
