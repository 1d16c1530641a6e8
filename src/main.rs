use getimg::logger::{self, LoggerConfig};
use getimg::{GetImgClient, GetImgConfig};
use serde_json::json;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(LoggerConfig::development())?;

    match dotenv::dotenv() {
        Ok(_) => log::info!(".env file loaded"),
        Err(_) => log::warn!("No .env file found, using system environment variables"),
    }

    let config = GetImgConfig::from_env();
    if config.api_key.is_none() {
        log::error!("GETIMG_API_KEY is not set");
    }
    let client = GetImgClient::new(config)?;

    let balance = client.account_balance()?;
    log::info!("Account balance: {}", balance);

    let payload = json!({
        "prompt": "an isometric cabin in the woods, soft morning light",
        "width": 1024,
        "height": 1024,
        "response_format": "b64",
    });
    let result = client
        .flux_schnell()
        .text_to_image(&payload, Some(Path::new("output.png")))?;

    match result.decode_image()? {
        Some(bytes) => log::info!(
            "Generated {} bytes (seed: {:?}, cost: {:?})",
            bytes.len(),
            result.seed(),
            result.cost()
        ),
        None => log::warn!("Response carried no inline image data"),
    }

    Ok(())
}
