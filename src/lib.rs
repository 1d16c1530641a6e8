//! Synchronous client for the getimg.ai image generation API.
//!
//! One facade per hosted model exposes the pipelines that model supports;
//! all facades share a single credential and blocking HTTP client.
//!
//! ```no_run
//! use getimg::{GetImgClient, GetImgConfig};
//! use serde_json::json;
//! use std::path::Path;
//!
//! # fn main() -> getimg::Result<()> {
//! let client = GetImgClient::new(GetImgConfig::new().with_api_key("key"))?;
//! let payload = json!({"prompt": "an isometric cabin in the woods"});
//! client
//!     .flux_schnell()
//!     .text_to_image(&payload, Some(Path::new("cabin.png")))?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;

pub use client::{
    Enhancements, EssentialV2, FluxSchnell, GetImgClient, LatentConsistency, Method,
    RequestRouter, StableDiffusion, StableDiffusionXl,
};
pub use config::GetImgConfig;
pub use error::{GetImgError, Result};
pub use models::{ImageResult, Model, Pipeline};
