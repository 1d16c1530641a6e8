use crate::{
    error::{GetImgError, Result},
    models::{ImageResult, Model, Pipeline},
};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Builds and dispatches every request the library issues. All facades share
/// one router, so the credential and the underlying connection pool are held
/// in exactly one place.
#[derive(Debug, Clone)]
pub struct RequestRouter {
    http: Client,
    api_key: String,
    base_url: String,
}

impl RequestRouter {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        if api_key.is_empty() {
            return Err(GetImgError::Config("API key must not be empty".into()));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Issue a request to `<base_url>/<path>` and parse the response body as
    /// JSON. Non-200 statuses are logged with the raw body and surfaced as
    /// [`GetImgError::Api`].
    pub fn send(&self, payload: &Value, path: &str, method: Method) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        let request_id = Uuid::new_v4();
        log::debug!("{:?} {} [req:{}]", method, url, request_id);

        let builder = match method {
            Method::Post => self.http.post(&url).json(payload),
            Method::Get => self.http.get(&url),
        };
        let response = builder
            .header("accept", "application/json")
            .header("authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .send()?;

        let status = response.status();
        if status == StatusCode::OK {
            let body = response.text()?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = response.text().unwrap_or_default();
            log::error!(
                "{:?} {} returned status {} [req:{}]: {}",
                method,
                url,
                status.as_u16(),
                request_id,
                body
            );
            Err(GetImgError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Run a generation pipeline and optionally persist the returned image.
    ///
    /// The (model, pipeline) pair is checked against the supported-pipelines
    /// table before any network traffic. A successful response without an
    /// `image` field skips persistence and is not an error.
    pub fn generate(
        &self,
        payload: &Value,
        model: Model,
        pipeline: Pipeline,
        save_to_file: Option<&Path>,
    ) -> Result<ImageResult> {
        if !model.supports(pipeline) {
            return Err(GetImgError::UnsupportedPipeline {
                model: model.to_string(),
                pipeline: pipeline.to_string(),
            });
        }

        let path = format!("{}/{}", model.as_path(), pipeline.as_path());
        let result = ImageResult::new(self.send(payload, &path, Method::Post)?);
        if let Some(file) = save_to_file {
            if result.save(file)? {
                log::info!("Saved generated image to {}", file.display());
            }
        }
        Ok(result)
    }
}
