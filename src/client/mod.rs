pub mod facade;
pub mod router;

pub use facade::{
    Enhancements, EssentialV2, FluxSchnell, LatentConsistency, StableDiffusion, StableDiffusionXl,
};
pub use router::{Method, RequestRouter};

use crate::{
    config::GetImgConfig,
    error::{GetImgError, Result},
};
use serde_json::{json, Value};

/// Entry point aggregating one facade per hosted model, all sharing a single
/// credential and HTTP client.
#[derive(Debug, Clone)]
pub struct GetImgClient {
    router: RequestRouter,
    flux_schnell: FluxSchnell,
    essential_v2: EssentialV2,
    stable_diffusion_xl: StableDiffusionXl,
    stable_diffusion: StableDiffusion,
    latent_consistency: LatentConsistency,
    enhancements: Enhancements,
}

impl GetImgClient {
    pub fn new(config: GetImgConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| GetImgError::Config("GETIMG_API_KEY is not set".into()))?;
        let router = RequestRouter::new(api_key, config.base_url(), config.timeout())?;

        Ok(Self {
            flux_schnell: FluxSchnell::new(router.clone()),
            essential_v2: EssentialV2::new(router.clone()),
            stable_diffusion_xl: StableDiffusionXl::new(router.clone()),
            stable_diffusion: StableDiffusion::new(router.clone()),
            latent_consistency: LatentConsistency::new(router.clone()),
            enhancements: Enhancements::new(router.clone()),
            router,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GetImgConfig::from_env())
    }

    pub fn flux_schnell(&self) -> &FluxSchnell {
        &self.flux_schnell
    }

    pub fn essential_v2(&self) -> &EssentialV2 {
        &self.essential_v2
    }

    pub fn stable_diffusion_xl(&self) -> &StableDiffusionXl {
        &self.stable_diffusion_xl
    }

    pub fn stable_diffusion(&self) -> &StableDiffusion {
        &self.stable_diffusion
    }

    pub fn latent_consistency(&self) -> &LatentConsistency {
        &self.latent_consistency
    }

    pub fn enhancements(&self) -> &Enhancements {
        &self.enhancements
    }

    /// Fetch all models available to the account.
    pub fn list_models(&self) -> Result<Value> {
        self.router.send(&json!({}), "v1/models", Method::Get)
    }

    /// Fetch details of a single model by id.
    pub fn get_model(&self, id: &str) -> Result<Value> {
        self.router
            .send(&json!({}), &format!("v1/models/{}", id), Method::Get)
    }

    /// Fetch the credit balance associated with the API key.
    pub fn account_balance(&self) -> Result<Value> {
        self.router.send(&json!({}), "v1/account/balance", Method::Get)
    }
}
