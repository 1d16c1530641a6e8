//! Per-model facades. Every method is a fixed (model, pipeline) pair
//! forwarded to [`RequestRouter::generate`]; payloads pass through verbatim,
//! see the linked API reference for the accepted fields.

use crate::{
    client::router::RequestRouter,
    error::Result,
    models::{ImageResult, Model, Pipeline},
};
use serde_json::Value;
use std::path::Path;

macro_rules! pipeline_method {
    ($(#[$doc:meta])* $name:ident, $model:expr, $pipeline:expr) => {
        $(#[$doc])*
        pub fn $name(
            &self,
            payload: &Value,
            save_to_file: Option<&Path>,
        ) -> Result<ImageResult> {
            self.router.generate(payload, $model, $pipeline, save_to_file)
        }
    };
}

#[derive(Debug, Clone)]
pub struct FluxSchnell {
    router: RequestRouter,
}

impl FluxSchnell {
    pub(crate) fn new(router: RequestRouter) -> Self {
        Self { router }
    }

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/postfluxschnelltexttoimage>
        text_to_image,
        Model::FluxSchnell,
        Pipeline::TextToImage
    );
}

#[derive(Debug, Clone)]
pub struct EssentialV2 {
    router: RequestRouter,
}

impl EssentialV2 {
    pub(crate) fn new(router: RequestRouter) -> Self {
        Self { router }
    }

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/postessentialv2texttoimage>
        text_to_image,
        Model::EssentialV2,
        Pipeline::TextToImage
    );
}

#[derive(Debug, Clone)]
pub struct StableDiffusionXl {
    router: RequestRouter,
}

impl StableDiffusionXl {
    pub(crate) fn new(router: RequestRouter) -> Self {
        Self { router }
    }

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusionxltexttoimage>
        text_to_image,
        Model::StableDiffusionXl,
        Pipeline::TextToImage
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusionxlimagetoimage>
        image_to_image,
        Model::StableDiffusionXl,
        Pipeline::ImageToImage
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusionxlinpaint>
        inpaint,
        Model::StableDiffusionXl,
        Pipeline::Inpaint
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusionxlipadapter>
        ip_adapter,
        Model::StableDiffusionXl,
        Pipeline::IpAdapter
    );
}

#[derive(Debug, Clone)]
pub struct StableDiffusion {
    router: RequestRouter,
}

impl StableDiffusion {
    pub(crate) fn new(router: RequestRouter) -> Self {
        Self { router }
    }

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusiontexttoimage>
        text_to_image,
        Model::StableDiffusion,
        Pipeline::TextToImage
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusionimagetoimage>
        image_to_image,
        Model::StableDiffusion,
        Pipeline::ImageToImage
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusioncontrolnet>
        controlnet,
        Model::StableDiffusion,
        Pipeline::Controlnet
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusioninpaint>
        inpaint,
        Model::StableDiffusion,
        Pipeline::Inpaint
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/poststablediffusioninstruct>
        instruct,
        Model::StableDiffusion,
        Pipeline::Instruct
    );
}

#[derive(Debug, Clone)]
pub struct LatentConsistency {
    router: RequestRouter,
}

impl LatentConsistency {
    pub(crate) fn new(router: RequestRouter) -> Self {
        Self { router }
    }

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/postlatentconsistencytexttoimage>
        text_to_image,
        Model::LatentConsistency,
        Pipeline::TextToImage
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/postlatentconsistencyimagetoimage>
        image_to_image,
        Model::LatentConsistency,
        Pipeline::ImageToImage
    );
}

#[derive(Debug, Clone)]
pub struct Enhancements {
    router: RequestRouter,
}

impl Enhancements {
    pub(crate) fn new(router: RequestRouter) -> Self {
        Self { router }
    }

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/postenhancementsupscale>
        upscale,
        Model::Enhancements,
        Pipeline::Upscale
    );

    pipeline_method!(
        /// <https://docs.getimg.ai/reference/postenhancementsfacefix>
        face_fix,
        Model::Enhancements,
        Pipeline::FaceFix
    );
}
