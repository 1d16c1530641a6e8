use std::fmt;

/// A named image generation operation mode. Each variant maps to the final
/// segment of an endpoint URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    TextToImage,
    ImageToImage,
    Inpaint,
    IpAdapter,
    Controlnet,
    Instruct,
    Upscale,
    FaceFix,
}

impl Pipeline {
    pub fn as_path(&self) -> &'static str {
        match self {
            Pipeline::TextToImage => "text-to-image",
            Pipeline::ImageToImage => "image-to-image",
            Pipeline::Inpaint => "inpaint",
            Pipeline::IpAdapter => "ip-adapter",
            Pipeline::Controlnet => "controlnet",
            Pipeline::Instruct => "instruct",
            Pipeline::Upscale => "upscale",
            Pipeline::FaceFix => "face-fix",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// A backend image generation engine, identified by a fixed URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    FluxSchnell,
    EssentialV2,
    StableDiffusionXl,
    StableDiffusion,
    LatentConsistency,
    Enhancements,
}

impl Model {
    pub fn as_path(&self) -> &'static str {
        match self {
            Model::FluxSchnell => "v1/flux-schnell",
            Model::EssentialV2 => "v1/essential-v2",
            // The provider serves classic Stable Diffusion requests from the
            // XL path segment, so both logical models share one backend.
            Model::StableDiffusionXl | Model::StableDiffusion => "v1/stable-diffusion-xl",
            Model::LatentConsistency => "v1/latent-consistency",
            Model::Enhancements => "v1/enhancements",
        }
    }

    /// The pipelines this model accepts, per the provider's API reference.
    pub fn supported_pipelines(&self) -> &'static [Pipeline] {
        match self {
            Model::FluxSchnell | Model::EssentialV2 => &[Pipeline::TextToImage],
            Model::StableDiffusionXl => &[
                Pipeline::TextToImage,
                Pipeline::ImageToImage,
                Pipeline::Inpaint,
                Pipeline::IpAdapter,
            ],
            Model::StableDiffusion => &[
                Pipeline::TextToImage,
                Pipeline::ImageToImage,
                Pipeline::Controlnet,
                Pipeline::Inpaint,
                Pipeline::Instruct,
            ],
            Model::LatentConsistency => &[Pipeline::TextToImage, Pipeline::ImageToImage],
            Model::Enhancements => &[Pipeline::Upscale, Pipeline::FaceFix],
        }
    }

    pub fn supports(&self, pipeline: Pipeline) -> bool {
        self.supported_pipelines().contains(&pipeline)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_paths() {
        assert_eq!(Pipeline::TextToImage.as_path(), "text-to-image");
        assert_eq!(Pipeline::IpAdapter.as_path(), "ip-adapter");
        assert_eq!(Pipeline::FaceFix.as_path(), "face-fix");
        assert_eq!(Pipeline::Upscale.to_string(), "upscale");
    }

    #[test]
    fn test_model_paths() {
        assert_eq!(Model::FluxSchnell.as_path(), "v1/flux-schnell");
        assert_eq!(Model::Enhancements.as_path(), "v1/enhancements");
    }

    #[test]
    fn test_stable_diffusion_shares_xl_segment() {
        assert_eq!(Model::StableDiffusion.as_path(), Model::StableDiffusionXl.as_path());
    }

    #[test]
    fn test_supported_pipelines() {
        assert!(Model::FluxSchnell.supports(Pipeline::TextToImage));
        assert!(!Model::FluxSchnell.supports(Pipeline::Upscale));
        assert!(Model::StableDiffusion.supports(Pipeline::Instruct));
        assert!(!Model::StableDiffusionXl.supports(Pipeline::Instruct));
        assert!(Model::Enhancements.supports(Pipeline::FaceFix));
        assert!(!Model::Enhancements.supports(Pipeline::TextToImage));
        assert_eq!(Model::StableDiffusion.supported_pipelines().len(), 5);
        assert_eq!(Model::LatentConsistency.supported_pipelines().len(), 2);
    }
}
