//! Diffusion backend HTTP client
//!
//! Sends prompts to an Automatic1111-compatible server and decodes the
//! returned image. Generation can take minutes on CPU, so no request
//! timeout is set.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::DynamicImage;

use super::dto;
use super::{SynthError, SynthesisRequest};

pub const DEFAULT_DIFFUSION_URL: &str = "http://127.0.0.1:7860";

const TXT2IMG_PATH: &str = "/sdapi/v1/txt2img";

/// Diffusion backend client
pub struct DiffusionClient {
    http_client: reqwest::Client,
    base_url: String,
    model: Option<String>,
}

impl DiffusionClient {
    /// Create a client for a backend at `base_url` using `model` as checkpoint.
    /// An empty model name keeps whatever the backend has loaded.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self, SynthError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| SynthError::Network(format!("Failed to build HTTP client: {}", e)))?;

        let model = model.into();
        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: (!model.trim().is_empty()).then_some(model),
        })
    }

    /// Render one image for the request
    pub async fn txt2img(&self, request: &SynthesisRequest) -> Result<DynamicImage, SynthError> {
        let response = self.send_txt2img(request).await?;
        let encoded = response.images.first().ok_or(SynthError::NoImage)?;
        decode_image(encoded)
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TXT2IMG_PATH)
    }

    fn build_body(&self, request: &SynthesisRequest) -> dto::Txt2ImgRequest {
        dto::Txt2ImgRequest {
            prompt: request.prompt.clone(),
            negative_prompt: request.negative_prompt.clone(),
            steps: request.steps,
            cfg_scale: request.guidance_scale,
            width: request.width,
            height: request.height,
            batch_size: 1,
            override_settings: dto::OverrideSettings {
                sd_model_checkpoint: self.model.clone(),
            },
            precision: request.precision,
        }
    }

    async fn send_txt2img(
        &self,
        request: &SynthesisRequest,
    ) -> Result<dto::Txt2ImgResponse, SynthError> {
        let response = self
            .http_client
            .post(self.endpoint())
            .json(&self.build_body(request))
            .send()
            .await
            .map_err(|e| SynthError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(SynthError::Backend(format!("HTTP {}: {}", status, error.message())));
            }
            return Err(SynthError::Backend(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::Txt2ImgResponse>()
            .await
            .map_err(|e| SynthError::Parse(e.to_string()))
    }
}

/// Decode a base64 image, with or without a `data:` URL prefix
pub(crate) fn decode_image(encoded: &str) -> Result<DynamicImage, SynthError> {
    let payload = encoded.rsplit(',').next().unwrap_or(encoded).trim();
    let bytes = BASE64
        .decode(payload.as_bytes())
        .map_err(|e| SynthError::Decode(e.to_string()))?;
    image::load_from_memory(&bytes).map_err(|e| SynthError::Decode(e.to_string()))
}
