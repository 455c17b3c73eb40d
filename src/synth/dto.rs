//! Diffusion backend Data Transfer Objects
//!
//! Shapes of the Automatic1111-compatible `txt2img` API.
//! DO NOT use these types outside the synth module.
//!
//! API Reference: https://github.com/AUTOMATIC1111/stable-diffusion-webui/wiki/API

use serde::{Deserialize, Serialize};

use super::accelerator::Precision;

/// `POST /sdapi/v1/txt2img` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Txt2ImgRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub steps: u32,
    pub cfg_scale: f32,
    pub width: u32,
    pub height: u32,
    pub batch_size: u32,
    pub override_settings: OverrideSettings,
    /// Hint for backends that pick precision per request; others ignore it
    pub precision: Precision,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_model_checkpoint: Option<String>,
}

/// `txt2img` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Txt2ImgResponse {
    /// Base64-encoded PNGs
    #[serde(default)]
    pub images: Vec<String>,
    /// JSON-encoded generation info (string, not an object)
    pub info: Option<String>,
}

/// Error body (FastAPI style)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: Option<String>,
    pub detail: Option<serde_json::Value>,
    pub errors: Option<String>,
}

impl ApiError {
    pub fn message(&self) -> String {
        self.errors
            .clone()
            .or_else(|| self.error.clone())
            .or_else(|| self.detail.as_ref().map(|d| d.to_string()))
            .unwrap_or_else(|| "unknown error".to_string())
    }
}
