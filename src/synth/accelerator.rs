//! Accelerator detection for choosing model precision.
//!
//! Looks for a CUDA device by running `nvidia-smi -L`, the same way tool
//! availability is checked elsewhere: if the command runs and lists a GPU,
//! we have one.

use std::process::Command;

use serde::{Deserialize, Serialize};

/// Configured compute device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// Check the machine
    #[default]
    Auto,
    /// Assume a CUDA GPU is present
    Cuda,
    /// Force CPU
    Cpu,
}

/// Floating point precision for inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    /// fp16, used when a GPU-class accelerator is present
    #[serde(rename = "fp16")]
    Half,
    /// fp32, used on CPU
    #[serde(rename = "fp32")]
    Full,
}

impl Precision {
    pub fn for_accelerator(has_accelerator: bool) -> Self {
        if has_accelerator {
            Precision::Half
        } else {
            Precision::Full
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Precision::Half => "fp16",
            Precision::Full => "fp32",
        }
    }
}

#[cfg(windows)]
const NVIDIA_SMI_PATHS: &[&str] = &[
    "nvidia-smi", // In PATH
    r"C:\Windows\System32\nvidia-smi.exe",
    r"C:\Program Files\NVIDIA Corporation\NVSMI\nvidia-smi.exe",
];

#[cfg(not(windows))]
const NVIDIA_SMI_PATHS: &[&str] = &["nvidia-smi", "/usr/bin/nvidia-smi", "/usr/local/bin/nvidia-smi"];

/// Check whether a CUDA GPU is visible to this machine
pub fn cuda_available() -> bool {
    NVIDIA_SMI_PATHS.iter().any(|path| {
        Command::new(path)
            .arg("-L")
            .output()
            .map(|o| o.status.success() && String::from_utf8_lossy(&o.stdout).contains("GPU"))
            .unwrap_or(false)
    })
}

/// Resolve the configured device to "has accelerator"
pub fn has_accelerator(device: Device) -> bool {
    match device {
        Device::Cuda => true,
        Device::Cpu => false,
        Device::Auto => cuda_available(),
    }
}

/// Pick the precision for the configured device, logging the choice
pub fn select_precision(device: Device) -> Precision {
    let accelerated = has_accelerator(device);
    let precision = Precision::for_accelerator(accelerated);
    if accelerated {
        tracing::info!("GPU accelerator available, using {} precision", precision.label());
    } else {
        tracing::warn!("Running on CPU, which will be slow ({} precision)", precision.label());
    }
    precision
}
