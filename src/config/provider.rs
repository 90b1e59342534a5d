//! Compute provider selection for the ONNX runtime.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Hardware acceleration provider for ONNX models.
/// Auto-detected if not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// CPU inference (default fallback, always available)
    #[default]
    Cpu,
    /// NVIDIA CUDA acceleration (Linux only, requires CUDA toolkit)
    Cuda,
    /// Apple CoreML acceleration (macOS only, uses unified memory and the Neural Engine)
    #[value(name = "coreml")]
    CoreMl,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sherpa_provider())
    }
}

impl Provider {
    /// Convert to sherpa-rs provider string.
    pub fn as_sherpa_provider(&self) -> &'static str {
        match self {
            Provider::Cpu => "cpu",
            Provider::Cuda => "cuda",
            Provider::CoreMl => "coreml",
        }
    }
}

/// Answers which accelerators the host can use.
pub trait ProviderProbe {
    /// Apple-silicon style unified-memory accelerator.
    fn has_coreml(&self) -> bool;

    /// General purpose GPU accelerator.
    fn has_cuda(&self) -> bool;
}

/// Probe backed by the running platform.
pub struct SystemProbe;

impl ProviderProbe for SystemProbe {
    fn has_coreml(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn has_cuda(&self) -> bool {
        #[cfg(target_os = "linux")]
        {
            has_nvidia_gpu()
        }

        #[cfg(not(target_os = "linux"))]
        {
            false
        }
    }
}

/// Pick the best available provider: CoreML, then CUDA, then CPU.
pub fn select_provider(probe: &impl ProviderProbe) -> Provider {
    if probe.has_coreml() {
        info!("Using CoreML acceleration");
        Provider::CoreMl
    } else if probe.has_cuda() {
        info!("Using CUDA acceleration");
        Provider::Cuda
    } else {
        info!("Using CPU (no acceleration)");
        Provider::Cpu
    }
}

/// Check if an NVIDIA GPU is available (Linux only).
#[cfg(target_os = "linux")]
fn has_nvidia_gpu() -> bool {
    use std::path::Path;

    let nvidia_paths = [
        "/dev/nvidia0",
        "/dev/nvidiactl",
        "/dev/nvidia-uvm",
        // Jetson devices
        "/dev/nvhost-ctrl",
        "/dev/nvhost-ctrl-gpu",
        "/etc/nv_tegra_release",
    ];

    nvidia_paths.iter().any(|path| Path::new(path).exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe {
        coreml: bool,
        cuda: bool,
    }

    impl ProviderProbe for FixedProbe {
        fn has_coreml(&self) -> bool {
            self.coreml
        }

        fn has_cuda(&self) -> bool {
            self.cuda
        }
    }

    #[test]
    fn test_coreml_preferred_over_everything() {
        let probe = FixedProbe { coreml: true, cuda: true };
        assert_eq!(select_provider(&probe), Provider::CoreMl);
    }

    #[test]
    fn test_cuda_preferred_over_cpu() {
        let probe = FixedProbe { coreml: false, cuda: true };
        assert_eq!(select_provider(&probe), Provider::Cuda);
    }

    #[test]
    fn test_cpu_fallback() {
        let probe = FixedProbe { coreml: false, cuda: false };
        assert_eq!(select_provider(&probe), Provider::Cpu);
    }

    #[test]
    fn test_provider_names_match_sherpa() {
        assert_eq!(Provider::CoreMl.to_string(), "coreml");
        assert_eq!(Provider::Cuda.as_sherpa_provider(), "cuda");
        assert_eq!(Provider::default(), Provider::Cpu);
    }
}
