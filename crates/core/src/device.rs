use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a batch's token buffers reside.
///
/// Buffers are plain host memory; the tag tells the training step which
/// execution target the batch was prepared for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// Host CPU
    #[default]
    Cpu,
    /// CUDA accelerator
    Cuda,
}

impl Device {
    /// Lowercase name, as accepted by [`Device::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Cuda => "cuda",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised device name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device {0:?}, expected \"cpu\" or \"cuda\"")]
pub struct ParseDeviceError(pub String);

impl FromStr for Device {
    type Err = ParseDeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            "cuda" => Ok(Device::Cuda),
            _ => Err(ParseDeviceError(s.to_string())),
        }
    }
}
