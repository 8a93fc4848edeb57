use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CLOUD_DILATION, DEFAULT_CLOUD_PROBABILITY, DEFAULT_SHADOW_DILATION};
use crate::error::{CfmaskError, Result};

/// Tunables of the cloud/shadow masking run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Cloud probability threshold, in percent.
    #[serde(default = "default_cloud_probability")]
    pub cloud_probability: f32,
    /// Dilation buffer around cloud pixels (pixels).
    #[serde(default = "default_cloud_dilation")]
    pub cloud_dilation: u32,
    /// Dilation buffer around cloud shadow pixels (pixels).
    #[serde(default = "default_shadow_dilation")]
    pub shadow_dilation: u32,
    /// Use the cirrus band when available.
    #[serde(default)]
    pub use_cirrus: bool,
    /// Use the thermal band when available.
    #[serde(default = "default_use_thermal")]
    pub use_thermal: bool,
}

fn default_cloud_probability() -> f32 {
    DEFAULT_CLOUD_PROBABILITY
}
fn default_cloud_dilation() -> u32 {
    DEFAULT_CLOUD_DILATION
}
fn default_shadow_dilation() -> u32 {
    DEFAULT_SHADOW_DILATION
}
fn default_use_thermal() -> bool {
    true
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            cloud_probability: DEFAULT_CLOUD_PROBABILITY,
            cloud_dilation: DEFAULT_CLOUD_DILATION,
            shadow_dilation: DEFAULT_SHADOW_DILATION,
            use_cirrus: false,
            use_thermal: true,
        }
    }
}

impl MaskConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.cloud_probability.is_finite() || !(0.0..=100.0).contains(&self.cloud_probability)
        {
            return Err(CfmaskError::InvalidConfig(format!(
                "cloud_probability must be within [0, 100], got {}",
                self.cloud_probability
            )));
        }
        Ok(())
    }
}

impl fmt::Display for MaskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cloud_probability = {}", self.cloud_probability)?;
        writeln!(f, "cloud_dilation    = {}", self.cloud_dilation)?;
        writeln!(f, "shadow_dilation   = {}", self.shadow_dilation)?;
        writeln!(f, "use_cirrus        = {}", self.use_cirrus)?;
        write!(f, "use_thermal       = {}", self.use_thermal)
    }
}
