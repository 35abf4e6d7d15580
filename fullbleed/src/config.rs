use std::path::Path;

use fullbleed_common::SdkVersion;
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImmersionConfig {
    /// Native library the host loads before the first lifecycle callback
    pub native_library: String,
    /// Lowest platform on which resuming re-applies the policy
    pub min_inset_controller_sdk: SdkVersion,
}

impl Default for ImmersionConfig {
    fn default() -> Self {
        Self {
            native_library: "android_main".to_owned(),
            min_inset_controller_sdk: SdkVersion::S,
        }
    }
}

impl ImmersionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
