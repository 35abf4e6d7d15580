use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Host platform API level (`Build.VERSION.SDK_INT` on Android).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SdkVersion(pub u32);

impl SdkVersion {
    /// Android 9, `layoutInDisplayCutoutMode`
    pub const P: Self = Self(28);
    /// Android 11, `WindowInsetsController` and `setDecorFitsSystemWindows`
    pub const R: Self = Self(30);
    /// Android 12
    pub const S: Self = Self(31);
}

impl Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sdk {}", self.0)
    }
}

impl From<u32> for SdkVersion {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Which system UI hiding mechanism a platform offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsetApi {
    /// `View.setSystemUiVisibility` flags. Nothing here drives it.
    LegacyVisibility,
    InsetController,
}

impl InsetApi {
    pub fn detect(sdk: SdkVersion, min_inset_controller: SdkVersion) -> Self {
        if sdk >= min_inset_controller {
            InsetApi::InsetController
        } else {
            InsetApi::LegacyVisibility
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_inset_api() {
        assert_eq!(InsetApi::detect(SdkVersion(34), SdkVersion::S), InsetApi::InsetController);
        assert_eq!(InsetApi::detect(SdkVersion(31), SdkVersion::S), InsetApi::InsetController);
        assert_eq!(InsetApi::detect(SdkVersion(30), SdkVersion::S), InsetApi::LegacyVisibility);
        assert_eq!(InsetApi::detect(SdkVersion(21), SdkVersion::R), InsetApi::LegacyVisibility);
    }

    #[test]
    fn sdk_version_serde() {
        assert_eq!(serde_json::to_value(SdkVersion(33)).unwrap(), serde_json::json!(33));
        assert_eq!(serde_json::from_str::<SdkVersion>("31").unwrap(), SdkVersion::S);
    }
}
