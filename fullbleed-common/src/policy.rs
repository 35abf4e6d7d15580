//! The immersive display policy
//!
//! A [`DisplayImmersionPolicy`] is rebuilt on every trigger and applied whole.
//! Nothing compares it against what was applied before.
//!
//! ```plain
//! content fits system windows => false            (creation only)
//! cutout mode                 => always
//! hide                        => system_bars, display_cutout
//! system bars behavior        => show_transient_bars_by_swipe
//! ```

use serde::{Deserialize, Serialize};

use crate::{CutoutMode, InsetType, SystemBarsBehavior, WindowRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayImmersionPolicy {
    pub suppressed_ui_classes: [InsetType; 2],
    pub cutout_accommodation: CutoutMode,
    pub content_fits_system_windows: bool,
    pub transient_reveal_behavior: SystemBarsBehavior,
}

impl DisplayImmersionPolicy {
    pub const IMMERSIVE: Self = Self {
        suppressed_ui_classes: [InsetType::SystemBars, InsetType::DisplayCutout],
        cutout_accommodation: CutoutMode::Always,
        content_fits_system_windows: false,
        transient_reveal_behavior: SystemBarsBehavior::ShowTransientBarsBySwipe,
    };

    pub const fn new() -> Self {
        Self::IMMERSIVE
    }

    /// Request issued once when the activity is created, before the policy itself.
    pub const fn fits_system_windows_request(&self) -> WindowRequest {
        WindowRequest::DecorFitsSystemWindows(self.content_fits_system_windows)
    }

    /// The ordered requests that make up one application of the policy.
    pub const fn requests(&self) -> [WindowRequest; 4] {
        let [first, second] = self.suppressed_ui_classes;

        [
            WindowRequest::CutoutMode(self.cutout_accommodation),
            WindowRequest::Hide(first),
            WindowRequest::Hide(second),
            WindowRequest::SystemBarsBehavior(self.transient_reveal_behavior),
        ]
    }
}

impl Default for DisplayImmersionPolicy {
    fn default() -> Self {
        Self::IMMERSIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immersive_requests() {
        assert_eq!(DisplayImmersionPolicy::new().requests(), [
            WindowRequest::CutoutMode(CutoutMode::Always),
            WindowRequest::Hide(InsetType::SystemBars),
            WindowRequest::Hide(InsetType::DisplayCutout),
            WindowRequest::SystemBarsBehavior(SystemBarsBehavior::ShowTransientBarsBySwipe),
        ]);
    }

    #[test]
    fn content_never_fits_system_windows() {
        assert_eq!(
            DisplayImmersionPolicy::default().fits_system_windows_request(),
            WindowRequest::DecorFitsSystemWindows(false)
        );
    }

    #[test]
    fn policy_format() {
        assert_eq!(
            serde_json::to_value(DisplayImmersionPolicy::IMMERSIVE).unwrap(),
            serde_json::json!({
                "suppressed_ui_classes": ["system_bars", "display_cutout"],
                "cutout_accommodation": "always",
                "content_fits_system_windows": false,
                "transient_reveal_behavior": "show_transient_bars_by_swipe",
            })
        );
    }
}
