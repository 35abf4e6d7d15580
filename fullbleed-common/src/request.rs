//! Single configuration calls against a host window
//!
//! Each [`WindowRequest`] names exactly one call on the host's window or insets
//! controller. Requests carry no result; the host applies them or drops them.
//!
//! # Wire format
//!
//! ```plain
//! {"decor_fits_system_windows": false}
//! {"cutout_mode": "always"}
//! {"hide": "system_bars"}
//! {"hide": "display_cutout"}
//! {"system_bars_behavior": "show_transient_bars_by_swipe"}
//! ```

use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::SdkVersion;

/// Classes of system UI that can be hidden through the insets controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsetType {
    /// Status bar, navigation bar and caption bar
    SystemBars,
    /// Area reserved for a notch or other cutout
    DisplayCutout,
}

impl Display for InsetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsetType::SystemBars => f.write_str("system-bars"),
            InsetType::DisplayCutout => f.write_str("display-cutout"),
        }
    }
}

/// How window content is laid out around display cutouts.
///
/// Discriminants match `WindowManager.LayoutParams.LAYOUT_IN_DISPLAY_CUTOUT_MODE_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum CutoutMode {
    Default = 0,
    ShortEdges = 1,
    Never = 2,
    /// Always extend into cutout areas, on every edge
    Always = 3,
}

impl CutoutMode {
    pub const fn as_raw(self) -> i32 {
        self as i32
    }
}

impl Display for CutoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoutMode::Default => f.write_str("default"),
            CutoutMode::ShortEdges => f.write_str("short-edges"),
            CutoutMode::Never => f.write_str("never"),
            CutoutMode::Always => f.write_str("always"),
        }
    }
}

/// How hidden system bars may be brought back by the user.
///
/// Discriminants match `WindowInsetsController.BEHAVIOR_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum SystemBarsBehavior {
    Default = 1,
    /// An edge swipe shows the bars transiently; they hide again on their own
    ShowTransientBarsBySwipe = 2,
}

impl SystemBarsBehavior {
    pub const fn as_raw(self) -> i32 {
        self as i32
    }
}

impl Display for SystemBarsBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemBarsBehavior::Default => f.write_str("default"),
            SystemBarsBehavior::ShowTransientBarsBySwipe => f.write_str("show-on-swipe"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRequest {
    /// When false, content is drawn behind system UI instead of being inset
    DecorFitsSystemWindows(bool),
    CutoutMode(CutoutMode),
    Hide(InsetType),
    SystemBarsBehavior(SystemBarsBehavior),
}

impl WindowRequest {
    /// Lowest platform whose window API can carry out this request.
    pub const fn required_sdk(&self) -> SdkVersion {
        match self {
            WindowRequest::CutoutMode(_) => SdkVersion::P,
            WindowRequest::DecorFitsSystemWindows(_)
            | WindowRequest::Hide(_)
            | WindowRequest::SystemBarsBehavior(_) => SdkVersion::R,
        }
    }

    pub fn is_supported_on(&self, sdk: SdkVersion) -> bool {
        sdk >= self.required_sdk()
    }
}

impl Display for WindowRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowRequest::DecorFitsSystemWindows(fits) => write!(f, "fits-system-windows={fits}"),
            WindowRequest::CutoutMode(mode) => write!(f, "cutout-mode={mode}"),
            WindowRequest::Hide(inset) => write!(f, "hide({inset})"),
            WindowRequest::SystemBarsBehavior(behavior) => {
                write!(f, "transient-behavior={behavior}")
            }
        }
    }
}
