//! In-memory host for driving the controller without a device.
//!
//! [`RecordingWindow`] keeps every request it receives and folds them into a
//! [`DisplayState`] roughly the way Android's window manager would.

use fullbleed_common::{CutoutMode, InsetType, SdkVersion, SystemBarsBehavior, WindowRequest};
use serde::Serialize;

use crate::{Host, HostWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub fits_system_windows: bool,
    pub cutout_mode: CutoutMode,
    pub system_bars_hidden: bool,
    pub display_cutout_hidden: bool,
    pub system_bars_behavior: SystemBarsBehavior,
    /// Bars are hidden but currently revealed by a swipe
    pub transient_bars_shown: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            fits_system_windows: true,
            cutout_mode: CutoutMode::Default,
            system_bars_hidden: false,
            display_cutout_hidden: false,
            system_bars_behavior: SystemBarsBehavior::Default,
            transient_bars_shown: false,
        }
    }
}

impl DisplayState {
    /// Whether system bars are on screen right now.
    pub fn system_bars_visible(&self) -> bool {
        !self.system_bars_hidden || self.transient_bars_shown
    }
}

#[derive(Debug, Default)]
pub struct RecordingWindow {
    requests: Vec<WindowRequest>,
    display: DisplayState,
}

impl RecordingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[WindowRequest] {
        &self.requests
    }

    pub fn take_requests(&mut self) -> Vec<WindowRequest> {
        std::mem::take(&mut self.requests)
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Simulates the user swiping in from a screen edge.
    ///
    /// Returns whether the swipe brought the system bars on screen.
    pub fn swipe_from_edge(&mut self) -> bool {
        if !self.display.system_bars_hidden || self.display.transient_bars_shown {
            return false;
        }

        match self.display.system_bars_behavior {
            SystemBarsBehavior::ShowTransientBarsBySwipe => {
                self.display.transient_bars_shown = true;
            }
            SystemBarsBehavior::Default => {
                self.display.system_bars_hidden = false;
            }
        }

        true
    }
}

impl HostWindow for RecordingWindow {
    fn set_decor_fits_system_windows(&mut self, fits: bool) {
        self.requests.push(WindowRequest::DecorFitsSystemWindows(fits));
        self.display.fits_system_windows = fits;
    }

    fn set_cutout_mode(&mut self, mode: CutoutMode) {
        self.requests.push(WindowRequest::CutoutMode(mode));
        self.display.cutout_mode = mode;
    }

    fn hide(&mut self, inset: InsetType) {
        self.requests.push(WindowRequest::Hide(inset));
        match inset {
            InsetType::SystemBars => {
                self.display.system_bars_hidden = true;
                self.display.transient_bars_shown = false;
            }
            InsetType::DisplayCutout => self.display.display_cutout_hidden = true,
        }
    }

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) {
        self.requests.push(WindowRequest::SystemBarsBehavior(behavior));
        self.display.system_bars_behavior = behavior;
    }
}

#[derive(Debug)]
pub struct RecordingHost {
    sdk: SdkVersion,
    window: Option<RecordingWindow>,
}

impl RecordingHost {
    pub fn new(sdk: SdkVersion) -> Self {
        Self { sdk, window: Some(RecordingWindow::new()) }
    }

    pub fn without_window(sdk: SdkVersion) -> Self {
        Self { sdk, window: None }
    }

    pub fn window_ref(&self) -> Option<&RecordingWindow> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut RecordingWindow> {
        self.window.as_mut()
    }
}

impl Host for RecordingHost {
    fn sdk_version(&self) -> SdkVersion {
        self.sdk
    }

    fn window(&mut self) -> Option<&mut dyn HostWindow> {
        self.window.as_mut().map(|w| w as &mut dyn HostWindow)
    }
}
