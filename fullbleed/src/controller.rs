use fullbleed_common::{
    CutoutMode, DisplayImmersionPolicy, InsetApi, InsetType, SdkVersion, SystemBarsBehavior,
    WindowRequest,
};

use crate::ImmersionConfig;

/// Window and insets configuration offered by the host.
///
/// Calls are fire-and-forget. Implementations absorb their own failures; a
/// request the host cannot honour is dropped.
pub trait HostWindow {
    fn set_decor_fits_system_windows(&mut self, fits: bool);
    fn set_cutout_mode(&mut self, mode: CutoutMode);
    fn hide(&mut self, inset: InsetType);
    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior);

    fn submit(&mut self, request: WindowRequest) {
        match request {
            WindowRequest::DecorFitsSystemWindows(fits) => self.set_decor_fits_system_windows(fits),
            WindowRequest::CutoutMode(mode) => self.set_cutout_mode(mode),
            WindowRequest::Hide(inset) => self.hide(inset),
            WindowRequest::SystemBarsBehavior(behavior) => self.set_system_bars_behavior(behavior),
        }
    }
}

/// What a lifecycle callback gets to see of the host.
///
/// Only borrowed for the duration of a single callback.
pub trait Host {
    fn sdk_version(&self) -> SdkVersion;

    /// `None` when the host has no window to configure.
    fn window(&mut self) -> Option<&mut dyn HostWindow>;
}

/// Turns lifecycle triggers into immersive display requests.
///
/// Holds no display state. Every trigger applies the whole policy again.
#[derive(Debug, Clone)]
pub struct ImmersionController {
    policy: DisplayImmersionPolicy,
    min_inset_controller_sdk: SdkVersion,
}

impl ImmersionController {
    pub fn new(config: &ImmersionConfig) -> Self {
        Self {
            policy: DisplayImmersionPolicy::new(),
            min_inset_controller_sdk: config.min_inset_controller_sdk,
        }
    }

    pub fn inset_api(&self, sdk: SdkVersion) -> InsetApi {
        InsetApi::detect(sdk, self.min_inset_controller_sdk)
    }

    pub fn apply_immersion_policy(&self, window: &mut dyn HostWindow) {
        for request in self.policy.requests() {
            tracing::debug!("Submitting window request {request}");
            window.submit(request);
        }
    }

    /// Runs before the base handler sees the creation.
    pub fn on_create(&self, host: &mut dyn Host) {
        let Some(window) = host.window() else {
            tracing::debug!("No host window on create, skipping immersion");
            return;
        };

        let request = self.policy.fits_system_windows_request();
        tracing::debug!("Submitting window request {request}");
        window.submit(request);

        self.apply_immersion_policy(window);
    }

    /// Runs after the base handler has resumed.
    pub fn on_resume(&self, host: &mut dyn Host) {
        let sdk = host.sdk_version();

        match self.inset_api(sdk) {
            InsetApi::InsetController => {}
            InsetApi::LegacyVisibility => {
                tracing::debug!("Insets controller unavailable on {sdk}, not re-applying");
                return;
            }
        }

        match host.window() {
            Some(window) => self.apply_immersion_policy(window),
            None => tracing::debug!("No host window on resume, skipping immersion"),
        }
    }
}

impl Default for ImmersionController {
    fn default() -> Self {
        Self::new(&ImmersionConfig::default())
    }
}
