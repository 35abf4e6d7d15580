//! [`HostWindow`] backed by the activity's `android.view.Window`, over JNI.
//!
//! Only built from inside a UI-thread callback: the env and activity are the
//! ones the callback was handed.

use fullbleed::{Host, HostWindow};
use fullbleed_common::{CutoutMode, InsetType, SdkVersion, SystemBarsBehavior, WindowRequest};
use jni::{
    JNIEnv,
    errors::Error as JniError,
    objects::{JObject, JValue},
};

pub struct JniWindow<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    activity: &'a JObject<'local>,
    sdk: SdkVersion,
}

impl<'a, 'local> JniWindow<'a, 'local> {
    pub fn new(env: &'a mut JNIEnv<'local>, activity: &'a JObject<'local>, sdk: SdkVersion) -> Self {
        Self { env, activity, sdk }
    }

    fn supported(&self, request: WindowRequest) -> bool {
        if !request.is_supported_on(self.sdk) {
            tracing::debug!(
                "Skipping {request}, needs {} but running {}",
                request.required_sdk(),
                self.sdk
            );
            return false;
        }

        true
    }

    /// Runs `f` in a fresh local frame.
    ///
    /// Failures are logged and any pending Java exception is cleared, so
    /// nothing is thrown back into the calling activity.
    fn call<T>(
        &mut self,
        what: &str,
        f: impl FnOnce(&mut JNIEnv, &JObject) -> Result<T, JniError>,
    ) -> Option<T> {
        let activity = self.activity;
        let result = self.env.with_local_frame(16, |env| f(env, activity));

        if self.env.exception_check().unwrap_or(false) {
            let _ = self.env.exception_describe();
            let _ = self.env.exception_clear();
        }

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Failed to {what}: {e}");
                None
            }
        }
    }
}

impl HostWindow for JniWindow<'_, '_> {
    fn set_decor_fits_system_windows(&mut self, fits: bool) {
        if !self.supported(WindowRequest::DecorFitsSystemWindows(fits)) {
            return;
        }

        self.call("set decor fits system windows", |env, activity| {
            let window = window(env, activity)?;
            env.call_method(&window, "setDecorFitsSystemWindows", "(Z)V", &[JValue::Bool(
                u8::from(fits),
            )])?;
            Ok(())
        });
    }

    fn set_cutout_mode(&mut self, mode: CutoutMode) {
        if !self.supported(WindowRequest::CutoutMode(mode)) {
            return;
        }

        self.call("set cutout mode", |env, activity| {
            let window = window(env, activity)?;
            let attrs = env
                .call_method(
                    &window,
                    "getAttributes",
                    "()Landroid/view/WindowManager$LayoutParams;",
                    &[],
                )?
                .l()?;

            env.set_field(&attrs, "layoutInDisplayCutoutMode", "I", JValue::Int(mode.as_raw()))?;

            // the field alone is not picked up once the window is attached
            env.call_method(
                &window,
                "setAttributes",
                "(Landroid/view/WindowManager$LayoutParams;)V",
                &[JValue::Object(&attrs)],
            )?;
            Ok(())
        });
    }

    fn hide(&mut self, inset: InsetType) {
        if !self.supported(WindowRequest::Hide(inset)) {
            return;
        }

        let type_fn = match inset {
            InsetType::SystemBars => "systemBars",
            InsetType::DisplayCutout => "displayCutout",
        };

        self.call("hide insets", |env, activity| {
            let types = env
                .call_static_method("android/view/WindowInsets$Type", type_fn, "()I", &[])?
                .i()?;
            let controller = insets_controller(env, activity)?;
            env.call_method(&controller, "hide", "(I)V", &[JValue::Int(types)])?;
            Ok(())
        });
    }

    fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) {
        if !self.supported(WindowRequest::SystemBarsBehavior(behavior)) {
            return;
        }

        self.call("set system bars behavior", |env, activity| {
            let controller = insets_controller(env, activity)?;
            env.call_method(&controller, "setSystemBarsBehavior", "(I)V", &[JValue::Int(
                behavior.as_raw(),
            )])?;
            Ok(())
        });
    }
}

/// The activity as seen from one of its UI-thread callbacks.
pub struct UiThreadHost<'a, 'local> {
    sdk: SdkVersion,
    window: JniWindow<'a, 'local>,
}

impl<'a, 'local> UiThreadHost<'a, 'local> {
    pub fn new(env: &'a mut JNIEnv<'local>, activity: &'a JObject<'local>, sdk: SdkVersion) -> Self {
        Self { sdk, window: JniWindow::new(env, activity, sdk) }
    }
}

impl Host for UiThreadHost<'_, '_> {
    fn sdk_version(&self) -> SdkVersion {
        self.sdk
    }

    fn window(&mut self) -> Option<&mut dyn HostWindow> {
        Some(&mut self.window)
    }
}

/// Checks that the activity context was handed to native code.
pub fn check_native_context(name: &str) -> Result<(), String> {
    let ctx = ndk_context::android_context();

    if ctx.vm().is_null() || ctx.context().is_null() {
        return Err(format!("{name} is running without an activity context"));
    }

    Ok(())
}

fn window<'local>(env: &mut JNIEnv<'local>, activity: &JObject) -> Result<JObject<'local>, JniError> {
    env.call_method(activity, "getWindow", "()Landroid/view/Window;", &[])?.l()
}

fn insets_controller<'local>(
    env: &mut JNIEnv<'local>,
    activity: &JObject,
) -> Result<JObject<'local>, JniError> {
    let window = window(env, activity)?;
    let controller = env
        .call_method(
            &window,
            "getInsetsController",
            "()Landroid/view/WindowInsetsController;",
            &[],
        )?
        .l()?;

    if controller.is_null() {
        return Err(JniError::NullPtr("Window.getInsetsController"));
    }

    Ok(controller)
}
