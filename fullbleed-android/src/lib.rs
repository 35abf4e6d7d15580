//! Immersive full-screen host for Rust `NativeActivity` apps.
//!
//! The activity is kept edge-to-edge with system bars hidden: on creation, and
//! again every time it resumes on a platform with `WindowInsetsController`.
//! That part runs on the UI thread, driven by `java/rs/fullbleed/ImmersiveActivity.java`.
//! The application loop itself is a [`NativeApp`] on the native thread.

pub mod runner;
pub mod ui;

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub mod jni_window;

pub use self::{
    runner::{HostEvent, Idle, NativeApp, Runner},
    ui::UiActivity,
};
#[cfg(target_os = "android")]
pub use self::android::{run, translate};
#[cfg(target_os = "android")]
pub use winit::platform::android::activity::AndroidApp;

/// Exports `android_main` running the given [`NativeApp`].
///
/// Disable the `android-main` feature of this crate when using this.
#[macro_export]
macro_rules! entrypoint {
    ($app:expr) => {
        #[cfg(target_os = "android")]
        #[unsafe(no_mangle)]
        fn android_main(app: $crate::AndroidApp) {
            $crate::run(app, $app);
        }
    };
}

#[cfg(all(target_os = "android", feature = "android-main"))]
#[unsafe(no_mangle)]
fn android_main(app: AndroidApp) {
    run(app, Idle);
}
