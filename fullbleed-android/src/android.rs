use std::convert::Infallible;

use fullbleed::ImmersionConfig;
use fullbleed_common::{LifecycleEvent, SdkVersion};
use jni::{JNIEnv, objects::JObject, sys::jint};
use log::LevelFilter;
use winit::platform::android::activity::{AndroidApp, MainEvent, PollEvent};

use crate::{
    jni_window::{self, UiThreadHost},
    runner::{HostEvent, NativeApp, Runner},
    ui::UiActivity,
};

static UI_ACTIVITY: UiActivity = UiActivity::new();

fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(LevelFilter::Info)
            .with_tag("fullbleed"),
    );
}

fn ui_dispatch<'local>(
    env: &mut JNIEnv<'local>,
    activity: &JObject<'local>,
    sdk: jint,
    event: LifecycleEvent,
) {
    let sdk = SdkVersion(sdk.max(0) as u32);
    let mut host = UiThreadHost::new(env, activity, sdk);

    let state = UI_ACTIVITY.dispatch(&mut host, &event, &ImmersionConfig::default());
    tracing::debug!("UI thread {event} handled on {sdk}, activity {state}");
}

/// `ImmersiveActivity.nativeOnCreate`, called before `super.onCreate`.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn Java_rs_fullbleed_ImmersiveActivity_nativeOnCreate<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
    sdk: jint,
) {
    init_logging();

    let config = ImmersionConfig::default();

    // the static initializer of the activity has just loaded this library
    let loaded = fullbleed::load_native_module(&config.native_library, |_| Ok::<_, Infallible>(()));
    if let Err(e) = loaded {
        tracing::error!("Native module mismatch: {e}");
    }

    ui_dispatch(&mut env, &activity, sdk, LifecycleEvent::create());
}

/// `ImmersiveActivity.nativeOnResume`, called after `super.onResume`.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn Java_rs_fullbleed_ImmersiveActivity_nativeOnResume<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
    sdk: jint,
) {
    ui_dispatch(&mut env, &activity, sdk, LifecycleEvent::Resume);
}

pub fn translate(event: &MainEvent<'_>) -> HostEvent {
    match event {
        MainEvent::Start { .. } => HostEvent::Lifecycle(LifecycleEvent::Start),
        MainEvent::Resume { .. } => HostEvent::Lifecycle(LifecycleEvent::Resume),
        MainEvent::Pause { .. } => HostEvent::Lifecycle(LifecycleEvent::Pause),
        MainEvent::Stop { .. } => HostEvent::Lifecycle(LifecycleEvent::Stop),
        MainEvent::Destroy { .. } => HostEvent::Lifecycle(LifecycleEvent::Destroy),
        MainEvent::InitWindow { .. } => HostEvent::WindowCreated,
        MainEvent::TerminateWindow { .. } => HostEvent::WindowDestroyed,
        MainEvent::RedrawNeeded { .. } => HostEvent::RedrawNeeded,
        MainEvent::GainedFocus { .. } => HostEvent::FocusChanged(true),
        MainEvent::LostFocus { .. } => HostEvent::FocusChanged(false),
        MainEvent::InsetsChanged { .. } => HostEvent::InsetsChanged,
        MainEvent::LowMemory { .. } => HostEvent::LowMemory,
        _ => HostEvent::Other,
    }
}

/// Runs `native` on the native activity thread.
///
/// Returns when the activity is destroyed or the app breaks out of the loop.
/// The display itself is kept immersive from the UI thread by
/// `ImmersiveActivity`, not from here.
pub fn run<A: NativeApp>(app: AndroidApp, native: A) {
    init_logging();

    let config = ImmersionConfig::default();

    let loaded =
        fullbleed::load_native_module(&config.native_library, jni_window::check_native_context);

    let module = match loaded {
        Ok(module) => module,
        Err(e) => {
            tracing::error!("Cannot start: {e}");
            return;
        }
    };

    tracing::info!("Native module {} running", module.name());

    let mut runner = Runner::new(native);

    // the activity has already been created by the time android_main runs
    let mut flow = runner.handle(HostEvent::Lifecycle(LifecycleEvent::create()));

    while flow.is_continue() {
        app.poll_events(runner.poll_timeout(), |event| {
            if flow.is_break() {
                return;
            }

            let event = match event {
                PollEvent::Main(main) => translate(&main),
                PollEvent::Wake | PollEvent::Timeout => HostEvent::Tick,
                _ => HostEvent::Other,
            };

            flow = runner.handle(event);
        });
    }

    tracing::info!("Native loop finished in state {}", runner.state());
}
