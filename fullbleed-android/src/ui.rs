//! Immersion driven from the activity's own `onCreate` and `onResume`.
//!
//! `java/rs/fullbleed/ImmersiveActivity.java` calls into native code from those
//! callbacks, so the window is only ever touched on the UI thread while the
//! callback runs: before `super.onCreate` on create, after `super.onResume` on
//! resume.

use std::sync::{Mutex, PoisonError};

use fullbleed::{Host, ImmersionConfig, ImmersionController, ImmersiveActivity, Lifecycle};
use fullbleed_common::{LifecycleEvent, LifecycleState};

/// The immersive activity shared by every UI-thread callback of the process.
///
/// A recreated activity (after a configuration change) keeps using the same
/// instance.
pub struct UiActivity {
    activity: Mutex<Option<ImmersiveActivity>>,
}

impl UiActivity {
    pub const fn new() -> Self {
        Self { activity: Mutex::new(None) }
    }

    /// Runs `event` through the immersive activity, building it from `config`
    /// on first use.
    pub fn dispatch(
        &self,
        host: &mut dyn Host,
        event: &LifecycleEvent,
        config: &ImmersionConfig,
    ) -> LifecycleState {
        let mut activity = self.activity.lock().unwrap_or_else(PoisonError::into_inner);
        let activity = activity
            .get_or_insert_with(|| ImmersiveActivity::new((), ImmersionController::new(config)));

        activity.dispatch(host, event);
        activity.state()
    }
}

impl Default for UiActivity {
    fn default() -> Self {
        Self::new()
    }
}
