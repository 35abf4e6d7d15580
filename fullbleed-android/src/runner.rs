use std::{ops::ControlFlow, time::Duration};

use fullbleed_common::{LifecycleEvent, LifecycleState};

/// Host events as the runner sees them, independent of the activity glue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Lifecycle(LifecycleEvent),
    WindowCreated,
    WindowDestroyed,
    RedrawNeeded,
    FocusChanged(bool),
    InsetsChanged,
    LowMemory,
    /// The poll timeout elapsed or the loop was woken without an event
    Tick,
    Other,
}

/// The application loop hosted by the activity.
///
/// Runs on the native thread. It never sees the window: immersion is handled
/// on the UI thread, see [`crate::ui`].
pub trait NativeApp {
    /// How long to wait for host events before a [`HostEvent::Tick`]; `None` waits forever.
    fn poll_timeout(&self) -> Option<Duration> {
        None
    }

    fn on_host_event(&mut self, _event: &HostEvent) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Does nothing but keep the activity alive.
#[derive(Debug, Default)]
pub struct Idle;

impl NativeApp for Idle {}

pub struct Runner<A: NativeApp> {
    app: A,
    state: LifecycleState,
}

impl<A: NativeApp> Runner<A> {
    pub fn new(app: A) -> Self {
        Self { app, state: LifecycleState::Initialized }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn poll_timeout(&self) -> Option<Duration> {
        self.app.poll_timeout()
    }

    pub fn handle(&mut self, event: HostEvent) -> ControlFlow<()> {
        if let HostEvent::Lifecycle(lifecycle) = &event {
            tracing::debug!("Native loop {} -> {}", self.state, lifecycle.target_state());
            self.state = lifecycle.target_state();
        }

        let flow = self.app.on_host_event(&event);

        if self.state == LifecycleState::Destroyed {
            tracing::info!("Activity destroyed, leaving native loop");
            return ControlFlow::Break(());
        }

        flow
    }
}
