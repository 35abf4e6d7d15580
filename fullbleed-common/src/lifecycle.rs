//! Host activity lifecycle
//!
//! The host owns the state machine; these types only name its states and the
//! callbacks it delivers.
//!
//! ```plain
//! Initialized -create-> Created -start-> Started -resume-> Resumed
//!                                  ^                          |
//!                                  |                        pause
//!                                  |                          v
//! Destroyed <-destroy- Stopped <-stop- Paused -----resume-----+
//! ```

use alloc::vec::Vec;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    #[default]
    Initialized,
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
}

impl Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LifecycleState::Initialized => "initialized",
            LifecycleState::Created => "created",
            LifecycleState::Started => "started",
            LifecycleState::Resumed => "resumed",
            LifecycleState::Paused => "paused",
            LifecycleState::Stopped => "stopped",
            LifecycleState::Destroyed => "destroyed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    Create {
        /// State saved by a previous instance of the activity, if any
        #[serde(default, skip_serializing_if = "Option::is_none")]
        saved_state: Option<Vec<u8>>,
    },
    Start,
    Resume,
    Pause,
    Stop,
    Destroy,
}

impl LifecycleEvent {
    pub const fn create() -> Self {
        LifecycleEvent::Create { saved_state: None }
    }

    /// The state the activity is in once this callback returns.
    pub const fn target_state(&self) -> LifecycleState {
        match self {
            LifecycleEvent::Create { .. } => LifecycleState::Created,
            LifecycleEvent::Start => LifecycleState::Started,
            LifecycleEvent::Resume => LifecycleState::Resumed,
            LifecycleEvent::Pause => LifecycleState::Paused,
            LifecycleEvent::Stop => LifecycleState::Stopped,
            LifecycleEvent::Destroy => LifecycleState::Destroyed,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::Create { .. } => "create",
            LifecycleEvent::Start => "start",
            LifecycleEvent::Resume => "resume",
            LifecycleEvent::Pause => "pause",
            LifecycleEvent::Stop => "stop",
            LifecycleEvent::Destroy => "destroy",
        }
    }
}

impl Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LifecycleEvent {
    type Err = &'static str;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "create" => Ok(LifecycleEvent::create()),
            "start" => Ok(LifecycleEvent::Start),
            "resume" => Ok(LifecycleEvent::Resume),
            "pause" => Ok(LifecycleEvent::Pause),
            "stop" => Ok(LifecycleEvent::Stop),
            "destroy" => Ok(LifecycleEvent::Destroy),
            _ => Err("expected one of create, start, resume, pause, stop, destroy"),
        }
    }
}
