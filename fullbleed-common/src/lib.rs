#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod lifecycle;
pub mod platform;
pub mod policy;
pub mod request;

pub use lifecycle::{LifecycleEvent, LifecycleState};
pub use platform::{InsetApi, SdkVersion};
pub use policy::DisplayImmersionPolicy;
pub use request::{CutoutMode, InsetType, SystemBarsBehavior, WindowRequest};
