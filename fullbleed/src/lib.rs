pub mod activity;
pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod log;
pub mod recording;

pub use fullbleed_common as common;

pub use self::{
    activity::{ImmersiveActivity, Lifecycle},
    bootstrap::{NativeModule, load_native_module},
    config::ImmersionConfig,
    controller::{Host, HostWindow, ImmersionController},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to load native module {name}: {source}")]
    NativeModuleLoad { name: String, source: BoxError },
    #[error("native module {loaded} is already loaded, cannot load {requested}")]
    ModuleConflict { loaded: String, requested: String },
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
