//! One-time loading of the native module that hosts the application loop.

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::{BoxError, Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeModule {
    name: String,
}

impl NativeModule {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Runs a module loader at most once and remembers what it loaded.
pub struct ModuleGuard {
    module: OnceLock<NativeModule>,
    loading: Mutex<()>,
}

impl ModuleGuard {
    pub const fn new() -> Self {
        Self {
            module: OnceLock::new(),
            loading: Mutex::new(()),
        }
    }

    pub fn get(&self) -> Option<&NativeModule> {
        self.module.get()
    }

    pub fn load<E>(
        &self,
        name: &str,
        loader: impl FnOnce(&str) -> Result<(), E>,
    ) -> Result<&NativeModule>
    where
        E: Into<BoxError>,
    {
        if let Some(module) = self.module.get() {
            return check_same(module, name);
        }

        let _loading = self.loading.lock().unwrap_or_else(PoisonError::into_inner);

        // another thread may have finished loading while we waited
        if let Some(module) = self.module.get() {
            return check_same(module, name);
        }

        tracing::info!("Loading native module {name}");

        loader(name).map_err(|e| Error::NativeModuleLoad {
            name: name.to_owned(),
            source: e.into(),
        })?;

        Ok(self.module.get_or_init(|| NativeModule { name: name.to_owned() }))
    }
}

impl Default for ModuleGuard {
    fn default() -> Self {
        Self::new()
    }
}

fn check_same<'a>(module: &'a NativeModule, name: &str) -> Result<&'a NativeModule> {
    if module.name == name {
        tracing::debug!("Native module {name} already loaded");
        Ok(module)
    } else {
        Err(Error::ModuleConflict {
            loaded: module.name.clone(),
            requested: name.to_owned(),
        })
    }
}

static PROCESS_MODULE: ModuleGuard = ModuleGuard::new();

/// Loads the process-wide native module, once.
///
/// Must run before the first lifecycle callback. An error here means the
/// process cannot start.
pub fn load_native_module<E>(
    name: &str,
    loader: impl FnOnce(&str) -> Result<(), E>,
) -> Result<&'static NativeModule>
where
    E: Into<BoxError>,
{
    PROCESS_MODULE.load(name, loader)
}
