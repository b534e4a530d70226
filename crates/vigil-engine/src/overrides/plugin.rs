//! Override plugins: shared libraries that register overrides at startup.
//!
//! A plugin exports `vigil_create_overrides`, receives an opaque registry
//! handle and returns how many overrides it registered, or a negative value
//! on failure. [`export_overrides!`](crate::export_overrides) generates the
//! entry point.

use std::ffi::{c_int, c_void};

use vigil_core::constants::PLUGIN_ENTRY_SYMBOL;
use vigil_core::errors::PluginError;
use vigil_core::VigilErrorCode;

use super::registry::OverrideRegistry;

/// Signature of a plugin's exported entry point.
pub type PluginEntryFn = unsafe extern "C" fn(registry: *const c_void) -> c_int;

/// Loads a plugin and runs its entry point against a registry.
pub trait PluginLoader: Send + Sync {
    /// Returns the entry point's return value.
    fn invoke_entry(&self, path: &str, registry: &OverrideRegistry) -> Result<i32, PluginError>;
}

/// Loads plugins as native shared libraries.
///
/// Loaded libraries stay mapped for the life of the process since
/// registered overrides point into their code.
#[derive(Debug, Default, Clone, Copy)]
pub struct DylibLoader;

impl PluginLoader for DylibLoader {
    fn invoke_entry(&self, path: &str, registry: &OverrideRegistry) -> Result<i32, PluginError> {
        // SAFETY: running a library's initializers is inherent to loading it;
        // plugin paths come from the operator's configuration.
        let library = unsafe { libloading::Library::new(path) }.map_err(|e| {
            PluginError::LoadFailed {
                path: path.to_string(),
                reason: e.to_string(),
            }
        })?;

        // SAFETY: `export_overrides!` declares the entry with `PluginEntryFn`'s
        // signature, and the registry outlives the call.
        let code = unsafe {
            let entry = library
                .get::<PluginEntryFn>(PLUGIN_ENTRY_SYMBOL.as_bytes())
                .map_err(|_| PluginError::SymbolNotFound {
                    path: path.to_string(),
                    symbol: PLUGIN_ENTRY_SYMBOL.to_string(),
                })?;
            entry(registry.as_plugin_handle())
        };

        std::mem::forget(library);
        Ok(code)
    }
}

/// Outcome of loading a single plugin.
#[derive(Debug)]
pub struct PluginLoad {
    pub path: String,
    /// Overrides registered, or why the plugin contributed none.
    pub result: Result<usize, PluginError>,
}

/// Outcome of a preload scan.
#[derive(Debug, Default)]
pub struct PreloadSummary {
    pub loaded: usize,
    pub plugins: Vec<PluginLoad>,
}

impl OverrideRegistry {
    /// Load every plugin in the comma-separated `spec` and return the total
    /// number of overrides they registered. Failures are logged and skipped.
    pub fn preload(&self, spec: &str, loader: &dyn PluginLoader) -> usize {
        self.preload_detailed(spec, loader).loaded
    }

    /// [`OverrideRegistry::preload`] with a per-plugin breakdown.
    pub fn preload_detailed(&self, spec: &str, loader: &dyn PluginLoader) -> PreloadSummary {
        let mut summary = PreloadSummary::default();
        for path in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let result = load_one(self, path, loader);
            if let Ok(count) = result {
                summary.loaded += count;
            }
            summary.plugins.push(PluginLoad {
                path: path.to_string(),
                result,
            });
        }
        summary
    }
}

fn load_one(
    registry: &OverrideRegistry,
    path: &str,
    loader: &dyn PluginLoader,
) -> Result<usize, PluginError> {
    let code = match loader.invoke_entry(path, registry) {
        Ok(code) => code,
        Err(e) => {
            match &e {
                PluginError::LoadFailed { .. } => {
                    tracing::error!(path, error = %e.coded_string(), "skipping override plugin");
                }
                _ => tracing::warn!(path, error = %e.coded_string(), "skipping override plugin"),
            }
            return Err(e);
        }
    };

    match usize::try_from(code) {
        Ok(0) => {
            tracing::info!(path, "no overrides loaded");
            Ok(0)
        }
        Ok(count) => {
            tracing::info!(path, count, "loaded overrides");
            Ok(count)
        }
        Err(_) => {
            let e = PluginError::EntryFailed {
                path: path.to_string(),
                code,
            };
            tracing::warn!(path, error = %e.coded_string(), "override plugin entry failed");
            Err(e)
        }
    }
}

/// Export a plugin entry point that calls `$register` with the host's
/// registry. `$register` takes `&OverrideRegistry` and returns the number of
/// overrides it registered as `i32`.
///
/// ```ignore
/// fn register(registry: &vigil_engine::overrides::OverrideRegistry) -> i32 {
///     registry.register_by_name("queue0", std::sync::Arc::new(MyOverride));
///     1
/// }
/// vigil_engine::export_overrides!(register);
/// ```
#[macro_export]
macro_rules! export_overrides {
    ($register:path) => {
        /// Plugin entry point called by the host during override preload.
        ///
        /// # Safety
        ///
        /// `handle` must be a registry handle supplied by the host.
        #[no_mangle]
        pub unsafe extern "C" fn vigil_create_overrides(
            handle: *const ::std::ffi::c_void,
        ) -> ::std::ffi::c_int {
            // SAFETY: the host passes a live registry handle.
            let Some(registry) =
                (unsafe { $crate::overrides::OverrideRegistry::from_plugin_handle(handle) })
            else {
                return -1;
            };
            ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $register(registry)))
                .unwrap_or(-1)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstLoader(i32);

    impl PluginLoader for ConstLoader {
        fn invoke_entry(&self, _path: &str, _registry: &OverrideRegistry) -> Result<i32, PluginError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_negative_entry_is_entry_failed() {
        let registry = OverrideRegistry::new();
        let summary = registry.preload_detailed("libbad.so", &ConstLoader(-2));
        assert_eq!(summary.loaded, 0);
        assert!(matches!(
            summary.plugins[0].result,
            Err(PluginError::EntryFailed { code: -2, .. })
        ));
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        let registry = OverrideRegistry::new();
        let summary = registry.preload_detailed(",a.so,, b.so ,", &ConstLoader(1));
        let paths: Vec<_> = summary.plugins.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, ["a.so", "b.so"]);
        assert_eq!(summary.loaded, 2);
    }

    #[test]
    fn test_empty_spec_loads_nothing() {
        let registry = OverrideRegistry::new();
        assert_eq!(registry.preload("", &ConstLoader(5)), 0);
    }
}
