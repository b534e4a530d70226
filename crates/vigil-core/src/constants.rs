//! Shared constants for the Vigil validation engine.

/// Environment variable holding fatal-escalation flag tokens.
pub const ENV_FLAGS: &str = "VIGIL_FLAGS";

/// Environment variable holding comma-separated override plugin paths.
pub const ENV_OVERRIDE: &str = "VIGIL_OVERRIDE";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "VIGIL_LOG";

/// Tracing filter used when `VIGIL_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "vigil=info";

/// Project-level configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "vigil.toml";

/// Symbol every override plugin must export.
pub const PLUGIN_ENTRY_SYMBOL: &str = "vigil_create_overrides";

/// Flag token: reports at `issue` level abort the process.
pub const FLAG_FATAL_ISSUES: &str = "fatal_issues";

/// Flag token: reports at `warning` level abort the process.
pub const FLAG_FATAL_WARNINGS: &str = "fatal_warnings";

/// Flag token: reports at `critical` level abort the process.
pub const FLAG_FATAL_CRITICALS: &str = "fatal_criticals";

/// Flag token enabling every fatal flag at once.
pub const FLAG_ALL: &str = "all";

/// Every token accepted in a fatal flag list.
pub const KNOWN_FLAGS: &[&str] = &[
    FLAG_FATAL_ISSUES,
    FLAG_FATAL_WARNINGS,
    FLAG_FATAL_CRITICALS,
    FLAG_ALL,
];
