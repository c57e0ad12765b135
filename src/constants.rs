//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Mendeleev";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "mendeleev";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Mendeleev";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "MENDELEEV_CONFIG_DIR";

/// File name of the TUI log inside the config directory.
pub const LOG_FILE_NAME: &str = "mendeleev.log";
