use std::path::PathBuf;

/// Environment variable overriding the ticketdesk root directory.
pub const ROOT_ENV: &str = "TICKETDESK_ROOT";

/// Returns the ticketdesk root directory.
///
/// Uses `$TICKETDESK_ROOT` when set, otherwise `.ticketdesk` in the current
/// directory.
pub fn ticketdesk_root() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV) {
        PathBuf::from(root)
    } else {
        PathBuf::from(".ticketdesk")
    }
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    ticketdesk_root().join("config.yaml")
}
