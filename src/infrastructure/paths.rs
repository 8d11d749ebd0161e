//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which maps
//! to the working directory of the last focused terminal (usually the user's
//! home). These helpers translate user-facing paths to sandbox paths and back.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the data directory used for trace files.
///
/// Resolves to `/host/.local/share/zellij/tgvmax`, i.e.
/// `~/.local/share/zellij/tgvmax` when Zellij was started from the home
/// directory.
///
/// # Examples
///
/// ```
/// use tgvmax::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/tgvmax"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("tgvmax")
}

/// Expands tilde paths to the `/host` prefix.
///
/// # Examples
///
/// ```
/// use tgvmax::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/exports"), "/host/exports");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp"), "/tmp");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix so paths read as they do on the host.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

/// Resolves the configured export directory to a sandbox path.
///
/// Tilde paths expand under `/host`; other relative paths (including the
/// default `.`) are taken relative to `/host`; absolute paths are kept.
///
/// # Examples
///
/// ```
/// use tgvmax::infrastructure::resolve_export_dir;
///
/// assert_eq!(resolve_export_dir(".").to_str(), Some("/host"));
/// assert_eq!(resolve_export_dir("exports").to_str(), Some("/host/exports"));
/// assert_eq!(resolve_export_dir("~/Downloads").to_str(), Some("/host/Downloads"));
/// ```
#[must_use]
pub fn resolve_export_dir(configured: &str) -> PathBuf {
    let expanded = expand_tilde(configured.trim());
    let trimmed = expanded.trim_start_matches("./");

    if trimmed.is_empty() || trimmed == "." {
        PathBuf::from(HOST_ROOT)
    } else if trimmed.starts_with('/') {
        PathBuf::from(trimmed)
    } else {
        PathBuf::from(HOST_ROOT).join(trimmed)
    }
}
