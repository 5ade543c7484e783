use anyhow::{Context, Result};
use std::path::PathBuf;

/// ClipReview application data root directory.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/ClipReview
/// - Windows: %APPDATA%\ClipReview
/// - Linux: $XDG_DATA_HOME/ClipReview or ~/.local/share/ClipReview
///
/// Does not create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join("ClipReview"))
}

/// Directory holding the persisted submission collections.
pub fn collections_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("collections"))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            return Ok(PathBuf::from(xdg_data_home));
        }
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
}
