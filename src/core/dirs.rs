use crate::core::error::GitPromptError;
use std::path::PathBuf;

const APP_DIR: &str = "gitprompt";

pub fn get_config_directory() -> Result<PathBuf, GitPromptError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or(GitPromptError::ConfigDirectoryNotFound)
}
