use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SVCOPEN_CONFIG";

/// `~/.svcopen`
pub fn svcopen_dir(home: &Path) -> PathBuf {
    home.join(".svcopen")
}

/// `~/.svcopen/config.toml`
pub fn config(home: &Path) -> PathBuf {
    svcopen_dir(home).join("config.toml")
}
