//! Pure parse/validate for `config.toml`.

use crate::domain::{AppError, SvcopenConfig};

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<SvcopenConfig, AppError> {
    let config: SvcopenConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
