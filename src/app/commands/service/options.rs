use crate::domain::AppError;

/// How the result of a service lookup is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Every matching record as a table. Never fails on ambiguity.
    #[default]
    Table,
    /// The resolved URL only.
    Url,
    /// Open the resolved URL in the default browser.
    Browser,
}

impl OutputMode {
    /// Select the mode from the `--url` / `--in-browser` flags.
    pub fn from_flags(url: bool, in_browser: bool) -> Result<Self, AppError> {
        match (url, in_browser) {
            (false, false) => Ok(OutputMode::Table),
            (true, false) => Ok(OutputMode::Url),
            (false, true) => Ok(OutputMode::Browser),
            (true, true) => {
                Err(AppError::Usage("--url and --in-browser cannot be used together.".into()))
            }
        }
    }
}

/// Options for the `service` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Service to look up.
    pub name: String,
    /// Restrict the lookup to one namespace.
    pub namespace: Option<String>,
    /// Presentation mode.
    pub mode: OutputMode,
    /// Use `https://` for node-port URLs.
    pub prefer_https: bool,
}

impl ServiceOptions {
    /// Build options from raw positional arguments; exactly one service name is accepted.
    pub fn from_args(
        names: &[String],
        namespace: Option<String>,
        mode: OutputMode,
        prefer_https: bool,
    ) -> Result<Self, AppError> {
        let [name] = names else {
            return Err(AppError::Usage("You must specify the name of the service.".into()));
        };
        if name.trim().is_empty() {
            return Err(AppError::Usage("You must specify the name of the service.".into()));
        }

        let namespace = namespace.filter(|ns| !ns.is_empty());
        Ok(Self { name: name.clone(), namespace, mode, prefer_https })
    }
}
