use crate::domain::AppError;
use crate::ports::BrowserPort;

/// Opens URLs with the platform's default browser.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserPort for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), AppError> {
        tracing::debug!(url, "launching default browser");
        webbrowser::open(url).map_err(|e| AppError::ExternalToolError {
            tool: "browser".into(),
            error: format!("Failed to open {}: {}", url, e),
        })
    }
}
