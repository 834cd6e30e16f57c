use crate::domain::AppError;

/// Port for handing a URL to the user's browser.
pub trait BrowserPort {
    fn open(&self, url: &str) -> Result<(), AppError>;
}
