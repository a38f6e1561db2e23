use crate::utils::error::AppError;
use url::Url;

/// Something that can open a URL on the user's behalf
pub trait Navigator: Send + Sync {
    fn open(&self, url: &Url) -> Result<(), AppError>;
}

/// Opens URLs in the system default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, url: &Url) -> Result<(), AppError> {
        open::that(url.as_str()).map_err(|e| AppError::Navigation(e.to_string()))
    }
}

/// Prints URLs instead of opening them (headless `--print-url`)
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn open(&self, url: &Url) -> Result<(), AppError> {
        println!("{}", url);
        Ok(())
    }
}
