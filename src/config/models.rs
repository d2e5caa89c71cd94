use std::time::Duration;

use serde_derive::Deserialize;

use crate::error::{Error, Result};

// Keys are the lowercased ENV var names, e.g. PRINTER_URI -> printer_uri.
// Keep field names identical to the variable names so no alias is needed.

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub printer_uri: Option<String>,
    /// Sent as `requesting-user-name`.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(with = "humantime_serde")]
    pub printer_timeout: Duration,
}

impl Settings {
    pub fn printer_uri(&self) -> Result<&str> {
        self.printer_uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .ok_or(Error::MissingPrinterUri)
    }

    pub fn user_name(&self) -> &str {
        self.user.as_deref().filter(|user| !user.is_empty()).unwrap_or("anonymous")
    }
}
