use std::time::Duration;

use config::{Config, Environment};
use log::debug;
use snafu::ResultExt;

use crate::error::{ConfigSnafu, Result};

use super::models::Settings;

/// Load settings from `.env` files and the environment.
///
/// `printer_uri` and `timeout` take precedence over `PRINTER_URI` and
/// `PRINTER_TIMEOUT` when given (the `--printer` and `--timeout` flags).
pub fn load_config(printer_uri: Option<String>, timeout: Option<Duration>) -> Result<Settings> {
    // As Rust has no native support for .env files,
    // we use the dotenv_flow crate to import to actual ENV vars.
    if let Ok(dotenv_path) = dotenv_flow::dotenv_flow() {
        debug!("Loaded dotenv file: {dotenv_path:?}");
    }

    build(Environment::default().try_parsing(true), printer_uri, timeout)
}

fn build(environment: Environment, printer_uri: Option<String>, timeout: Option<Duration>) -> Result<Settings> {
    let builder = Config::builder()
        .add_source(environment)
        .set_default("printer_timeout", "30s")
        .context(ConfigSnafu)?
        .set_override_option("printer_uri", printer_uri)
        .context(ConfigSnafu)?
        .set_override_option("printer_timeout", timeout.map(|t| humantime::format_duration(t).to_string()))
        .context(ConfigSnafu)?;

    builder
        .build()
        .context(ConfigSnafu)?
        .try_deserialize()
        .context(ConfigSnafu)
}
