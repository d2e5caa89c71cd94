use std::time::Duration;

use log::{debug, error};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use snafu::ResultExt;
use url::Url;

use crate::error::{Error, HttpStatusSnafu, Result, TransportSnafu};

/// IANA port for both `ipp` and `ipps`.
pub const IPP_PORT: u16 = 631;

const IPP_CONTENT_TYPE: &str = "application/ipp";

/// Moves one encoded IPP message to the printer and returns its raw answer.
pub trait Transport {
    fn post(&self, endpoint: &Url, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// Map a printer URI to the HTTP endpoint its requests are POSTed to.
///
/// `ipp://host/path` becomes `http://host:631/path` and `ipps://` becomes
/// `https://`; `http(s)://` URIs are used unchanged.
pub fn http_endpoint(printer_uri: &str) -> Result<Url> {
    let invalid = |reason: &str| Error::InvalidPrinterUri { uri: printer_uri.to_string(), reason: reason.to_string() };

    let parsed = Url::parse(printer_uri).map_err(|e| invalid(&e.to_string()))?;
    let scheme = match parsed.scheme() {
        "http" | "https" => return Ok(parsed),
        "ipp" => "http",
        "ipps" => "https",
        other => return Err(invalid(&format!("unsupported scheme '{other}'"))),
    };

    let host = parsed.host_str().ok_or_else(|| invalid("missing host"))?;
    let port = parsed.port().unwrap_or(IPP_PORT);
    let mut endpoint = format!("{scheme}://{host}:{port}{}", parsed.path());
    if let Some(query) = parsed.query() {
        endpoint.push('?');
        endpoint.push_str(query);
    }

    Url::parse(&endpoint).map_err(|e| invalid(&e.to_string()))
}

/// Blocking HTTP transport, one POST per operation.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context(TransportSnafu { endpoint: "<client setup>" })?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, endpoint: &Url, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!("POST {endpoint} ({} bytes)", body.len());
        let response = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, IPP_CONTENT_TYPE)
            .body(body)
            .send()
            .map_err(|e| {
                error!("Transport failure talking to {endpoint}: {e}");
                e
            })
            .context(TransportSnafu { endpoint: endpoint.as_str() })?;

        let status = response.status();
        if !status.is_success() {
            error!("Printer at {endpoint} answered HTTP {status}");
            return HttpStatusSnafu { endpoint: endpoint.as_str(), status: status.as_u16() }.fail();
        }

        let bytes = response.bytes().context(TransportSnafu { endpoint: endpoint.as_str() })?;
        Ok(bytes.to_vec())
    }
}
