use std::path::Path;

use log::info;
use snafu::ResultExt;
use url::Url;

use crate::config::models::Settings;
use crate::error::{LocalIoSnafu, Result};
use crate::profiles::PrintOptions;

use super::models::{JobReceipt, PrinterSnapshot};
use super::request::build_submit_request;
use super::response::interpret;
use super::status::{build_status_request, decode_snapshot};
use super::transport::{http_endpoint, HttpTransport, Transport};

/// A single printer, addressed by its IPP URI.
///
/// Every call is one blocking round trip; nothing is cached between calls.
pub struct PrinterClient<T: Transport = HttpTransport> {
    printer_uri: String,
    endpoint: Url,
    user: String,
    transport: T,
}

impl PrinterClient<HttpTransport> {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = HttpTransport::new(settings.printer_timeout)?;
        Self::with_transport(settings.printer_uri()?, settings.user_name(), transport)
    }
}

impl<T: Transport> PrinterClient<T> {
    pub fn with_transport(printer_uri: &str, user: &str, transport: T) -> Result<Self> {
        Ok(PrinterClient {
            printer_uri: printer_uri.to_string(),
            endpoint: http_endpoint(printer_uri)?,
            user: user.to_string(),
            transport,
        })
    }

    pub fn printer_uri(&self) -> &str {
        &self.printer_uri
    }

    /// Read `path` and submit it as a Print-Job named after the file.
    ///
    /// A missing or unreadable file fails before anything is sent.
    pub fn print_file(&self, path: &Path, options: &PrintOptions) -> Result<JobReceipt> {
        let document = std::fs::read(path).context(LocalIoSnafu { path })?;
        let job_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.print_document(&document, &job_name, options)
    }

    pub fn print_document(&self, document: &[u8], job_name: &str, options: &PrintOptions) -> Result<JobReceipt> {
        let request = build_submit_request(&self.printer_uri, document, job_name, options, &self.user)?;
        info!("Sending '{job_name}' to {} ({} bytes)", self.printer_uri, document.len());
        let response = self.transport.post(&self.endpoint, request)?;
        interpret(&response)
    }

    pub fn query_status(&self) -> Result<PrinterSnapshot> {
        let request = build_status_request(&self.printer_uri, &self.user);
        let response = self.transport.post(&self.endpoint, request)?;
        decode_snapshot(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ipp_client::models::{JobOutcome, PrinterLifecycle};
    use crate::ipp_client::testing::{MockTransport, WireMessage};
    use std::io::Write;

    const URI: &str = "ipp://printer.local/ipp/print";

    #[test]
    fn prints_file_and_returns_job_id() {
        let transport = MockTransport::answering(WireMessage::new(0).job_group().integer("job-id", &[42]).finish());
        let client = PrinterClient::with_transport(URI, "alice", transport).unwrap();

        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.7 test").unwrap();

        let receipt = client.print_file(file.path(), &PrintOptions::test_page()).unwrap();
        assert_eq!(receipt, JobReceipt { job_id: 42, outcome: JobOutcome::Success });

        let requests = client.transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0.as_str(), "http://printer.local:631/ipp/print");
        assert!(requests[0].1.ends_with(b"%PDF-1.7 test"));
    }

    #[test]
    fn missing_file_never_reaches_the_printer() {
        let transport = MockTransport::answering(WireMessage::new(0).finish());
        let client = PrinterClient::with_transport(URI, "alice", transport).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let result = client.print_file(&dir.path().join("missing.pdf"), &PrintOptions::test_page());

        assert!(matches!(result, Err(Error::LocalIo { .. })));
        assert!(client.transport.requests.borrow().is_empty());
    }

    #[test]
    fn printer_error_is_reported_in_receipt() {
        let transport = MockTransport::answering(WireMessage::new(0x0406).finish());
        let client = PrinterClient::with_transport(URI, "alice", transport).unwrap();

        let receipt = client.print_document(b"doc", "doc.pdf", &PrintOptions::default()).unwrap();
        assert_eq!(receipt.outcome, JobOutcome::ProtocolError("client-error-not-found".into()));
        assert!(matches!(receipt.into_result(), Err(Error::Protocol { job_id: 0, .. })));
    }

    #[test]
    fn queries_status() {
        let transport = MockTransport::answering(
            WireMessage::new(0).printer_group().enumeration("printer-state", 5).finish(),
        );
        let client = PrinterClient::with_transport(URI, "alice", transport).unwrap();
        assert_eq!(client.query_status().unwrap().state, PrinterLifecycle::Stopped);
    }

    #[test]
    fn rejects_invalid_uri_up_front() {
        let transport = MockTransport::answering(Vec::new());
        assert!(matches!(
            PrinterClient::with_transport("gopher://x", "alice", transport),
            Err(Error::InvalidPrinterUri { .. })
        ));
    }
}
