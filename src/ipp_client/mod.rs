pub mod attributes;
pub mod client;
pub mod models;
pub mod page_range;
pub mod request;
pub mod response;
pub mod status;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::PrinterClient;
pub use models::{InkLevel, JobOutcome, JobReceipt, PrinterLifecycle, PrinterSnapshot};
pub use page_range::PageRange;
pub use transport::{HttpTransport, Transport};
