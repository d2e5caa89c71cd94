//! Profile-based printing and ink status for IPP photo printers.
//!
//! [`profiles::ProfileRegistry`] turns a profile name or id into
//! [`profiles::PrintOptions`]; [`ipp_client::PrinterClient`] encodes those
//! options into a Print-Job request and reads printer status back.

pub mod config;
pub mod error;
pub mod ipp_client;
pub mod output;
pub mod profiles;

pub use error::{Error, Result};
