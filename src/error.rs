use std::path::PathBuf;

use snafu::Snafu;

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("unknown print profile: {identifier}"))]
    UnknownProfile { identifier: String },

    #[snafu(display("quality must be 3 (draft), 4 (normal) or 5 (best), got {quality}"))]
    InvalidQuality { quality: i64 },

    #[snafu(display("copies must be at least 1, got {copies}"))]
    InvalidCopies { copies: u32 },

    #[snafu(display("unparsable page range '{notation}' (use '1', '1-5', ':5', '5:' or 'all')"))]
    InvalidPageRange { notation: String },

    #[snafu(display("invalid printer URI '{uri}': {reason}"))]
    InvalidPrinterUri { uri: String, reason: String },

    #[snafu(display(
        "PRINTER_URI environment variable not set\n\n\
         Please set the printer URI:\n  \
         export PRINTER_URI=\"http://localhost:631/printers/EPSON_ET-8550_Series\"\n\
         Or use --printer flag"
    ))]
    MissingPrinterUri,

    #[snafu(display("could not reach printer at {endpoint}"))]
    Transport { endpoint: String, source: reqwest::Error },

    #[snafu(display("printer at {endpoint} answered with HTTP status {status}"))]
    HttpStatus { endpoint: String, status: u16 },

    #[snafu(display("could not decode IPP response: {message}"))]
    Decode { message: String },

    #[snafu(display("printer returned error: {status}"))]
    Protocol { status: String, job_id: i32 },

    #[snafu(display("reading document {}", path.display()))]
    LocalIo { path: PathBuf, source: std::io::Error },

    #[snafu(display("loading configuration"))]
    Config { source: config::ConfigError },

    #[snafu(display("encoding JSON output"))]
    Json { source: serde_json::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Job id the printer assigned before reporting a failure, when there was one.
    pub fn job_id(&self) -> Option<i32> {
        match self {
            Error::Protocol { job_id, .. } if *job_id != 0 => Some(*job_id),
            _ => None,
        }
    }
}
