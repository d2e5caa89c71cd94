use std::fmt;

use serde_derive::Serialize;

/// `printer-state` as reported by the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum PrinterLifecycle {
    Idle,
    Processing,
    Stopped,
    /// An unrecognised state code, or `None` when the attribute was missing.
    Unknown(Option<i32>),
}

impl PrinterLifecycle {
    pub fn from_code(code: i32) -> Self {
        match code {
            3 => PrinterLifecycle::Idle,
            4 => PrinterLifecycle::Processing,
            5 => PrinterLifecycle::Stopped,
            other => PrinterLifecycle::Unknown(Some(other)),
        }
    }
}

impl fmt::Display for PrinterLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterLifecycle::Idle => f.write_str("Idle"),
            PrinterLifecycle::Processing => f.write_str("Processing"),
            PrinterLifecycle::Stopped => f.write_str("Stopped"),
            PrinterLifecycle::Unknown(Some(code)) => write!(f, "Unknown ({code})"),
            PrinterLifecycle::Unknown(None) => f.write_str("Unknown"),
        }
    }
}

impl From<PrinterLifecycle> for String {
    fn from(state: PrinterLifecycle) -> Self {
        state.to_string()
    }
}

/// One ink tank (IPP "marker").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InkLevel {
    pub name: String,
    /// Percent full, 0-100. Printers report -1..-3 for unknown levels.
    pub level: i32,
    pub color: String,
}

/// Printer information and status, fetched fresh for every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrinterSnapshot {
    pub name: String,
    pub model: String,
    pub state: PrinterLifecycle,
    pub state_reasons: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_message: Option<String>,
    pub ink_levels: Vec<InkLevel>,
}

/// How the printer answered a Print-Job request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Success,
    /// Non-success IPP status keyword, e.g. `client-error-not-found`.
    ProtocolError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReceipt {
    /// Printer-assigned job id; 0 when the response carried none.
    pub job_id: i32,
    pub outcome: JobOutcome,
}

impl JobReceipt {
    pub fn is_success(&self) -> bool {
        self.outcome == JobOutcome::Success
    }

    pub fn into_result(self) -> crate::error::Result<i32> {
        match self.outcome {
            JobOutcome::Success => Ok(self.job_id),
            JobOutcome::ProtocolError(status) => Err(crate::error::Error::Protocol { status, job_id: self.job_id }),
        }
    }
}
