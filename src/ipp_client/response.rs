use std::borrow::Cow;
use std::io::Cursor;

use ipp::parser::IppParser;
use ipp::prelude::*;
use ipp::reader::IppReader;
use log::{debug, error};

use crate::error::{Error, Result};

use super::attributes::JOB_ID;
use super::models::{JobOutcome, JobReceipt};

const SUCCESSFUL_OK: u16 = 0x0000;
const SUCCESSFUL_OK_IGNORED_OR_SUBSTITUTED: u16 = 0x0001;

/// Parse an IPP message (header and attribute groups) from raw bytes.
pub(crate) fn decode(bytes: &[u8]) -> Result<IppRequestResponse> {
    IppParser::new(IppReader::new(Cursor::new(bytes.to_vec())))
        .parse()
        .map_err(|e| {
            error!("Undecodable IPP response ({} bytes): {e}", bytes.len());
            Error::Decode { message: e.to_string() }
        })
}

/// Raw status code of a decoded response.
pub(crate) fn status_code(response: &IppRequestResponse) -> u16 {
    response.header().operation_or_status
}

/// RFC 8011 keyword for an IPP status code.
pub fn status_keyword(code: u16) -> Cow<'static, str> {
    let keyword = match code {
        0x0000 => "successful-ok",
        0x0001 => "successful-ok-ignored-or-substituted-attributes",
        0x0002 => "successful-ok-conflicting-attributes",
        0x0400 => "client-error-bad-request",
        0x0401 => "client-error-forbidden",
        0x0402 => "client-error-not-authenticated",
        0x0403 => "client-error-not-authorized",
        0x0404 => "client-error-not-possible",
        0x0405 => "client-error-timeout",
        0x0406 => "client-error-not-found",
        0x0407 => "client-error-gone",
        0x0408 => "client-error-request-entity-too-large",
        0x0409 => "client-error-request-value-too-long",
        0x040A => "client-error-document-format-not-supported",
        0x040B => "client-error-attributes-or-values-not-supported",
        0x040C => "client-error-uri-scheme-not-supported",
        0x040D => "client-error-charset-not-supported",
        0x040E => "client-error-conflicting-attributes",
        0x040F => "client-error-compression-not-supported",
        0x0410 => "client-error-compression-error",
        0x0411 => "client-error-document-format-error",
        0x0412 => "client-error-document-access-error",
        0x0500 => "server-error-internal-error",
        0x0501 => "server-error-operation-not-supported",
        0x0502 => "server-error-service-unavailable",
        0x0503 => "server-error-version-not-supported",
        0x0504 => "server-error-device-error",
        0x0505 => "server-error-temporary-error",
        0x0506 => "server-error-not-accepting-jobs",
        0x0507 => "server-error-busy",
        0x0508 => "server-error-job-canceled",
        0x0509 => "server-error-multiple-document-jobs-not-supported",
        other => return Cow::Owned(format!("unknown-status-0x{other:04x}")),
    };
    Cow::Borrowed(keyword)
}

/// Only plain success and success-with-substitutions count as accepted.
pub(crate) fn is_accepted(code: u16) -> bool {
    code == SUCCESSFUL_OK || code == SUCCESSFUL_OK_IGNORED_OR_SUBSTITUTED
}

/// `job-id` from the job group, falling back to any group that carries one.
fn find_job_id(attributes: &IppAttributes) -> Option<i32> {
    let job_groups = attributes.groups_of(DelimiterTag::JobAttributes);
    let other_groups = attributes.groups().iter().filter(|group| group.tag() != DelimiterTag::JobAttributes);

    job_groups
        .chain(other_groups)
        .filter_map(|group| group.attributes().get(JOB_ID))
        .find_map(|attribute| match attribute.value() {
            IppValue::Integer(id) => Some(*id),
            _ => None,
        })
}

/// Decode a Print-Job response into the job id and outcome.
///
/// A printer error still yields `Ok`: the receipt keeps whatever job id the
/// printer sent so the caller can decide what to do with a partial success.
pub fn interpret(bytes: &[u8]) -> Result<JobReceipt> {
    let response = decode(bytes)?;
    let code = status_code(&response);
    let job_id = find_job_id(response.attributes()).unwrap_or(0);

    let outcome = if is_accepted(code) {
        JobOutcome::Success
    } else {
        JobOutcome::ProtocolError(status_keyword(code).into_owned())
    };
    debug!("Print-Job answered {} (job id {job_id})", status_keyword(code));

    Ok(JobReceipt { job_id, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipp_client::testing::WireMessage;

    #[test]
    fn ok_with_job_id() {
        let bytes = WireMessage::new(0x0000).job_group().integer("job-id", &[42]).finish();
        assert_eq!(interpret(&bytes).unwrap(), JobReceipt { job_id: 42, outcome: JobOutcome::Success });
    }

    #[test]
    fn substituted_attributes_still_succeed() {
        let bytes = WireMessage::new(0x0001).job_group().integer("job-id", &[7]).finish();
        assert!(interpret(&bytes).unwrap().is_success());
    }

    #[test]
    fn conflicting_attributes_is_an_error() {
        let bytes = WireMessage::new(0x0002).job_group().integer("job-id", &[8]).finish();
        assert_eq!(
            interpret(&bytes).unwrap(),
            JobReceipt { job_id: 8, outcome: JobOutcome::ProtocolError("successful-ok-conflicting-attributes".into()) }
        );
    }

    #[test]
    fn not_found_without_job_id() {
        let bytes = WireMessage::new(0x0406).finish();
        assert_eq!(
            interpret(&bytes).unwrap(),
            JobReceipt { job_id: 0, outcome: JobOutcome::ProtocolError("client-error-not-found".into()) }
        );
    }

    #[test]
    fn error_keeps_job_id() {
        let bytes = WireMessage::new(0x0507).job_group().integer("job-id", &[99]).finish();
        let receipt = interpret(&bytes).unwrap();
        assert_eq!(receipt.job_id, 99);
        assert_eq!(receipt.outcome, JobOutcome::ProtocolError("server-error-busy".into()));
    }

    #[test]
    fn missing_job_id_defaults_to_zero() {
        let bytes = WireMessage::new(0x0000).finish();
        assert_eq!(interpret(&bytes).unwrap().job_id, 0);
    }

    #[test]
    fn job_id_outside_job_group_is_found() {
        let bytes = WireMessage::new(0x0000).printer_group().integer("job-id", &[5]).finish();
        assert_eq!(interpret(&bytes).unwrap().job_id, 5);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(interpret(b""), Err(Error::Decode { .. })));
        assert!(matches!(interpret(&[0x01, 0x01]), Err(Error::Decode { .. })));
    }

    #[test]
    fn unknown_status_keyword() {
        assert_eq!(status_keyword(0x0406), "client-error-not-found");
        assert_eq!(status_keyword(0x0abc), "unknown-status-0x0abc");
    }
}
