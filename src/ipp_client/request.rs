use std::path::Path;

use ipp::prelude::*;
use log::debug;

use crate::error::{Error, Result};
use crate::profiles::PrintOptions;

use super::attributes::*;
use super::page_range::PageRange;

/// Start a request carrying the operation attributes every operation needs.
pub(crate) fn new_request(operation: Operation, printer_uri: &str) -> IppRequestResponse {
    let mut request = IppRequestResponse::new(IppVersion::v1_1(), operation, None);
    let attributes = request.attributes_mut();
    attributes.add(
        DelimiterTag::OperationAttributes,
        IppAttribute::new(ATTRIBUTES_CHARSET, IppValue::Charset(CHARSET.to_string())),
    );
    attributes.add(
        DelimiterTag::OperationAttributes,
        IppAttribute::new(ATTRIBUTES_NATURAL_LANGUAGE, IppValue::NaturalLanguage(NATURAL_LANGUAGE.to_string())),
    );
    attributes.add(
        DelimiterTag::OperationAttributes,
        IppAttribute::new(PRINTER_URI, IppValue::Uri(printer_uri.to_string())),
    );
    request
}

/// MIME type for `document-format`, from the document's file name.
pub fn document_format(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("tif" | "tiff") => "image/tiff",
        Some("txt") => "text/plain",
        Some("ps") => "application/postscript",
        _ => PDF_FORMAT,
    }
}

/// Encode a Print-Job request for `document`, followed by the document itself.
///
/// # Arguments
///
/// * `printer_uri`: Printer URI, sent as `printer-uri`
/// * `document`: Raw document bytes, appended after the attribute block
/// * `job_name`: File name shown in the printer queue
/// * `options`: Resolved print settings
/// * `user`: Sent as `requesting-user-name`
///
/// returns: Result<Vec<u8>, Error>
pub fn build_submit_request(
    printer_uri: &str,
    document: &[u8],
    job_name: &str,
    options: &PrintOptions,
    user: &str,
) -> Result<Vec<u8>> {
    let copies = i32::try_from(options.copies)
        .ok()
        .filter(|copies| *copies >= 1)
        .ok_or(Error::InvalidCopies { copies: options.copies })?;

    let mut request = new_request(Operation::PrintJob, printer_uri);
    let attributes = request.attributes_mut();

    for attribute in [
        IppAttribute::new(REQUESTING_USER_NAME, IppValue::NameWithoutLanguage(user.to_string())),
        IppAttribute::new(JOB_NAME, IppValue::NameWithoutLanguage(job_name.to_string())),
        IppAttribute::new(DOCUMENT_FORMAT, IppValue::MimeMediaType(document_format(job_name).to_string())),
    ] {
        attributes.add(DelimiterTag::OperationAttributes, attribute);
    }

    for attribute in [
        IppAttribute::new(PAGE_SIZE, IppValue::Keyword(options.paper_size.clone())),
        IppAttribute::new(INPUT_SLOT, IppValue::Keyword(options.tray.clone())),
        IppAttribute::new(MEDIA, IppValue::Keyword(options.media_type.clone())),
        IppAttribute::new(PRINT_QUALITY, IppValue::Integer(options.quality.as_ipp())),
        IppAttribute::new(COPIES, IppValue::Integer(copies)),
        IppAttribute::new(FIT_TO_PAGE, IppValue::Boolean(true)),
    ] {
        attributes.add(DelimiterTag::JobAttributes, attribute);
    }

    if !PageRange::is_default_notation(&options.page_range) {
        let pages = PageRange::parse(&options.page_range);
        debug!("Page range '{}' resolved to {}", options.page_range, pages);
        attributes.add(
            DelimiterTag::JobAttributes,
            IppAttribute::new(
                PAGE_RANGES,
                // Both bounds are capped at i32::MAX by the parser.
                IppValue::RangeOfInteger { min: pages.lower() as i32, max: pages.upper() as i32 },
            ),
        );
    }

    let mut bytes = request.to_bytes().to_vec();
    bytes.extend_from_slice(document);
    Ok(bytes)
}
