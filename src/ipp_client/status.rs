use std::collections::HashMap;

use ipp::prelude::*;
use log::{debug, error};

use crate::error::{Error, Result};

use super::attributes::*;
use super::models::{InkLevel, PrinterLifecycle, PrinterSnapshot};
use super::request::new_request;
use super::response::{decode, is_accepted, status_code, status_keyword};

/// Encode a Get-Printer-Attributes request asking for every attribute.
pub fn build_status_request(printer_uri: &str, user: &str) -> Vec<u8> {
    let mut request = new_request(Operation::GetPrinterAttributes, printer_uri);
    let attributes = request.attributes_mut();
    attributes.add(
        DelimiterTag::OperationAttributes,
        IppAttribute::new(REQUESTING_USER_NAME, IppValue::NameWithoutLanguage(user.to_string())),
    );
    attributes.add(
        DelimiterTag::OperationAttributes,
        IppAttribute::new(REQUESTED_ATTRIBUTES, IppValue::Keyword("all".to_string())),
    );
    request.to_bytes().to_vec()
}

/// Decode a Get-Printer-Attributes response into a snapshot.
pub fn decode_snapshot(bytes: &[u8]) -> Result<PrinterSnapshot> {
    let response = decode(bytes)?;
    let code = status_code(&response);
    if !is_accepted(code) {
        let status = status_keyword(code).into_owned();
        error!("Get-Printer-Attributes failed: {status}");
        return Err(Error::Protocol { status, job_id: 0 });
    }

    let printer = response
        .attributes()
        .groups_of(DelimiterTag::PrinterAttributes)
        .next()
        .map(|group| group.attributes().clone())
        .unwrap_or_default();
    debug!("Received {} printer attributes", printer.len());

    Ok(snapshot_from_attributes(&printer))
}

pub fn snapshot_from_attributes(attributes: &HashMap<String, IppAttribute>) -> PrinterSnapshot {
    let state_message = text(attributes, PRINTER_STATE_MESSAGE);
    PrinterSnapshot {
        name: text(attributes, PRINTER_INFO),
        model: text(attributes, PRINTER_MAKE_AND_MODEL),
        state: lifecycle(attributes),
        state_reasons: text(attributes, PRINTER_STATE_REASONS),
        state_message: (!state_message.is_empty()).then_some(state_message),
        ink_levels: ink_levels(attributes),
    }
}

/// Individual values of a possibly multi-valued attribute.
fn values(value: &IppValue) -> Vec<&IppValue> {
    match value {
        IppValue::Array(items) => items.iter().collect(),
        single => vec![single],
    }
}

fn first_value<'a>(attributes: &'a HashMap<String, IppAttribute>, name: &str) -> Option<&'a IppValue> {
    attributes.get(name).and_then(|attribute| values(attribute.value()).into_iter().next())
}

fn integer(value: &IppValue) -> Option<i32> {
    match value {
        IppValue::Integer(n) | IppValue::Enum(n) => Some(*n),
        _ => None,
    }
}

fn text(attributes: &HashMap<String, IppAttribute>, name: &str) -> String {
    first_value(attributes, name).map(|value| value.to_string()).unwrap_or_default()
}

fn lifecycle(attributes: &HashMap<String, IppAttribute>) -> PrinterLifecycle {
    first_value(attributes, PRINTER_STATE)
        .and_then(integer)
        .map(PrinterLifecycle::from_code)
        .unwrap_or(PrinterLifecycle::Unknown(None))
}

/// Zip the three parallel marker lists; nothing at all unless all three exist.
fn ink_levels(attributes: &HashMap<String, IppAttribute>) -> Vec<InkLevel> {
    let (Some(names), Some(levels), Some(colors)) = (
        attributes.get(MARKER_NAMES),
        attributes.get(MARKER_LEVELS),
        attributes.get(MARKER_COLORS),
    ) else {
        return Vec::new();
    };

    values(names.value())
        .into_iter()
        .zip(values(levels.value()))
        .zip(values(colors.value()))
        .map(|((name, level), color)| InkLevel {
            name: name.to_string(),
            level: integer(level).unwrap_or(0),
            color: color.to_string(),
        })
        .collect()
}
