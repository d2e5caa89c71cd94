//! Canned printer responses and a recording transport for tests.

use std::cell::RefCell;

use ipp::model::StatusCode;
use ipp::prelude::*;
use url::Url;

use crate::error::Result;

use super::transport::Transport;

/// Builds an encoded IPP/1.1 response, attribute by attribute.
pub(crate) struct WireMessage {
    response: IppRequestResponse,
    group: DelimiterTag,
}

impl WireMessage {
    /// Response carrying the raw `status` code and the mandatory operation attributes.
    pub fn new(status: u16) -> Self {
        let mut response = IppRequestResponse::new_response(IppVersion::v1_1(), StatusCode::SuccessfulOk, 1);
        response.header_mut().operation_or_status = status;
        WireMessage { response, group: DelimiterTag::OperationAttributes }
    }

    pub fn job_group(mut self) -> Self {
        self.group = DelimiterTag::JobAttributes;
        self
    }

    pub fn printer_group(mut self) -> Self {
        self.group = DelimiterTag::PrinterAttributes;
        self
    }

    /// One value is sent as is, more than one as a multi-valued attribute.
    pub fn values(mut self, name: &str, mut values: Vec<IppValue>) -> Self {
        let value = if values.len() == 1 { values.remove(0) } else { IppValue::Array(values) };
        self.response.attributes_mut().add(self.group, IppAttribute::new(name, value));
        self
    }

    pub fn integer(self, name: &str, values: &[i32]) -> Self {
        self.values(name, values.iter().copied().map(IppValue::Integer).collect())
    }

    pub fn enumeration(self, name: &str, value: i32) -> Self {
        self.values(name, vec![IppValue::Enum(value)])
    }

    pub fn text(self, name: &str, values: &[&str]) -> Self {
        self.values(name, values.iter().map(|v| IppValue::TextWithoutLanguage(v.to_string())).collect())
    }

    pub fn name(self, name: &str, values: &[&str]) -> Self {
        self.values(name, values.iter().map(|v| IppValue::NameWithoutLanguage(v.to_string())).collect())
    }

    pub fn keyword(self, name: &str, values: &[&str]) -> Self {
        self.values(name, values.iter().map(|v| IppValue::Keyword(v.to_string())).collect())
    }

    pub fn finish(self) -> Vec<u8> {
        self.response.to_bytes().to_vec()
    }
}

/// Records every request body and answers with a canned response.
pub(crate) struct MockTransport {
    response: Vec<u8>,
    pub requests: RefCell<Vec<(Url, Vec<u8>)>>,
}

impl MockTransport {
    pub fn answering(response: Vec<u8>) -> Self {
        MockTransport { response, requests: RefCell::new(Vec::new()) }
    }
}

impl Transport for MockTransport {
    fn post(&self, endpoint: &Url, body: Vec<u8>) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push((endpoint.clone(), body));
        Ok(self.response.clone())
    }
}
