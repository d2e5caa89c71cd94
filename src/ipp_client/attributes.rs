// IPP attribute names as they appear on the wire. The job-template names
// `PageSize` and `InputSlot` are the CUPS/PPD spellings Epson drivers accept.

pub const ATTRIBUTES_CHARSET: &str = "attributes-charset";
pub const ATTRIBUTES_NATURAL_LANGUAGE: &str = "attributes-natural-language";
pub const PRINTER_URI: &str = "printer-uri";
pub const REQUESTING_USER_NAME: &str = "requesting-user-name";
pub const REQUESTED_ATTRIBUTES: &str = "requested-attributes";
pub const JOB_NAME: &str = "job-name";
pub const DOCUMENT_FORMAT: &str = "document-format";

pub const PAGE_SIZE: &str = "PageSize";
pub const INPUT_SLOT: &str = "InputSlot";
pub const MEDIA: &str = "media";
pub const PRINT_QUALITY: &str = "print-quality";
pub const COPIES: &str = "copies";
pub const FIT_TO_PAGE: &str = "fit-to-page";
pub const PAGE_RANGES: &str = "page-ranges";

pub const JOB_ID: &str = "job-id";

pub const PRINTER_INFO: &str = "printer-info";
pub const PRINTER_MAKE_AND_MODEL: &str = "printer-make-and-model";
pub const PRINTER_STATE: &str = "printer-state";
pub const PRINTER_STATE_REASONS: &str = "printer-state-reasons";
pub const PRINTER_STATE_MESSAGE: &str = "printer-state-message";
pub const MARKER_NAMES: &str = "marker-names";
pub const MARKER_LEVELS: &str = "marker-levels";
pub const MARKER_COLORS: &str = "marker-colors";

pub const CHARSET: &str = "utf-8";
pub const NATURAL_LANGUAGE: &str = "en-US";
pub const PDF_FORMAT: &str = "application/pdf";
