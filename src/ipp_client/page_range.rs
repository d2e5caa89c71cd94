use std::fmt;

use log::warn;
use serde_derive::Serialize;

use crate::error::{Error, Result};

/// Inclusive page interval sent as IPP `page-ranges` (rangeOfInteger).
///
/// Always satisfies `1 <= lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRange {
    lower: u32,
    upper: u32,
}

impl PageRange {
    /// Upper bound standing in for "to the end of the document". Documents
    /// longer than this many pages are cut off by open-ended ranges.
    pub const OPEN_END: u32 = 999;

    /// Largest page number an IPP integer can carry. Open-ended ranges that
    /// start past [`PageRange::OPEN_END`] run up to this instead.
    pub const MAX_PAGE: u32 = i32::MAX as u32;

    pub const ALL: PageRange = PageRange { lower: 1, upper: Self::OPEN_END };

    /// `None` unless `1 <= lower <= upper <= MAX_PAGE`.
    pub fn new(lower: u32, upper: u32) -> Option<Self> {
        (lower >= 1 && lower <= upper && upper <= Self::MAX_PAGE).then_some(PageRange { lower, upper })
    }

    pub fn single(page: u32) -> Option<Self> {
        Self::new(page, page)
    }

    pub fn lower(&self) -> u32 {
        self.lower
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }

    pub fn is_open_ended(&self) -> bool {
        self.upper == Self::OPEN_END || self.upper == Self::MAX_PAGE
    }

    /// True for the notations that mean "print everything": empty and `all`.
    pub fn is_default_notation(notation: &str) -> bool {
        let notation = notation.trim();
        notation.is_empty() || notation.eq_ignore_ascii_case("all")
    }

    /// Turn page-range notation into a numeric range.
    ///
    /// Accepted forms, tried in this order:
    ///
    /// * `"3"`: a single page
    /// * `"1-5"`: pages 1 through 5
    /// * `":5"`: the first five pages
    /// * `"5:"`: page 5 to the end
    /// * `"1,3,5"`: only the first listed page is printed, IPP ranges cannot
    ///   express gaps
    ///
    /// Anything else, including `"all"` and the empty string, selects every
    /// page. This never fails; use [`PageRange::parse_strict`] to reject typos.
    pub fn parse(notation: &str) -> PageRange {
        Self::parse_notation(notation).unwrap_or_else(|| {
            if !Self::is_default_notation(notation) {
                warn!("Unrecognised page range '{notation}', printing all pages");
            }
            Self::ALL
        })
    }

    /// Like [`PageRange::parse`], but unrecognised notation is an error
    /// instead of silently meaning "all pages".
    pub fn parse_strict(notation: &str) -> Result<PageRange> {
        if Self::is_default_notation(notation) {
            return Ok(Self::ALL);
        }
        Self::parse_notation(notation).ok_or_else(|| Error::InvalidPageRange { notation: notation.to_string() })
    }

    fn parse_notation(notation: &str) -> Option<PageRange> {
        let notation = notation.trim();

        if !notation.contains(['-', ':', ',']) {
            if let Some(page) = positive(notation) {
                return Self::single(page);
            }
        }

        if notation.contains('-') {
            if let [lower, upper] = notation.split('-').collect::<Vec<_>>().as_slice() {
                if let (Some(lower), Some(upper)) = (positive(lower), positive(upper)) {
                    if let Some(range) = Self::new(lower, upper) {
                        return Some(range);
                    }
                }
            }
        }

        if notation.contains(':') {
            if let [lower, upper] = notation.split(':').collect::<Vec<_>>().as_slice() {
                if lower.is_empty() {
                    if let Some(upper) = positive(upper) {
                        return Self::new(1, upper);
                    }
                }
                if upper.is_empty() {
                    if let Some(lower) = positive(lower) {
                        let upper = if lower > Self::OPEN_END { Self::MAX_PAGE } else { Self::OPEN_END };
                        return Some(PageRange { lower, upper });
                    }
                }
            }
        }

        if notation.contains(',') {
            if let Some(first) = notation.split(',').next().and_then(positive) {
                warn!("Page list '{notation}' cannot be sent as one IPP range, printing only page {first}");
                return Self::single(first);
            }
        }

        None
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_open_ended() {
            write!(f, "{}-end", self.lower)
        } else {
            write!(f, "{}-{}", self.lower, self.upper)
        }
    }
}

fn positive(text: &str) -> Option<u32> {
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0 && *n <= PageRange::MAX_PAGE)
}
