use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// IPP `print-quality` enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub enum Quality {
    Draft = 3,
    Normal = 4,
    Best = 5,
}

impl Quality {
    pub fn as_ipp(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Quality::Draft => "draft",
            Quality::Normal => "normal",
            Quality::Best => "best",
        }
    }
}

impl TryFrom<i64> for Quality {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            3 => Ok(Quality::Draft),
            4 => Ok(Quality::Normal),
            5 => Ok(Quality::Best),
            quality => Err(Error::InvalidQuality { quality }),
        }
    }
}

impl From<Quality> for i32 {
    fn from(quality: Quality) -> Self {
        quality.as_ipp()
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ipp())
    }
}

/// Every setting that goes into a single print job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintOptions {
    /// e.g. "4x6.Borderless", "A4.Borderless", "A4"
    pub paper_size: String,
    /// "Photo", "Main", "Rear" or "Auto"
    pub tray: String,
    /// e.g. "photographic-glossy", "stationery"
    pub media_type: String,
    pub quality: Quality,
    /// Page-range notation, see [`crate::ipp_client::page_range::PageRange::parse`].
    pub page_range: String,
    pub copies: u32,
}

impl Default for PrintOptions {
    /// Borderless 4x6 photo on glossy paper in best quality.
    fn default() -> Self {
        PrintOptions {
            paper_size: "4x6.Borderless".to_string(),
            tray: "Photo".to_string(),
            media_type: "photographic-glossy".to_string(),
            quality: Quality::Best,
            page_range: "all".to_string(),
            copies: 1,
        }
    }
}

impl PrintOptions {
    /// A4 plain paper in draft quality, for test pages.
    pub fn test_page() -> Self {
        PrintOptions {
            paper_size: "A4".to_string(),
            tray: "Main".to_string(),
            media_type: "stationery".to_string(),
            quality: Quality::Draft,
            page_range: "all".to_string(),
            copies: 1,
        }
    }

    pub fn description(&self) -> String {
        format!(
            "{} on {} ({}, quality: {})",
            self.paper_size, self.media_type, self.tray, self.quality
        )
    }
}

/// Per-job changes applied on top of a resolved profile.
///
/// `None`, empty strings and zero numbers all mean "keep the profile's value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub page_range: Option<String>,
    pub quality: Option<i64>,
    pub paper_size: Option<String>,
    pub tray: Option<String>,
    pub media_type: Option<String>,
    pub copies: Option<u32>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.quality.unwrap_or(0) == 0
            && self.copies.unwrap_or(0) == 0
            && [&self.page_range, &self.paper_size, &self.tray, &self.media_type]
                .into_iter()
                .all(|field| non_empty(field).is_none())
    }

    /// Replace every field of `options` that this override sets.
    pub fn apply_to(&self, mut options: PrintOptions) -> Result<PrintOptions> {
        if let Some(quality) = self.quality.filter(|q| *q != 0) {
            options.quality = Quality::try_from(quality)?;
        }
        if let Some(page_range) = non_empty(&self.page_range) {
            options.page_range = page_range;
        }
        if let Some(paper_size) = non_empty(&self.paper_size) {
            options.paper_size = paper_size;
        }
        if let Some(tray) = non_empty(&self.tray) {
            options.tray = tray;
        }
        if let Some(media_type) = non_empty(&self.media_type) {
            options.media_type = media_type;
        }
        if let Some(copies) = self.copies.filter(|c| *c != 0) {
            options.copies = copies;
        }
        Ok(options)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

/// One row of the profile listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInfo {
    /// Dense numeric id, absent for profiles registered at runtime without one.
    pub id: Option<u32>,
    pub name: String,
    pub options: PrintOptions,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quality_accepts_only_three_to_five() {
        assert_eq!(Quality::try_from(3).unwrap(), Quality::Draft);
        assert_eq!(Quality::try_from(4).unwrap(), Quality::Normal);
        assert_eq!(Quality::try_from(5).unwrap(), Quality::Best);
        for bad in [0, 1, 2, 6, -4] {
            assert!(matches!(
                Quality::try_from(bad),
                Err(Error::InvalidQuality { quality }) if quality == bad
            ));
        }
    }

    #[test]
    fn quality_serializes_as_ipp_integer() {
        assert_eq!(serde_json::to_string(&Quality::Normal).unwrap(), "4");
        assert_eq!(serde_json::from_str::<Quality>("5").unwrap(), Quality::Best);
        assert!(serde_json::from_str::<Quality>("7").is_err());
    }

    #[test]
    fn defaults_match_photo_and_test_presets() {
        let photo = PrintOptions::default();
        assert_eq!(photo.paper_size, "4x6.Borderless");
        assert_eq!(photo.tray, "Photo");
        assert_eq!(photo.quality, Quality::Best);
        assert_eq!(photo.copies, 1);

        let test = PrintOptions::test_page();
        assert_eq!(test.description(), "A4 on stationery (Main, quality: 3)");
    }

    #[test]
    fn zero_values_do_not_override() {
        let overrides = Overrides {
            page_range: Some(String::new()),
            quality: Some(0),
            paper_size: Some(String::new()),
            tray: None,
            media_type: Some(String::new()),
            copies: Some(0),
        };
        assert!(overrides.is_empty());
        assert_eq!(overrides.apply_to(PrintOptions::test_page()).unwrap(), PrintOptions::test_page());
    }

    #[test]
    fn set_fields_replace_resolved_values() {
        let overrides = Overrides {
            page_range: Some("2:".into()),
            quality: Some(4),
            tray: Some("Rear".into()),
            copies: Some(3),
            ..Default::default()
        };
        assert!(!overrides.is_empty());
        let merged = overrides.apply_to(PrintOptions::default()).unwrap();
        assert_eq!(
            merged,
            PrintOptions {
                paper_size: "4x6.Borderless".into(),
                tray: "Rear".into(),
                media_type: "photographic-glossy".into(),
                quality: Quality::Normal,
                page_range: "2:".into(),
                copies: 3,
            }
        );
    }

    #[test]
    fn bad_quality_override_is_rejected() {
        let overrides = Overrides { quality: Some(9), ..Default::default() };
        assert!(matches!(
            overrides.apply_to(PrintOptions::default()),
            Err(Error::InvalidQuality { quality: 9 })
        ));
    }
}
