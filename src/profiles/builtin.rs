use std::ops::RangeInclusive;

use super::models::{PrintOptions, Quality};

pub const DEFAULT: &str = "default";

pub const PHOTO_4X6_BORDERLESS_GLOSSY: &str = "photo-4x6-borderless-glossy";
pub const PHOTO_4X6_BORDERLESS_MATTE: &str = "photo-4x6-borderless-matte";
pub const PHOTO_4X6_BORDERLESS_SEMIGLOSS: &str = "photo-4x6-borderless-semigloss";

pub const PHOTO_5X7_BORDERLESS_GLOSSY: &str = "photo-5x7-borderless-glossy";
pub const PHOTO_5X7_BORDERLESS_MATTE: &str = "photo-5x7-borderless-matte";
pub const PHOTO_5X7_BORDERLESS_SEMIGLOSS: &str = "photo-5x7-borderless-semigloss";

pub const PHOTO_A4_BORDERLESS_GLOSSY: &str = "photo-a4-borderless-glossy";
pub const PHOTO_A4_BORDERLESS_MATTE: &str = "photo-a4-borderless-matte";
pub const PHOTO_A4_BORDERLESS_SEMIGLOSS: &str = "photo-a4-borderless-semigloss";

pub const PHOTO_A3_BORDERLESS_GLOSSY: &str = "photo-a3-borderless-glossy";
pub const PHOTO_A3_BORDERLESS_MATTE: &str = "photo-a3-borderless-matte";
pub const PHOTO_A3_BORDERLESS_SEMIGLOSS: &str = "photo-a3-borderless-semigloss";

pub const PHOTO_A3PLUS_BORDERLESS_GLOSSY: &str = "photo-a3plus-borderless-glossy";
pub const PHOTO_A3PLUS_BORDERLESS_MATTE: &str = "photo-a3plus-borderless-matte";
pub const PHOTO_A3PLUS_BORDERLESS_SEMIGLOSS: &str = "photo-a3plus-borderless-semigloss";

pub const DOCUMENT_DRAFT: &str = "document-draft";
pub const DOCUMENT_NORMAL: &str = "document-normal";
pub const DOCUMENT_BEST: &str = "document-best";

const GLOSSY: &str = "photographic-glossy";
const MATTE: &str = "photographic-matte";
const SEMI_GLOSS: &str = "photographic-semi-gloss";
const PLAIN: &str = "stationery";
const COATED: &str = "stationery-coated";

/// A profile shipped with the binary. `id` is its position in [`BUILTIN_PROFILES`].
#[derive(Debug, Clone, Copy)]
pub struct BuiltinProfile {
    pub id: u32,
    pub name: &'static str,
    pub paper_size: &'static str,
    pub tray: &'static str,
    pub media_type: &'static str,
    pub quality: Quality,
}

impl BuiltinProfile {
    const fn new(
        id: u32,
        name: &'static str,
        paper_size: &'static str,
        tray: &'static str,
        media_type: &'static str,
        quality: Quality,
    ) -> Self {
        BuiltinProfile { id, name, paper_size, tray, media_type, quality }
    }

    pub fn options(&self) -> PrintOptions {
        PrintOptions {
            paper_size: self.paper_size.to_string(),
            tray: self.tray.to_string(),
            media_type: self.media_type.to_string(),
            quality: self.quality,
            page_range: "all".to_string(),
            copies: 1,
        }
    }
}

// A3 and A3+ only feed from the rear tray.
pub const BUILTIN_PROFILES: &[BuiltinProfile] = &[
    BuiltinProfile::new(0, DEFAULT, "A4", "Main", PLAIN, Quality::Draft),
    BuiltinProfile::new(1, PHOTO_4X6_BORDERLESS_GLOSSY, "4x6.Borderless", "Photo", GLOSSY, Quality::Best),
    BuiltinProfile::new(2, PHOTO_4X6_BORDERLESS_MATTE, "4x6.Borderless", "Photo", MATTE, Quality::Best),
    BuiltinProfile::new(3, PHOTO_4X6_BORDERLESS_SEMIGLOSS, "4x6.Borderless", "Photo", SEMI_GLOSS, Quality::Best),
    BuiltinProfile::new(4, PHOTO_5X7_BORDERLESS_GLOSSY, "5x7.Borderless", "Photo", GLOSSY, Quality::Best),
    BuiltinProfile::new(5, PHOTO_5X7_BORDERLESS_MATTE, "5x7.Borderless", "Photo", MATTE, Quality::Best),
    BuiltinProfile::new(6, PHOTO_5X7_BORDERLESS_SEMIGLOSS, "5x7.Borderless", "Photo", SEMI_GLOSS, Quality::Best),
    BuiltinProfile::new(7, PHOTO_A4_BORDERLESS_GLOSSY, "A4.Borderless", "Auto", GLOSSY, Quality::Best),
    BuiltinProfile::new(8, PHOTO_A4_BORDERLESS_MATTE, "A4.Borderless", "Auto", MATTE, Quality::Best),
    BuiltinProfile::new(9, PHOTO_A4_BORDERLESS_SEMIGLOSS, "A4.Borderless", "Auto", SEMI_GLOSS, Quality::Best),
    BuiltinProfile::new(10, PHOTO_A3_BORDERLESS_GLOSSY, "A3.Borderless", "Rear", GLOSSY, Quality::Best),
    BuiltinProfile::new(11, PHOTO_A3_BORDERLESS_MATTE, "A3.Borderless", "Rear", MATTE, Quality::Best),
    BuiltinProfile::new(12, PHOTO_A3_BORDERLESS_SEMIGLOSS, "A3.Borderless", "Rear", SEMI_GLOSS, Quality::Best),
    BuiltinProfile::new(13, PHOTO_A3PLUS_BORDERLESS_GLOSSY, "13x19.Borderless", "Rear", GLOSSY, Quality::Best),
    BuiltinProfile::new(14, PHOTO_A3PLUS_BORDERLESS_MATTE, "13x19.Borderless", "Rear", MATTE, Quality::Best),
    BuiltinProfile::new(15, PHOTO_A3PLUS_BORDERLESS_SEMIGLOSS, "13x19.Borderless", "Rear", SEMI_GLOSS, Quality::Best),
    BuiltinProfile::new(16, DOCUMENT_DRAFT, "A4", "Main", PLAIN, Quality::Draft),
    BuiltinProfile::new(17, DOCUMENT_NORMAL, "A4", "Main", PLAIN, Quality::Normal),
    BuiltinProfile::new(18, DOCUMENT_BEST, "A4", "Main", COATED, Quality::Best),
];

/// Headings used when listing profiles, with the id span each one covers.
pub const CATEGORIES: &[(&str, RangeInclusive<u32>)] = &[
    ("Default", 0..=0),
    ("4x6\" Borderless", 1..=3),
    ("5x7\" Borderless", 4..=6),
    ("A4 Borderless", 7..=9),
    ("A3 Borderless", 10..=12),
    ("A3+ Borderless (13x19\")", 13..=15),
    ("Documents", 16..=18),
];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_PROFILES.iter().any(|profile| profile.name == name)
}
