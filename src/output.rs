use snafu::ResultExt;

use crate::error::{JsonSnafu, Result};
use crate::ipp_client::PrinterSnapshot;
use crate::profiles::builtin::CATEGORIES;
use crate::profiles::{PrintOptions, ProfileInfo};

const BAR_WIDTH: i32 = 20;

/// Short display name for the media keywords the built-in profiles use.
pub fn short_media_name(media: &str) -> &str {
    match media {
        "photographic-glossy" => "Glossy",
        "photographic-matte" => "Matte",
        "photographic-semi-gloss" => "Semi-gloss",
        "stationery" => "Plain",
        "stationery-coated" => "Coated",
        other => other,
    }
}

/// `level` percent as a 20 cell bar.
pub fn ink_bar(level: i32) -> String {
    let filled = (level.clamp(0, 100) * BAR_WIDTH / 100) as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH as usize - filled));
    bar
}

pub fn snapshot_report(snapshot: &PrinterSnapshot) -> String {
    let mut out = String::new();
    out.push_str("--- PRINTER INFORMATION ---\n");
    out.push_str(&format!("Printer Info: {}\n", snapshot.name));
    out.push_str(&format!("Model: {}\n", snapshot.model));

    out.push_str("\n--- PRINTER STATUS ---\n");
    out.push_str(&format!("State: {}\n", snapshot.state));
    out.push_str(&format!("State Reasons: {}\n", snapshot.state_reasons));
    if let Some(message) = &snapshot.state_message {
        out.push_str(&format!("Message: {message}\n"));
    }

    out.push_str("\n--- INK LEVELS ---\n");
    for ink in &snapshot.ink_levels {
        out.push_str(&format!("{:<20} [{}] {:>3}% ({})\n", ink.name, ink_bar(ink.level), ink.level, ink.color));
    }
    out
}

pub fn snapshot_json(snapshot: &PrinterSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context(JsonSnafu)
}

fn profile_row(out: &mut String, profile: &ProfileInfo) {
    let id = profile.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
    let options = &profile.options;
    out.push_str(&format!(
        "  {:<2}  {:<35}  {}, {}, {}, Quality {}\n",
        id,
        profile.name,
        options.paper_size,
        options.tray,
        short_media_name(&options.media_type),
        options.quality
    ));
}

/// Profiles grouped under the built-in category headings. Profiles outside
/// every category (runtime registrations) are listed last under "Custom".
pub fn profile_listing(profiles: &[ProfileInfo]) -> String {
    let mut out = String::from("Available Print Profiles:\n========================\n");

    for (index, (heading, ids)) in CATEGORIES.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("\n{heading}:\n"));
        for profile in profiles.iter().filter(|p| p.id.is_some_and(|id| ids.contains(&id))) {
            profile_row(&mut out, profile);
        }
    }

    let custom: Vec<&ProfileInfo> = profiles
        .iter()
        .filter(|p| !p.id.is_some_and(|id| CATEGORIES.iter().any(|(_, ids)| ids.contains(&id))))
        .collect();
    if !custom.is_empty() {
        out.push_str("\n\nCustom:\n");
        for profile in custom {
            profile_row(&mut out, profile);
        }
    }

    out.push_str(
        "\nUsage:\n  \
         epson-print print <file> <profile-id-or-name>\n\n\
         Examples:\n  \
         epson-print print document.pdf 14                          # Use profile ID 14\n  \
         epson-print print photo.jpg photo-4x6-borderless-glossy    # Use full name\n  \
         epson-print print document.pdf 14 --pages \"2:\"             # Pages 2 to end\n  \
         epson-print print calendar.pdf 7 --quality 3 --pages \"1-5\" # Override settings\n",
    );
    out
}

pub fn job_summary(file: &str, profile: &str, options: &PrintOptions) -> String {
    let mut out = String::new();
    out.push_str("=========================================\n");
    out.push_str("PDF PRINT\n");
    out.push_str("=========================================\n");
    out.push_str(&format!("File:        {file}\n"));
    out.push_str(&format!("Profile:     {profile}\n"));
    out.push_str(&format!("Paper size:  {}\n", options.paper_size));
    out.push_str(&format!("Tray:        {}\n", options.tray));
    out.push_str(&format!("Media type:  {}\n", options.media_type));
    out.push_str(&format!("Quality:     {} (3=draft, 4=normal, 5=best)\n", options.quality));
    out.push_str(&format!("Pages:       {}\n", options.page_range));
    out.push_str(&format!("Copies:      {}\n", options.copies));
    out.push_str("=========================================\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipp_client::{InkLevel, PrinterLifecycle};
    use crate::profiles::ProfileRegistry;
    use pretty_assertions::assert_eq;

    fn snapshot(message: Option<&str>) -> PrinterSnapshot {
        PrinterSnapshot {
            name: "Office".into(),
            model: "EPSON ET-8550 Series".into(),
            state: PrinterLifecycle::Processing,
            state_reasons: "none".into(),
            state_message: message.map(str::to_string),
            ink_levels: vec![InkLevel { name: "Black".into(), level: 50, color: "#000000".into() }],
        }
    }

    #[test]
    fn bars() {
        assert_eq!(ink_bar(0), "░".repeat(20));
        assert_eq!(ink_bar(100), "█".repeat(20));
        assert_eq!(ink_bar(50), format!("{}{}", "█".repeat(10), "░".repeat(10)));
        assert_eq!(ink_bar(-1), "░".repeat(20));
        assert_eq!(ink_bar(250), "█".repeat(20));
    }

    #[test]
    fn report_includes_message_only_when_present() {
        let report = snapshot_report(&snapshot(None));
        assert!(report.contains("State: Processing"));
        assert!(!report.contains("Message:"));
        assert!(report.contains(&format!("Black                [{}]  50% (#000000)", ink_bar(50))));

        assert!(snapshot_report(&snapshot(Some("Low ink"))).contains("Message: Low ink"));
    }

    #[test]
    fn json_report() {
        let json: serde_json::Value = serde_json::from_str(&snapshot_json(&snapshot(None)).unwrap()).unwrap();
        assert_eq!(json["model"], "EPSON ET-8550 Series");
        assert_eq!(json["state"], "Processing");
        assert_eq!(json["state_reasons"], "none");
        assert!(json.get("state_message").is_none());
    }

    #[test]
    fn listing_groups_builtins_and_custom_profiles() {
        let registry = ProfileRegistry::new();
        registry.register("my-letter", PrintOptions::test_page());
        let listing = profile_listing(&registry.list());

        assert!(listing.contains("4x6\" Borderless:"));
        assert!(listing.contains(
            "  14  photo-a3plus-borderless-matte        13x19.Borderless, Rear, Matte, Quality 5"
        ));
        assert!(listing.contains("Custom:\n  -   my-letter"));
    }

    #[test]
    fn listing_without_custom_profiles_has_no_custom_section() {
        let listing = profile_listing(&ProfileRegistry::new().list());
        assert!(!listing.contains("Custom:"));
    }

    #[test]
    fn media_names() {
        assert_eq!(short_media_name("stationery-coated"), "Coated");
        assert_eq!(short_media_name("transparency"), "transparency");
    }
}
