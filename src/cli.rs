use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use epson_print::profiles::Overrides;

// ///////////// //
// CLI interface //
// ///////////// //

/// epson-print - Print files with profile-based settings and check ink levels over IPP.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Printer URI (default from PRINTER_URI env var)
    #[arg(long, global = true)]
    pub printer: Option<String>,

    /// Request timeout, e.g. '10s' or '1m' (default from PRINTER_TIMEOUT env var, else 30s)
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Log protocol details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a file using a profile ID or name (see `list`).
    Print(PrintArgs),
    /// List all available print profiles.
    List,
    /// Test the IPP connection and show printer status and ink levels.
    Status {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// File to print
    pub file: PathBuf,

    /// Profile name or ID, `default` when omitted
    pub profile: Option<String>,

    /// Profile name or ID (alternative to positional)
    #[arg(short, long = "profile")]
    pub profile_flag: Option<String>,

    /// Page range: '1', '1-5', '2:' (from 2), ':5' (to 5)
    #[arg(long)]
    pub pages: Option<String>,

    /// Reject page ranges that cannot be parsed instead of printing all pages
    #[arg(long)]
    pub strict_pages: bool,

    /// Quality: 3 (draft), 4 (normal), 5 (best)
    #[arg(short, long)]
    pub quality: Option<i64>,

    /// Paper size override
    #[arg(long)]
    pub paper: Option<String>,

    /// Tray override: Photo, Main, Rear, Auto
    #[arg(long)]
    pub tray: Option<String>,

    /// Media type override
    #[arg(long)]
    pub media: Option<String>,

    /// Number of copies
    #[arg(long)]
    pub copies: Option<u32>,
}

impl PrintArgs {
    /// `--profile` wins over the positional profile.
    pub fn profile(&self) -> &str {
        self.profile_flag
            .as_deref()
            .filter(|profile| !profile.is_empty())
            .or(self.profile.as_deref())
            .unwrap_or("default")
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            page_range: self.pages.clone(),
            quality: self.quality,
            paper_size: self.paper.clone(),
            tray: self.tray.clone(),
            media_type: self.media.clone(),
            copies: self.copies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_args(args: &[&str]) -> PrintArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Print(args) => args,
            other => panic!("expected print, got {other:?}"),
        }
    }

    #[test]
    fn profile_precedence() {
        assert_eq!(print_args(&["epson-print", "print", "a.pdf"]).profile(), "default");
        assert_eq!(print_args(&["epson-print", "print", "a.pdf", "14"]).profile(), "14");
        assert_eq!(print_args(&["epson-print", "print", "a.pdf", "14", "-p", "7"]).profile(), "7");
    }

    #[test]
    fn overrides_from_flags() {
        let args = print_args(&[
            "epson-print", "print", "a.pdf", "7", "--quality", "3", "--pages", "1-5", "--tray", "Rear",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.quality, Some(3));
        assert_eq!(overrides.page_range.as_deref(), Some("1-5"));
        assert_eq!(overrides.tray.as_deref(), Some("Rear"));
        assert_eq!(overrides.paper_size, None);
    }

    #[test]
    fn global_printer_flag() {
        let cli = Cli::try_parse_from(["epson-print", "status", "--json", "--printer", "ipp://p/ipp/print"]).unwrap();
        assert_eq!(cli.printer.as_deref(), Some("ipp://p/ipp/print"));
        assert!(matches!(cli.command, Commands::Status { json: true }));
    }

    #[test]
    fn timeout_flag_uses_human_durations() {
        let cli = Cli::try_parse_from(["epson-print", "list", "--timeout", "1m 30s"]).unwrap();
        assert_eq!(cli.timeout, Some(Duration::from_secs(90)));
        assert!(Cli::try_parse_from(["epson-print", "list", "--timeout", "soon"]).is_err());
    }
}
