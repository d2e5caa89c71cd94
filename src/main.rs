use chrono::Local;
use clap::Parser;
use log::{debug, LevelFilter};

use epson_print::config::load_config;
use epson_print::ipp_client::{PageRange, PrinterClient};
use epson_print::output;
use epson_print::profiles::ProfileRegistry;
use epson_print::Result;

use cli::{Cli, Commands, PrintArgs};

mod cli;

#[snafu::report]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = colog::default_builder();
    if let Some(level) = log_level(cli.verbose, std::env::var_os("RUST_LOG").is_some()) {
        logger.filter_level(level);
    }
    logger.init();

    let registry = ProfileRegistry::new();

    match &cli.command {
        Commands::List => {
            print!("{}", output::profile_listing(&registry.list()));
            Ok(())
        }
        Commands::Print(args) => print_file(&cli, args, &registry),
        Commands::Status { json } => show_status(&cli, *json),
    }
}

/// `--verbose` forces Debug; otherwise a set `RUST_LOG` is left to colog and
/// everything else falls back to Warn.
fn log_level(verbose: bool, rust_log_set: bool) -> Option<LevelFilter> {
    match (verbose, rust_log_set) {
        (true, _) => Some(LevelFilter::Debug),
        (false, true) => None,
        (false, false) => Some(LevelFilter::Warn),
    }
}

fn print_file(cli: &Cli, args: &PrintArgs, registry: &ProfileRegistry) -> Result<()> {
    let settings = load_config(cli.printer.clone(), cli.timeout)?;
    let client = PrinterClient::from_settings(&settings)?;

    let profile = args.profile();
    let options = registry.resolve_with_overrides(profile, &args.overrides())?;
    if args.strict_pages {
        PageRange::parse_strict(&options.page_range)?;
    }

    println!("{}", output::job_summary(&args.file.display().to_string(), profile, &options));

    let job_id = client.print_file(&args.file, &options)?.into_result()?;
    println!("✓ Print job sent successfully! (Job ID: {job_id})");
    Ok(())
}

fn show_status(cli: &Cli, json: bool) -> Result<()> {
    let settings = load_config(cli.printer.clone(), cli.timeout)?;
    let client = PrinterClient::from_settings(&settings)?;
    debug!("Querying {}", client.printer_uri());

    if !json {
        println!("=============================================");
        println!("Epson ET-8550 IPP Connection Test");
        println!("=============================================");
        println!("Testing connection to: {}\n", client.printer_uri());
    }

    let snapshot = client.query_status()?;

    if json {
        println!("{}", output::snapshot_json(&snapshot)?);
    } else {
        print!("{}", output::snapshot_report(&snapshot));
        println!("\nQueried at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
        println!("✓ Connection successful!");
    }
    Ok(())
}
