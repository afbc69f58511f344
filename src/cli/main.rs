use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use hades::config::Config;
use hades::console::Console;
use hades::session::{Outcome, Session};

#[derive(Parser, Debug)]
#[command(
    name = "hades",
    version,
    about = "Inspect, wipe and rewrite media metadata (EXIF/XMP/IPTC) through exiftool"
)]
struct Cli {
    /// File to edit (prompted for when omitted)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// exiftool executable to run
    #[arg(long, value_name = "FILE", default_value = "exiftool")]
    exiftool: PathBuf,

    /// Print the file's current metadata and exit
    #[arg(long = "show-metadata", requires = "path")]
    show_metadata: bool,

    /// Show the tag arguments instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Also print the metadata summary as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let config = Config {
        exiftool: cli.exiftool,
        dry_run: cli.dry_run,
        json: cli.json,
    };
    log::debug!(
        "Config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    if config.dry_run {
        log::info!("DRY RUN — the file will not be modified");
    }

    // The session blocks on stdin, so it runs off the async worker and races
    // against Ctrl-C.
    let path = cli.path;
    let show_only = cli.show_metadata;
    let session = tokio::task::spawn_blocking(move || run(&config, path, show_only));

    tokio::select! {
        joined = session => match joined {
            Ok(Ok(())) => ExitCode::SUCCESS,
            Ok(Err(e)) => {
                report(&e);
                ExitCode::FAILURE
            }
            Err(e) => {
                log::error!("Critical error: {e}");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!();
            log::warn!("Operation cancelled by user");
            // The blocking reader cannot be interrupted; leave without joining it.
            std::process::exit(0);
        }
    }
}

fn run(config: &Config, path: Option<PathBuf>, show_only: bool) -> Result<()> {
    let tool = config.tool();
    let session = Session::new(&tool, config);
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    if show_only {
        let path = path.context("--show-metadata needs a PATH")?;
        return session.show(&path, &mut console);
    }

    match session.run(path, &mut console)? {
        Outcome::Completed => log::info!("Exiting..."),
        Outcome::Cancelled => log::warn!("Operation cancelled by user"),
    }
    Ok(())
}

fn report(e: &anyhow::Error) {
    if let Some(hades::Error::ExifToolMissing { program }) = e.downcast_ref::<hades::Error>() {
        log::error!("ExifTool not found (tried `{program}`)");
        log::error!("Install it with:");
        log::error!("    Linux: sudo apt install libimage-exiftool-perl");
        log::error!("    macOS: brew install exiftool");
        log::error!("    Windows: download from https://exiftool.org/");
        return;
    }
    log::error!("{e:#}");
}
