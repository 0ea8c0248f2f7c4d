use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use px2rem::{ConvertOptions, Coordinator};

/// Converts pixel values to rem in CSS files
#[derive(Parser, Debug)]
#[command(name = "px2rem", version, about)]
struct Cli {
    /// Directory to search recursively for .css files
    directory: PathBuf,

    /// Convert on a fixed pool of N worker threads instead of one task per file (0 = CPU count)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Print the run statistics as JSON after the summary
    #[arg(long)]
    json: bool,

    /// Never draw a progress bar
    #[arg(long)]
    no_progress: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    debug!("Parsed arguments: {:?}", cli);

    let options = ConvertOptions {
        parallel_threads: cli.jobs,
        show_progress: !cli.no_progress,
    };

    let stats = Coordinator::new(options)
        .convert_directory(&cli.directory)
        .await
        .context("error getting CSS files")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        println!("{}", json);
    }

    Ok(())
}
