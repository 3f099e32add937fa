use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use locomo_cli::commands::{self, Context};
use locomo_cli::config;
use locomo_export::ReportFormat;

#[derive(Parser)]
#[command(name = "locomo", version, about = "Locomotive syndrome self-check")]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Log at info level instead of warn. Ignored when RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the three tests and write the report.
    Check {
        /// Also send the result to the configured endpoint.
        #[arg(long)]
        send: bool,
        /// Directory for the session and report files.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render a report from a saved session file.
    Report {
        session: PathBuf,
        #[arg(long, default_value = "markdown")]
        format: ReportFormat,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Send a saved session file to the configured endpoint.
    Send { session: PathBuf },
    /// Describe the three instruments and their cutoffs.
    Instruments,
    /// Show or update the saved configuration.
    Config {
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
        #[arg(long)]
        output_dir: Option<PathBuf>,
        #[arg(long)]
        advice_catalog: Option<PathBuf>,
    },
}

fn init_tracing(json: bool, verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs, cli.verbose);

    let config = config::load_config()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Check { send, out } => {
            let ctx = Context::new(config)?;
            commands::check(&ctx, std::io::stdin().lock(), &mut stdout, send, out)?;
        }
        Command::Report {
            session,
            format,
            out,
        } => {
            let ctx = Context::new(config)?;
            let path = commands::report(&ctx, &session, format, out)?;
            writeln!(stdout, "Saved {}", path.display())?;
        }
        Command::Send { session } => {
            let ctx = Context::new(config)?;
            commands::send(&ctx, &session, &mut stdout)?;
        }
        Command::Instruments => commands::instruments(&mut stdout)?,
        Command::Config {
            endpoint,
            video_url,
            output_dir,
            advice_catalog,
        } => {
            let mut config = config;
            let changed = endpoint.is_some()
                || video_url.is_some()
                || output_dir.is_some()
                || advice_catalog.is_some();
            if let Some(endpoint) = endpoint {
                config.endpoint_url = Some(endpoint).filter(|s| !s.trim().is_empty());
            }
            if let Some(video_url) = video_url {
                config.video_url = video_url;
            }
            if output_dir.is_some() {
                config.output_dir = output_dir;
            }
            if advice_catalog.is_some() {
                config.advice_catalog = advice_catalog;
            }

            if changed {
                let path = config::save_config(&config)?;
                writeln!(stdout, "Saved {}", path.display())?;
            }
            writeln!(stdout, "{}", serde_json::to_string_pretty(&config)?)?;
        }
    }

    Ok(())
}
