use std::path::PathBuf;

mod fill;
mod submit;
mod terminal;

use clap::ArgAction;
use fill::Fill;
use jobform::{Application, Config, OutputFormat, Summary, ValidationErrors};
use submit::Submit;
use terminal::Colorize;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        tracing::debug!(?config, "loaded configuration");

        if !config.color {
            terminal::disable_color();
        }

        self.command
            .unwrap_or_else(|| Command::Fill(Fill::default()))
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Prompts and the summary own stdout.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Fill in the application interactively (default)
    Fill(Fill),

    /// Submit an application from command-line values
    ///
    /// Prints the summary on success. On failure, prints one line per
    /// invalid field and exits with status 1.
    Submit(Submit),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Fill(command) => command.run(config)?,
            Self::Submit(command) => command.run(config)?,
        }
        Ok(())
    }
}

/// Prints a finished application in the requested format.
fn print_summary(application: &Application, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Pretty => {
            println!("{}", "Summary".heading());
            for (field, value) in Summary::render(application).rows() {
                println!("  {} {value}", format!("{field}:").dim());
            }
        }
        OutputFormat::Plain => print!("{}", Summary::render(application)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(application)?),
    }
    Ok(())
}

/// Prints validation failures to stderr.
fn print_errors(errors: &ValidationErrors, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => eprintln!("{}", serde_json::to_string_pretty(errors)?),
        OutputFormat::Pretty | OutputFormat::Plain => {
            for (field, message) in errors.iter() {
                eprintln!("{}", format!("{field}: {message}").error());
            }
        }
    }
    Ok(())
}
