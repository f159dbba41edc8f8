// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod subtitle_processor;
mod sentence_extractor;
mod sampler;
mod sentence_pool;
mod file_utils;
mod app_controller;
mod errors;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strip sentences out of subtitle files and append them to the pool
    Strip(StripArgs),

    /// Pick one random sentence from the pool
    Pick(PickArgs),

    /// Generate a random paragraph from the pool
    Generate(GenerateArgs),

    /// Generate shell completions for subcorpus
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct StripArgs {
    /// Subtitle files or directories to process
    #[arg(value_name = "INPUTS", required = true)]
    inputs: Vec<PathBuf>,

    /// Pool file to append sentences to (defaults to the configured pool)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct PickArgs {
    /// Pool file to sample from (defaults to the configured pool)
    #[arg(value_name = "POOL_FILE")]
    pool_file: Option<PathBuf>,

    /// Minimum sentence byte length, negative for no bound
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,

    /// Maximum sentence byte length, negative for no bound
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Pool file to sample from (defaults to the configured pool)
    #[arg(value_name = "POOL_FILE")]
    pool_file: Option<PathBuf>,

    /// Minimum paragraph byte length, negative for no bound
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,

    /// Maximum paragraph byte length, negative for no bound
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subcorpus - Subtitle sentence corpus builder and sampler
///
/// Strips complete sentences out of SRT subtitle files into a flat sentence
/// pool and samples random length-bounded text from it.
#[derive(Parser, Debug)]
#[command(name = "subcorpus")]
#[command(author = "subcorpus contributors")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle sentence corpus builder and sampler")]
#[command(long_about = "subcorpus strips complete sentences out of SRT subtitle files into a flat
sentence pool, then samples random length-bounded text from that pool.

EXAMPLES:
    subcorpus strip episodes/ -o sentences.txt    # Build the pool from a directory
    subcorpus strip s01e01.srt s01e02.srt         # Append two files to the default pool
    subcorpus pick sentences.txt                  # Print one random sentence
    subcorpus pick --min 20 --max 120             # Print a sentence between the bounds
    subcorpus generate --min 140 --max 280        # Print a tweet-sized paragraph
    subcorpus completions bash > subcorpus.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

OUTPUT:
    The picked sentence or generated paragraph is printed to stdout; all
    diagnostics go to stderr, so results can be piped safely.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;31m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
                Level::Warn => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;33m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
                Level::Info => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;32m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
                Level::Debug => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;36m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
                Level::Trace => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;35m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subcorpus", &mut std::io::stdout());
            Ok(())
        }
        Commands::Strip(args) => run_strip(args),
        Commands::Pick(args) => run_pick(args),
        Commands::Generate(args) => run_generate(args),
    }
}

fn run_strip(args: StripArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level.as_ref())?;
    let controller = Controller::with_config(config)?;

    controller.run_strip(&args.inputs, args.output.as_deref())?;

    Ok(())
}

fn run_pick(args: PickArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level.as_ref())?;
    let controller = Controller::with_config(config)?;

    let sentence = controller.run_pick(args.pool_file.as_deref(), args.min, args.max)?;

    // The result goes to stdout, everything else to stderr
    println!("{}", sentence);

    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level.as_ref())?;
    let controller = Controller::with_config(config)?;

    let paragraph = controller.run_generate(args.pool_file.as_deref(), args.min, args.max)?;

    // The result goes to stdout, everything else to stderr
    println!("{}", paragraph);

    Ok(())
}

/// Load the configuration, creating a default one when the file is missing,
/// and reconcile the log level between config and command line
fn load_config(config_path: &str, cli_log_level: Option<&CliLogLevel>) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = cli_log_level {
        log::set_max_level(level_filter_for(&cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Update log level in config if specified via command line
        if let Some(log_level) = cli_log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        // Apply command line log level to default config if specified
        if let Some(log_level) = cli_log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli_log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter_for(&config.log_level));
    }

    Ok(config)
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
