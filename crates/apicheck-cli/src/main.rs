//! apicheck CLI - check captured HTTP responses against declarative expectations

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::Value;

use apicheck_core::{CheckReport, SuiteConfig, find_index_by_field, report, schema_hal};
use apicheck_runner::{Dispatch, check_response, generate_number, generate_string, load_response};

#[derive(Parser)]
#[command(name = "apicheck")]
#[command(about = "Check captured HTTP responses against declarative expectations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "terminal")]
    output: OutputFormat,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the configured checks against a captured response
    Check {
        /// Config file (default: .apicheck.toml)
        #[arg(short, long)]
        config: Option<String>,

        /// Response snapshot (overrides `response` in the config)
        #[arg(short, long)]
        response: Option<String>,

        /// Skip the response time check
        #[arg(long)]
        no_time: bool,
    },

    /// Initialize config file
    Init,

    /// Print the HAL envelope JSON Schema
    HalSchema,

    /// Print the ISO-8601 datetime pattern
    IsoRegex,

    /// Export JSON Schema for the check report format
    Schema,

    /// Generate random fixture values
    Gen {
        #[command(subcommand)]
        kind: GenKind,

        /// Seed for reproducible output
        #[arg(long, global = true)]
        seed: Option<u64>,
    },

    /// Find the first record in a JSON array whose field matches a value
    Find {
        /// JSON file holding an array of objects
        #[arg(short, long)]
        file: String,

        /// Field to compare
        #[arg(long)]
        field: String,

        /// Value to look for (JSON literal, or a bare string)
        #[arg(long)]
        value: String,
    },
}

#[derive(Subcommand)]
enum GenKind {
    /// Random integer between two bounds (inclusive, either order)
    Number {
        #[arg(long, allow_hyphen_values = true)]
        min: String,
        #[arg(long, allow_hyphen_values = true)]
        max: String,
    },
    /// Random alphanumeric string
    String {
        #[arg(long, allow_hyphen_values = true)]
        length: String,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Terminal,
    Json,
    Silent,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(3)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init();
}

/// Parse a command-line argument as a JSON literal, falling back to a string.
fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check {
            config,
            response,
            no_time,
        } => {
            let (cfg, cfg_path) = if let Some(path) = config {
                let path = PathBuf::from(path);
                (SuiteConfig::load(&path)?, path)
            } else {
                SuiteConfig::load_default()?
            };
            let base_dir = cfg_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();

            let response_path = match response {
                Some(p) => PathBuf::from(p),
                None => base_dir.join(&cfg.response),
            };
            let snapshot = load_response(&response_path)?;
            let expect = cfg
                .expect
                .to_expectations(&base_dir)
                .with_context(|| format!("in {}", cfg_path.display()))?;

            let dispatch = if no_time {
                Dispatch::Common
            } else {
                Dispatch::CommonAndTime
            };

            if cli.output == OutputFormat::Terminal {
                eprintln!("Response: {}", response_path.display());
                eprintln!();
            }

            let report = check_response(&snapshot, &expect, dispatch);
            print_report(&report, cli.output)?;
            Ok(report.exit_code())
        }

        Commands::Init => {
            let config_path = ".apicheck.toml";
            if Path::new(config_path).exists() {
                eprintln!("{config_path} already exists");
                return Ok(1);
            }

            std::fs::write(config_path, SuiteConfig::example())?;
            println!("Created {config_path}");
            println!("\nEdit the file to configure:");
            println!("  - response: captured response snapshot (JSON or YAML)");
            println!("  - expect: status, content type, time limit, location, schema");
            Ok(0)
        }

        Commands::HalSchema => {
            println!("{}", serde_json::to_string_pretty(&schema_hal())?);
            Ok(0)
        }

        Commands::IsoRegex => {
            println!("{}", apicheck_core::regex_iso_datetime());
            Ok(0)
        }

        Commands::Schema => {
            println!("{}", report::generate_schema());
            Ok(0)
        }

        Commands::Gen { kind, seed } => {
            let mut rng = rng_from(seed);
            let value = match kind {
                GenKind::Number { min, max } => {
                    Value::from(generate_number(&parse_arg(&min), &parse_arg(&max), &mut rng)?)
                }
                GenKind::String { length } => {
                    Value::from(generate_string(&parse_arg(&length), &mut rng)?)
                }
            };
            match cli.output {
                OutputFormat::Terminal => match &value {
                    Value::String(s) => println!("{s}"),
                    other => println!("{other}"),
                },
                OutputFormat::Json => println!("{value}"),
                OutputFormat::Silent => {}
            }
            Ok(0)
        }

        Commands::Find { file, field, value } => {
            let content =
                std::fs::read_to_string(&file).with_context(|| format!("reading {file}"))?;
            let list: Vec<Value> = serde_json::from_str(&content)
                .with_context(|| format!("{file} is not a JSON array"))?;
            let index = find_index_by_field(&list, &field, &parse_arg(&value))?;
            match cli.output {
                OutputFormat::Terminal => match index {
                    Some(i) => println!("{i}"),
                    None => println!("-1"),
                },
                OutputFormat::Json => {
                    let json = serde_json::json!({ "index": index });
                    println!("{json}");
                }
                OutputFormat::Silent => {}
            }
            Ok(if index.is_some() { 0 } else { 1 })
        }
    }
}

fn print_report(report: &CheckReport, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Terminal => println!("{}", report.to_terminal()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Silent => {}
    }
    Ok(())
}
