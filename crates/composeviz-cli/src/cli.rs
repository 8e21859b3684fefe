//! Command-line interface for the composeviz utility
//!
//! Provides a CLI to turn a docker-compose file into Mermaid and PlantUML
//! architecture diagrams.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use composeviz::compose::ComposeLoader;
use composeviz::core::logging::init_logging;
use composeviz::output::{OutputWriter, WrittenFile, DEFAULT_STEM};
use composeviz::plugins::{Diagrams, Orchestrator};
use composeviz::{explain, Classification, Database, OutputFormat, RenderConfig};

/// Compose file used when neither `--input` nor `COMPOSE_PATH` is given
pub const DEFAULT_COMPOSE_PATH: &str = "docker-compose.yml";

/// composeviz - Turn docker-compose files into architecture diagrams
#[derive(Parser)]
#[command(name = "composeviz")]
#[command(about = "Generate Mermaid and PlantUML diagrams from a docker-compose file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render both diagrams and write them next to the compose file
    Render {
        /// Compose file to read
        #[arg(short, long, env = "COMPOSE_PATH", default_value = DEFAULT_COMPOSE_PATH)]
        input: PathBuf,

        /// Directory for the diagram files (defaults to the compose file's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File stem for the diagram files
        #[arg(long, default_value = DEFAULT_STEM)]
        stem: String,

        /// Title of the PlantUML diagram
        #[arg(long)]
        title: Option<String>,

        /// Wrap the echoed diagrams in Markdown code fences
        #[arg(long)]
        markdown: bool,

        /// Only print the diagrams, do not write files
        #[arg(long)]
        no_write: bool,
    },

    /// Show the role assigned to each service and why
    Classify {
        /// Compose file to read
        #[arg(short, long, env = "COMPOSE_PATH", default_value = DEFAULT_COMPOSE_PATH)]
        input: PathBuf,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// One row of the `classify` report
#[derive(Debug, Serialize)]
pub struct ServiceReport {
    pub service: String,
    pub group: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Main CLI application
#[derive(Default)]
pub struct ComposeVizApp;

impl ComposeVizApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level = std::env::var("COMPOSEVIZ_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());
        let log_format = std::env::var("COMPOSEVIZ_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("composeviz v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                output_dir,
                stem,
                title,
                markdown,
                no_write,
            } => {
                let options = RenderOptions {
                    output_dir,
                    stem,
                    title,
                    markdown,
                    write: !no_write,
                };
                let report = self.render_command(&input, &options, cli.verbose)?;
                self.print(&report)
            }
            Commands::Classify { input, json } => {
                let report = self.classify_command(&input, json, cli.verbose)?;
                self.print(&report)
            }
        }
    }

    /// Run the full pipeline and return the console report
    pub fn render_command(
        &self,
        input: &Path,
        options: &RenderOptions,
        verbose: bool,
    ) -> Result<String> {
        let config = options
            .title
            .as_deref()
            .map(RenderConfig::new)
            .unwrap_or_default();
        let orchestrator = Orchestrator::with_config(config);

        let input = resolve_input(input);
        let (graph, diagrams) = orchestrator.process_file(&input)?;
        if verbose {
            eprintln!(
                "Read {} services from {}",
                graph.node_count(),
                input.display()
            );
        }

        let written = if options.write {
            let writer = match &options.output_dir {
                Some(dir) => OutputWriter::new(dir),
                None => OutputWriter::for_input(&input),
            }
            .with_stem(options.stem.as_str());
            writer.write(&diagrams)?
        } else {
            debug!("Skipping file output");
            Vec::new()
        };

        Ok(format_report(&written, &diagrams, options.markdown))
    }

    /// Classify every service and return the console report
    pub fn classify_command(&self, input: &Path, json: bool, verbose: bool) -> Result<String> {
        let input = resolve_input(input);
        let document = ComposeLoader::load(&input)?;
        if verbose {
            eprintln!("Read {} services from {}", document.len(), input.display());
        }

        let rows: Vec<ServiceReport> = document
            .services
            .iter()
            .map(|service| {
                let classification = explain(&service.name, &service.definition);
                ServiceReport {
                    service: service.name.clone(),
                    group: classification.group().to_string(),
                    classification,
                }
            })
            .collect();

        if json {
            return Ok(serde_json::to_string_pretty(&rows)?);
        }

        let width = rows.iter().map(|r| r.service.len()).max().unwrap_or(0);
        let lines: Vec<String> = rows
            .iter()
            .map(|row| {
                let evidence = match &row.classification.matched {
                    Some(matched) => format!("{} '{}'", row.classification.tier, matched),
                    None => row.classification.tier.to_string(),
                };
                format!(
                    "{:<width$}  {}  [{}]",
                    row.service,
                    row.classification.role,
                    evidence,
                    width = width
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn print(&self, report: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", report)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Options of the `render` command
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output_dir: Option<PathBuf>,
    pub stem: String,
    pub title: Option<String>,
    pub markdown: bool,
    pub write: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            stem: DEFAULT_STEM.to_string(),
            title: None,
            markdown: false,
            write: true,
        }
    }
}

/// Directories are searched for a conventionally named compose file
pub fn resolve_input(input: &Path) -> PathBuf {
    if input.is_dir() {
        if let Some(found) = ComposeLoader::find_compose_file(input) {
            debug!(path = %found.display(), "Found compose file");
            return found;
        }
    }
    input.to_path_buf()
}

/// Console report listing written files followed by both diagrams
pub fn format_report(written: &[WrittenFile], diagrams: &Diagrams, markdown: bool) -> String {
    let mut sections = Vec::new();

    if !written.is_empty() {
        let mut listing = String::from("Written:");
        for file in written {
            listing.push_str(&format!("\n- {}", file.path.display()));
        }
        sections.push(listing);
    }

    for (format, source) in diagrams.iter() {
        let body = if markdown {
            format!("```{}\n{}\n```", fence_language(format), source)
        } else {
            source.to_string()
        };
        sections.push(format!("--- {} ---\n\n{}", format, body));
    }

    sections.join("\n\n")
}

fn fence_language(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Mermaid => "mermaid",
        OutputFormat::PlantUml => "plantuml",
    }
}
