//! Command-line front end.
//!
//! Reads one JSON or YAML document, renders it with
//! [`NestedRenderer`] and writes the outline to the given writer. Settings
//! come from an optional YAML config file; command-line flags override it.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use nestout_render::{
    ColorChoice, NestedRenderer, RenderConfig, RenderValue, UnsupportedPolicy, PARSE_NESTING_LIMIT,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "NESTOUT_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "nestout",
    version,
    about = "Render nested JSON/YAML data as an indented, colored outline"
)]
pub struct Args {
    /// Input document. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// How to parse the input.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// Color output: auto, always or never.
    #[arg(long)]
    pub color: Option<ColorChoice>,

    /// Deepest field nesting rendered before failing (at most 128, the
    /// deepest input the parsers accept).
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Fail on values that are neither text nor fields instead of skipping them.
    #[arg(long)]
    pub strict: bool,

    /// Text inserted before every top-level line.
    #[arg(long)]
    pub prefix: Option<String>,

    /// YAML file with render settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON first, then YAML.
    Auto,
    Json,
    Yaml,
}

/// Installs the stderr log subscriber.
///
/// `NESTOUT_LOG` wins over `-v` when set.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Builds the effective config: file (if any), then flag overrides.
///
/// A `max_depth` above [`PARSE_NESTING_LIMIT`] is rejected: parsed input can
/// never reach it, so such a setting would never take effect.
pub fn resolve_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(color) = args.color {
        config.color = color;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    if args.strict {
        config.unsupported = UnsupportedPolicy::Reject;
    }
    if config.max_depth > PARSE_NESTING_LIMIT {
        anyhow::bail!(
            "max depth {} exceeds the input nesting limit of {}",
            config.max_depth,
            PARSE_NESTING_LIMIT
        );
    }

    tracing::debug!(?config, "resolved render config");
    Ok(config)
}

/// Parses a document in the given format.
pub fn parse_input(content: &str, format: InputFormat) -> Result<RenderValue> {
    match format {
        InputFormat::Json => RenderValue::from_json_str(content).context("parsing JSON input"),
        InputFormat::Yaml => RenderValue::from_yaml_str(content).context("parsing YAML input"),
        InputFormat::Auto => match RenderValue::from_json_str(content) {
            Ok(value) => Ok(value),
            Err(json_err) => {
                tracing::debug!(error = %json_err, "input is not JSON, trying YAML");
                RenderValue::from_yaml_str(content).context("parsing input as JSON or YAML")
            }
        },
    }
}

/// Runs one render: reads the input, renders it and writes the outline.
pub fn run<R: Read, W: Write>(args: &Args, mut stdin: R, mut out: W) -> Result<()> {
    let config = resolve_config(args)?;

    let content = match &args.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let value = parse_input(&content, args.input_format)?;
    let output = NestedRenderer::from_config(&config)
        .render_prefixed(&value, args.prefix.as_deref().unwrap_or(""))
        .context("rendering outline")?;

    out.write_all(output.as_bytes()).context("writing output")?;
    out.flush().context("writing output")?;
    Ok(())
}
