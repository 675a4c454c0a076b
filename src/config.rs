//! Configuration management for the validation console.
//!
//! Handles:
//! - Command-line argument parsing
//! - The optional `docvet.toml` configuration file
//! - Resolution of the watched file paths and the engine command

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;

/// Engine command used when neither the CLI nor a config file names one.
pub const DEFAULT_ENGINE: &str = "docvet-engine";

/// Command-line arguments for the validation console
#[derive(Debug, Parser)]
#[command(name = "docvet")]
#[command(about = "Live constraint-validation console for structured documents")]
#[command(version)]
pub struct Args {
    /// Directory holding the editable document and constraint files
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Document file to watch (defaults to <workspace>/document.json)
    #[arg(long)]
    pub document: Option<PathBuf>,

    /// Core constraint-set file to watch (defaults to <workspace>/core.json)
    #[arg(long)]
    pub core_constraints: Option<PathBuf>,

    /// Type-tag constraint-set file to watch (defaults to <workspace>/type-tag.json)
    #[arg(long)]
    pub type_tag_constraints: Option<PathBuf>,

    /// Validation engine command, e.g. "docvet-engine --strict"
    #[arg(long)]
    pub engine: Option<String>,

    /// Configuration file (defaults to <workspace>/docvet.toml, then the
    /// user configuration directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Keep previous output instead of clearing the screen between renders
    #[arg(long)]
    pub no_clear: bool,
}

/// Optional configuration file contents
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    engine: Option<String>,
    document: Option<PathBuf>,
    core_constraints: Option<PathBuf>,
    type_tag_constraints: Option<PathBuf>,
    clear: Option<bool>,
}

/// Engine command line, split into program and arguments
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EngineCommand {
    pub fn parse(command: &str) -> Result<Self> {
        let mut words = command.split_whitespace().map(str::to_string);

        let Some(program) = words.next() else {
            bail!("engine command is empty");
        };

        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub document: PathBuf,
    pub core_constraints: PathBuf,
    pub type_tag_constraints: PathBuf,
    pub engine: EngineCommand,
    pub clear_screen: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = load_config_file(&args)?;
        let workspace = &args.workspace;

        let document = args
            .document
            .or(file.document)
            .unwrap_or_else(|| workspace.join("document.json"));
        let core_constraints = args
            .core_constraints
            .or(file.core_constraints)
            .unwrap_or_else(|| workspace.join("core.json"));
        let type_tag_constraints = args
            .type_tag_constraints
            .or(file.type_tag_constraints)
            .unwrap_or_else(|| workspace.join("type-tag.json"));

        let engine_command = args
            .engine
            .or(file.engine)
            .unwrap_or_else(|| DEFAULT_ENGINE.to_string());
        let engine = EngineCommand::parse(&engine_command)?;

        let clear_screen = if args.no_clear {
            false
        } else {
            file.clear.unwrap_or(true)
        };

        Ok(Config {
            document,
            core_constraints,
            type_tag_constraints,
            engine,
            clear_screen,
            log_level: args.log_level,
        })
    }
}

fn load_config_file(args: &Args) -> Result<ConfigFile> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => find_config_file(&args.workspace),
    };

    let Some(path) = path else {
        return Ok(ConfigFile::default());
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("read config file {}", path.display()))?;

    toml::from_str(&contents).with_context(|| format!("parse config file {}", path.display()))
}

fn find_config_file(workspace: &Path) -> Option<PathBuf> {
    let local = workspace.join("docvet.toml");
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("docvet").join("config.toml");
    user.exists().then_some(user)
}
