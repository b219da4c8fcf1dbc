use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

const VERSION_FILE: &str = "VERSION.txt";
const FALLBACK_VERSION: &str = "0.0.0-SNAPSHOT";

// Help and version short-circuits print custom text (version comes from a
// sidecar file, usage goes to stderr with exit code 1), so clap's builtin
// flags are disabled and redeclared as plain booleans.
#[derive(Debug, Parser)]
#[command(
    name = "hbsgen",
    about = "Renders a YAML data file through a Handlebars template",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Command {
    #[arg(short, long)]
    pub template: Option<PathBuf>,
    #[arg(short, long)]
    pub data: Option<PathBuf>,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(short, long)]
    pub partials: Option<PathBuf>,
    #[arg(short, long)]
    pub help: bool,
    #[arg(short, long)]
    pub version: bool,
}

impl Command {
    // to avoid importing clap::Parser in main file
    pub fn clap_parse() -> Self {
        Command::parse()
    }

    pub fn resolve(self) -> Action {
        if self.version {
            return Action::Version;
        }
        match (self.template, self.data) {
            (Some(template), Some(data)) if !self.help => Action::Run(Config {
                template,
                data,
                output: self.output,
                partials: self.partials,
            }),
            _ => Action::Usage,
        }
    }
}

#[derive(Debug)]
pub enum Action {
    Version,
    Usage,
    Run(Config),
}

/// Resolved options for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    pub template: PathBuf,
    pub data: PathBuf,
    pub output: Option<PathBuf>,
    pub partials: Option<PathBuf>,
}

pub fn version_string() -> String {
    format!(
        "{} v{}",
        program_name(),
        sidecar_version(Path::new(VERSION_FILE))
    )
}

pub fn usage() -> String {
    format!(
        "Usage: {} --template <path> --data <path> [--output <path>] [--partials <dir>] [--help] [--version]",
        program_name()
    )
}

fn program_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

fn sidecar_version(path: &Path) -> String {
    fs::read_to_string(path)
        .map(|content| content.trim().to_string())
        .unwrap_or_else(|_| FALLBACK_VERSION.to_string())
}
