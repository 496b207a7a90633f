//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// Mishpacha - render the bilingual site from its content dictionaries
#[derive(Parser, Debug, Default)]
#[command(name = "mishpacha")]
#[command(version)]
#[command(about = "Render the bilingual site from its per-language content dictionaries", long_about = None)]
pub struct Args {
    /// HTML page skeleton to render into
    #[arg(long, default_value = "index.html")]
    pub page: PathBuf,

    /// Site configuration file, JSON or TOML (default: ~/.config/mishpacha/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dictionary path or URL template containing {lang}; overrides the config
    #[arg(long)]
    pub content: Option<String>,

    /// Switch to this language after startup (he, en)
    #[arg(long)]
    pub lang: Option<String>,

    /// Render every language to <out>/index.<code>.html
    #[arg(long)]
    pub all: bool,

    /// Output file, or directory with --all (default: stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// File holding the persisted language (default: ~/.config/mishpacha/state.json)
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}
