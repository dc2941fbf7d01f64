use clap::Parser;
use noticegen::application::dto::OutputFormat;
use std::path::PathBuf;

/// Generate attribution notices from package license metadata
#[derive(Parser, Debug)]
#[command(name = "noticegen")]
#[command(version)]
#[command(
    about = "Group dependency licenses into deduplicated buckets and render a single notice document",
    long_about = None
)]
pub struct Args {
    /// Path to the JSON package manifest
    #[arg(short, long, value_name = "MANIFEST", default_value = "packages.json")]
    pub input: PathBuf,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude packages matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "acme-*" -e "left-pad"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to noticegen.config.yml next to the manifest)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write a JSON summary of licenses and tags to this path
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Exit with code 1 when any license could not be resolved
    #[arg(long)]
    pub deny_unknown: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
