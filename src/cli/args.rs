use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::commands;

/// Entry point for the `articlegen` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "articlegen",
    about = "Draft technical articles with a hosted language model",
    version,
    long_about = None
)]
pub struct Cli {
    /// Optional subcommand; defaults to the interactive `write` flow
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging of LLM requests and responses
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Interactive setup for first-time configuration
    #[arg(long = "setup")]
    pub setup: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively draft an article and save it as `<title>.txt`.
    Write(WriteArgs),
    /// Print the section headers generated for a title.
    Outline(OutlineArgs),
    /// Print the talking points generated for one section header.
    Points(PointsArgs),
    /// Print a paragraph generated for one talking point.
    Paragraph(ParagraphArgs),
    /// Run the full pipeline without review and print the article.
    Generate(GenerateArgs),
    /// Show or change saved settings.
    Config(ConfigArgs),
}

#[derive(Debug, Default, Args)]
pub struct WriteArgs {
    /// Article title (prompted for when omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// Writing tone, e.g. "formal" (prompted for when omitted)
    #[arg(long)]
    pub tone: Option<String>,

    /// Comma-separated tags (prompted for when omitted)
    #[arg(long)]
    pub tags: Option<String>,

    /// `stepwise` or `single-call` (defaults to config)
    #[arg(long)]
    pub strategy: Option<String>,

    /// Skip the header and talking-point editing prompts
    #[arg(long)]
    pub no_review: bool,

    /// Directory for the output file (defaults to config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct OutlineArgs {
    #[arg(long)]
    pub title: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    #[arg(long, default_value = "informative")]
    pub tone: String,
}

#[derive(Debug, Args)]
pub struct PointsArgs {
    #[arg(long)]
    pub header: String,

    #[arg(long, default_value = "informative")]
    pub tone: String,
}

#[derive(Debug, Args)]
pub struct ParagraphArgs {
    #[arg(long)]
    pub point: String,

    #[arg(long, default_value = "informative")]
    pub tone: String,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "informative")]
    pub tone: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    /// `stepwise` or `single-call` (defaults to config)
    #[arg(long)]
    pub strategy: Option<String>,

    /// Also write the article to `<output-dir>/<title>.txt`
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// Print the current configuration
    #[arg(long)]
    pub show: bool,

    /// Select the LLM provider (openrouter, cerebras, openai); `list` shows them
    #[arg(long)]
    pub provider: Option<String>,

    /// Set the API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set the writer model
    #[arg(long)]
    pub model: Option<String>,

    /// Set the default assembly strategy
    #[arg(long)]
    pub strategy: Option<String>,

    /// Set how many section headers the outline asks for
    #[arg(long)]
    pub sections: Option<u32>,

    /// Set the default output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
