use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "vertexai-llm")]
#[clap(about = "Vertex AI text generation and system prompt optimization", long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of ~/vertexai-llm/config.toml
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
