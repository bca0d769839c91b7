use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration for values the backend would reject
    Validate,
    /// Generate text from an input and an optional system prompt
    Generate {
        text: String,
        #[clap(short, long)]
        system_prompt: Option<String>,
        /// Override the configured model family ("gemini" or "bison")
        #[clap(short, long)]
        model: Option<String>,
    },
    /// Rewrite a system prompt with the two-pass optimizer
    Optimize {
        prompt: String,
        #[clap(long = "few-shot")]
        few_shots: Vec<String>,
        #[clap(long)]
        few_shots_limit: Option<usize>,
    },
    /// Render a JSON array of role/message objects as a transcript
    Format {
        file: PathBuf,
    },
}
