pub mod config_helper;
pub mod prompt_builder;
pub mod transcript_formatter;
