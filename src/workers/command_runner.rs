use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::model_family::ModelFamily;
use crate::errors::{GenerationError, GenerationResult};
use crate::helpers::transcript_formatter::format_transcript;
use crate::services::ai_providers::vertex::VertexProvider;
use crate::services::generation_client::GenerationClient;
use crate::structs::config::config::Config;
use crate::structs::message::Message;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> GenerationResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Generate { text, system_prompt, model } => {
                self.generate_command(&text, system_prompt.as_deref(), model).await
            }
            Commands::Optimize { prompt, few_shots, few_shots_limit } => {
                self.optimize_command(&prompt, &few_shots, few_shots_limit).await
            }
            Commands::Format { file } => Self::format_command(&file),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> GenerationResult<Config> {
        match &self.config_path {
            Some(path) => ConfigManager::load_from(path),
            None => ConfigManager::load(),
        }
    }

    /// The selector is checked before credentials are bound, so an unknown
    /// model is reported as such even without a token.
    fn build_client(config: &Config) -> GenerationResult<GenerationClient> {
        config.generation.model.parse::<ModelFamily>()?;
        let backend = VertexProvider::from_config(&config.generation, &config.backend)?;

        Ok(GenerationClient::new(config.generation.clone(), Arc::new(backend))
            .with_templates(config.optimizer.clone()))
    }

    fn init_command(&self) -> GenerationResult<()> {
        log::info!("🚀 Initializing vertexai-llm configuration...");

        let path = match &self.config_path {
            Some(path) => {
                ConfigManager::write_sample_config(path)?;
                path.clone()
            }
            None => ConfigManager::create_sample_config()?,
        };

        log::info!("📝 Edit {} to set your project and model.", path.display());
        log::info!("🔧 Run 'vertexai-llm validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> GenerationResult<()> {
        log::info!("🔍 Validating vertexai-llm configuration...");

        let config = self.load_config()?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {}", error);
                }
                Err(GenerationError::ValidationFailed(errors))
            }
        }
    }

    async fn generate_command(&self, text: &str, system_prompt: Option<&str>, model: Option<String>) -> GenerationResult<()> {
        let mut config = self.load_config()?;
        if let Some(model) = model {
            config.generation.model = model;
        }

        log::info!("✨ Generating with {} in {}", config.generation.model, config.generation.location);

        let client = Self::build_client(&config)?;
        let output = client.generate(text, system_prompt).await?;

        println!("{}", output);
        Ok(())
    }

    async fn optimize_command(&self, prompt: &str, few_shots: &[String], few_shots_limit: Option<usize>) -> GenerationResult<()> {
        let config = self.load_config()?;
        let limit = few_shots_limit.unwrap_or(config.optimizer.few_shots_limit);

        log::info!("🛠️ Optimizing prompt with {} of {} few-shot examples", few_shots.len().min(limit), few_shots.len());

        let client = Self::build_client(&config)?;
        let optimized = client.optimize(prompt, Some(few_shots), limit).await?;

        println!("{}", optimized);
        Ok(())
    }

    fn format_command(file: &Path) -> GenerationResult<()> {
        let content = fs::read_to_string(file)?;
        let messages: Vec<Message> = serde_json::from_str(&content)?;

        log::debug!("📜 Formatting {} messages from {}", messages.len(), file.display());

        println!("{}", format_transcript(&messages));
        Ok(())
    }
}
