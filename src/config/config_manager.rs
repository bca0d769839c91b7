use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::enums::model_family::ModelFamily;
use crate::errors::{GenerationError, GenerationResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# vertexai-llm configuration

[generation]
# Model family: "gemini" or "bison"
model = "gemini"

# Google Cloud project. Falls back to $GOOGLE_CLOUD_PROJECT when omitted.
# project_id = "my-project"

location = "us-central1"
max_output_tokens = 2048
temperature = 0.0
top_p = 1.0

# Only used by the gemini family
top_k = 40

[optimizer]
few_shots_limit = 5

# Meta-prompts can be replaced here:
# optimizer_system_prompt = "..."
# extraction_system_prompt = "..."

[backend]
# Environment variable holding an OAuth access token
# (for example the output of `gcloud auth print-access-token`)
access_token_env = "VERTEXAI_ACCESS_TOKEN"
bison_model = "text-bison"
gemini_model = "gemini-1.0-pro"

# api_endpoint = "https://us-central1-aiplatform.googleapis.com/v1"
# timeout_secs = 60
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `~/vertexai-llm/config.toml`, or the defaults when it is absent.
    pub fn load() -> GenerationResult<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> GenerationResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());

        let path_display = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| GenerationError::config_file_error(&path_display, &e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| GenerationError::config_file_error(&path_display, e.message()))
    }

    pub fn create_sample_config() -> GenerationResult<PathBuf> {
        let config_file_path = Self::config_path().ok_or_else(|| {
            GenerationError::config_file_error("~", "Could not determine the home directory")
        })?;
        Self::write_sample_config(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn write_sample_config(path: &Path) -> GenerationResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    /// Reports every setting the backend would reject. The generation client
    /// itself only checks the model selector, at call time.
    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let generation = &config.generation;

        let family = generation.model.parse::<ModelFamily>();
        if let Err(e) = &family {
            errors.push(e.to_string());
        }

        if generation.location.trim().is_empty() {
            errors.push("location must not be empty".to_string());
        }

        if generation.max_output_tokens == 0 {
            errors.push("max_output_tokens must be positive".to_string());
        }

        if generation.temperature < 0.0 {
            errors.push(format!("temperature must be non-negative, got {}", generation.temperature));
        }

        if !(0.0..=1.0).contains(&generation.top_p) {
            errors.push(format!("top_p must be within [0, 1], got {}", generation.top_p));
        }

        if matches!(family, Ok(ModelFamily::Gemini)) && generation.top_k == 0 {
            errors.push("top_k must be positive".to_string());
        }

        if config.optimizer.few_shots_limit == 0 {
            errors.push("few_shots_limit must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
