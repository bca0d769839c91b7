use std::sync::Arc;
use async_trait::async_trait;
use crate::enums::model_family::ModelFamily;
use crate::errors::GenerationResult;
use crate::helpers::prompt_builder::PromptBuilder;
use crate::services::prompt_optimizer::PromptOptimizer;
use crate::structs::config::generation_config::GenerationConfig;
use crate::structs::config::optimizer_config::OptimizerConfig;
use crate::traits::text_backend::TextBackend;
use crate::traits::text_generator::TextGenerator;

/// Sends one prompt to the configured model family and hands back its text.
///
/// Holds nothing mutable. Each call makes exactly one backend request, with
/// no retries or timeouts of its own.
#[derive(Clone)]
pub struct GenerationClient {
    config: GenerationConfig,
    templates: OptimizerConfig,
    backend: Arc<dyn TextBackend>,
}

impl GenerationClient {
    pub fn new(config: GenerationConfig, backend: Arc<dyn TextBackend>) -> Self {
        Self {
            config,
            templates: OptimizerConfig::default(),
            backend,
        }
    }

    pub fn with_templates(mut self, templates: OptimizerConfig) -> Self {
        self.templates = templates;
        self
    }

    pub async fn generate(&self, text_input: &str, system_prompt: Option<&str>) -> GenerationResult<String> {
        let family: ModelFamily = self.config.model.parse()?;
        let request_text = PromptBuilder::compose_request(text_input, system_prompt);

        log::debug!("📦 Request model: {} ({} bytes)", family, request_text.len());

        let response = match family {
            ModelFamily::Bison => {
                self.backend
                    .predict(request_text, self.config.predict_parameters())
                    .await?
            }
            ModelFamily::Gemini => {
                self.backend
                    .generate_content(request_text, self.config.generate_content_parameters())
                    .await?
            }
        };

        Ok(response.text)
    }

    /// Rewrites `system_prompt` with the two-pass optimizer, using this
    /// client for both passes.
    pub async fn optimize(&self, system_prompt: &str, few_shots: Option<&[String]>, few_shots_limit: usize) -> GenerationResult<String> {
        PromptOptimizer::new(self, &self.templates)
            .optimize(system_prompt, few_shots, few_shots_limit)
            .await
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    async fn generate(&self, text_input: String, system_prompt: Option<String>) -> GenerationResult<String> {
        GenerationClient::generate(self, &text_input, system_prompt.as_deref()).await
    }
}
