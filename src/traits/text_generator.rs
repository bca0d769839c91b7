use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::errors::GenerationResult;

/// Anything that turns `(text_input, system_prompt)` into generated text.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, text_input: String, system_prompt: Option<String>) -> GenerationResult<String>;
}
