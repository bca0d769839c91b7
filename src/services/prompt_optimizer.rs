use crate::errors::GenerationResult;
use crate::helpers::prompt_builder::PromptBuilder;
use crate::structs::config::optimizer_config::OptimizerConfig;
use crate::traits::text_generator::TextGenerator;

/// Two-pass system prompt rewriter.
///
/// The first pass asks the model to critique and rewrite the prompt, ending
/// its answer with `Optimized prompt: `. The second pass asks the model to
/// pull the rewritten prompt back out of that answer. Neither reply is
/// inspected.
pub struct PromptOptimizer<'a, G: TextGenerator + ?Sized> {
    generator: &'a G,
    templates: &'a OptimizerConfig,
}

impl<'a, G: TextGenerator + ?Sized> PromptOptimizer<'a, G> {
    pub fn new(generator: &'a G, templates: &'a OptimizerConfig) -> Self {
        Self { generator, templates }
    }

    pub async fn optimize(&self, system_prompt: &str, few_shots: Option<&[String]>, few_shots_limit: usize) -> GenerationResult<String> {
        let optimization_input = PromptBuilder::optimization_input(system_prompt, few_shots, few_shots_limit);

        log::debug!("🛠️ Optimizing prompt ({} bytes)", optimization_input.len());
        let explained = self
            .generator
            .generate(optimization_input, Some(self.templates.optimizer_system_prompt.clone()))
            .await?;

        log::debug!("🔎 Extracting optimized prompt from {} bytes", explained.len());
        self.generator
            .generate(explained, Some(self.templates.extraction_system_prompt.clone()))
            .await
    }
}
