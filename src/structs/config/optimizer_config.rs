use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Meta-prompts and limits used by the prompt optimizer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    #[serde(default = "ConfigHelper::default_few_shots_limit")]
    pub few_shots_limit: usize,

    #[serde(default = "ConfigHelper::default_optimizer_system_prompt")]
    pub optimizer_system_prompt: String,

    #[serde(default = "ConfigHelper::default_extraction_system_prompt")]
    pub extraction_system_prompt: String,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            few_shots_limit: ConfigHelper::default_few_shots_limit(),
            optimizer_system_prompt: ConfigHelper::default_optimizer_system_prompt(),
            extraction_system_prompt: ConfigHelper::default_extraction_system_prompt(),
        }
    }
}
