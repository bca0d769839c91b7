use crate::config::constants::{
    DEFAULT_ACCESS_TOKEN_ENV, DEFAULT_BISON_MODEL, DEFAULT_FEW_SHOTS_LIMIT, DEFAULT_GEMINI_MODEL,
    DEFAULT_LOCATION,
};
use crate::prompts::extraction_system_prompt::EXTRACTION_SYSTEM_PROMPT;
use crate::prompts::optimizer_system_prompt::OPTIMIZER_SYSTEM_PROMPT;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        "gemini".to_string()
    }

    pub fn default_location() -> String {
        DEFAULT_LOCATION.to_string()
    }

    pub fn default_max_output_tokens() -> u32 {
        2048
    }

    pub fn default_temperature() -> f32 {
        0.0
    }

    pub fn default_top_p() -> f32 {
        1.0
    }

    pub fn default_top_k() -> u32 {
        40
    }

    pub fn default_few_shots_limit() -> usize {
        DEFAULT_FEW_SHOTS_LIMIT
    }

    pub fn default_optimizer_system_prompt() -> String {
        OPTIMIZER_SYSTEM_PROMPT.to_string()
    }

    pub fn default_extraction_system_prompt() -> String {
        EXTRACTION_SYSTEM_PROMPT.to_string()
    }

    pub fn default_access_token_env() -> String {
        DEFAULT_ACCESS_TOKEN_ENV.to_string()
    }

    pub fn default_bison_model() -> String {
        DEFAULT_BISON_MODEL.to_string()
    }

    pub fn default_gemini_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }
}
