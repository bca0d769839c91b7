use serde::{Deserialize, Serialize};
use crate::structs::ai::generate_content_parameters::GenerateContentParameters;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl From<GenerateContentParameters> for GeminiGenerationConfig {
    fn from(parameters: GenerateContentParameters) -> Self {
        Self {
            max_output_tokens: parameters.max_output_tokens,
            temperature: parameters.temperature,
            top_p: parameters.top_p,
            top_k: parameters.top_k,
        }
    }
}
