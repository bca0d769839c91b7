use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::ai::generate_content_parameters::GenerateContentParameters;
use crate::structs::ai::predict_parameters::PredictParameters;

/// Generation settings owned by a single [`GenerationClient`](crate::services::generation_client::GenerationClient).
///
/// `model` stays a raw selector string; it is only interpreted when a call is
/// made, so an unknown value surfaces as an error from `generate`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GenerationConfig {
    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default = "ConfigHelper::default_location")]
    pub location: String,

    #[serde(default = "ConfigHelper::default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_top_p")]
    pub top_p: f32,

    #[serde(default = "ConfigHelper::default_top_k")]
    pub top_k: u32,
}

impl GenerationConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn predict_parameters(&self) -> PredictParameters {
        PredictParameters {
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
        }
    }

    pub fn generate_content_parameters(&self) -> GenerateContentParameters {
        GenerateContentParameters {
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_model(),
            project_id: None,
            location: ConfigHelper::default_location(),
            max_output_tokens: ConfigHelper::default_max_output_tokens(),
            temperature: ConfigHelper::default_temperature(),
            top_p: ConfigHelper::default_top_p(),
            top_k: ConfigHelper::default_top_k(),
        }
    }
}
