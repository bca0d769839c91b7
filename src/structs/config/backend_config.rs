use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Where and how the Vertex AI backend is reached.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Overrides `https://{location}-aiplatform.googleapis.com/v1`.
    #[serde(default)]
    pub api_endpoint: Option<String>,

    #[serde(default = "ConfigHelper::default_access_token_env")]
    pub access_token_env: String,

    #[serde(default = "ConfigHelper::default_bison_model")]
    pub bison_model: String,

    #[serde(default = "ConfigHelper::default_gemini_model")]
    pub gemini_model: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            access_token_env: ConfigHelper::default_access_token_env(),
            bison_model: ConfigHelper::default_bison_model(),
            gemini_model: ConfigHelper::default_gemini_model(),
            timeout_secs: None,
        }
    }
}
