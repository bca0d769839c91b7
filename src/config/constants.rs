pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_FEW_SHOTS_LIMIT: usize = 5;

pub const DEFAULT_BISON_MODEL: &str = "text-bison";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.0-pro";

pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "VERTEXAI_ACCESS_TOKEN";
pub const PROJECT_ID_ENV: &str = "GOOGLE_CLOUD_PROJECT";

pub const CONFIG_DIR_NAME: &str = "vertexai-llm";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Public Vertex AI REST root for a region.
pub fn regional_endpoint(location: &str) -> String {
    format!("https://{}-aiplatform.googleapis.com/v1", location)
}
