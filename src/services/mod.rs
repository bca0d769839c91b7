pub mod ai_providers;
pub mod generation_client;
pub mod prompt_optimizer;
