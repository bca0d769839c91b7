//! Vertex AI text generation with a two-pass system prompt optimizer.
//!
//! [`GenerationClient`] joins an optional system prompt with the user input
//! and sends it to either the legacy `text-bison` predictor or the `gemini`
//! content API, depending on the configured model selector.
//! [`GenerationClient::optimize`] reuses that call twice to rewrite a system
//! prompt, and [`format_transcript`] renders role-tagged messages as text.
//!
//! ```no_run
//! use std::sync::Arc;
//! use vertexai_llm::{GenerationClient, GenerationConfig, VertexProvider};
//!
//! # async fn example() -> Result<(), vertexai_llm::GenerationError> {
//! let config = GenerationConfig::default().with_project_id("my-project");
//! let backend = VertexProvider::new(
//!     std::env::var("VERTEXAI_ACCESS_TOKEN").unwrap_or_default(),
//!     "my-project".to_string(),
//!     config.location.clone(),
//! );
//! let client = GenerationClient::new(config, Arc::new(backend));
//!
//! let answer = client.generate("Name three rivers.", Some("Answer briefly.")).await?;
//! let prompt = client.optimize("You answer geography questions.", None, 5).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub use enums::ai_provider_error::AiProviderError;
pub use enums::model_family::ModelFamily;
pub use errors::{GenerationError, GenerationResult};
pub use helpers::transcript_formatter::format_transcript;
pub use services::ai_providers::vertex::VertexProvider;
pub use services::generation_client::GenerationClient;
pub use services::prompt_optimizer::PromptOptimizer;
pub use structs::ai::backend_response::BackendResponse;
pub use structs::config::config::Config;
pub use structs::config::generation_config::GenerationConfig;
pub use structs::config::optimizer_config::OptimizerConfig;
pub use structs::message::Message;
pub use traits::text_backend::TextBackend;
pub use traits::text_generator::TextGenerator;
