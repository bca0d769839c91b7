pub mod backend_config;
pub mod config;
pub mod generation_config;
pub mod optimizer_config;
