pub mod extraction_system_prompt;
pub mod optimizer_system_prompt;
