pub mod text_backend;
pub mod text_generator;
