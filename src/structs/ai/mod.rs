pub mod backend_response;
pub mod bison;
pub mod gemini;
pub mod generate_content_parameters;
pub mod predict_parameters;
