pub mod bison_instance;
pub mod bison_parameters;
pub mod bison_request;
pub mod bison_response;
