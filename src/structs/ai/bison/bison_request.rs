use serde::{Deserialize, Serialize};
use crate::structs::ai::bison::bison_instance::BisonInstance;
use crate::structs::ai::bison::bison_parameters::BisonParameters;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BisonRequest {
    pub instances: Vec<BisonInstance>,
    pub parameters: BisonParameters,
}
