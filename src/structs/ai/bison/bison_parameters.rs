use serde::{Deserialize, Serialize};
use crate::structs::ai::predict_parameters::PredictParameters;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BisonParameters {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl From<PredictParameters> for BisonParameters {
    fn from(parameters: PredictParameters) -> Self {
        Self {
            max_output_tokens: parameters.max_output_tokens,
            temperature: parameters.temperature,
            top_p: parameters.top_p,
        }
    }
}
