/// Sampling parameters accepted by the legacy `text-bison` predictor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictParameters {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}
