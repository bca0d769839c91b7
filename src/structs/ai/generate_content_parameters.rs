/// Sampling parameters accepted by the generative `gemini` content API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateContentParameters {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}
