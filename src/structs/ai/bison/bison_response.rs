use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct BisonPrediction {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BisonResponse {
    #[serde(default)]
    pub predictions: Vec<BisonPrediction>,
}

impl BisonResponse {
    pub fn text(&self) -> Option<String> {
        self.predictions.first()?.content.clone()
    }
}
