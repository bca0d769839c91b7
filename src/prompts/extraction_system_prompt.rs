pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"Extract the optimized prompt (exclude 'Optimized prompt' or similar from your output) from the following text:
"#;
