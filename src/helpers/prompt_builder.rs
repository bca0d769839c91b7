pub struct PromptBuilder;

impl PromptBuilder {
    /// Joins the system prompt and the input with a newline.
    ///
    /// Only the presence of `system_prompt` matters: `Some("")` still yields
    /// `"\n{text_input}"`.
    pub fn compose_request(text_input: &str, system_prompt: Option<&str>) -> String {
        match system_prompt {
            Some(system_prompt) => format!("{}\n{}", system_prompt, text_input),
            None => text_input.to_string(),
        }
    }

    /// Renders at most `limit` examples, numbered from 1, joined by newlines.
    pub fn few_shots_block(few_shots: &[String], limit: usize) -> String {
        few_shots
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, shot)| format!("Example {}:\n{}########\n", index + 1, shot))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The text handed to the first optimizer pass.
    pub fn optimization_input(system_prompt: &str, few_shots: Option<&[String]>, limit: usize) -> String {
        match few_shots {
            Some(few_shots) if !few_shots.is_empty() => {
                format!("{}\n{}", system_prompt, Self::few_shots_block(few_shots, limit))
            }
            _ => system_prompt.to_string(),
        }
    }
}
