use crate::structs::message::Message;

/// Renders messages as `role: text` lines.
///
/// Every entry of every message is written in order. Trailing whitespace,
/// including the final newline, is trimmed; leading whitespace is kept.
pub fn format_transcript(messages: &[Message]) -> String {
    let mut transcript = String::new();
    for message in messages {
        for (role, text) in message.entries() {
            transcript.push_str(&format!("{}: {}\n", role, text));
        }
    }

    transcript.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn renders_user_and_assistant_lines() {
        let messages = vec![Message::user("hi"), Message::assistant("hello")];
        assert_eq!(format_transcript(&messages), "user: hi\nassistant: hello");
    }

    #[test]
    fn empty_transcript_is_empty() {
        assert_eq!(format_transcript(&[]), "");
    }

    #[test]
    fn renders_every_entry_and_unknown_roles() {
        let messages = vec![
            Message::user("question").with_entry("system", "note"),
            Message::new("tool", "42"),
        ];

        assert_eq!(format_transcript(&messages), "user: question\nsystem: note\ntool: 42");
    }

    #[test]
    fn keeps_leading_whitespace_and_trims_the_tail() {
        let messages = vec![Message::user("  indented"), Message::assistant("done  \n\n")];
        assert_eq!(format_transcript(&messages), "user:   indented\nassistant: done");
    }

    #[test]
    fn does_not_touch_its_input() {
        let messages = vec![Message::user("hi ")];
        let before = messages.clone();
        let _ = format_transcript(&messages);
        assert_eq!(messages, before);
    }

    proptest! {
        #[test]
        fn output_never_ends_with_whitespace(
            pairs in proptest::collection::vec(("[a-z]{1,8}", "\\PC{0,20}"), 0..6)
        ) {
            let messages: Vec<Message> = pairs
                .into_iter()
                .map(|(role, text)| Message::new(role, text))
                .collect();
            let transcript = format_transcript(&messages);

            prop_assert!(!transcript.ends_with(char::is_whitespace));
        }
    }
}
