use std::fmt;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One transcript entry: a role label mapped to its text.
///
/// Usually holds a single `(role, text)` pair, but every pair is kept in the
/// order it was given. Serialized as a JSON object such as `{"user": "hi"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    entries: Vec<(String, String)>,
}

impl Message {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            entries: vec![(role.into(), text.into())],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new("user", text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new("assistant", text)
    }

    pub fn with_entry(mut self, role: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.push((role.into(), text.into()));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(role, text)| (role.as_str(), text.as_str()))
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (role, text) in &self.entries {
            map.serialize_entry(role, text)?;
        }
        map.end()
    }
}

struct MessageVisitor;

impl<'de> Visitor<'de> for MessageVisitor {
    type Value = Message;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an object mapping role names to message text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(1));
        while let Some((role, text)) = access.next_entry::<String, String>()? {
            entries.push((role, text));
        }
        Ok(Message { entries })
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MessageVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_json_key_order() {
        let message: Message = serde_json::from_str(r#"{"user": "hi", "assistant": "hello", "tool": "ok"}"#).unwrap();
        let roles: Vec<&str> = message.entries().map(|(role, _)| role).collect();

        assert_eq!(roles, vec!["user", "assistant", "tool"]);
    }

    #[test]
    fn serializes_as_an_object() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"user":"hi"}"#);
    }

    #[test]
    fn rejects_non_string_text() {
        assert!(serde_json::from_str::<Message>(r#"{"user": 3}"#).is_err());
    }
}
