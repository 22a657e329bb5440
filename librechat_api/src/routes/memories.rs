use super::api;
use crate::query::encode_component;

pub fn memories() -> String {
    api(&["memories"])
}

/// A single memory; the key is encoded.
pub fn memory(key: &str) -> String {
    api(&["memories", encode_component(key).as_str()])
}

pub fn memory_preferences() -> String {
    api(&["memories", "preferences"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_key_is_encoded() {
        assert_eq!(memory("favorite color"), "/librechat/api/memories/favorite%20color");
        assert_eq!(memory("a/b"), "/librechat/api/memories/a%2Fb");
    }
}
