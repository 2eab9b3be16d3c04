// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Serialize;

/// A flashcard. Immutable after creation.
///
/// Two cards with the same front and back are the same logical card:
/// equality and hashing ignore the hint and tags, so a card keeps its
/// identity across serialization boundaries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flashcard {
    /// The prompt shown to the learner.
    front: String,
    /// The answer.
    back: String,
    /// An optional explicit hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    /// Free-form tags, order-preserving.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

impl Flashcard {
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        hint: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            hint,
            tags,
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the given (front, back) pair identifies this card.
    pub fn matches(&self, front: &str, back: &str) -> bool {
        self.front == front && self.back == back
    }
}

impl PartialEq for Flashcard {
    fn eq(&self, other: &Self) -> bool {
        self.front == other.front && self.back == other.back
    }
}

impl Eq for Flashcard {}

impl Hash for Flashcard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.front.hash(state);
        self.back.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_hint_and_tags() {
        let a = Flashcard::new(
            "der Tisch",
            "the table",
            Some("Starts with T".to_string()),
            vec![],
        );
        let b = Flashcard::new("der Tisch", "the table", None, vec!["noun".to_string()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_backs_are_different_cards() {
        let a = Flashcard::new("bonjour", "hello", None, vec![]);
        let b = Flashcard::new("bonjour", "good day", None, vec![]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_omits_absent_hint() {
        let card = Flashcard::new("el gato", "the cat", None, vec![]);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"front":"el gato","back":"the cat"}"#);
        let back: Flashcard = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hint(), None);
        assert!(back.tags().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let card = Flashcard::new(
            "la silla",
            "the chair",
            Some("Starts with S".to_string()),
            vec!["noun".to_string(), "spanish".to_string()],
        );
        let json = serde_json::to_string(&card).unwrap();
        let back: Flashcard = serde_json::from_str(&json).unwrap();
        assert_eq!(back.front(), "la silla");
        assert_eq!(back.back(), "the chair");
        assert_eq!(back.hint(), Some("Starts with S"));
        assert_eq!(back.tags(), ["noun", "spanish"]);
    }
}
