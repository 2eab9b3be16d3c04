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

use crate::types::card::Flashcard;

/// The hint for a card.
///
/// An explicit hint is returned verbatim. Otherwise the hint is
/// derived from the answer: the first character is revealed and every
/// further character is masked with `_`. A one-character answer yields
/// a single `_`, so the full answer is never revealed.
pub fn hint_for(card: &Flashcard) -> String {
    if let Some(hint) = card.hint() {
        return hint.to_string();
    }
    let mut chars = card.back().chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let masked: String = chars.map(|_| '_').collect();
            if masked.is_empty() {
                "_".to_string()
            } else {
                format!("{first}{masked}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_hint_is_returned_verbatim() {
        let card = Flashcard::new(
            "der Tisch",
            "the table",
            Some("Starts with T".to_string()),
            vec![],
        );
        assert_eq!(hint_for(&card), "Starts with T");
    }

    #[test]
    fn test_derived_hint_masks_all_but_first_character() {
        let card = Flashcard::new("bonjour", "hello", None, vec![]);
        assert_eq!(hint_for(&card), "h____");
    }

    #[test]
    fn test_derived_hint_counts_characters_not_bytes() {
        let card = Flashcard::new("thanks", "ありがとう", None, vec![]);
        assert_eq!(hint_for(&card), "あ____");
    }

    #[test]
    fn test_single_character_answer_is_fully_masked() {
        let card = Flashcard::new("one", "1", None, vec![]);
        assert_eq!(hint_for(&card), "_");
    }

    #[test]
    fn test_empty_answer_yields_empty_hint() {
        let card = Flashcard::new("nothing", "", None, vec![]);
        assert_eq!(hint_for(&card), "");
    }

    #[test]
    fn test_hint_is_deterministic() {
        let card = Flashcard::new("el gato", "the cat", None, vec![]);
        assert_eq!(hint_for(&card), hint_for(&card));
    }
}
