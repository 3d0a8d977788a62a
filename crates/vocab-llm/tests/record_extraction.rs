//! Extraction of the pipeline's record types from realistic model output.

use pretty_assertions::assert_eq;
use vocab_core::entities::{SentencePair, Translation};
use vocab_llm::extract_records;

#[test]
fn pairs_from_camel_case_keys_in_fence() {
    let content = r#"```json
[
  {"sourceText": "नमस्ते", "targetText": "Hello"},
  {"sourceText": "धन्यवाद", "targetText": "Thank you"}
]
```"#;
    let pairs: Vec<SentencePair> = extract_records(content).unwrap();
    assert_eq!(
        pairs,
        vec![
            SentencePair::new("नमस्ते", "Hello"),
            SentencePair::new("धन्यवाद", "Thank you"),
        ]
    );
}

#[test]
fn pairs_from_language_named_keys() {
    let content = r#"Here you go: [{"hindi": "नमस्ते", "english": "Hello"}]"#;
    let pairs: Vec<SentencePair> = extract_records(content).unwrap();
    assert_eq!(pairs, vec![SentencePair::new("नमस्ते", "Hello")]);
}

#[test]
fn translations_skip_incomplete_entries() {
    let content = r#"[
        {"english": "Thank you", "german": "Danke"},
        {"english": "Good morning"}
    ]"#;
    let translations: Vec<Translation> = extract_records(content).unwrap();
    assert_eq!(translations, vec![Translation::new("Thank you", "Danke")]);
}

#[test]
fn prose_only_yields_nothing() {
    let pairs: Option<Vec<SentencePair>> =
        extract_records("Sorry, I cannot generate sentences right now.");
    assert!(pairs.is_none());
}
