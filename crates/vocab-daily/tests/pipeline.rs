//! End-to-end pipeline runs against an in-memory store and a scripted
//! generator.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use vocab_config::GeneratorConfig;
use vocab_core::entities::{NewSentence, SentencePair, TrilingualSentence};
use vocab_core::responses::BatchStatus;
use vocab_daily::{DailyError, DailySentenceGenerator};
use vocab_db::VocabDb;
use vocab_llm::{MockGenerator, MockReply};

const HELLO_AND_THANKS: &str = r#"[
    {"hindi": "नमस्ते", "english": "Hello"},
    {"hindi": "धन्यवाद", "english": "Thank you"}
]"#;

const THANKS_DANKE: &str = r#"[{"english": "Thank you", "german": "Danke"}]"#;

async fn memory_db() -> Arc<VocabDb> {
    Arc::new(VocabDb::open_local(":memory:").await.unwrap())
}

fn pipeline(
    db: &Arc<VocabDb>,
    mock: &Arc<MockGenerator>,
    config: GeneratorConfig,
) -> DailySentenceGenerator {
    let generator: Arc<MockGenerator> = Arc::clone(mock);
    DailySentenceGenerator::new(Arc::clone(db), generator, config)
}

fn trilingual(source: &str, target: &str, aux: &str) -> TrilingualSentence {
    TrilingualSentence {
        source_text: source.into(),
        target_text: target.into(),
        aux_text: aux.into(),
    }
}

#[tokio::test]
async fn stored_sentence_is_excluded_and_new_one_translated() {
    let db = memory_db().await;
    db.insert_sentence(&NewSentence::new("नमस्ते", "Hello", "Hallo"))
        .await
        .unwrap();
    let mock = Arc::new(MockGenerator::replying([HELLO_AND_THANKS, THANKS_DANKE]));

    let response = pipeline(&db, &mock, GeneratorConfig::default())
        .generate_daily_batch()
        .await
        .unwrap();

    assert_eq!(
        response.sentences,
        vec![trilingual("धन्यवाद", "Thank you", "Danke")]
    );
    assert_eq!(response.status, BatchStatus::NewlyGenerated);
    assert_eq!(response.total_sentences_in_db, 2);

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].prompt.contains(r#"["Hello"]"#));
    assert!((requests[0].temperature - 0.8).abs() < f32::EPSILON);
    assert!(requests[1].prompt.contains(r#"Sentences: ["Thank you"]"#));
    assert!((requests[1].temperature - 0.7).abs() < f32::EPSILON);
}

#[tokio::test]
async fn second_run_with_same_pairs_adds_nothing() {
    let db = memory_db().await;
    let mock = Arc::new(MockGenerator::replying([
        HELLO_AND_THANKS,
        r#"[{"english": "Hello", "german": "Hallo"}, {"english": "Thank you", "german": "Danke"}]"#,
        HELLO_AND_THANKS,
    ]));
    let daily = pipeline(&db, &mock, GeneratorConfig::default());

    let first = daily.generate_daily_batch().await.unwrap();
    assert_eq!(first.sentences.len(), 2);
    assert_eq!(first.total_sentences_in_db, 2);

    let second = daily.generate_daily_batch().await.unwrap();
    assert!(second.sentences.is_empty());
    assert_eq!(second.total_sentences_in_db, 2);
    // Nothing accepted, so no translation call.
    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn accepted_count_is_capped_at_batch_size() {
    let db = memory_db().await;
    let pairs = r#"[
        {"sourceText": "एक", "targetText": "One"},
        {"sourceText": "दो", "targetText": "Two"},
        {"sourceText": "तीन", "targetText": "Three"},
        {"sourceText": "चार", "targetText": "Four"}
    ]"#;
    let mock = Arc::new(MockGenerator::replying([pairs, "[]"]));
    let config = GeneratorConfig {
        batch_size: 2,
        ..GeneratorConfig::default()
    };

    let response = pipeline(&db, &mock, config)
        .generate_daily_batch()
        .await
        .unwrap();

    let targets: Vec<&str> = response
        .sentences
        .iter()
        .map(|s| s.target_text.as_str())
        .collect();
    assert_eq!(targets, vec!["One", "Two"]);
    assert_eq!(response.total_sentences_in_db, 2);
    assert!(mock.requests()[0].prompt.contains("Generate 2 unique"));
    assert!(mock.requests()[1].prompt.contains(r#"Sentences: ["One","Two"]"#));
}

#[tokio::test]
async fn missing_translation_is_stored_as_empty() {
    let db = memory_db().await;
    let mock = Arc::new(MockGenerator::replying([HELLO_AND_THANKS, THANKS_DANKE]));

    let response = pipeline(&db, &mock, GeneratorConfig::default())
        .generate_daily_batch()
        .await
        .unwrap();

    assert_eq!(
        response.sentences,
        vec![
            trilingual("नमस्ते", "Hello", ""),
            trilingual("धन्यवाद", "Thank you", "Danke"),
        ]
    );
    let stored = db
        .get_sentence_by_hash(&vocab_core::generate_hash_key("hello"))
        .await
        .unwrap();
    assert_eq!(stored.aux_text, "");
}

#[rstest]
#[case::prose_only(MockReply::Text("I'm sorry, I can't do that today.".into()))]
#[case::service_error(MockReply::Error("connection reset".into()))]
#[case::empty_array(MockReply::Text("[]".into()))]
#[tokio::test]
async fn unusable_pair_response_yields_empty_batch(#[case] reply: MockReply) {
    let db = memory_db().await;
    db.insert_sentence(&NewSentence::new("नमस्ते", "Hello", "Hallo"))
        .await
        .unwrap();
    let mock = Arc::new(MockGenerator::new([reply]));

    let response = pipeline(&db, &mock, GeneratorConfig::default())
        .generate_daily_batch()
        .await
        .unwrap();

    assert!(response.sentences.is_empty());
    assert_eq!(response.total_sentences_in_db, 1);
    assert_eq!(mock.call_count(), 1);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["sentences"], serde_json::json!([]));
    assert_eq!(json["status"], "newly_generated");
}

#[tokio::test]
async fn failed_translation_still_persists_pairs() {
    let db = memory_db().await;
    let mock = Arc::new(MockGenerator::new([
        MockReply::Text(HELLO_AND_THANKS.into()),
        MockReply::Error("timeout".into()),
    ]));

    let response = pipeline(&db, &mock, GeneratorConfig::default())
        .generate_daily_batch()
        .await
        .unwrap();

    assert_eq!(response.sentences.len(), 2);
    assert!(response.sentences.iter().all(|s| s.aux_text.is_empty()));
    assert_eq!(response.total_sentences_in_db, 2);
}

#[tokio::test]
async fn case_variants_are_deduplicated() {
    let db = memory_db().await;
    db.insert_sentence(&NewSentence::new("नमस्ते", "Hello", "Hallo"))
        .await
        .unwrap();
    let pairs = r#"[
        {"hindi": "नमस्ते", "english": "HELLO"},
        {"hindi": "शुभ प्रभात", "english": "Good morning"},
        {"hindi": "सुप्रभात", "english": "good morning"}
    ]"#;
    let mock = Arc::new(MockGenerator::replying([
        pairs,
        r#"[{"english": "Good morning", "german": "Guten Morgen"}]"#,
    ]));

    let response = pipeline(&db, &mock, GeneratorConfig::default())
        .generate_daily_batch()
        .await
        .unwrap();

    assert_eq!(
        response.sentences,
        vec![trilingual("शुभ प्रभात", "Good morning", "Guten Morgen")]
    );
    assert_eq!(response.total_sentences_in_db, 2);
}

#[tokio::test]
async fn fenced_and_bare_pair_responses_agree() {
    let db = memory_db().await;
    let fenced = format!("Here are your sentences:\n```json\n{HELLO_AND_THANKS}\n```");
    let mock = Arc::new(MockGenerator::replying([HELLO_AND_THANKS.to_string(), fenced]));
    let daily = pipeline(&db, &mock, GeneratorConfig::default());

    let bare = daily.request_source_pairs(&[], 2).await;
    let fenced = daily.request_source_pairs(&[], 2).await;

    assert_eq!(
        bare,
        vec![
            SentencePair::new("नमस्ते", "Hello"),
            SentencePair::new("धन्यवाद", "Thank you"),
        ]
    );
    assert_eq!(fenced, bare);
}

#[tokio::test]
async fn translation_request_failure_is_empty() {
    let db = memory_db().await;
    let mock = Arc::new(MockGenerator::new([MockReply::Text("no json here".into())]));
    let daily = pipeline(&db, &mock, GeneratorConfig::default());

    assert!(daily.request_translations(&["Hello".to_string()]).await.is_empty());
}

#[tokio::test]
async fn storage_failure_is_an_error() {
    let db = memory_db().await;
    db.conn()
        .execute("DROP TABLE daily_sentences", ())
        .await
        .unwrap();
    let mock = Arc::new(MockGenerator::replying([HELLO_AND_THANKS]));

    let err = pipeline(&db, &mock, GeneratorConfig::default())
        .generate_daily_batch()
        .await
        .unwrap_err();

    assert!(matches!(err, DailyError::Store(_)));
    assert_eq!(mock.call_count(), 0);
}
