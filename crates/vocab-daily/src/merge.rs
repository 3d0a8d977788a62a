use std::collections::HashMap;

use vocab_core::entities::{NewSentence, SentencePair, Translation};

/// Attach auxiliary-language texts to accepted pairs by exact target text.
///
/// Pairs without a matching translation get an empty `aux_text`. When the
/// service returns the same target text twice, the later translation wins.
pub fn merge_translations(pairs: &[SentencePair], translations: Vec<Translation>) -> Vec<NewSentence> {
    let lookup: HashMap<String, String> = translations
        .into_iter()
        .map(|t| (t.target_text, t.aux_text))
        .collect();
    tracing::debug!(?lookup, "daily: translation lookup");

    pairs
        .iter()
        .map(|pair| {
            let aux = lookup.get(&pair.target_text).map_or("", String::as_str);
            NewSentence::new(&pair.source_text, &pair.target_text, aux)
        })
        .collect()
}
