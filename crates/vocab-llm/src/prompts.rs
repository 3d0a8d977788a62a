//! Prompt templates for sentence pair generation and translation.
//!
//! Both prompts ask for a bare JSON array using the camelCase record keys
//! (`sourceText`, `targetText`, `auxText`) and show a worked example.

use vocab_config::GeneratorConfig;

/// Build the sentence pair generation prompt.
///
/// `exclude` lists target-language texts already stored; the model is asked
/// not to repeat them.
pub fn pair_prompt(config: &GeneratorConfig, count: usize, exclude: &[String]) -> String {
    let source = &config.source_language;
    let target = &config.target_language;
    format!(
        r#"You are a {source}-{target} language teacher.
Generate {count} unique daily-use sentences.
Each should be a {source}-{target} pair in JSON format:
[{{"sourceText": "<{source} sentence>", "targetText": "<{target} sentence>"}}]

Do not repeat any of these existing sentences:
{existing}
Sentences should be simple and common in daily life, like greetings, eating, family, work, travel.

IMPORTANT: Return ONLY valid JSON array, no other text or explanations.
Example format: [{{"sourceText": "<{source} for Hello>", "targetText": "Hello"}}, {{"sourceText": "<{source} for Thank you>", "targetText": "Thank you"}}]"#,
        existing = render_list(exclude),
    )
}

/// Build the translation prompt for `texts` (target language → auxiliary).
pub fn translation_prompt(config: &GeneratorConfig, texts: &[String]) -> String {
    let target = &config.target_language;
    let aux = &config.aux_language;
    format!(
        r#"Translate these {target} sentences to {aux}.
Return JSON list of objects: [{{"targetText": "<{target} sentence>", "auxText": "<{aux} translation>"}}]
Sentences: {sentences}

IMPORTANT: Return ONLY valid JSON array, no other text or explanations.
Example format: [{{"targetText": "Hello", "auxText": "<{aux} for Hello>"}}, {{"targetText": "Thank you", "auxText": "<{aux} for Thank you>"}}]"#,
        sentences = render_list(texts),
    )
}

/// Render texts as a JSON string array so quotes and newlines stay escaped.
fn render_list(texts: &[String]) -> String {
    if texts.is_empty() {
        return String::from("(none)");
    }
    serde_json::to_string(texts).unwrap_or_else(|_| texts.join(", "))
}
