//! Entity structs for vocab-mate domain objects.
//!
//! `DailySentence` maps to the `daily_sentences` table. The pair and
//! translation records are transient: they only exist between the
//! generative text service and the store.

mod pair;
mod sentence;

pub use pair::{SentencePair, Translation, TrilingualSentence};
pub use sentence::{DailySentence, NewSentence};
