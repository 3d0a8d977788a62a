//! # vocab-daily
//!
//! The daily sentence pipeline: read known sentences, ask the generative
//! service for new source/target pairs, drop anything already stored (by
//! content hash), translate the survivors into the auxiliary language, and
//! persist the result.
//!
//! Only storage failures are errors. A failed or unparseable generative call
//! yields an empty batch.

mod error;
mod generator;
mod merge;

pub use error::DailyError;
pub use generator::DailySentenceGenerator;
pub use merge::merge_translations;
