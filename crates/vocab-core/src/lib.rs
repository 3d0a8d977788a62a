//! # vocab-core
//!
//! Core types for vocab-mate.
//!
//! This crate provides the foundational types shared across all vocab-mate crates:
//! - The persisted `DailySentence` entity and the transient records exchanged
//!   with the generative text service
//! - The response envelope returned by a daily batch run
//! - Content hashing used as the deduplication key

pub mod entities;
pub mod hash;
pub mod responses;

pub use hash::generate_hash_key;
