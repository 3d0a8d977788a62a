//! Repository modules. Each adds methods to `VocabDb` via `impl VocabDb` blocks.

pub mod sentence;
