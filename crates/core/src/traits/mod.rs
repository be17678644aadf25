//! Core traits for pluggable backends

mod tagger;

pub use tagger::PosTagger;
