//! Core traits and types for edittools
//!
//! This crate provides the foundational types shared by the other crates:
//! - Text ranges handed over by a host document model
//! - Tagged words and the pluggable part-of-speech tagger trait
//! - Error types

pub mod error;
pub mod text;
pub mod traits;

pub use error::{Error, Result};
pub use text::{TaggedWord, TextRange};
pub use traits::PosTagger;
