//! Core primitives shared by the model and analysis layers.

pub mod text_utils;

pub use text_utils::{is_word_character, word_tokens};
