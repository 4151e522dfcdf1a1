pub mod keypad;
pub mod keymap;
pub mod decoder;

use std::sync::LazyLock;
use thiserror::Error;
pub use decoder::PhonePad;
pub use keymap::KeyMap;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum DecodeError {
    #[error("an empty string is not valid input")]
    EmptyInput,
    #[error("invalid input: {0:?}")]
    InvalidCharacter(char),
    #[error("end of input reached without terminating '#' token")]
    MissingTerminator,
    #[error("unexpected input beyond terminating '#' token")]
    TrailingInput,
}

pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum KeyMapError {
    #[error("key {0} has no characters assigned")]
    EmptyEntry(u8),
    #[error("expected 10 key entries, got {0}")]
    WrongLength(usize),
}

pub type KeyMapResult<T> = Result<T, KeyMapError>;

static STANDARD_PHONE_PAD: LazyLock<PhonePad> = LazyLock::new(PhonePad::default);

/// Decodes `input` using the standard key map.
///
/// Shorthand for [PhonePad::decode] on a shared, process-wide decoder.
pub fn decode(input: &str) -> DecodeResult<String> {
    STANDARD_PHONE_PAD.decode(input)
}
