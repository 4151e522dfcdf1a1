//! The table of characters assigned to each digit key.

use std::num::NonZero;
use crate::{KeyMapError, KeyMapResult};

/// The characters printed on a classic phone keypad, indexed by digit.
pub const STANDARD_KEYS: [&[char]; 10] = [
    &[' '],
    &['&', '\'', '(', ')'],
    &['A', 'B', 'C'],
    &['D', 'E', 'F'],
    &['G', 'H', 'I'],
    &['J', 'K', 'L'],
    &['M', 'N', 'O'],
    &['P', 'Q', 'R', 'S'],
    &['T', 'U', 'V'],
    &['W', 'X', 'Y', 'Z'],
];

/// Maps each digit key to the ordered characters selected by pressing it repeatedly.
///
/// Every digit from `0` to `9` has an entry, and no entry is empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyMap {
    keys: [Box<[char]>; 10],
}

impl KeyMap {
    /// Creates the standard key map ([STANDARD_KEYS]).
    pub fn standard() -> Self {
        KeyMap {
            keys: STANDARD_KEYS.map(Box::from),
        }
    }

    /// Creates a key map from the characters assigned to each digit, in digit order.
    ///
    /// # Errors
    /// - `KeyMapError::EmptyEntry` if any digit has no characters.
    pub fn new(keys: [Vec<char>; 10]) -> KeyMapResult<Self> {
        if let Some(digit) = keys.iter().position(|chars| chars.is_empty()) {
            return Err(KeyMapError::EmptyEntry(digit as u8));
        }

        Ok(KeyMap {
            keys: keys.map(Vec::into_boxed_slice),
        })
    }

    /// Creates a key map from one string per digit, each string listing that digit's characters.
    ///
    /// # Errors
    /// - `KeyMapError::WrongLength` if there are not exactly ten entries.
    /// - `KeyMapError::EmptyEntry` if any entry is empty.
    pub fn from_strs<S: AsRef<str>>(entries: &[S]) -> KeyMapResult<Self> {
        let keys: [Vec<char>; 10] = entries
            .iter()
            .map(|s| s.as_ref().chars().collect())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| KeyMapError::WrongLength(entries.len()))?;
        Self::new(keys)
    }

    /// Gets the characters assigned to `digit`.
    ///
    /// # Panics
    /// If `digit` is greater than 9.
    pub fn chars_for(&self, digit: u8) -> &[char] {
        &self.keys[digit as usize]
    }

    /// Gets the character selected by pressing the `digit` key `presses` times in a row.
    ///
    /// Presses beyond the number of assigned characters wrap around to the first one.
    ///
    /// # Panics
    /// If `digit` is greater than 9.
    pub fn char_for_presses(&self, digit: u8, presses: NonZero<usize>) -> char {
        let chars = self.chars_for(digit);
        chars[(presses.get() - 1) % chars.len()]
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::standard()
    }
}
