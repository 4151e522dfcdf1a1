//! Decoding of phone keypad press sequences into text.
//!
//! Input is a string of key symbols. Repeated presses of a digit key cycle through the
//! characters assigned to it, a space (wait) or a different key commits the selected
//! character, `*` cancels the current press sequence (or deletes the last character when
//! nothing is being pressed), and `#` commits and terminates the input.

use std::num::NonZero;
use log::{debug, trace};
use crate::keymap::KeyMap;
use crate::keypad::KeypadKey;
use crate::{DecodeError, DecodeResult};

/// Decodes phone keypad input using a fixed [KeyMap].
///
/// The decoder holds no state between calls, so one instance can be shared freely
/// between threads.
#[derive(Clone, Debug, Default)]
pub struct PhonePad {
    keymap: KeyMap,
}

impl PhonePad {
    pub fn new(keymap: KeyMap) -> Self {
        PhonePad { keymap }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Decodes the whole `input` and returns the resulting text.
    ///
    /// # Errors
    /// - `DecodeError::EmptyInput` if `input` is empty.
    /// - `DecodeError::InvalidCharacter` on the first symbol that is not a keypad key.
    /// - `DecodeError::MissingTerminator` if the input ends before a `#`.
    /// - `DecodeError::TrailingInput` if anything follows the first `#`.
    pub fn decode(&self, input: &str) -> DecodeResult<String> {
        if input.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        debug!("Decoding {} bytes of input.", input.len());

        let mut state = DecodeState::new(&self.keymap);
        let mut symbols = input.chars();

        loop {
            let Some(symbol) = symbols.next() else {
                return Err(DecodeError::MissingTerminator);
            };
            let key = KeypadKey::from_char(symbol)
                .ok_or(DecodeError::InvalidCharacter(symbol))?;

            match key {
                KeypadKey::KeyAsterisk => state.delete(),
                KeypadKey::Wait => state.commit(),
                KeypadKey::KeyHash => {
                    state.commit();
                    break;
                }
                _ => if let Some(digit) = key.digit() {
                    state.press(digit);
                },
            }
        }

        if symbols.next().is_some() {
            return Err(DecodeError::TrailingInput);
        }

        let output = state.output;
        trace!("Decoded {:?}.", output);
        Ok(output)
    }
}

/// The state of a single [PhonePad::decode] call.
struct DecodeState<'a> {
    keymap: &'a KeyMap,
    /// The digit currently being pressed and how many times in a row.
    pending: Option<(u8, NonZero<usize>)>,
    output: String,
}

impl<'a> DecodeState<'a> {
    fn new(keymap: &'a KeyMap) -> Self {
        DecodeState {
            keymap,
            pending: None,
            output: String::new(),
        }
    }

    fn press(&mut self, digit: u8) {
        match self.pending {
            Some((pending, presses)) if pending == digit => {
                self.pending = Some((digit, presses.saturating_add(1)));
            }
            _ => {
                self.commit();
                self.pending = Some((digit, NonZero::<usize>::MIN));
            }
        }
    }

    fn commit(&mut self) {
        if let Some((digit, presses)) = self.pending.take() {
            let c = self.keymap.char_for_presses(digit, presses);
            trace!("Commit {:?} ({} x {}).", c, digit, presses);
            self.output.push(c);
        }
    }

    /// Cancels the current press sequence, or deletes the last committed character if there is none.
    fn delete(&mut self) {
        if let Some((digit, presses)) = self.pending.take() {
            trace!("Cancel {} x {}.", digit, presses);
        } else if let Some(c) = self.output.pop() {
            trace!("Delete {:?}.", c);
        }
    }
}
