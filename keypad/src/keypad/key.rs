/// Represents the keys on a telephone keypad, plus the pause between presses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeypadKey {
    /// The `1` key.
    Key1,
    /// The `2` key.
    Key2,
    /// The `3` key.
    Key3,
    /// The `4` key.
    Key4,
    /// The `5` key.
    Key5,
    /// The `6` key.
    Key6,
    /// The `7` key.
    Key7,
    /// The `8` key.
    Key8,
    /// The `9` key.
    Key9,
    /// The `0` key.
    Key0,
    /// The `*` key, deleting the last character or cancelling the current press sequence.
    KeyAsterisk,
    /// The `#` key, terminating the input.
    KeyHash,
    /// A pause between presses, written as a space.
    ///
    /// Commits the current press sequence without starting a new one.
    Wait,
}

impl KeypadKey {
    /// Converts an input symbol to its [KeypadKey].
    ///
    /// Returns `None` for anything outside the valid symbol set (`0`-`9`, space, `*`, `#`).
    pub fn from_char(c: char) -> Option<KeypadKey> {
        use KeypadKey::*;

        Some(match c {
            '1' => Key1,
            '2' => Key2,
            '3' => Key3,
            '4' => Key4,
            '5' => Key5,
            '6' => Key6,
            '7' => Key7,
            '8' => Key8,
            '9' => Key9,
            '0' => Key0,
            '*' => KeyAsterisk,
            '#' => KeyHash,
            ' ' => Wait,
            _ => return None,
        })
    }

    /// Converts the [KeypadKey] to its corresponding character.
    pub fn to_char(self) -> char {
        use KeypadKey::*;

        match self {
            Key1 => '1',
            Key2 => '2',
            Key3 => '3',
            Key4 => '4',
            Key5 => '5',
            Key6 => '6',
            Key7 => '7',
            Key8 => '8',
            Key9 => '9',
            Key0 => '0',
            KeyAsterisk => '*',
            KeyHash => '#',
            Wait => ' ',
        }
    }

    /// Gets the digit printed on the key, if it is a digit key.
    pub fn digit(self) -> Option<u8> {
        self.to_char().to_digit(10).map(|d| d as u8)
    }
}
