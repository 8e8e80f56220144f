//! Keypad digit representation.

use std::fmt::{self, Display};

use crate::{LetterGroup, OutOfRangeError};

/// A phone keypad digit that carries letters, in the range 2-9.
///
/// The keys 0 and 1 have no letters on a typical keypad, so they have no
/// variant here. Once a value has been turned into a `Digit` its letter group
/// lookup cannot fail.
///
/// # Examples
///
/// ```
/// use keypad_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
/// assert_eq!(digit.letter_group().letters(), "jkl");
///
/// // Create from an integer value
/// let digit = Digit::try_from_value(7)?;
/// assert_eq!(digit, Digit::D7);
/// assert!(Digit::try_from_value(1).is_err());
/// # Ok::<(), keypad_core::OutOfRangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 2 (`abc`).
    D2 = 2,
    /// The digit 3 (`def`).
    D3 = 3,
    /// The digit 4 (`ghi`).
    D4 = 4,
    /// The digit 5 (`jkl`).
    D5 = 5,
    /// The digit 6 (`mno`).
    D6 = 6,
    /// The digit 7 (`pqrs`).
    D7 = 7,
    /// The digit 8 (`tuv`).
    D8 = 8,
    /// The digit 9 (`wxyz`).
    D9 = 9,
}

impl Digit {
    /// Array containing all letter-carrying digits from 2 to 9.
    pub const ALL: [Self; 8] = [
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from an integer value in the range 2-9.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] for any other value, including 0, 1,
    /// negative values and values above 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypad_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(2), Ok(Digit::D2));
    /// assert!(Digit::try_from_value(0).is_err());
    /// assert!(Digit::try_from_value(-3).is_err());
    /// assert!(Digit::try_from_value(10).is_err());
    /// ```
    pub const fn try_from_value(value: i32) -> Result<Self, OutOfRangeError> {
        match value {
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            5 => Ok(Self::D5),
            6 => Ok(Self::D6),
            7 => Ok(Self::D7),
            8 => Ok(Self::D8),
            9 => Ok(Self::D9),
            _ => Err(OutOfRangeError { digit: value }),
        }
    }

    /// Parses a single character `'2'..='9'` into a digit.
    ///
    /// Returns `None` for every other character, including `'0'` and `'1'`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::D2),
            '3' => Some(Self::D3),
            '4' => Some(Self::D4),
            '5' => Some(Self::D5),
            '6' => Some(Self::D6),
            '7' => Some(Self::D7),
            '8' => Some(Self::D8),
            '9' => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (2-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the letters printed on this digit's key.
    #[must_use]
    pub const fn letter_group(self) -> LetterGroup {
        LetterGroup::ALL[(self.value() - 2) as usize]
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl TryFrom<i32> for Digit {
    type Error = OutOfRangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}
