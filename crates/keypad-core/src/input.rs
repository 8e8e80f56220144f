//! Validation of user supplied digit strings.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, InputError, LetterGroup};

/// A validated, non-empty sequence of keypad digits 2-9.
///
/// # Examples
///
/// ```
/// use keypad_core::{Digit, InputError, InputSequence};
///
/// let input = InputSequence::parse("29")?;
/// assert_eq!(input.digits(), &[Digit::D2, Digit::D9]);
/// assert_eq!(input.to_string(), "29");
///
/// assert_eq!(InputSequence::parse(""), Err(InputError::Empty));
/// assert_eq!(
///     InputSequence::parse("21"),
///     Err(InputError::DigitOutOfRange { index: 1, digit: '1' })
/// );
/// # Ok::<(), InputError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSequence {
    digits: Vec<Digit>,
}

impl InputSequence {
    /// Validates `input` and converts it into a digit sequence.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if `input` is empty, contains a character that is
    /// not a decimal digit, or contains the digits `0` or `1`.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        if input.is_empty() {
            return Err(InputError::Empty);
        }
        let digits = input
            .chars()
            .enumerate()
            .map(|(index, character)| match Digit::from_char(character) {
                Some(digit) => Ok(digit),
                None if character.is_ascii_digit() => Err(InputError::DigitOutOfRange {
                    index,
                    digit: character,
                }),
                None => Err(InputError::InvalidCharacter { index, character }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { digits })
    }

    /// Like [`InputSequence::parse`], treating `None` as an absent input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Missing`] for `None`, otherwise the errors of
    /// [`InputSequence::parse`].
    pub fn parse_optional(input: Option<&str>) -> Result<Self, InputError> {
        input.ok_or(InputError::Missing).and_then(Self::parse)
    }

    /// Returns the digits of this sequence. Never empty.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns the letter group of each digit, in input order.
    pub fn letter_groups(&self) -> impl ExactSizeIterator<Item = LetterGroup> + '_ {
        self.digits.iter().copied().map(Digit::letter_group)
    }

    /// Returns the number of permutations this sequence produces.
    ///
    /// This is the product of the letter group sizes. Returns `None` when the
    /// product does not fit in a `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypad_core::InputSequence;
    ///
    /// assert_eq!(InputSequence::parse("27")?.permutation_count(), Some(12));
    /// assert_eq!(InputSequence::parse(&"9".repeat(40))?.permutation_count(), None);
    /// # Ok::<(), keypad_core::InputError>(())
    /// ```
    #[must_use]
    pub fn permutation_count(&self) -> Option<u64> {
        self.letter_groups().try_fold(1_u64, |count, group| {
            u64::try_from(group.len())
                .ok()
                .and_then(|len| count.checked_mul(len))
        })
    }
}

impl FromStr for InputSequence {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for InputSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            Display::fmt(digit, f)?;
        }
        Ok(())
    }
}

/// Returns `true` if `input` is present, non-empty and made only of digits 2-9.
///
/// # Examples
///
/// ```
/// use keypad_core::validate;
///
/// assert!(validate(Some("258")));
/// assert!(!validate(Some("")));
/// assert!(!validate(Some("ksdjhf")));
/// assert!(!validate(None));
/// ```
#[must_use]
pub fn validate(input: Option<&str>) -> bool {
    InputSequence::parse_optional(input).is_ok()
}
