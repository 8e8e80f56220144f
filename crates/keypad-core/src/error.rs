//! Errors raised by digit lookup and input validation.

/// A digit that has no letters on a phone keypad.
///
/// Only the digits 2-9 carry letters. This error is returned by
/// [`lookup_letter_group`](crate::lookup_letter_group) and
/// [`Digit::try_from_value`](crate::Digit::try_from_value) for any other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "digit {digit} has no letters on a phone keypad; only 2-9 are associated with letters"
)]
pub struct OutOfRangeError {
    /// The rejected value.
    pub digit: i32,
}

/// An input that cannot be permuted.
///
/// Every message names the accepted form: a non-empty string made only of the
/// digits 2-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// No input was supplied at all.
    #[display("no input given; expected a non-empty string of digits 2-9")]
    Missing,
    /// The input contains no characters.
    #[display("input is empty; expected a non-empty string of digits 2-9")]
    Empty,
    /// The input contains a character that is not a decimal digit.
    #[display(
        "{character:?} at position {index} is not a digit; expected a non-empty string of digits 2-9"
    )]
    InvalidCharacter {
        /// Character position in the input (0-based).
        index: usize,
        /// The offending character.
        character: char,
    },
    /// The input contains `0` or `1`, which carry no letters.
    #[display(
        "digit {digit} at position {index} has no letters; expected a non-empty string of digits 2-9"
    )]
    DigitOutOfRange {
        /// Character position in the input (0-based).
        index: usize,
        /// The offending digit character.
        digit: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_constraint() {
        let errors = [
            InputError::Missing,
            InputError::Empty,
            InputError::InvalidCharacter {
                index: 0,
                character: 'k',
            },
            InputError::DigitOutOfRange {
                index: 2,
                digit: '1',
            },
        ];
        for error in errors {
            assert!(
                error.to_string().contains("non-empty string of digits 2-9"),
                "{error}"
            );
        }
    }

    #[test]
    fn test_message_details() {
        let error = InputError::InvalidCharacter {
            index: 3,
            character: 'x',
        };
        assert!(error.to_string().starts_with("'x' at position 3"));

        let error = OutOfRangeError { digit: -4 };
        assert!(error.to_string().starts_with("digit -4 has no letters"));
    }
}
