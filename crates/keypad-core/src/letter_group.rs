//! The letters printed on each keypad digit.
//!
//! The mapping is a compile-time table of eight groups, indexed by
//! `digit - 2`:
//!
//! | digit | letters |
//! |-------|---------|
//! | 2     | `abc`   |
//! | 3     | `def`   |
//! | 4     | `ghi`   |
//! | 5     | `jkl`   |
//! | 6     | `mno`   |
//! | 7     | `pqrs`  |
//! | 8     | `tuv`   |
//! | 9     | `wxyz`  |

use std::{
    fmt::{self, Display},
    str::Chars,
};

use crate::{Digit, OutOfRangeError};

/// An ordered group of three or four lowercase ASCII letters on one key.
///
/// # Examples
///
/// ```
/// use keypad_core::{Digit, LetterGroup};
///
/// let group = Digit::D7.letter_group();
/// assert_eq!(group.len(), 4);
/// assert_eq!(group.letter(0), Some('p'));
/// assert!(group.contains('s'));
/// assert_eq!(group.chars().collect::<String>(), "pqrs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterGroup(&'static str);

impl LetterGroup {
    /// All letter groups, in digit order starting with digit 2.
    pub const ALL: [Self; 8] = [
        Self("abc"),
        Self("def"),
        Self("ghi"),
        Self("jkl"),
        Self("mno"),
        Self("pqrs"),
        Self("tuv"),
        Self("wxyz"),
    ];

    /// Returns the letters of this group as a string slice.
    #[must_use]
    pub const fn letters(self) -> &'static str {
        self.0
    }

    /// Returns the number of letters in this group (3 or 4).
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.len()
    }

    /// Always `false`; every key carries at least three letters.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Returns the letter at `index` within this group.
    #[must_use]
    pub fn letter(self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).copied().map(char::from)
    }

    /// Returns an iterator over the letters in group order.
    #[must_use]
    pub fn chars(self) -> Chars<'static> {
        self.0.chars()
    }

    /// Returns `true` if `letter` belongs to this group.
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        self.0.contains(letter)
    }
}

impl Display for LetterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<Digit> for LetterGroup {
    fn from(digit: Digit) -> Self {
        digit.letter_group()
    }
}

/// Converts a keypad digit into its letter group.
///
/// For example, 2 maps to `"abc"` and 5 maps to `"jkl"`.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `digit` is not in the range 2-9. The keys 0
/// and 1 have no letters on a typical phone keypad.
///
/// # Examples
///
/// ```
/// use keypad_core::lookup_letter_group;
///
/// assert_eq!(lookup_letter_group(5)?.letters(), "jkl");
/// assert!(lookup_letter_group(1).is_err());
/// # Ok::<(), keypad_core::OutOfRangeError>(())
/// ```
pub fn lookup_letter_group(digit: i32) -> Result<LetterGroup, OutOfRangeError> {
    Digit::try_from_value(digit).map(Digit::letter_group)
}
