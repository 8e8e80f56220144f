use std::convert::Infallible;

use keypad_core::{InputError, InputSequence, LetterGroup, OutOfRangeError};

use crate::Permutations;

/// Enumerates the letter permutations of keypad digit strings.
///
/// The engine only refers to the constant letter-group table. Every call
/// validates its input first and uses its own scratch buffer, so one engine
/// can be reused for any number of inputs.
///
/// Enumeration runs a mixed-radix counter over the letter groups: position 0
/// is the most significant digit and the last position the least significant,
/// so permutations come out in odometer order. One buffer is refilled per
/// step and handed to the handler once every position holds a letter. Input
/// length only affects the size of that buffer, never the call depth.
///
/// # Examples
///
/// ```
/// use keypad_permuter::{InputError, PermutationEngine};
///
/// let engine = PermutationEngine::new();
///
/// let mut count = 0;
/// engine.permute("258", |_| count += 1)?;
/// assert_eq!(count, 27);
///
/// assert_eq!(engine.permute("", |_| {}), Err(InputError::Empty));
/// # Ok::<(), InputError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermutationEngine;

impl PermutationEngine {
    /// Creates an engine using the standard keypad layout.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the letter group for `digit`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `digit` is not in the range 2-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypad_permuter::PermutationEngine;
    ///
    /// let engine = PermutationEngine::new();
    /// assert_eq!(engine.lookup_letter_group(5)?.letters(), "jkl");
    /// assert!(engine.lookup_letter_group(0).is_err());
    /// # Ok::<(), keypad_permuter::OutOfRangeError>(())
    /// ```
    pub fn lookup_letter_group(&self, digit: i32) -> Result<LetterGroup, OutOfRangeError> {
        keypad_core::lookup_letter_group(digit)
    }

    /// Returns `true` if `input` can be permuted.
    ///
    /// `None`, the empty string, and strings containing anything other than the
    /// digits 2-9 are rejected.
    #[must_use]
    pub fn validate(&self, input: Option<&str>) -> bool {
        keypad_core::validate(input)
    }

    /// Calls `on_permutation` once for every permutation of `input`.
    ///
    /// For input that may be absent, validate it with
    /// [`InputSequence::parse_optional`] and call
    /// [`PermutationEngine::permute_sequence`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if `input` is not a non-empty string of digits
    /// 2-9. Validation finishes before the first call to `on_permutation`, so an
    /// invalid input never produces a permutation.
    pub fn permute<F>(&self, input: &str, mut on_permutation: F) -> Result<(), InputError>
    where
        F: FnMut(&str),
    {
        self.try_permute(input, |permutation| {
            on_permutation(permutation);
            Ok(())
        })
    }

    /// Calls `on_permutation` once for every permutation of `input`, stopping
    /// at the first error it returns.
    ///
    /// # Errors
    ///
    /// Returns the validation error converted into `E` if `input` is invalid,
    /// or the first error returned by `on_permutation`. No permutation is
    /// produced after a handler error.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypad_permuter::{InputError, PermutationEngine};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Stop {
    ///     Found(String),
    ///     Invalid(InputError),
    /// }
    ///
    /// impl From<InputError> for Stop {
    ///     fn from(e: InputError) -> Self {
    ///         Stop::Invalid(e)
    ///     }
    /// }
    ///
    /// let engine = PermutationEngine::new();
    /// let result = engine.try_permute("228", |permutation| {
    ///     if permutation.starts_with("ca") {
    ///         return Err(Stop::Found(permutation.to_owned()));
    ///     }
    ///     Ok(())
    /// });
    /// assert_eq!(result, Err(Stop::Found("cat".to_owned())));
    /// ```
    pub fn try_permute<F, E>(&self, input: &str, on_permutation: F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
        E: From<InputError>,
    {
        let input = InputSequence::parse(input)?;
        self.try_permute_sequence(&input, on_permutation)
    }

    /// Calls `on_permutation` once for every permutation of an already
    /// validated sequence.
    pub fn permute_sequence<F>(&self, input: &InputSequence, mut on_permutation: F)
    where
        F: FnMut(&str),
    {
        let Ok(()) = self.try_permute_sequence(input, |permutation| {
            on_permutation(permutation);
            Ok::<(), Infallible>(())
        });
    }

    /// Calls `on_permutation` once for every permutation of an already
    /// validated sequence, stopping at the first error it returns.
    ///
    /// # Errors
    ///
    /// Returns the first error returned by `on_permutation`.
    pub fn try_permute_sequence<F, E>(
        &self,
        input: &InputSequence,
        mut on_permutation: F,
    ) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        match input.permutation_count() {
            Some(count) => log::debug!("permuting {input}: {count} permutations"),
            None => log::debug!("permuting {input}: more than {} permutations", u64::MAX),
        }

        let mut permutations = self.sequence_permutations(input);
        let mut buffer = String::with_capacity(input.digits().len());
        while permutations.next_into(&mut buffer) {
            log::trace!("permutation {buffer}");
            on_permutation(&buffer)?;
        }
        Ok(())
    }

    /// Returns a lazy iterator over the permutations of `input`.
    ///
    /// The iterator yields the same permutations in the same order as
    /// [`PermutationEngine::permute`]. It cannot be restarted once consumed.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if `input` is not a non-empty string of digits
    /// 2-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use keypad_permuter::PermutationEngine;
    ///
    /// let engine = PermutationEngine::new();
    /// let mut permutations = engine.permutations("9")?;
    /// assert_eq!(permutations.next().as_deref(), Some("w"));
    /// assert_eq!(permutations.size_hint(), (3, Some(3)));
    /// assert_eq!(permutations.last().as_deref(), Some("z"));
    /// # Ok::<(), keypad_permuter::InputError>(())
    /// ```
    pub fn permutations(&self, input: &str) -> Result<Permutations, InputError> {
        let input = InputSequence::parse(input)?;
        Ok(self.sequence_permutations(&input))
    }

    /// Returns a lazy iterator over the permutations of an already validated
    /// sequence.
    #[must_use]
    pub fn sequence_permutations(&self, input: &InputSequence) -> Permutations {
        Permutations::new(input.letter_groups())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn collect(input: &str) -> Result<Vec<String>, InputError> {
        let mut permutations = Vec::new();
        PermutationEngine::new().permute(input, |permutation| {
            permutations.push(permutation.to_owned());
        })?;
        Ok(permutations)
    }

    fn as_set(permutations: &[String]) -> HashSet<&str> {
        permutations.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_permute_single_digits() {
        assert_eq!(collect("2").unwrap(), ["a", "b", "c"]);
        assert_eq!(collect("9").unwrap(), ["w", "x", "y", "z"]);
    }

    #[test]
    fn test_permute_258() {
        let expected: HashSet<&str> = [
            "ajt", "aju", "ajv", "akt", "aku", "akv", "alt", "alu", "alv", //
            "bjt", "bju", "bjv", "bkt", "bku", "bkv", "blt", "blu", "blv", //
            "cjt", "cju", "cjv", "ckt", "cku", "ckv", "clt", "clu", "clv",
        ]
        .into_iter()
        .collect();

        let permutations = collect("258").unwrap();
        assert_eq!(permutations.len(), 27);
        assert_eq!(as_set(&permutations), expected);
        assert_eq!(permutations[0], "ajt");
        assert_eq!(permutations[1], "aju");
        assert_eq!(permutations[3], "akt");
        assert_eq!(permutations[9], "bjt");
        assert_eq!(permutations[26], "clv");
    }

    #[test]
    fn test_invalid_inputs_emit_nothing() {
        let engine = PermutationEngine::new();
        for input in ["", "1", "0", "ksdjhf", "2221", "25a"] {
            let mut emitted = 0;
            let result = engine.permute(input, |_| emitted += 1);
            assert!(result.is_err(), "{input:?} should be rejected");
            assert_eq!(emitted, 0, "{input:?} should emit nothing");
        }
        assert!(!engine.validate(None));

        let mut emitted = 0;
        let result = InputSequence::parse_optional(None)
            .map(|input| engine.permute_sequence(&input, |_| emitted += 1));
        assert_eq!(result, Err(InputError::Missing));
        assert_eq!(emitted, 0);
    }

    #[test]
    fn test_lookup_letter_group() {
        let engine = PermutationEngine::new();
        assert_eq!(
            engine.lookup_letter_group(2).map(LetterGroup::letters),
            Ok("abc")
        );
        assert_eq!(
            engine.lookup_letter_group(9).map(LetterGroup::letters),
            Ok("wxyz")
        );
        for digit in [-7, 0, 1, 10] {
            assert_eq!(
                engine.lookup_letter_group(digit),
                Err(OutOfRangeError { digit })
            );
        }
    }

    #[test]
    fn test_handler_error_aborts() {
        #[derive(Debug, PartialEq)]
        enum Error {
            Input(InputError),
            Stop,
        }
        impl From<InputError> for Error {
            fn from(e: InputError) -> Self {
                Error::Input(e)
            }
        }

        let engine = PermutationEngine::new();
        let mut seen = Vec::new();
        let result = engine.try_permute("234", |permutation| {
            seen.push(permutation.to_owned());
            if seen.len() == 5 {
                return Err(Error::Stop);
            }
            Ok(())
        });
        assert_eq!(result, Err(Error::Stop));
        assert_eq!(seen, ["adg", "adh", "adi", "aeg", "aeh"]);

        let result = engine.try_permute("20", |_| Err(Error::Stop));
        assert_eq!(
            result,
            Err(Error::Input(InputError::DigitOutOfRange {
                index: 1,
                digit: '0'
            }))
        );
    }

    #[test]
    fn test_engine_is_reusable() {
        let engine = PermutationEngine::default();
        let mut first = Vec::new();
        engine.permute("79", |p| first.push(p.to_owned())).unwrap();
        let mut second = Vec::new();
        engine.permute("2", |p| second.push(p.to_owned())).unwrap();
        let mut third = Vec::new();
        engine.permute("79", |p| third.push(p.to_owned())).unwrap();
        assert_eq!(first.len(), 16);
        assert_eq!(second, ["a", "b", "c"]);
        assert_eq!(first, third);
    }

    #[test]
    fn test_permute_sequence() {
        let input = InputSequence::parse("46").unwrap();
        let mut seen = Vec::new();
        PermutationEngine::new().permute_sequence(&input, |p| seen.push(p.to_owned()));
        assert_eq!(
            seen,
            ["gm", "gn", "go", "hm", "hn", "ho", "im", "in", "io"]
        );
    }

    #[test]
    fn test_long_input_reaches_handler() {
        let engine = PermutationEngine::new();
        let input = "2".repeat(100_000);

        let mut calls = 0;
        let result = engine.try_permute(&input, |permutation| {
            calls += 1;
            assert_eq!(permutation.len(), input.len());
            assert!(permutation.bytes().all(|b| b == b'a'));
            Err(InputError::Empty)
        });
        assert_eq!(result, Err(InputError::Empty));
        assert_eq!(calls, 1);

        let mut seen = Vec::new();
        let result = engine.try_permute(&input, |permutation| {
            seen.push(permutation[input.len() - 2..].to_owned());
            if seen.len() == 4 {
                return Err(InputError::Empty);
            }
            Ok(())
        });
        assert_eq!(result, Err(InputError::Empty));
        assert_eq!(seen, ["aa", "ab", "ac", "ba"]);
    }

    proptest! {
        #[test]
        fn test_count_membership_and_uniqueness(input in "[2-9]{1,6}") {
            let permutations = collect(&input).unwrap();
            let groups: Vec<LetterGroup> = InputSequence::parse(&input)
                .unwrap()
                .letter_groups()
                .collect();

            let expected: usize = groups.iter().map(|group| group.len()).product();
            prop_assert_eq!(permutations.len(), expected);
            prop_assert_eq!(as_set(&permutations).len(), expected);

            for permutation in &permutations {
                prop_assert_eq!(permutation.chars().count(), groups.len());
                for (letter, group) in permutation.chars().zip(&groups) {
                    prop_assert!(group.contains(letter));
                }
            }
        }

        #[test]
        fn test_last_position_cycles_fastest(input in "[2-9]{1,6}") {
            let groups: Vec<LetterGroup> = InputSequence::parse(&input)
                .unwrap()
                .letter_groups()
                .collect();
            let permutations = collect(&input).unwrap();
            for pair in permutations.windows(2) {
                // Letters within a group ascend, so odometer order is sorted order.
                prop_assert!(pair[0] < pair[1]);

                let (prev, next) = (pair[0].as_bytes(), pair[1].as_bytes());
                let changed = (0..prev.len()).find(|&i| prev[i] != next[i]).unwrap();
                // The changed position advances by one letter...
                let group = groups[changed].letters().as_bytes();
                let prev_index = group.iter().position(|&b| b == prev[changed]).unwrap();
                prop_assert_eq!(group[prev_index + 1], next[changed]);
                // ...and every position to its right wraps back to its first letter.
                for i in changed + 1..prev.len() {
                    prop_assert_eq!(Some(char::from(prev[i])), groups[i].chars().last());
                    prop_assert_eq!(Some(char::from(next[i])), groups[i].letter(0));
                }
            }
        }

        #[test]
        fn test_lazy_matches_callback(input in "[2-9]{1,5}") {
            let lazy: Vec<String> = PermutationEngine::new()
                .permutations(&input)
                .unwrap()
                .collect();
            prop_assert_eq!(lazy, collect(&input).unwrap());
        }
    }
}
