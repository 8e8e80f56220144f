//! Letter permutations of phone keypad digit strings.
//!
//! [`PermutationEngine`] validates a digit string and enumerates every way of
//! picking one letter from each digit's key. Permutations are delivered in
//! odometer order: the last position changes on every permutation and the
//! first position changes least often.
//!
//! Two delivery styles are available:
//!
//! - **Callback**: [`PermutationEngine::permute`] and
//!   [`PermutationEngine::try_permute`] call a handler once per permutation.
//!   The fallible form stops at the first handler error and returns it.
//! - **Lazy sequence**: [`PermutationEngine::permutations`] returns a
//!   [`Permutations`] iterator yielding owned strings one at a time.
//!
//! # Examples
//!
//! ```
//! use keypad_permuter::PermutationEngine;
//!
//! let engine = PermutationEngine::new();
//!
//! let mut seen = Vec::new();
//! engine.permute("23", |permutation| seen.push(permutation.to_owned()))?;
//! assert_eq!(seen, ["ad", "ae", "af", "bd", "be", "bf", "cd", "ce", "cf"]);
//!
//! let lazy: Vec<_> = engine.permutations("23")?.collect();
//! assert_eq!(lazy, seen);
//! # Ok::<(), keypad_permuter::InputError>(())
//! ```

pub use keypad_core::{Digit, InputError, InputSequence, LetterGroup, OutOfRangeError};

pub use self::{engine::*, permutations::*};

mod engine;
mod permutations;
