//! Core data structures for phone keypad permutation.
//!
//! This crate provides the fundamental types shared by the permutation engine and
//! its front ends: the keypad digits that carry letters, the constant table of
//! letter groups, and validated input sequences.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of the keypad digits 2-9
//! - [`letter_group`]: The letters printed on each digit key, stored in a
//!   compile-time table
//! - [`input`]: Validation of user supplied digit strings into an
//!   [`InputSequence`]
//! - [`error`]: Errors raised by lookups and validation
//!
//! # Examples
//!
//! ```
//! use keypad_core::{Digit, InputSequence, lookup_letter_group};
//!
//! let group = lookup_letter_group(7)?;
//! assert_eq!(group.letters(), "pqrs");
//!
//! let input: InputSequence = "258".parse()?;
//! assert_eq!(input.digits(), &[Digit::D2, Digit::D5, Digit::D8]);
//! assert_eq!(input.permutation_count(), Some(27));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod digit;
pub mod error;
pub mod input;
pub mod letter_group;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    error::{InputError, OutOfRangeError},
    input::{InputSequence, validate},
    letter_group::{LetterGroup, lookup_letter_group},
};
