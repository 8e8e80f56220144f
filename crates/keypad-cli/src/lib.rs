//! Console front end for the keypad permutation engine.
//!
//! The binary reads a digit string, either from the command line or as one
//! line of standard input, and writes every letter permutation separated by
//! `", "`. When reading interactively it first prints a short introduction and
//! a prompt.

use std::io::{self, BufRead, Write};

use clap::Parser;
use keypad_core::{InputError, InputSequence};
use keypad_permuter::PermutationEngine;

/// Introduction printed before the prompt.
pub const BANNER: &str = "This is a program that takes in a series of digits from a phone keypad, \
and recursively permutes all possible letter combinations associated with those digits. \
For example, the numbers '2' and '5' are associated with the letters 'abc' and 'jkl', \
respectively. Therefore, the permutations would be 'aj', 'ak', 'al', 'bj', 'bk', 'bl', \
'cj', 'ck', 'cl'.";

/// Prompt printed after [`BANNER`].
pub const PROMPT: &str = "Enter a string of numbers between 2 and 9.";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Digits 2-9 to permute. Read from standard input when omitted.
    #[arg(value_name = "DIGITS")]
    pub digits: Option<String>,

    /// Text written between consecutive permutations.
    #[arg(short, long, value_name = "SEP", default_value = ", ")]
    pub separator: String,

    /// Do not print the introduction and prompt before reading standard input.
    #[arg(long)]
    pub no_banner: bool,

    /// Print only the number of permutations.
    #[arg(short, long)]
    pub count: bool,
}

/// Errors reported by the console front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The digit string was rejected.
    #[display("{_0}")]
    Input(InputError),
    /// Reading the input or writing the output failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),
}

/// Runs the front end with `args`, reading from `input` and writing to `output`.
///
/// `input` is only read when `args.digits` is `None`. End of input before a
/// line is read counts as a missing digit string.
///
/// # Errors
///
/// Returns [`CliError::Input`] for an invalid or missing digit string and
/// [`CliError::Io`] if reading or writing fails. Nothing is written for an
/// invalid digit string besides the banner.
pub fn run<R, W>(args: &Args, mut input: R, mut output: W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let interactive = args.digits.is_none();
    let show_banner = interactive && !args.no_banner;

    if show_banner {
        writeln!(output, "{BANNER}")?;
        writeln!(output)?;
        writeln!(output, "{PROMPT}")?;
        output.flush()?;
    }

    let line = match &args.digits {
        Some(digits) => Some(digits.clone()),
        None => read_line(&mut input)?,
    };
    let sequence = InputSequence::parse_optional(line.as_deref())?;
    log::info!("permuting {} digit(s)", sequence.digits().len());

    if show_banner {
        writeln!(output)?;
    }
    if args.count {
        match sequence.permutation_count() {
            Some(count) => writeln!(output, "{count}")?,
            None => writeln!(output, "more than {}", u64::MAX)?,
        }
    } else {
        let written =
            write_permutations(&PermutationEngine::new(), &sequence, &args.separator, &mut output)?;
        log::debug!("wrote {written} permutation(s)");
        writeln!(output)?;
    }
    if show_banner {
        writeln!(output)?;
    }
    output.flush()?;
    Ok(())
}

/// Writes every permutation of `sequence` to `output`, separated by
/// `separator`, and returns how many were written.
///
/// # Errors
///
/// Returns the first write error; enumeration stops there.
pub fn write_permutations<W>(
    engine: &PermutationEngine,
    sequence: &InputSequence,
    separator: &str,
    mut output: W,
) -> io::Result<u64>
where
    W: Write,
{
    let mut written = 0_u64;
    engine.try_permute_sequence(sequence, |permutation| {
        if written > 0 {
            output.write_all(separator.as_bytes())?;
        }
        output.write_all(permutation.as_bytes())?;
        written += 1;
        Ok::<(), io::Error>(())
    })?;
    Ok(written)
}

fn read_line<R>(input: &mut R) -> io::Result<Option<String>>
where
    R: BufRead,
{
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}
