use std::iter::FusedIterator;

use keypad_core::LetterGroup;

/// Lazy iterator over keypad letter permutations.
///
/// Created by [`PermutationEngine::permutations`] and
/// [`PermutationEngine::sequence_permutations`]. Works as a mixed-radix
/// counter: each position holds an index into its letter group, and the last
/// position is the least significant digit. The iterator is finite and ends
/// after the counter wraps past its highest value.
///
/// [`PermutationEngine::permutations`]: crate::PermutationEngine::permutations
/// [`PermutationEngine::sequence_permutations`]: crate::PermutationEngine::sequence_permutations
#[derive(Debug, Clone)]
pub struct Permutations {
    groups: Vec<&'static [u8]>,
    counter: Vec<usize>,
    // `None` once the count no longer fits in `usize`.
    remaining: Option<usize>,
    finished: bool,
}

impl Permutations {
    pub(crate) fn new(groups: impl IntoIterator<Item = LetterGroup>) -> Self {
        let groups: Vec<_> = groups
            .into_iter()
            .map(|group| group.letters().as_bytes())
            .collect();
        let remaining = groups
            .iter()
            .try_fold(1_usize, |count, group| count.checked_mul(group.len()));
        Self {
            counter: vec![0; groups.len()],
            finished: groups.is_empty(),
            remaining: if groups.is_empty() { Some(0) } else { remaining },
            groups,
        }
    }

    /// Writes the next permutation into `buffer`, replacing its contents.
    ///
    /// Returns `false`, leaving `buffer` untouched, once every permutation has
    /// been produced.
    pub(crate) fn next_into(&mut self, buffer: &mut String) -> bool {
        if self.finished {
            return false;
        }
        buffer.clear();
        buffer.extend(
            self.counter
                .iter()
                .zip(&self.groups)
                .map(|(&index, group)| char::from(group[index])),
        );
        self.finished = !self.advance();
        if let Some(remaining) = &mut self.remaining {
            *remaining -= 1;
        }
        true
    }

    /// Moves the counter one step; returns `false` when it wraps around.
    fn advance(&mut self) -> bool {
        for (index, group) in self.counter.iter_mut().zip(&self.groups).rev() {
            *index += 1;
            if *index < group.len() {
                return true;
            }
            *index = 0;
        }
        false
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut permutation = String::with_capacity(self.groups.len());
        self.next_into(&mut permutation).then_some(permutation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Permutations {}
