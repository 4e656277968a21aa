//! Per-letter occurrence counts over the 26-letter ASCII alphabet.

const ALPHABET_SIZE: usize = 26;

/// Number of alphabetic characters in `text`. Anything that isn't an
/// ASCII letter is skipped.
#[must_use]
pub fn alpha_length(text: &str) -> usize {
    text.chars().filter(char::is_ascii_alphabetic).count()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_SIZE],
}

impl LetterCounts {
    /// Counts every ASCII letter in `text`, ignoring case. Digits, spaces and
    /// punctuation are skipped.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0; ALPHABET_SIZE];
        for c in text.chars().filter(char::is_ascii_alphabetic) {
            let idx = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            counts[idx] += 1;
        }
        Self { counts }
    }

    #[cfg(test)]
    fn get(&self, letter: char) -> u32 {
        if letter.is_ascii_alphabetic() {
            self.counts[(letter.to_ascii_uppercase() as u8 - b'A') as usize]
        } else {
            0
        }
    }

    /// Total number of letters counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// True when no letter occurs more often here than in `other`.
    #[must_use]
    pub fn is_submultiset_of(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine <= theirs)
    }

    /// Elementwise `self - other`, or `None` if any letter would go negative.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        let mut counts = self.counts;
        for (slot, &used) in counts.iter_mut().zip(other.counts.iter()) {
            *slot = slot.checked_sub(used)?;
        }
        Some(Self { counts })
    }
}
