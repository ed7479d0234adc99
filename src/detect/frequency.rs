use crate::dialect::Delimiter;

/// Per-line occurrence counts of each candidate delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyVector {
    counts: [usize; 4],
}

impl FrequencyVector {
    pub fn get(&self, delimiter: Delimiter) -> usize {
        self.counts[delimiter.index()]
    }

    pub fn counts(&self) -> [usize; 4] {
        self.counts
    }

    pub fn zero_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 0).count()
    }

    /// The first candidate, in [`Delimiter::ALL`] order, holding the highest count.
    pub fn leader(&self) -> (Delimiter, usize) {
        let mut best = (Delimiter::Comma, 0);
        for delimiter in Delimiter::ALL {
            let count = self.get(delimiter);
            if count > best.1 {
                best = (delimiter, count);
            }
        }
        best
    }

    /// Set when at most one candidate occurs in the line.
    ///
    /// A line with no candidates at all counts as well and yields Comma.
    pub fn sole_candidate(&self) -> Option<Delimiter> {
        if self.zero_count() >= 3 {
            Some(self.leader().0)
        } else {
            None
        }
    }
}

pub struct FrequencyCounter;

impl FrequencyCounter {
    pub fn count(line: &str) -> FrequencyVector {
        let mut counts = [0usize; 4];
        for c in line.chars() {
            if let Some(delimiter) = Delimiter::from_char(c) {
                counts[delimiter.index()] += 1;
            }
        }
        FrequencyVector { counts }
    }
}
