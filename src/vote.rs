//! Majority vote over the classes predicted by the trees of a forest.
use crate::{ForestError, Label, Result};


/// Vote counts per class.
///
/// Class labels start at `1` while the counts are stored 0-indexed:
/// the count of class `c` lives at index `c - 1`.
/// The tally grows on demand up to the largest label recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    counts: Vec<usize>,
}


impl VoteTally {
    /// Construct an empty tally.
    #[inline]
    pub fn new() -> Self {
        Self { counts: Vec::new() }
    }


    /// Record one vote for class `label`.
    /// Returns `Err` for `label == 0`, leaving the tally untouched.
    pub fn record(&mut self, label: Label) -> Result<()> {
        if label == 0 {
            return Err(ForestError::InvalidLabel(label));
        }
        let k = label as usize;
        if k > self.counts.len() {
            self.counts.resize(k, 0);
        }
        self.counts[k - 1] += 1;
        Ok(())
    }


    /// Returns the number of votes for class `label`.
    #[inline]
    pub fn count(&self, label: Label) -> usize {
        match label {
            0 => 0,
            k => self.counts.get(k as usize - 1).copied().unwrap_or(0),
        }
    }


    /// Returns the counts, index `c - 1` holding class `c`.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts[..]
    }


    /// Returns the total number of votes.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }


    /// Returns the winning class.
    ///
    /// Classes are scanned in ascending order starting from class `1`.
    /// A class replaces the current winner only if it has strictly
    /// more votes, so ties go to the lowest class.
    /// An empty tally returns class `1`.
    pub fn winner(&self) -> Label {
        let mut best = 0_usize;
        for (k, &count) in self.counts.iter().enumerate() {
            if count > self.counts[best] {
                best = k;
            }
        }
        best as Label + 1
    }
}


/// Returns the majority class of `votes`.
/// See [`VoteTally::winner`] for the tie-break rule.
pub fn majority<I>(votes: I) -> Result<Label>
    where I: IntoIterator<Item = Label>
{
    let mut tally = VoteTally::new();
    for label in votes {
        tally.record(label)?;
    }
    Ok(tally.winner())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(counts: &[usize]) -> VoteTally {
        let mut tally = VoteTally::new();
        for (k, &c) in counts.iter().enumerate() {
            for _ in 0..c {
                tally.record(k as Label + 1).unwrap();
            }
        }
        tally
    }

    #[test]
    fn ties_go_to_the_lowest_class() {
        assert_eq!(tally_of(&[5, 5, 3]).winner(), 1);
        assert_eq!(tally_of(&[3, 5, 5]).winner(), 2);
    }

    #[test]
    fn empty_tally_returns_class_one() {
        assert_eq!(VoteTally::new().winner(), 1);
        assert_eq!(majority(Vec::new()).unwrap(), 1);
    }

    #[test]
    fn tally_grows_to_the_largest_label() {
        let mut tally = VoteTally::new();
        tally.record(4).unwrap();
        assert_eq!(tally.counts(), &[0, 0, 0, 1]);
        assert_eq!(tally.winner(), 4);
        assert_eq!(tally.count(9), 0);
    }

    #[test]
    fn zero_label_fails_closed() {
        let mut tally = VoteTally::new();
        tally.record(2).unwrap();
        assert!(matches!(tally.record(0), Err(ForestError::InvalidLabel(0))));
        assert_eq!(tally.total(), 1);
        assert!(majority([1, 0, 1]).is_err());
    }

    #[test]
    fn one_more_vote_changes_winner_only_on_strict_excess() {
        let mut tally = tally_of(&[3, 2]);
        tally.record(2).unwrap();
        assert_eq!(tally.count(2), 3);
        assert_eq!(tally.winner(), 1);

        tally.record(2).unwrap();
        assert_eq!(tally.winner(), 2);
    }
}
