//! Percentage share of each mood across all entries.

use crate::domain::{Mood, MoodEntry};

/// One bar of the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    pub percent: f64,
}

/// Distribution over all five moods, in enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub total: usize,
    pub shares: Vec<MoodShare>,
}

impl Distribution {
    /// Percentage for a single mood.
    #[must_use]
    pub fn percent(&self, mood: Mood) -> f64 {
        self.shares
            .iter()
            .find(|share| share.mood == mood)
            .map_or(0.0, |share| share.percent)
    }
}

/// Computes the share of each mood.
///
/// With zero entries the divisor is taken as 1, so every share is 0% instead
/// of a division by zero.
///
/// # Examples
///
/// ```
/// use mood_journal::query::compute_distribution;
/// use mood_journal::Mood;
///
/// let empty = compute_distribution(&[]);
/// assert_eq!(empty.shares.len(), 5);
/// assert_eq!(empty.percent(Mood::Good), 0.0);
/// ```
#[must_use]
pub fn compute_distribution(entries: &[MoodEntry]) -> Distribution {
    let mut counts = [0usize; Mood::ALL.len()];
    for entry in entries {
        counts[entry.mood.index()] += 1;
    }

    let total = entries.len();
    #[allow(clippy::cast_precision_loss)]
    let divisor = total.max(1) as f64;

    let shares = Mood::ALL
        .into_iter()
        .map(|mood| {
            let count = counts[mood.index()];
            #[allow(clippy::cast_precision_loss)]
            let percent = count as f64 / divisor * 100.0;
            MoodShare { mood, count, percent }
        })
        .collect();

    Distribution { total, shares }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entries(moods: &[Mood]) -> Vec<MoodEntry> {
        moods
            .iter()
            .enumerate()
            .map(|(i, mood)| MoodEntry {
                id: i64::try_from(i).unwrap(),
                mood: *mood,
                note: String::new(),
                tags: vec![],
                timestamp: Utc::now(),
            })
            .collect()
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let list = entries(&[Mood::Good, Mood::Good, Mood::Terrible]);
        let distribution = compute_distribution(&list);
        let sum: f64 = distribution.shares.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((distribution.percent(Mood::Good) - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(distribution.percent(Mood::Neutral), 0.0);
    }

    #[test]
    fn empty_distribution_is_all_zero() {
        let distribution = compute_distribution(&[]);
        assert_eq!(distribution.total, 0);
        assert!(distribution.shares.iter().all(|s| s.percent == 0.0 && s.count == 0));
    }
}
