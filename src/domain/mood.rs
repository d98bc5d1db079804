//! The five-valued mood scale.
//!
//! Moods are ranked from best (`Amazing`) to worst (`Terrible`). The rank
//! drives best/worst sorting, and the declaration order drives every
//! "first mood wins" tie-break in the statistics.

use crate::domain::error::JournalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recorded mood.
///
/// Serialized as its capitalized name (`"Amazing"`, `"Good"`, ...), matching
/// the persisted and exported entry format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Amazing,
    Good,
    Neutral,
    Stressed,
    Terrible,
}

impl Mood {
    /// All moods in enumeration order, best first.
    pub const ALL: [Self; 5] = [
        Self::Amazing,
        Self::Good,
        Self::Neutral,
        Self::Stressed,
        Self::Terrible,
    ];

    /// Numeric rank used for ordering: `Amazing` = 5 down to `Terrible` = 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use mood_journal::Mood;
    ///
    /// assert_eq!(Mood::Amazing.rank(), 5);
    /// assert_eq!(Mood::Terrible.rank(), 1);
    /// assert!(Mood::Good.rank() > Mood::Neutral.rank());
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Amazing => 5,
            Self::Good => 4,
            Self::Neutral => 3,
            Self::Stressed => 2,
            Self::Terrible => 1,
        }
    }

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amazing => "Amazing",
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Stressed => "Stressed",
            Self::Terrible => "Terrible",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Amazing => "😄",
            Self::Good => "🙂",
            Self::Neutral => "😐",
            Self::Stressed => "😟",
            Self::Terrible => "😢",
        }
    }

    /// Zero-based position in [`Mood::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Amazing => 0,
            Self::Good => 1,
            Self::Neutral => 2,
            Self::Stressed => 3,
            Self::Terrible => 4,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = JournalError;

    /// Parses a mood name case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JournalError::Validation(format!("unknown mood: {wanted}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("good".parse::<Mood>().unwrap(), Mood::Good);
        assert_eq!(" STRESSED ".parse::<Mood>().unwrap(), Mood::Stressed);
        assert!("meh".parse::<Mood>().is_err());
    }

    #[test]
    fn ranks_follow_enumeration_order() {
        let ranks: Vec<u8> = Mood::ALL.iter().map(|m| m.rank()).collect();
        assert_eq!(ranks, vec![5, 4, 3, 2, 1]);
        for (i, mood) in Mood::ALL.iter().enumerate() {
            assert_eq!(mood.index(), i);
        }
    }

    #[test]
    fn serializes_as_capitalized_name() {
        assert_eq!(serde_json::to_string(&Mood::Terrible).unwrap(), "\"Terrible\"");
        let parsed: Mood = serde_json::from_str("\"Amazing\"").unwrap();
        assert_eq!(parsed, Mood::Amazing);
    }
}
