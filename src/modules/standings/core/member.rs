// Derived per-competitor records.
//
// A Member is built fresh from the raw leaderboard, corrected by overrides,
// then ranked and scored in place. After the transform returns it is read-only.

use serde::{Deserialize, Serialize};

pub const DAYS_PER_EVENT: usize = 25;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StarIndexError {
    #[error("star index must be 1 or 2, got {0}")]
    OutOfRange(u8),
}

/// Which half of a daily puzzle a star belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StarIndex {
    First,
    Second,
}

impl StarIndex {
    pub const ALL: [StarIndex; 2] = [StarIndex::First, StarIndex::Second];

    pub fn number(self) -> u8 {
        match self {
            StarIndex::First => 1,
            StarIndex::Second => 2,
        }
    }
}

impl TryFrom<u8> for StarIndex {
    type Error = StarIndexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StarIndex::First),
            2 => Ok(StarIndex::Second),
            other => Err(StarIndexError::OutOfRange(other)),
        }
    }
}

impl From<StarIndex> for u8 {
    fn from(index: StarIndex) -> Self {
        index.number()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub index: StarIndex,
    /// Completion instant, epoch milliseconds.
    pub timestamp: i64,
    /// Reference instant the duration is measured from.
    pub start_time: i64,
    /// `timestamp - start_time`, saturating. Negative only when an override moved the start.
    pub duration: i64,
    pub gave_up: bool,
    /// Zero-based rank among non-given-up stars of the same day and index.
    pub position: Option<usize>,
}

impl Star {
    pub fn new(index: StarIndex, timestamp: i64, start_time: i64) -> Self {
        Self {
            index,
            timestamp,
            start_time,
            duration: timestamp.saturating_sub(start_time),
            gave_up: false,
            position: None,
        }
    }

    pub fn recompute_duration(&mut self) {
        self.duration = self.timestamp.saturating_sub(self.start_time);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDay {
    /// 1-based day of the event.
    pub day: usize,
    pub start_time: i64,
    pub star1: Option<Star>,
    pub star2: Option<Star>,
    pub score: usize,
}

impl MemberDay {
    pub fn star(&self, index: StarIndex) -> Option<&Star> {
        match index {
            StarIndex::First => self.star1.as_ref(),
            StarIndex::Second => self.star2.as_ref(),
        }
    }

    pub fn star_mut(&mut self, index: StarIndex) -> Option<&mut Star> {
        match index {
            StarIndex::First => self.star1.as_mut(),
            StarIndex::Second => self.star2.as_mut(),
        }
    }

    pub fn has_any_star(&self) -> bool {
        self.star1.is_some() || self.star2.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Display name. Override targeting matches on it; the feed does not guarantee uniqueness.
    pub name: String,
    /// Always [`DAYS_PER_EVENT`] entries, index 0 is day 1.
    pub days: Vec<MemberDay>,
    /// Zero-based index of the last day with any completion entry.
    pub last_attempted: Option<usize>,
    pub score: usize,
}

impl Member {
    /// Looks up a day by its 1-based number.
    pub fn day(&self, day: usize) -> Option<&MemberDay> {
        day.checked_sub(1).and_then(|index| self.days.get(index))
    }

    pub fn day_mut(&mut self, day: usize) -> Option<&mut MemberDay> {
        day.checked_sub(1).and_then(|index| self.days.get_mut(index))
    }

    pub fn recompute_durations(&mut self) {
        for day in &mut self.days {
            for star in [day.star1.as_mut(), day.star2.as_mut()].into_iter().flatten() {
                star.recompute_duration();
            }
        }
    }
}
