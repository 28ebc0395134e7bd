// Corrections applied to a single derived member before ranking.
//
// Each override only looks at the member it is given. Ranking needs every
// member's data settled first, so an override must never read or depend on
// other members or on the order members are visited in.
//
// Overrides run in the order the caller lists them. Durations are refreshed
// once after the whole list has run, see `apply_all`.

use serde::{Deserialize, Serialize};

use crate::modules::standings::core::member::{DAYS_PER_EVENT, Member, StarIndex};
use crate::shared::core::clock::zoned_midnight;

/// The final day, where the second star needs no extra work.
pub const BONUS_DAY: usize = DAYS_PER_EVENT;

const DECEMBER: u32 = 12;

fn align_start_time_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Override {
    /// Keeps the completion but drops it from ranking and scoring.
    Disqualify {
        name: String,
        day: usize,
        star: StarIndex,
    },
    /// Copies the bonus day's first-star timestamp onto its second star.
    /// With `align_start_time` the second star also starts at that instant, giving it a zero duration.
    BonusDay {
        #[serde(default = "align_start_time_by_default")]
        align_start_time: bool,
    },
    /// Moves a day's start to `midnight + offset_ms` when the first star landed at or after it.
    StartTimeShift { year: i32, offset_ms: i64 },
}

impl Override {
    pub fn disqualify(name: impl Into<String>, day: usize, star: StarIndex) -> Self {
        Override::Disqualify {
            name: name.into(),
            day,
            star,
        }
    }

    pub fn bonus_day() -> Self {
        Override::BonusDay {
            align_start_time: true,
        }
    }

    pub fn start_time_shift(year: i32, offset_ms: i64) -> Self {
        Override::StartTimeShift { year, offset_ms }
    }

    /// Mutates `member` in place. Members the override does not target are left untouched.
    pub fn apply(&self, member: &mut Member) {
        match self {
            Override::Disqualify { name, day, star } => disqualify(member, name, *day, *star),
            Override::BonusDay { align_start_time } => bonus_day(member, *align_start_time),
            Override::StartTimeShift { year, offset_ms } => {
                start_time_shift(member, *year, *offset_ms)
            }
        }
    }
}

/// Runs every override in order, then refreshes the member's durations.
pub fn apply_all(overrides: &[Override], member: &mut Member) {
    for rule in overrides {
        rule.apply(member);
    }
    member.recompute_durations();
}

fn disqualify(member: &mut Member, name: &str, day: usize, star: StarIndex) {
    if member.name != name {
        return;
    }
    if let Some(target) = member.day_mut(day).and_then(|d| d.star_mut(star)) {
        target.gave_up = true;
    }
}

fn bonus_day(member: &mut Member, align_start_time: bool) {
    let Some(day) = member.day_mut(BONUS_DAY) else {
        return;
    };
    let (Some(first), Some(second)) = (day.star1.as_ref(), day.star2.as_mut()) else {
        return;
    };
    second.timestamp = first.timestamp;
    if align_start_time {
        second.start_time = first.timestamp;
    }
}

fn start_time_shift(member: &mut Member, year: i32, offset_ms: i64) {
    for day in &mut member.days {
        let Some(first_timestamp) = day.star1.as_ref().map(|s| s.timestamp) else {
            continue;
        };
        let Some(midnight) = u32::try_from(day.day)
            .ok()
            .and_then(|d| zoned_midnight(year, DECEMBER, d))
        else {
            continue;
        };
        let Some(shifted) = midnight.checked_add(offset_ms) else {
            continue;
        };
        if first_timestamp < shifted {
            continue;
        }
        day.start_time = shifted;
        for star in [day.star1.as_mut(), day.star2.as_mut()].into_iter().flatten() {
            star.start_time = shifted;
        }
    }
}
