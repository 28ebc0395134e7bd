use serde::{Deserialize, Serialize};

use crate::modules::standings::core::member::{Member, MemberDay, StarIndex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
    pub tin: usize,
}

/// Stars of `day` placed exactly at `position`.
pub fn medals_for_day(day: &MemberDay, position: usize) -> usize {
    StarIndex::ALL
        .into_iter()
        .filter(|index| day.star(*index).and_then(|s| s.position) == Some(position))
        .count()
}

pub fn medal_tally(member: &Member) -> MedalTally {
    member
        .days
        .iter()
        .fold(MedalTally::default(), |mut tally, day| {
            tally.gold += medals_for_day(day, 0);
            tally.silver += medals_for_day(day, 1);
            tally.bronze += medals_for_day(day, 2);
            tally.tin += medals_for_day(day, 3);
            tally
        })
}
