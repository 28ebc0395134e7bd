// Projection of raw leaderboard members into derived member records.
//
// Responsibilities
// - Build exactly one MemberDay per event day, anchored to local midnight.
// - Read star timestamps tolerantly: anything unreadable is simply not completed.
// - Never rank or score; positions stay empty until the rank pass.

use crate::modules::standings::core::member::{DAYS_PER_EVENT, Member, MemberDay, Star, StarIndex};
use crate::modules::standings::core::raw::RawMember;
use crate::shared::core::clock::zoned_midnight;
use crate::shared::core::primitives::range;

const DECEMBER: u32 = 12;

/// Local midnight of every event day, index 0 is December 1st.
///
/// A day whose midnight cannot be represented falls back to the epoch so the
/// transform stays total; durations for that day are then meaningless.
pub fn day_anchors(year: i32) -> Vec<i64> {
    range(DAYS_PER_EVENT)
        .map(|index| {
            let day = index as u32 + 1;
            zoned_midnight(year, DECEMBER, day).unwrap_or_else(|| {
                tracing::warn!(year, day, "no local midnight for event day, anchoring at epoch");
                0
            })
        })
        .collect()
}

pub fn project_member(member: &RawMember, anchors: &[i64]) -> Member {
    Member {
        name: member.display_name(),
        days: range(DAYS_PER_EVENT)
            .map(|index| {
                let start_time = anchors.get(index).copied().unwrap_or_default();
                build_member_day(member, index + 1, start_time)
            })
            .collect(),
        last_attempted: member.last_attempted(),
        score: 0,
    }
}

fn build_member_day(member: &RawMember, day: usize, start_time: i64) -> MemberDay {
    let build_star = |index: StarIndex| {
        member
            .star_timestamp(day, index)
            .map(|timestamp| Star::new(index, timestamp, start_time))
    };

    MemberDay {
        day,
        start_time,
        star1: build_star(StarIndex::First),
        star2: build_star(StarIndex::Second),
        score: 0,
    }
}
