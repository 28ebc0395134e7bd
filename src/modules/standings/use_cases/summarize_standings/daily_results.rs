// Per-day views over the scored members: who played, who won, how fast.

use std::cmp::Ordering;

use serde::Serialize;

use crate::modules::standings::core::member::{DAYS_PER_EVENT, Member, MemberDay, Star, StarIndex};
use crate::shared::core::clock::format_duration;
use crate::shared::core::primitives::range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub name: String,
    #[serde(flatten)]
    pub day: MemberDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayResults {
    /// Zero-based day index.
    pub day_index: usize,
    pub entries: Vec<DayEntry>,
}

/// Members with at least one star on each day. Days nobody played are left out.
pub fn results_by_day(members: &[Member]) -> Vec<DayResults> {
    range(DAYS_PER_EVENT)
        .map(|day_index| DayResults {
            day_index,
            entries: members
                .iter()
                .filter_map(|member| {
                    let day = member.days.get(day_index)?;
                    day.has_any_star().then(|| DayEntry {
                        name: member.name.clone(),
                        day: day.clone(),
                    })
                })
                .collect(),
        })
        .filter(|results| !results.entries.is_empty())
        .collect()
}

/// Sort key for a star's time: missing stars last, given-up stars after every ranked one.
pub fn star_sort_key(star: Option<&Star>) -> i64 {
    match star {
        None => i64::MAX,
        Some(star) if star.gave_up => (i64::MAX / 2).saturating_add(star.duration),
        Some(star) => star.duration,
    }
}

fn by_both_stars(left: &MemberDay, right: &MemberDay) -> Ordering {
    star_sort_key(left.star2.as_ref())
        .cmp(&star_sort_key(right.star2.as_ref()))
        .then_with(|| star_sort_key(left.star1.as_ref()).cmp(&star_sort_key(right.star1.as_ref())))
}

/// Fastest second star first, first star breaking ties.
pub fn order_day_results(entries: &mut [DayEntry]) {
    entries.sort_by(|l, r| by_both_stars(&l.day, &r.day));
}

/// The best entry of a day judged on one star. Judging on the second star falls back to the first on ties.
pub fn day_winner(entries: &[DayEntry], star: StarIndex) -> Option<&DayEntry> {
    entries.iter().min_by(|l, r| match star {
        StarIndex::First => star_sort_key(l.day.star1.as_ref()).cmp(&star_sort_key(r.day.star1.as_ref())),
        StarIndex::Second => by_both_stars(&l.day, &r.day),
    })
}

/// Time between the two stars of a day.
pub fn star_delta(day: &MemberDay) -> Option<i64> {
    let first = day.star1.as_ref()?;
    let second = day.star2.as_ref()?;
    Some(second.timestamp - first.timestamp)
}

/// Display time for a star, blank for missing stars and zero durations.
pub fn format_star_time(star: Option<&Star>) -> String {
    match star {
        Some(star) if star.duration != 0 => format_duration(star.duration),
        _ => String::new(),
    }
}
