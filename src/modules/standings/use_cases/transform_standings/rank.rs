// Per-day, per-star placement of every member.
//
// Stars that were given up keep their record but never receive a position.
// Equal durations keep member order, so positions are always 0..k-1 without
// gaps or duplicates.

use crate::modules::standings::core::member::{DAYS_PER_EVENT, Member, StarIndex};
use crate::shared::core::primitives::range;

pub fn populate_positions(members: &mut [Member]) {
    let member_count = members.len();

    for day_index in range(DAYS_PER_EVENT) {
        for star in StarIndex::ALL {
            let mut ranked: Vec<(usize, i64)> = members
                .iter()
                .enumerate()
                .filter_map(|(member_index, member)| {
                    member
                        .days
                        .get(day_index)
                        .and_then(|day| day.star(star))
                        .filter(|s| !s.gave_up)
                        .map(|s| (member_index, s.duration))
                })
                .collect();
            ranked.sort_by_key(|&(_, duration)| duration);

            let mut positions = vec![None; member_count];
            for (position, (member_index, _)) in ranked.into_iter().enumerate() {
                positions[member_index] = Some(position);
            }

            for (member, position) in members.iter_mut().zip(positions) {
                let Some(target) = member
                    .days
                    .get_mut(day_index)
                    .and_then(|day| day.star_mut(star))
                else {
                    continue;
                };
                target.position = if target.gave_up {
                    None
                } else {
                    // Worse than last place if the star somehow missed the ranking.
                    Some(position.unwrap_or(member_count))
                };
            }
        }
    }
}
