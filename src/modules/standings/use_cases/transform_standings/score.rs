use crate::modules::standings::core::member::{Member, Star};

/// Points for one star: one per member ranked behind it, plus one.
/// Absent and given-up stars are worth nothing; an unranked star counts as worse than last.
pub fn position_score(star: Option<&Star>, member_count: usize) -> usize {
    match star {
        Some(star) if !star.gave_up => {
            member_count.saturating_sub(star.position.unwrap_or(member_count))
        }
        _ => 0,
    }
}

pub fn calculate_local_score(members: &mut [Member]) {
    let member_count = members.len();
    for member in members.iter_mut() {
        let mut total = 0;
        for day in &mut member.days {
            day.score = position_score(day.star1.as_ref(), member_count)
                + position_score(day.star2.as_ref(), member_count);
            total += day.score;
        }
        member.score = total;
    }
}
