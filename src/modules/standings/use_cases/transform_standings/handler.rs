// Entry point of the standings pipeline.
//
// Purpose
// - Turn a raw leaderboard document into ranked, scored member records.
//
// Responsibilities
// - Project, drop inactive members, apply overrides, rank, then score, in that order.
// - Preserve the document's member order. Callers sort for display.
// - Never fail: unreadable input data only ever shows up as missing stars.

use crate::modules::standings::core::member::Member;
use crate::modules::standings::core::overrides::{Override, apply_all};
use crate::modules::standings::core::raw::RawLeaderboard;
use crate::modules::standings::use_cases::transform_standings::{
    project::{day_anchors, project_member},
    rank::populate_positions,
    score::calculate_local_score,
};

pub fn transform(year: i32, raw: &RawLeaderboard, overrides: &[Override]) -> Vec<Member> {
    let anchors = day_anchors(year);

    let mut members: Vec<Member> = raw
        .members
        .iter()
        .map(|member| project_member(member, &anchors))
        .filter(|member| member.last_attempted.is_some())
        .collect();
    tracing::debug!(
        year,
        projected = raw.members.len(),
        active = members.len(),
        "projected leaderboard members"
    );

    for member in &mut members {
        apply_all(overrides, member);
    }
    tracing::debug!(overrides = overrides.len(), "applied overrides");

    populate_positions(&mut members);
    calculate_local_score(&mut members);

    members
}
