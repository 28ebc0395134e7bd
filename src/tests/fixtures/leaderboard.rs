// Shared test fixtures for raw leaderboard documents.
//
// Timestamps are given in epoch milliseconds and stored the way the feed does,
// as whole seconds in decimal text.

use crate::modules::standings::core::member::Member;
use crate::modules::standings::core::raw::{NumberOrText, RawLeaderboard, RawMember, RawMembers};
use crate::modules::standings::use_cases::transform_standings::project::{day_anchors, project_member};
use crate::shared::core::clock::zoned_midnight;
use serde_json::{Value, json};
use std::fs;

pub const YEAR: i32 = 2020;
pub const FIXTURE_PATH: &str = "./src/tests/fixtures/json/leaderboard_2020.json";

/// Local midnight of a December day in the fixture year.
pub fn midnight(day: usize) -> i64 {
    zoned_midnight(YEAR, 12, day as u32).unwrap()
}

/// Projects a single raw member against the fixture year.
pub fn project(member: RawMember) -> Member {
    project_member(&member, &day_anchors(YEAR))
}

pub struct RawMemberBuilder {
    inner: RawMember,
}

#[allow(dead_code)]
impl RawMemberBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            inner: RawMember {
                name: Some(name.to_string()),
                id: NumberOrText::Text(name.to_lowercase().replace(' ', "-")),
                ..RawMember::default()
            },
        }
    }

    pub fn anonymous(id: i64) -> Self {
        Self {
            inner: RawMember {
                name: None,
                id: NumberOrText::Number(id),
                ..RawMember::default()
            },
        }
    }

    pub fn stars(mut self, v: u32) -> Self {
        self.inner.stars = v;
        self
    }

    pub fn local_score(mut self, v: i64) -> Self {
        self.inner.local_score = v;
        self
    }

    /// Records a completion at `timestamp_ms`, truncated to whole seconds.
    pub fn star_at(self, day: usize, star: u8, timestamp_ms: i64) -> Self {
        let seconds = (timestamp_ms / 1_000).to_string();
        self.raw_star(day, star, json!(seconds))
    }

    /// Records an arbitrary `get_star_ts` value.
    pub fn raw_star(mut self, day: usize, star: u8, value: Value) -> Self {
        let level = self
            .inner
            .completion_day_level
            .entry(day.to_string())
            .or_insert_with(|| json!({}));
        if let Some(stars) = level.as_object_mut() {
            stars.insert(star.to_string(), json!({ "get_star_ts": value }));
        }
        self
    }

    /// Adds a day entry that carries no stars at all.
    pub fn empty_day(mut self, day: usize) -> Self {
        self.inner
            .completion_day_level
            .insert(day.to_string(), json!({}));
        self
    }

    pub fn build(self) -> RawMember {
        self.inner
    }
}

pub struct RawLeaderboardBuilder {
    inner: RawLeaderboard,
}

impl Default for RawLeaderboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RawLeaderboardBuilder {
    pub fn new() -> Self {
        Self {
            inner: RawLeaderboard {
                owner_id: NumberOrText::Text("682929".to_string()),
                event: YEAR.to_string(),
                members: RawMembers::default(),
            },
        }
    }

    pub fn from_fixture_file() -> Self {
        let json_str = fs::read_to_string(FIXTURE_PATH).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn event(mut self, v: impl Into<String>) -> Self {
        self.inner.event = v.into();
        self
    }

    pub fn member(mut self, builder: RawMemberBuilder) -> Self {
        let member = builder.build();
        self.inner.members.0.push((member.id.to_string(), member));
        self
    }

    pub fn build(self) -> RawLeaderboard {
        self.inner
    }
}

#[cfg(test)]
mod raw_leaderboard_builder_tests {
    use super::*;
    use crate::modules::standings::core::member::StarIndex;
    use rstest::rstest;

    #[rstest]
    fn it_should_store_timestamps_as_decimal_seconds() {
        let member = RawMemberBuilder::new("Ada")
            .star_at(1, 2, 1_606_798_860_999)
            .build();
        assert_eq!(
            member.completion_day_level["1"]["2"]["get_star_ts"],
            json!("1606798860")
        );
        assert_eq!(member.star_timestamp(1, StarIndex::Second), Some(1_606_798_860_000));
    }

    #[rstest]
    fn it_should_key_members_by_id_in_insertion_order() {
        let board = RawLeaderboardBuilder::new()
            .member(RawMemberBuilder::new("Zed Z"))
            .member(RawMemberBuilder::anonymous(7))
            .build();
        let ids: Vec<&str> = board.members.0.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["zed-z", "7"]);
    }

    #[rstest]
    fn it_should_parse_the_json_fixture() {
        let board = RawLeaderboardBuilder::from_fixture_file().build();
        assert_eq!(board.event_year(), Some(YEAR));
        assert_eq!(board.members.len(), 5);
    }
}
