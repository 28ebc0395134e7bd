// Shape of the leaderboard document as served by the contest site.
//
// The document is external and loosely typed: identifiers flip between strings
// and numbers across years, names may be null, and completion entries are only
// trusted through tolerant lookups.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::modules::standings::core::member::{DAYS_PER_EVENT, StarIndex};
use crate::shared::core::primitives::{range, safe_get};

const MS_PER_SECOND: i64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl Default for NumberOrText {
    fn default() -> Self {
        NumberOrText::Number(0)
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrText::Number(value) => write!(f, "{value}"),
            NumberOrText::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLeaderboard {
    #[serde(default)]
    pub owner_id: NumberOrText,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub members: RawMembers,
}

impl RawLeaderboard {
    /// The event year, when `event` holds one.
    pub fn event_year(&self) -> Option<i32> {
        self.event.trim().parse().ok()
    }
}

/// Members keyed by id, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMembers(pub Vec<(String, RawMember)>);

impl RawMembers {
    pub fn iter(&self) -> impl Iterator<Item = &RawMember> {
        self.0.iter().map(|(_, member)| member)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RawMembers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, member)| (id, member)))
    }
}

impl<'de> Deserialize<'de> for RawMembers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMembers;

        impl<'de> Visitor<'de> for OrderedMembers {
            type Value = RawMembers;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of member id to member")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut members = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, member)) = access.next_entry::<String, RawMember>()? {
                    members.push((id, member));
                }
                Ok(RawMembers(members))
            }
        }

        deserializer.deserialize_map(OrderedMembers)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: NumberOrText,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub local_score: i64,
    #[serde(default)]
    pub global_score: i64,
    #[serde(default)]
    pub last_star_ts: NumberOrText,
    /// `day -> star -> { get_star_ts }`, kept loose and read through [`safe_get`].
    #[serde(default)]
    pub completion_day_level: BTreeMap<String, Value>,
}

impl RawMember {
    /// The name shown for the member; the site hides names of anonymous users.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("(anonymous user #{})", self.id),
        }
    }

    /// Completion instant of a star in epoch milliseconds, `None` when missing or unreadable.
    pub fn star_timestamp(&self, day: usize, star: StarIndex) -> Option<i64> {
        let level = self.completion_day_level.get(&day.to_string())?;
        let star_key = star.number().to_string();
        safe_get(level, &[star_key.as_str(), "get_star_ts"]).and_then(parse_star_timestamp)
    }

    /// Zero-based index of the last day holding any completion entry.
    pub fn last_attempted(&self) -> Option<usize> {
        range(DAYS_PER_EVENT).rev().find(|index| {
            self.completion_day_level
                .get(&(index + 1).to_string())
                .is_some_and(|level| !level.is_null())
        })
    }
}

/// Seconds as decimal text or a JSON number, converted to milliseconds.
/// Zero, negative, empty, or non-numeric values count as not completed.
fn parse_star_timestamp(value: &Value) -> Option<i64> {
    let seconds = match value {
        Value::String(text) => text.trim().parse::<i64>().ok()?,
        Value::Number(number) => number.as_i64()?,
        _ => return None,
    };
    if seconds <= 0 {
        return None;
    }
    seconds.checked_mul(MS_PER_SECOND)
}
