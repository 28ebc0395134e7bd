// Day-indexed point series derived from scored members.
//
// One entry per event day. `None` marks a day with nothing to plot yet; that is
// different from a day that scored zero.

use crate::modules::standings::core::member::{DAYS_PER_EVENT, Member, MemberDay};
use crate::modules::standings::core::ordering::by_number_reverse;
use crate::shared::core::primitives::{last_truthy, min_of, range};

pub type PointSeries = Vec<Option<usize>>;

/// Score a day adds to a series.
///
/// A zero-score day before the member's last attempted day counts as zero. Later
/// zero-score days are empty unless `allow_empty` is set.
fn day_contribution(member: &Member, day: &MemberDay, allow_empty: bool) -> Option<usize> {
    if day.score != 0 {
        return Some(day.score);
    }
    let before_last_attempt = member
        .last_attempted
        .is_some_and(|last| day.day.saturating_sub(1) < last);
    (before_last_attempt || allow_empty).then_some(0)
}

/// Running total of day scores.
///
/// Day one is always its score. Each later day adds its contribution to the last
/// non-zero running total; the entry is empty when either side is missing.
pub fn cumulative_points(member: &Member, allow_empty: bool) -> PointSeries {
    let mut series: PointSeries = Vec::with_capacity(member.days.len());
    for (index, day) in member.days.iter().enumerate() {
        if index == 0 {
            series.push(Some(day.score));
            continue;
        }
        let previous = last_truthy(&series);
        let value = day_contribution(member, day, allow_empty)
            .zip(previous)
            .map(|(score, total)| total + score);
        series.push(value);
    }
    series
}

/// Per-day scores with the same emptiness rule as [`cumulative_points`].
pub fn day_points(member: &Member, allow_empty: bool) -> PointSeries {
    member
        .days
        .iter()
        .enumerate()
        .map(|(index, day)| {
            if index == 0 {
                Some(day.score)
            } else {
                day_contribution(member, day, allow_empty)
            }
        })
        .collect()
}

/// Mean of up to `window` entries ending at `index`; empty entries count as zero.
pub fn rolling_average(points: &[Option<usize>], index: usize, window: usize) -> f64 {
    let count = (index + 1).min(window);
    if count == 0 {
        return 0.0;
    }
    let sum: usize = (index + 1 - count..=index)
        .map(|i| points.get(i).copied().flatten().unwrap_or(0))
        .sum();
    sum as f64 / count as f64
}

/// Rolling average of daily points, empty wherever the day itself is empty.
pub fn moving_average_series(member: &Member, window: usize) -> Vec<Option<f64>> {
    let points = day_points(member, false);
    range(points.len())
        .map(|index| points[index].map(|_| rolling_average(&points, index, window)))
        .collect()
}

/// Running total divided by the number of days elapsed.
pub fn average_points(member: &Member) -> Vec<f64> {
    cumulative_points(member, false)
        .into_iter()
        .enumerate()
        .map(|(index, total)| total.unwrap_or(0) as f64 / (index + 1) as f64)
        .collect()
}

/// Lead over the weakest active member, per day.
///
/// Members at or below `active_threshold` points get an empty series.
pub fn point_difference(members: &[Member], active_threshold: usize) -> Vec<PointSeries> {
    let is_active = |member: &Member| member.score > active_threshold;

    let active_points: Vec<PointSeries> = members
        .iter()
        .filter(|member| is_active(*member))
        .map(|member| cumulative_points(member, true))
        .collect();
    let minimum_by_day: Vec<Option<usize>> = range(DAYS_PER_EVENT)
        .map(|day| min_of(&active_points, |points| points.get(day).copied().flatten()))
        .collect();

    members
        .iter()
        .map(|member| {
            if !is_active(member) {
                return Vec::new();
            }
            cumulative_points(member, false)
                .into_iter()
                .zip(&minimum_by_day)
                .map(|(value, minimum)| Some(value?.saturating_sub((*minimum)?)))
                .collect()
        })
        .collect()
}

/// Standing per day as a height: the leader gets the member count, last place gets 1.
pub fn rank_series(members: &[Member]) -> Vec<PointSeries> {
    let all_points: Vec<PointSeries> = members
        .iter()
        .map(|member| cumulative_points(member, true))
        .collect();
    let sorted_by_day: Vec<Vec<Option<usize>>> = range(DAYS_PER_EVENT)
        .map(|day| {
            let mut values: Vec<Option<usize>> = all_points
                .iter()
                .map(|points| points.get(day).copied().flatten())
                .collect();
            values.sort_by(|l, r| by_number_reverse(*l, *r));
            values
        })
        .collect();

    all_points
        .iter()
        .map(|points| {
            range(DAYS_PER_EVENT)
                .map(|day| {
                    let value = points.get(day).copied().flatten()?;
                    let index = sorted_by_day[day]
                        .iter()
                        .position(|candidate| *candidate == Some(value))?;
                    Some(members.len() - index)
                })
                .collect()
        })
        .collect()
}
