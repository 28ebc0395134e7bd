// Read model handed to presentation code.
//
// Responsibilities
// - Rank rows by local score and attach every per-day series a chart needs.
// - List each played day's results fastest first, with the daily winner.

use serde::Serialize;

use crate::modules::standings::core::member::{Member, StarIndex};
use crate::modules::standings::core::ordering::members_by_total_score;
use crate::modules::standings::use_cases::summarize_standings::{
    daily_results::{
        DayEntry, day_winner, format_star_time, order_day_results, results_by_day, star_delta,
    },
    medals::{MedalTally, medal_tally},
    series::{
        PointSeries, average_points, cumulative_points, day_points, moving_average_series,
        point_difference, rank_series,
    },
};
use crate::shared::core::clock::format_duration;

/// Days averaged by the moving average series.
pub const MOVING_AVERAGE_WINDOW: usize = 5;

/// Members at or below this score get no point difference series.
pub const ACTIVE_SCORE_THRESHOLD: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    /// 1-based place by local score. Ties keep document order.
    pub place: usize,
    pub name: String,
    pub score: usize,
    pub last_attempted: Option<usize>,
    pub medals: MedalTally,
    pub cumulative_points: PointSeries,
    pub day_points: PointSeries,
    pub moving_average: Vec<Option<f64>>,
    pub average_points: Vec<f64>,
    /// Empty for members at or below [`ACTIVE_SCORE_THRESHOLD`].
    pub point_difference: PointSeries,
    pub rank: PointSeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayWinner {
    /// 1-based day.
    pub day: usize,
    pub name: String,
    pub star1_time: String,
    pub star2_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayResultRow {
    pub name: String,
    pub score: usize,
    pub star1_time: String,
    pub star2_time: String,
    /// Time from first to second star, `hh:mm:ss`.
    pub star_delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStanding {
    /// 1-based day.
    pub day: usize,
    /// Fastest second star first.
    pub results: Vec<DayResultRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsReport {
    pub year: i32,
    pub rows: Vec<StandingsRow>,
    pub day_winners: Vec<DayWinner>,
    pub days: Vec<DayStanding>,
}

pub fn build_report(year: i32, members: &[Member]) -> StandingsReport {
    let differences = point_difference(members, ACTIVE_SCORE_THRESHOLD);
    let ranks = rank_series(members);

    let mut order: Vec<usize> = (0..members.len()).collect();
    order.sort_by(|&l, &r| members_by_total_score(&members[l], &members[r]));

    let rows = order
        .into_iter()
        .enumerate()
        .map(|(place, index)| {
            let member = &members[index];
            StandingsRow {
                place: place + 1,
                name: member.name.clone(),
                score: member.score,
                last_attempted: member.last_attempted,
                medals: medal_tally(member),
                cumulative_points: cumulative_points(member, false),
                day_points: day_points(member, false),
                moving_average: moving_average_series(member, MOVING_AVERAGE_WINDOW),
                average_points: average_points(member),
                point_difference: differences.get(index).cloned().unwrap_or_default(),
                rank: ranks.get(index).cloned().unwrap_or_default(),
            }
        })
        .collect();

    let mut day_winners = Vec::new();
    let mut days = Vec::new();
    for mut results in results_by_day(members) {
        let day = results.day_index + 1;
        if let Some(winner) = day_winner(&results.entries, StarIndex::Second) {
            day_winners.push(DayWinner {
                day,
                name: winner.name.clone(),
                star1_time: format_star_time(winner.day.star1.as_ref()),
                star2_time: format_star_time(winner.day.star2.as_ref()),
            });
        }
        order_day_results(&mut results.entries);
        days.push(DayStanding {
            day,
            results: results.entries.iter().map(day_result_row).collect(),
        });
    }

    StandingsReport {
        year,
        rows,
        day_winners,
        days,
    }
}

fn day_result_row(entry: &DayEntry) -> DayResultRow {
    DayResultRow {
        name: entry.name.clone(),
        score: entry.day.score,
        star1_time: format_star_time(entry.day.star1.as_ref()),
        star2_time: format_star_time(entry.day.star2.as_ref()),
        star_delta: star_delta(&entry.day).map(format_duration),
    }
}
