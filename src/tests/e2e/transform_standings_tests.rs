use crate::modules::standings::core::member::{DAYS_PER_EVENT, Member, StarIndex};
use crate::modules::standings::core::overrides::Override;
use crate::modules::standings::core::raw::RawLeaderboard;
use crate::modules::standings::use_cases::transform_standings::handler::transform;
use crate::tests::fixtures::leaderboard::{RawLeaderboardBuilder, YEAR, midnight};
use rstest::{fixture, rstest};

const OFFSET_930: i64 = (9 * 60 + 30) * 60 * 1000;

#[fixture]
fn leaderboard() -> RawLeaderboard {
    RawLeaderboardBuilder::from_fixture_file().build()
}

#[fixture]
fn season_overrides() -> Vec<Override> {
    vec![
        Override::start_time_shift(YEAR, OFFSET_930),
        Override::disqualify("Chris Thomas", 13, StarIndex::Second),
        Override::disqualify("S. Sepehr", 13, StarIndex::Second),
        Override::bonus_day(),
    ]
}

fn by_name<'a>(members: &'a [Member], name: &str) -> &'a Member {
    members
        .iter()
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("member {name} missing"))
}

fn scores(members: &[Member]) -> Vec<(&str, usize)> {
    members.iter().map(|m| (m.name.as_str(), m.score)).collect()
}

#[rstest]
fn it_should_score_the_saved_leaderboard_without_overrides(leaderboard: RawLeaderboard) {
    let members = transform(YEAR, &leaderboard, &[]);
    assert_eq!(
        scores(&members),
        vec![
            ("Chris Thomas", 18),
            ("S. Sepehr", 18),
            ("Ada Lovelace", 20),
            ("(anonymous user #400)", 1),
        ]
    );
}

#[rstest]
fn it_should_score_the_saved_leaderboard_with_season_overrides(
    leaderboard: RawLeaderboard,
    season_overrides: Vec<Override>,
) {
    let members = transform(YEAR, &leaderboard, &season_overrides);
    assert_eq!(
        scores(&members),
        vec![
            ("Chris Thomas", 15),
            ("S. Sepehr", 14),
            ("Ada Lovelace", 22),
            ("(anonymous user #400)", 1),
        ]
    );
}

#[rstest]
fn it_should_drop_the_idle_member_regardless_of_site_score(leaderboard: RawLeaderboard) {
    let idle = leaderboard
        .members
        .iter()
        .find(|m| m.name.as_deref() == Some("Idle Person"))
        .unwrap();
    assert!(idle.local_score > 0);

    let members = transform(YEAR, &leaderboard, &[]);
    assert!(members.iter().all(|m| m.name != "Idle Person"));
}

#[rstest]
fn it_should_keep_disqualified_stars_for_display_only(
    leaderboard: RawLeaderboard,
    season_overrides: Vec<Override>,
) {
    let members = transform(YEAR, &leaderboard, &season_overrides);
    let chris = by_name(&members, "Chris Thomas").day(13).unwrap();
    let star = chris.star2.as_ref().unwrap();

    assert!(star.gave_up);
    assert_eq!(star.position, None);
    assert_eq!(star.duration, 1_500_000);
    assert_eq!(chris.score, 2);

    let ada = by_name(&members, "Ada Lovelace").day(13).unwrap();
    assert_eq!(ada.star2.as_ref().unwrap().position, Some(0));
    assert_eq!(ada.score, 7);
}

#[rstest]
fn it_should_measure_late_releases_from_the_shifted_start(
    leaderboard: RawLeaderboard,
    season_overrides: Vec<Override>,
) {
    let members = transform(YEAR, &leaderboard, &season_overrides);
    let day = by_name(&members, "Ada Lovelace").day(2).unwrap();
    let star = day.star1.as_ref().unwrap();

    assert_eq!(day.start_time, midnight(2) + OFFSET_930);
    assert_eq!(star.start_time, midnight(2) + OFFSET_930);
    assert_eq!(star.duration, 120_000);
    assert!(star.duration >= 0);
}

#[rstest]
fn it_should_rank_bonus_day_ties_by_document_order(
    leaderboard: RawLeaderboard,
    season_overrides: Vec<Override>,
) {
    let members = transform(YEAR, &leaderboard, &season_overrides);
    let chris = by_name(&members, "Chris Thomas").day(25).unwrap();
    let ada = by_name(&members, "Ada Lovelace").day(25).unwrap();

    assert_eq!(chris.star2.as_ref().unwrap().duration, 0);
    assert_eq!(ada.star2.as_ref().unwrap().duration, 0);
    assert_eq!(chris.star2.as_ref().unwrap().position, Some(0));
    assert_eq!(ada.star2.as_ref().unwrap().position, Some(1));
}

#[rstest]
fn it_should_treat_the_anonymous_members_garbage_timestamp_as_missing(leaderboard: RawLeaderboard) {
    let members = transform(YEAR, &leaderboard, &[]);
    let anonymous = by_name(&members, "(anonymous user #400)");

    assert_eq!(anonymous.last_attempted, Some(1));
    assert!(anonymous.day(2).unwrap().star1.is_none());
    assert_eq!(anonymous.day(1).unwrap().star1.as_ref().unwrap().position, Some(3));
}

#[rstest]
fn it_should_assign_gapless_positions_per_day_and_star(
    leaderboard: RawLeaderboard,
    season_overrides: Vec<Override>,
) {
    let members = transform(YEAR, &leaderboard, &season_overrides);
    for day_index in 0..DAYS_PER_EVENT {
        for star in StarIndex::ALL {
            let ranked: Vec<_> = members
                .iter()
                .filter_map(|m| m.days[day_index].star(star))
                .filter(|s| !s.gave_up)
                .collect();
            let mut positions: Vec<usize> = ranked.iter().filter_map(|s| s.position).collect();
            positions.sort_unstable();
            assert_eq!(positions, (0..ranked.len()).collect::<Vec<_>>());
        }
    }
}

#[rstest]
fn it_should_never_score_or_rank_given_up_stars(
    leaderboard: RawLeaderboard,
    season_overrides: Vec<Override>,
) {
    let members = transform(YEAR, &leaderboard, &season_overrides);
    let given_up: Vec<_> = members
        .iter()
        .flat_map(|m| m.days.iter())
        .flat_map(|d| [d.star1.as_ref(), d.star2.as_ref()])
        .flatten()
        .filter(|s| s.gave_up)
        .collect();
    assert_eq!(given_up.len(), 2);
    assert!(given_up.iter().all(|s| s.position.is_none()));
}

#[rstest]
fn it_should_be_repeatable(leaderboard: RawLeaderboard, season_overrides: Vec<Override>) {
    let first = transform(YEAR, &leaderboard, &season_overrides);
    let second = transform(YEAR, &leaderboard, &season_overrides);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
