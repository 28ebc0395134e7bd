// Composition root for the standings binary.
//
// Responsibilities
// - Read config from the environment.
// - Load the leaderboard through the file adapter.
// - Run the transform and build the report handed to the caller.

pub mod config;

use crate::modules::standings::adapters::outbound::leaderboard_file::load_leaderboard;
use crate::modules::standings::use_cases::summarize_standings::report::{
    StandingsReport, build_report,
};
use crate::modules::standings::use_cases::transform_standings::handler::transform;
use crate::shell::config::Config;

pub fn run(config: &Config) -> anyhow::Result<StandingsReport> {
    let leaderboard = load_leaderboard(&config.input)?;
    let year = config.resolve_year(&leaderboard)?;
    let members = transform(year, &leaderboard, &config.overrides);
    tracing::info!(
        year,
        members = members.len(),
        overrides = config.overrides.len(),
        "computed standings"
    );
    Ok(build_report(year, &members))
}
