// Reads a leaderboard document saved from the contest site.
//
// A document that cannot be read is reported as unavailable, so callers can
// tell "no data" apart from "bad data" and never transform a partial document.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::modules::standings::core::raw::RawLeaderboard;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("leaderboard data unavailable at {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("leaderboard document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn load_leaderboard(path: impl AsRef<Path>) -> Result<RawLeaderboard, SourceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let leaderboard: RawLeaderboard = serde_json::from_str(&text)?;
    tracing::debug!(
        path = %path.display(),
        members = leaderboard.members.len(),
        "loaded leaderboard"
    );
    Ok(leaderboard)
}
