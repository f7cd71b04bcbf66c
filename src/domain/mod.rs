pub mod models;
pub mod standings;

pub use models::*;
pub use standings::{build_match_view, build_snapshot, MatchRecords};
