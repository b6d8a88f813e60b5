pub mod player;

pub use player::{parse_leaderboard_limit, validate_player_id, PlayerService};
