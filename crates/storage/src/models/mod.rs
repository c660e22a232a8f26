mod player_name;
mod score;

pub use player_name::{MAX_NAME_CHARS, PlayerName};
pub use score::{NewScore, ScoreRecord, ScoreSubmission, format_created_at};
