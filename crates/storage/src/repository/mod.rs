pub mod ranking;
pub mod score;
