pub mod common;
pub mod debug;
pub mod ranking;
pub mod score;
