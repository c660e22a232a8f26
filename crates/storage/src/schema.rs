//! Schema for the score store

pub const SCORES_TABLE: &str = "scores";

pub const CREATE_SCORES: &str = r#"
CREATE TABLE IF NOT EXISTS scores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    hits INTEGER NOT NULL,
    total INTEGER NOT NULL,
    percent REAL NOT NULL,
    created_at TEXT NOT NULL
)
"#;

pub fn all_schema_statements() -> &'static [&'static str] {
    &[CREATE_SCORES]
}
