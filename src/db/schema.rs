pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS water_entries (
    id INTEGER PRIMARY KEY,
    amount INTEGER NOT NULL,
    timestamp INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    daily_goal INTEGER NOT NULL,
    notifications_enabled INTEGER NOT NULL DEFAULT 0,
    notification_start TEXT NOT NULL,
    notification_end TEXT NOT NULL,
    notification_interval INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_water_entries_timestamp ON water_entries(timestamp);
"#;
