// The "group" column keeps the wire field's name; it is a reserved word
// in SQL, so every statement that touches it quotes it.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS repositories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    format TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS components (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    format TEXT,
    "group" TEXT,
    version TEXT,
    repository_id INTEGER NOT NULL,
    FOREIGN KEY (repository_id) REFERENCES repositories(id)
);

CREATE TABLE IF NOT EXISTS assets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    asset_id TEXT NOT NULL,
    file_size INTEGER,
    last_modified TEXT,
    last_downloaded TEXT,
    uploaded_by TEXT,
    blob_created TEXT,
    blob_store_name TEXT,
    format TEXT,
    path TEXT,
    download_url TEXT,
    content_type TEXT,
    repository_id INTEGER NOT NULL,
    FOREIGN KEY (repository_id) REFERENCES repositories(id)
);
"#;
