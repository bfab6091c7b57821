use super::Pool;
use color_eyre::Result;
use eyre::WrapErr;

// The whole schema fits SQLite simple datatypes.
// created_at columns hold RFC 3339 strings, which
// sort correctly as text.
const SCHEMA: &str = "
  CREATE TABLE IF NOT EXISTS topics (
    slug TEXT PRIMARY KEY,
    description TEXT NOT NULL
  );
  CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    avatar_url TEXT NOT NULL
  );
  CREATE TABLE IF NOT EXISTS articles (
    article_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    topic TEXT NOT NULL REFERENCES topics(slug),
    author TEXT NOT NULL REFERENCES users(username),
    body TEXT NOT NULL,
    created_at TEXT NOT NULL,
    votes INTEGER NOT NULL DEFAULT 0,
    article_img_url TEXT NOT NULL
  );
  CREATE TABLE IF NOT EXISTS comments (
    comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    body TEXT NOT NULL,
    votes INTEGER NOT NULL DEFAULT 0,
    author TEXT NOT NULL REFERENCES users(username),
    article_id INTEGER NOT NULL REFERENCES articles(article_id),
    created_at TEXT NOT NULL
  );
";

pub fn create_tables(pool: &Pool) -> Result<()> {
  let conn = pool.clone().get()?;
  conn.execute_batch(SCHEMA)
    .context("Creating database schema")
}
