use rusqlite::{params, Row, ToSql, NO_PARAMS, OptionalExtension};
pub mod entities;
mod mappers;
pub mod queries;
pub mod schema;
#[cfg(test)]
pub mod test_data;
use crate::utils::time_utils;
use color_eyre::Result;
use entities::*;
use eyre::WrapErr;
use mappers::*;
use queries::{select_query_builder, OrderBy};

// Type alias to make function signatures much clearer:
pub type Pool = r2d2::Pool<r2d2_sqlite::SqliteConnectionManager>;

// All the DB stuff is done in a non-async way, the
// handlers call into here directly over the pool.

// Column lists shared between queries so the mappers
// in mappers.rs stay in sync with a single place.
const SUMMARY_FIELDS: [&str; 8] = [
  "articles.article_id",
  "articles.title",
  "articles.topic",
  "articles.author",
  "articles.created_at",
  "articles.votes",
  "articles.article_img_url",
  "CAST(COUNT(comments.comment_id) AS INTEGER) AS comment_count"
];

const ARTICLE_FIELDS: [&str; 9] = [
  "articles.article_id",
  "articles.title",
  "articles.topic",
  "articles.author",
  "articles.body",
  "articles.created_at",
  "articles.votes",
  "articles.article_img_url",
  "CAST(COUNT(comments.comment_id) AS INTEGER) AS comment_count"
];

const ARTICLES_JOIN: &str =
  "articles LEFT JOIN comments ON comments.article_id = articles.article_id";

fn select_many<T, P, F>(
  pool: &Pool,
  query: &str,
  params: P,
  mapper: F
) -> Result<Vec<T>>
  where
    P: IntoIterator,
    P::Item: ToSql,
    F: FnMut(&Row<'_>) -> Result<T, rusqlite::Error>,
{
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(query)?;
  stmt.query_map(params, mapper)
    .and_then(Iterator::collect)
    .context("Generic select_many query")
}

fn select_one<T, P, F>(
  pool: &Pool,
  query: &str,
  params: P,
  mapper: F
) -> Result<Option<T>>
  where
    P: IntoIterator,
    P::Item: ToSql,
    F: FnOnce(&Row<'_>) -> Result<T, rusqlite::Error>,
{
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(query)?;
  stmt.query_row(params, mapper)
    .optional()
    .context("Generic select_one query")
}

fn select_count<P>(
  pool: &Pool,
  query: &str,
  params: P
) -> Result<i64>
  where
    P: IntoIterator,
    P::Item: ToSql,
{
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(query)?;
  stmt.query_row(params, |row| row.get(0))
    .context("Generic count query")
}

fn row_exists<P>(
  pool: &Pool,
  query: &str,
  params: P
) -> Result<bool>
  where
    P: IntoIterator,
    P::Item: ToSql,
{
  let conn = pool.clone().get()?;
  let mut stmt = conn.prepare(query)?;
  stmt.exists(params)
    .context("Generic existence query")
}

/* --- Topics --- */

pub fn all_topics(pool: &Pool) -> Result<Vec<Topic>> {
  select_many(
    pool,
    "SELECT slug, description FROM topics",
    NO_PARAMS,
    map_topic
  )
}

pub fn topic_exists(pool: &Pool, slug: &str) -> Result<bool> {
  row_exists(
    pool,
    "SELECT 1 FROM topics WHERE slug = ?",
    params![slug]
  )
}

pub fn insert_topic(
  pool: &Pool,
  slug: &str,
  description: &str
) -> Result<Topic> {
  let conn = pool.clone().get()?;
  conn.execute(
    "INSERT INTO topics (slug, description) VALUES (?1, ?2)",
    params![slug, description]
  ).context("Inserting a topic")?;
  Ok(Topic {
    slug: slug.to_string(),
    description: description.to_string()
  })
}

/* --- Users --- */

pub fn all_users(pool: &Pool) -> Result<Vec<User>> {
  select_many(
    pool,
    "SELECT username, name, avatar_url FROM users",
    NO_PARAMS,
    map_user
  )
}

pub fn user_by_username(pool: &Pool, username: &str) -> Result<Option<User>> {
  select_one(
    pool,
    "SELECT username, name, avatar_url FROM users WHERE username = ?",
    params![username],
    map_user
  )
}

pub fn user_exists(pool: &Pool, username: &str) -> Result<bool> {
  row_exists(
    pool,
    "SELECT 1 FROM users WHERE username = ?",
    params![username]
  )
}

/* --- Articles --- */

pub fn article_exists(pool: &Pool, article_id: i64) -> Result<bool> {
  row_exists(
    pool,
    "SELECT 1 FROM articles WHERE article_id = ?",
    params![article_id]
  )
}

// Total population of the listing for the pagination
// metadata, ignoring limit and offset but keeping the
// topic filter.
pub fn article_count(pool: &Pool, topic: Option<&str>) -> Result<i64> {
  match topic {
    Some(topic) => select_count(
      pool,
      "SELECT count(*) FROM articles WHERE topic = ?",
      params![topic]
    ),
    None => select_count(
      pool,
      "SELECT count(*) FROM articles",
      NO_PARAMS
    )
  }
}

// The listing page. The order field went through the
// allow-list in queries.rs, limit and offset are
// already parsed integers, the topic travels as a
// bound parameter.
pub fn articles_page(
  pool: &Pool,
  topic: Option<&str>,
  order_by: OrderBy,
  limit: i64,
  offset: i64
) -> Result<Vec<ArticleSummary>> {
  let query = select_query_builder(
    &SUMMARY_FIELDS,
    ARTICLES_JOIN,
    topic.map(|_| "articles.topic = ?"),
    Some("articles.article_id"),
    Some(order_by),
    Some(limit),
    Some(offset)
  );
  match topic {
    Some(topic) => select_many(pool, &query, params![topic], map_article_summary),
    None => select_many(pool, &query, NO_PARAMS, map_article_summary)
  }
}

pub fn article_by_id(pool: &Pool, article_id: i64) -> Result<Option<Article>> {
  let query = select_query_builder(
    &ARTICLE_FIELDS,
    ARTICLES_JOIN,
    Some("articles.article_id = ?"),
    Some("articles.article_id"),
    None,
    None,
    None
  );
  select_one(pool, &query, params![article_id], map_article)
}

// Single conditional UPDATE, zero affected rows means
// the article doesn't exist. No separate existence
// query, so no race window between check and act.
pub fn update_article_votes(
  pool: &Pool,
  article_id: i64,
  inc_votes: i64
) -> Result<Option<Article>> {
  let conn = pool.clone().get()?;
  let affected = conn.execute(
    "UPDATE articles SET votes = votes + ?1 WHERE article_id = ?2",
    params![inc_votes, article_id]
  ).context("Updating article votes")?;
  drop(conn);
  if affected == 0 {
    return Ok(None);
  }
  article_by_id(pool, article_id)
}

pub fn insert_article(pool: &Pool, article: &NewArticle) -> Result<Article> {
  let conn = pool.clone().get()?;
  conn.execute(
    "INSERT INTO articles (title, topic, author, body, created_at, votes, article_img_url) \
    VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)",
    params![
      article.title,
      article.topic,
      article.author,
      article.body,
      time_utils::current_timestamp_rfc3339(),
      article.article_img_url
    ]
  ).context("Inserting an article")?;
  let id = conn.last_insert_rowid();
  drop(conn);
  article_by_id(pool, id)?
    .ok_or_else(|| eyre::eyre!("Article vanished right after insertion"))
}

/* --- Comments --- */

pub fn comment_count(pool: &Pool, article_id: i64) -> Result<i64> {
  select_count(
    pool,
    "SELECT count(*) FROM comments WHERE article_id = ?",
    params![article_id]
  )
}

pub fn comments_for_article(
  pool: &Pool,
  article_id: i64,
  limit: i64,
  offset: i64
) -> Result<Vec<Comment>> {
  let query = select_query_builder(
    &["comment_id", "body", "votes", "author", "article_id", "created_at"],
    "comments",
    Some("article_id = ?"),
    None,
    Some(OrderBy::new(queries::Order::Desc, "created_at")),
    Some(limit),
    Some(offset)
  );
  select_many(pool, &query, params![article_id], map_comment)
}

fn comment_by_id(pool: &Pool, comment_id: i64) -> Result<Option<Comment>> {
  select_one(
    pool,
    "SELECT comment_id, body, votes, author, article_id, created_at \
    FROM comments WHERE comment_id = ?",
    params![comment_id],
    map_comment
  )
}

pub fn insert_comment(
  pool: &Pool,
  article_id: i64,
  body: &str,
  username: &str
) -> Result<Comment> {
  let created_at = time_utils::current_timestamp_rfc3339();
  let conn = pool.clone().get()?;
  conn.execute(
    "INSERT INTO comments (body, votes, author, article_id, created_at) \
    VALUES (?1, 0, ?2, ?3, ?4)",
    params![body, username, article_id, created_at]
  ).context("Inserting a comment")?;
  let id = conn.last_insert_rowid();
  Ok(Comment {
    comment_id: id,
    body: body.to_string(),
    votes: 0,
    author: username.to_string(),
    article_id,
    created_at
  })
}

// Hard delete. Returns whether a row was actually
// removed, a second call on the same id gets false.
pub fn delete_comment(pool: &Pool, comment_id: i64) -> Result<bool> {
  let conn = pool.clone().get()?;
  let affected = conn.execute(
    "DELETE FROM comments WHERE comment_id = ?",
    params![comment_id]
  ).context("Deleting a comment")?;
  Ok(affected > 0)
}

pub fn update_comment_votes(
  pool: &Pool,
  comment_id: i64,
  inc_votes: i64
) -> Result<Option<Comment>> {
  let conn = pool.clone().get()?;
  let affected = conn.execute(
    "UPDATE comments SET votes = votes + ?1 WHERE comment_id = ?2",
    params![inc_votes, comment_id]
  ).context("Updating comment votes")?;
  drop(conn);
  if affected == 0 {
    return Ok(None);
  }
  comment_by_id(pool, comment_id)
}
